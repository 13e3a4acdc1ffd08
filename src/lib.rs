// Copyright 2018 Mohammad Rezaei.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//

//! # Chain Set for Rust
//! A generic set: an unordered collection of unique elements with membership tests,
//! insertion, removal by value, removal of an arbitrary element and a size query.
//!
//! `ChainSet` is the real implementation: a hash table whose buckets are chains of
//! elements, doubling its bucket count before the load factor passes 3/4. Growth
//! allocates the whole new table before moving anything, so `try_add` and `try_reserve`
//! can report allocation failure and leave the set as it was.
//!
//! `VecSet` is a linear-scan set that is too simple to be wrong. It is the reference the
//! tests compare `ChainSet` against.
//!
//! Both implement the `Set` trait, so code (and tests) can be written once for any
//! representation.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! chainset = "0.1.0"
//! ```
//!
//! and this to your crate root:
//!
//! ```rust
//! #[macro_use] extern crate chainset;
//! # fn main() {
//! # }
//! ```
//!

pub mod set;
pub mod chain_set;
pub mod vec_set;
pub mod chain_hasher;
pub mod alloc_err;
#[doc(hidden)]
pub mod util;

/// Creates a [`ChainSet`] containing the arguments.
///
/// Each element is added with `ChainSet::add`, so the arguments must be distinct.
///
/// ```
/// # #[macro_use] extern crate chainset;
/// # use chainset::chain_set::ChainSet;
/// # fn main() {
/// let s: ChainSet<&str> = chainset!["3", "4", "5"];
/// assert_eq!(3, s.len());
/// assert!(s.contains(&"4"));
/// # }
/// ```
///
/// # Panics
///
/// Panics if two arguments are equal.
///
/// [`ChainSet`]: chain_set/struct.ChainSet.html
#[macro_export]
macro_rules! chainset {
    // count helper: transform any expression into 1
    (@one $x:expr) => (1usize);
    ($($x:expr),*$(,)*) => ({
        let count = 0usize $(+ chainset!(@one $x))*;
        let mut set = $crate::chain_set::ChainSet::with_capacity(count);
        $(set.add($x);)*
        set
    });
}
