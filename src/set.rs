// Copyright 2018 Mohammad Rezaei.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//

//! The `Set` kernel shared by every representation in this crate.

/// The kernel operations of a set: an unordered collection of unique elements.
///
/// `add`, `remove` and `remove_any` carry preconditions. Breaking one is a bug in the
/// caller and the implementations in this crate panic when it happens; check `contains`
/// or `size` first when unsure.
///
/// Two sets hold the same elements regardless of representation, which `same_elements`
/// checks:
///
/// ```
/// use chainset::set::Set;
/// use chainset::chain_set::ChainSet;
/// use chainset::vec_set::VecSet;
///
/// let mut fast: ChainSet<&str> = ChainSet::new();
/// let mut simple: VecSet<&str> = VecSet::new();
/// fast.add("3");
/// fast.add("4");
/// simple.add("4");
/// simple.add("3");
/// assert!(fast.same_elements(&simple));
/// ```
pub trait Set: Default {
    type Item: Eq;

    /// Adds `value` to the set.
    ///
    /// # Panics
    ///
    /// Panics if `value` is already a member.
    fn add(&mut self, value: Self::Item);

    /// Removes the member equal to `value` and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a member.
    fn remove(&mut self, value: &Self::Item) -> Self::Item;

    /// Removes and returns some member. Which one is unspecified.
    ///
    /// # Panics
    ///
    /// Panics if the set is empty.
    fn remove_any(&mut self) -> Self::Item;

    fn contains(&self, value: &Self::Item) -> bool;

    /// The number of members.
    fn size(&self) -> usize;

    /// Every member, in an unspecified order.
    fn elements<'a>(&'a self) -> Box<dyn Iterator<Item=&'a Self::Item> + 'a>;

    /// True if both sets have exactly the same members.
    fn same_elements<O>(&self, other: &O) -> bool
        where O: Set<Item=Self::Item>
    {
        self.size() == other.size() && self.elements().all(|e| other.contains(e))
    }
}
