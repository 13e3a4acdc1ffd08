// Copyright 2018 Mohammad Rezaei.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//

//! # `VecSet`: the obviously correct set.
//! Every operation is a linear scan over a `Vec`. It exists to be compared against
//! `ChainSet` in tests, not to be fast.

use set::Set;

use std::fmt;
use std::iter::FromIterator;
use std::slice;

/// A set backed by an unordered `Vec`.
///
/// # Examples
///
/// ```
/// use chainset::vec_set::VecSet;
///
/// let mut set = VecSet::new();
/// set.add("3");
/// set.add("4");
/// assert_eq!(2, set.len());
/// assert_eq!("3", set.remove(&"3"));
/// assert_eq!("4", set.remove_any());
/// assert!(set.is_empty());
/// ```
#[derive(Clone)]
pub struct VecSet<T> {
    elements: Vec<T>,
}

impl<T: Eq> VecSet<T> {
    #[inline]
    pub fn new() -> VecSet<T> {
        VecSet { elements: Vec::new() }
    }

    /// # Panics
    ///
    /// Panics if `value` is already a member.
    pub fn add(&mut self, value: T) {
        assert!(!self.contains(&value), "element is already a member of the set");
        self.elements.push(value);
    }

    /// # Panics
    ///
    /// Panics if `value` is not a member.
    pub fn remove(&mut self, value: &T) -> T {
        match self.elements.iter().position(|e| e == value) {
            Some(pos) => self.elements.swap_remove(pos),
            None => panic!("element is not a member of the set"),
        }
    }

    /// Removes the most recently stored element.
    ///
    /// # Panics
    ///
    /// Panics if the set is empty.
    pub fn remove_any(&mut self) -> T {
        match self.elements.pop() {
            Some(e) => e,
            None => panic!("remove_any called on an empty set"),
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.elements.iter().any(|e| e == value)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<T> {
        self.elements.iter()
    }
}

impl<T: Eq> Default for VecSet<T> {
    fn default() -> VecSet<T> {
        VecSet::new()
    }
}

impl<T: Eq> Set for VecSet<T> {
    type Item = T;

    fn add(&mut self, value: T) {
        VecSet::add(self, value)
    }

    fn remove(&mut self, value: &T) -> T {
        VecSet::remove(self, value)
    }

    fn remove_any(&mut self) -> T {
        VecSet::remove_any(self)
    }

    fn contains(&self, value: &T) -> bool {
        VecSet::contains(self, value)
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn elements<'a>(&'a self) -> Box<dyn Iterator<Item=&'a T> + 'a> {
        Box::new(self.iter())
    }
}

impl<T: Eq> PartialEq for VecSet<T> {
    fn eq(&self, other: &VecSet<T>) -> bool {
        self.len() == other.len() && self.iter().all(|e| other.contains(e))
    }
}

impl<T: Eq> Eq for VecSet<T> {}

impl<T: fmt::Debug> fmt::Debug for VecSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: Eq> FromIterator<T> for VecSet<T> {
    /// Duplicates are skipped.
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> VecSet<T> {
        let mut set = VecSet::new();
        for e in iter {
            if !set.contains(&e) {
                set.elements.push(e);
            }
        }
        set
    }
}
