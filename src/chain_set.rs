// Copyright 2018 Mohammad Rezaei.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Portions copyright The Rust Project Developers. Licensed under
// the MIT License.

//! # `ChainSet`: a hash set with separate chaining.
//! Every bucket is a small `Vec` (a chain) of the elements whose hash lands on it,
//! stored next to their full 64 bit hash. Removing an element never leaves a tombstone
//! behind, which keeps `remove` and `remove_any` simple.
//!
//! - The number of buckets is always a power of two, and never below [`MIN_CAPACITY`].
//! - The table doubles before an insert would push the load above 3/4.
//! - The table never shrinks on its own; call `shrink_to_fit` for that.
//! - Growing is all or nothing: the new table is fully allocated before any element
//!   moves, so a failed allocation leaves the set exactly as it was.
//!
//! [`MIN_CAPACITY`]: constant.MIN_CAPACITY.html

use alloc_err::CollectionAllocErr;
use chain_hasher::*;
use set::Set;
use util::*;
use vec_set::VecSet;

use std::hash::BuildHasher;
use std::hash::Hash;
use std::hash::Hasher;
use std::fmt::{self, Debug};
use std::iter::FromIterator;
use std::iter::FusedIterator;
use std::mem;
use std::slice;
use std::vec;

/// The smallest number of buckets a `ChainSet` ever has, even when empty.
pub const MIN_CAPACITY: usize = 4;
/// Numerator of the maximum load factor.
pub const LOAD_FACTOR_NUM: usize = 3;
/// Denominator of the maximum load factor.
pub const LOAD_FACTOR_DEN: usize = 4;

#[derive(Clone)]
struct Slot<T> {
    hash: u64,
    value: T,
}

type Chain<T> = Vec<Slot<T>>;

/// A hash set whose buckets are chains of elements.
///
/// Elements must implement [`Eq`] and [`Hash`], usually through
/// `#[derive(PartialEq, Eq, Hash)]`. If you implement these yourself,
/// it is important that the following property holds:
///
/// ```text
/// k1 == k2 -> hash(k1) == hash(k2)
/// ```
///
/// It is a logic error for an element to be modified in such a way that its hash or
/// its equality changes while it is in the set.
///
/// The kernel operations `add`, `remove` and `remove_any` have preconditions (the element
/// is new, the element is a member, the set is not empty). They panic when those are
/// broken. `insert`, `take` and `try_remove_any` are the lenient versions.
///
/// # Examples
///
/// ```
/// use chainset::chain_set::ChainSet;
///
/// let mut set = ChainSet::new();
/// set.add("3");
/// set.add("4");
/// assert_eq!(2, set.len());
///
/// assert_eq!("3", set.remove(&"3"));
/// assert!(!set.contains(&"3"));
///
/// assert_eq!("4", set.remove_any());
/// assert!(set.is_empty());
/// ```
///
/// Draining without knowing the elements:
///
/// ```
/// use chainset::chain_set::ChainSet;
///
/// let mut set: ChainSet<u32> = (0..100).collect();
/// let mut sum = 0;
/// while !set.is_empty() {
///     sum += set.remove_any();
/// }
/// assert_eq!(4950, sum);
/// ```
///
/// [`Eq`]: ../../std/cmp/trait.Eq.html
/// [`Hash`]: ../../std/hash/trait.Hash.html
#[derive(Clone)]
pub struct ChainSet<T, S = ChainHasherBuilder> {
    hasher: S,
    table: Vec<Chain<T>>,
    len: usize,
    // no chain below this index holds an element
    first_occupied: usize,
}

#[inline]
fn bucket_index(hash: u64, buckets: usize) -> usize {
    (hash as usize) & (buckets - 1)
}

fn empty_table<T>(buckets: usize) -> Vec<Chain<T>> {
    (0..buckets).map(|_| Vec::new()).collect()
}

fn try_empty_table<T>(buckets: usize) -> Result<Vec<Chain<T>>, CollectionAllocErr> {
    let mut table = Vec::new();
    table.try_reserve_exact(buckets)?;
    table.extend((0..buckets).map(|_| Vec::new()));
    Ok(table)
}

impl<T: Hash + Eq> ChainSet<T, ChainHasherBuilder> {
    /// Creates an empty `ChainSet` with [`MIN_CAPACITY`] buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::chain_set::{ChainSet, MIN_CAPACITY};
    /// let set: ChainSet<i32> = ChainSet::new();
    /// assert_eq!(MIN_CAPACITY, set.capacity());
    /// ```
    ///
    /// [`MIN_CAPACITY`]: constant.MIN_CAPACITY.html
    #[inline]
    pub fn new() -> ChainSet<T, ChainHasherBuilder> {
        ChainSet::with_hasher(ChainHasherBuilder::new())
    }

    /// Creates an empty `ChainSet` able to hold at least `capacity` elements without
    /// growing.
    ///
    /// # Panics
    ///
    /// Panics if the number of buckets needed overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::chain_set::ChainSet;
    /// let set: ChainSet<i32> = ChainSet::with_capacity(10);
    /// assert!(set.max_len() >= 10);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> ChainSet<T, ChainHasherBuilder> {
        ChainSet::with_capacity_and_hasher(capacity, ChainHasherBuilder::new())
    }
}

impl<T, S> ChainSet<T, S> {
    /// Returns a reference to the set's [`BuildHasher`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::chain_hasher::ChainHasherBuilder;
    /// use chainset::chain_set::ChainSet;
    ///
    /// let set: ChainSet<i32, _> = ChainSet::with_hasher(ChainHasherBuilder::with_seed(42));
    /// assert_eq!(&ChainHasherBuilder::with_seed(42), set.hasher());
    /// ```
    ///
    /// [`BuildHasher`]: ../../std/hash/trait.BuildHasher.html
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// The number of buckets.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    /// The number of elements the set holds before the next insert grows the table.
    #[inline]
    pub fn max_len(&self) -> usize {
        self.table.len() / LOAD_FACTOR_DEN * LOAD_FACTOR_NUM
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::chain_set::ChainSet;
    ///
    /// let mut v = ChainSet::new();
    /// assert_eq!(v.len(), 0);
    /// v.add(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// An iterator visiting all elements in bucket order.
    /// The iterator element type is `&'a T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::chain_set::ChainSet;
    /// let mut set = ChainSet::new();
    /// set.add(7);
    /// set.add(22);
    ///
    /// let mut seen: Vec<_> = set.iter().cloned().collect();
    /// seen.sort();
    /// assert_eq!(vec![7, 22], seen);
    /// ```
    pub fn iter(&self) -> Iter<T> {
        Iter {
            buckets: self.table.iter(),
            chain: None,
            remaining: self.len,
        }
    }

    /// Removes and returns the first element of the first non-empty bucket.
    ///
    /// The choice depends only on the table's contents, so the same set always gives
    /// the same answer.
    ///
    /// # Panics
    ///
    /// Panics if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::chain_set::ChainSet;
    ///
    /// let mut set = ChainSet::new();
    /// set.add("4");
    /// assert_eq!("4", set.remove_any());
    /// assert!(set.is_empty());
    /// ```
    pub fn remove_any(&mut self) -> T {
        match self.try_remove_any() {
            Some(value) => value,
            None => panic!("remove_any called on an empty set"),
        }
    }

    /// Like `remove_any`, but returns `None` on an empty set.
    pub fn try_remove_any(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let mut index = self.first_occupied;
        while self.table[index].is_empty() {
            index += 1;
        }
        self.first_occupied = index;
        self.len -= 1;
        Some(self.table[index].remove(0).value)
    }

    /// Clears the set, returning all elements in an iterator.
    ///
    /// Elements come out in `remove_any` order. Whatever the iterator hasn't yielded
    /// when it's dropped is removed too.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::chain_set::ChainSet;
    ///
    /// let mut set: ChainSet<_> = [1, 2, 3].iter().cloned().collect();
    /// assert!(!set.is_empty());
    ///
    /// for i in set.drain() {
    ///     println!("{}", i);
    /// }
    ///
    /// assert!(set.is_empty());
    /// ```
    pub fn drain(&mut self) -> Drain<T, S> {
        Drain { set: self }
    }

    /// Removes every element. The buckets are kept.
    pub fn clear(&mut self) {
        for chain in self.table.iter_mut() {
            chain.clear();
        }
        self.len = 0;
        self.first_occupied = 0;
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::chain_set::ChainSet;
    ///
    /// let mut set: ChainSet<i32> = [1, 2, 3, 4, 5, 6].iter().cloned().collect();
    /// set.retain(|&k| k % 2 == 0);
    /// assert_eq!(set.len(), 3);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
        where F: FnMut(&T) -> bool
    {
        // len drops with each rejected slot so a panicking predicate leaves it accurate
        let len = &mut self.len;
        for chain in self.table.iter_mut() {
            chain.retain(|slot| {
                if f(&slot.value) {
                    true
                } else {
                    *len -= 1;
                    false
                }
            });
        }
    }
}

impl<T, S> ChainSet<T, S>
    where T: Eq + Hash,
          S: BuildHasher
{
    /// Creates an empty set which will use the given hasher to hash elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::chain_set::ChainSet;
    /// use chainset::chain_hasher::ChainHasherBuilder;
    ///
    /// let mut set = ChainSet::with_hasher(ChainHasherBuilder::with_seed(42));
    /// set.add(2);
    /// ```
    #[inline]
    pub fn with_hasher(hasher: S) -> ChainSet<T, S> {
        ChainSet::with_capacity_and_hasher(0, hasher)
    }

    /// Creates an empty set able to hold `capacity` elements without growing, using
    /// `hasher` to hash the elements.
    ///
    /// # Panics
    ///
    /// Panics if the number of buckets needed overflows `usize`.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> ChainSet<T, S> {
        let buckets = match buckets_for(capacity, MIN_CAPACITY, LOAD_FACTOR_NUM, LOAD_FACTOR_DEN) {
            Some(buckets) => buckets,
            None => panic!("capacity overflow"),
        };
        ChainSet {
            hasher,
            table: empty_table(buckets),
            len: 0,
            first_occupied: 0,
        }
    }

    #[inline]
    fn make_hash(&self, value: &T) -> u64 {
        let mut state = self.hasher.build_hasher();
        value.hash(&mut state);
        state.finish()
    }

    /// Bucket index for `hash`, and the position of `value` in that bucket's chain.
    #[inline]
    fn locate(&self, hash: u64, value: &T) -> (usize, Option<usize>) {
        let index = bucket_index(hash, self.table.len());
        let pos = self.table[index].iter().position(|slot| slot.hash == hash && slot.value == *value);
        (index, pos)
    }

    /// Adds an element that isn't in the set yet.
    ///
    /// # Panics
    ///
    /// Panics if `value` is already a member, or if growing the table fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::chain_set::ChainSet;
    ///
    /// let mut set = ChainSet::new();
    /// set.add(2);
    /// assert!(set.contains(&2));
    /// ```
    pub fn add(&mut self, value: T) {
        if let Err(e) = self.try_add(value) {
            panic!("{}", e);
        }
    }

    /// Adds an element that isn't in the set yet, reporting allocation failure instead
    /// of panicking. On error, the set is unchanged and `value` is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `value` is already a member.
    pub fn try_add(&mut self, value: T) -> Result<(), CollectionAllocErr> {
        let hash = self.make_hash(&value);
        if self.locate(hash, &value).1.is_some() {
            panic!("element is already a member of the set");
        }
        self.try_add_hashed(hash, value)
    }

    /// Adds `value` if it isn't already a member. Returns whether it was added.
    ///
    /// # Panics
    ///
    /// Panics if growing the table fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::chain_set::ChainSet;
    ///
    /// let mut set = ChainSet::new();
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let hash = self.make_hash(&value);
        if self.locate(hash, &value).1.is_some() {
            return false;
        }
        if let Err(e) = self.try_add_hashed(hash, value) {
            panic!("{}", e);
        }
        true
    }

    fn try_add_hashed(&mut self, hash: u64, value: T) -> Result<(), CollectionAllocErr> {
        if self.len >= self.max_len() {
            let buckets = match self.table.len().checked_mul(2) {
                Some(buckets) => buckets,
                None => return Err(CollectionAllocErr::CapacityOverflow),
            };
            self.try_resize(buckets, Some(hash))?;
        } else {
            let index = bucket_index(hash, self.table.len());
            self.table[index].try_reserve(1)?;
        }
        let index = bucket_index(hash, self.table.len());
        self.table[index].push(Slot { hash, value });
        self.len += 1;
        if index < self.first_occupied {
            self.first_occupied = index;
        }
        Ok(())
    }

    /// Rebuilds the table with `buckets` buckets. Every chain of the new table is
    /// reserved to its final length before any element moves, with room for one more
    /// element at `pending`'s bucket. Nothing is touched unless all of that succeeds.
    fn try_resize(&mut self, buckets: usize, pending: Option<u64>) -> Result<(), CollectionAllocErr> {
        let mut counts: Vec<usize> = Vec::new();
        counts.try_reserve_exact(buckets)?;
        counts.resize(buckets, 0);
        for slot in self.table.iter().flat_map(|chain| chain.iter()) {
            counts[bucket_index(slot.hash, buckets)] += 1;
        }
        if let Some(hash) = pending {
            counts[bucket_index(hash, buckets)] += 1;
        }

        let mut table = try_empty_table(buckets)?;
        for (chain, count) in table.iter_mut().zip(counts.iter()) {
            if *count > 0 {
                chain.try_reserve_exact(*count)?;
            }
        }

        let old_table = mem::replace(&mut self.table, table);
        for slot in old_table.into_iter().flat_map(|chain| chain.into_iter()) {
            let index = bucket_index(slot.hash, buckets);
            self.table[index].push(slot);
        }
        self.first_occupied = 0;
        Ok(())
    }

    /// Reserves room for at least `additional` more elements.
    ///
    /// # Panics
    ///
    /// Panics if the new bucket count overflows `usize` or the allocation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::chain_set::ChainSet;
    /// let mut set: ChainSet<i32> = ChainSet::new();
    /// set.reserve(10);
    /// assert!(set.max_len() >= 10);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        if let Err(e) = self.try_reserve(additional) {
            panic!("{}", e);
        }
    }

    /// Like `reserve`, but reports failure. On error, the set is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::alloc_err::CollectionAllocErr;
    /// use chainset::chain_set::ChainSet;
    ///
    /// let mut set: ChainSet<i32> = ChainSet::new();
    /// set.add(1);
    /// assert_eq!(Err(CollectionAllocErr::CapacityOverflow), set.try_reserve(usize::max_value()));
    /// assert!(set.contains(&1));
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), CollectionAllocErr> {
        let needed = match self.len.checked_add(additional) {
            Some(needed) => needed,
            None => return Err(CollectionAllocErr::CapacityOverflow),
        };
        let buckets = match buckets_for(needed, MIN_CAPACITY, LOAD_FACTOR_NUM, LOAD_FACTOR_DEN) {
            Some(buckets) => buckets,
            None => return Err(CollectionAllocErr::CapacityOverflow),
        };
        if buckets > self.table.len() {
            self.try_resize(buckets, None)?;
        }
        Ok(())
    }

    /// Shrinks the table to the fewest buckets that keep the load factor, but not below
    /// [`MIN_CAPACITY`]. Removals never do this on their own.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::chain_set::ChainSet;
    ///
    /// let mut set = ChainSet::with_capacity(100);
    /// set.add(1);
    /// set.add(2);
    /// assert!(set.capacity() >= 100);
    /// set.shrink_to_fit();
    /// assert!(set.capacity() < 100);
    /// ```
    ///
    /// [`MIN_CAPACITY`]: constant.MIN_CAPACITY.html
    pub fn shrink_to_fit(&mut self) {
        if let Some(buckets) = buckets_for(self.len, MIN_CAPACITY, LOAD_FACTOR_NUM, LOAD_FACTOR_DEN) {
            if buckets < self.table.len() {
                // on failure the larger table stays, which is still valid
                let _ = self.try_resize(buckets, None);
            }
        }
    }

    /// Returns `true` if the set contains `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::chain_set::ChainSet;
    ///
    /// let set: ChainSet<_> = [1, 2, 3].iter().cloned().collect();
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        let hash = self.make_hash(value);
        self.locate(hash, value).1.is_some()
    }

    /// Returns a reference to the stored element equal to `value`, if any.
    pub fn get(&self, value: &T) -> Option<&T> {
        let hash = self.make_hash(value);
        match self.locate(hash, value) {
            (index, Some(pos)) => Some(&self.table[index][pos].value),
            _ => None,
        }
    }

    /// Removes the member equal to `value` and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a member.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::chain_set::ChainSet;
    ///
    /// let mut set = ChainSet::new();
    /// set.add(String::from("3"));
    /// assert_eq!("3", set.remove(&String::from("3")));
    /// assert!(set.is_empty());
    /// ```
    pub fn remove(&mut self, value: &T) -> T {
        match self.take(value) {
            Some(removed) => removed,
            None => panic!("element is not a member of the set"),
        }
    }

    /// Removes and returns the member equal to `value`, if any.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let hash = self.make_hash(value);
        match self.locate(hash, value) {
            (index, Some(pos)) => {
                self.len -= 1;
                Some(self.table[index].swap_remove(pos).value)
            }
            _ => None,
        }
    }
}

impl<T, S> ChainSet<T, S>
    where T: Debug
{
    /// Prints the table layout to stdout, one line per non-empty bucket.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::chain_set::ChainSet;
    ///
    /// let set: ChainSet<i32> = (0..5).collect();
    /// set.debug();
    /// ```
    pub fn debug(&self) {
        println!("len {}, capacity {}, first_occupied {}", self.len, self.table.len(), self.first_occupied);
        for (index, chain) in self.table.iter().enumerate() {
            if !chain.is_empty() {
                let values: Vec<&T> = chain.iter().map(|slot| &slot.value).collect();
                println!("[{}] {:?}", index, values);
            }
        }
    }
}

impl<T, S> Set for ChainSet<T, S>
    where T: Eq + Hash,
          S: BuildHasher + Default
{
    type Item = T;

    fn add(&mut self, value: T) {
        ChainSet::add(self, value)
    }

    fn remove(&mut self, value: &T) -> T {
        ChainSet::remove(self, value)
    }

    fn remove_any(&mut self) -> T {
        ChainSet::remove_any(self)
    }

    fn contains(&self, value: &T) -> bool {
        ChainSet::contains(self, value)
    }

    fn size(&self) -> usize {
        self.len
    }

    fn elements<'a>(&'a self) -> Box<dyn Iterator<Item=&'a T> + 'a> {
        Box::new(self.iter())
    }
}

impl<T, S> PartialEq for ChainSet<T, S>
    where T: Eq + Hash,
          S: BuildHasher
{
    fn eq(&self, other: &ChainSet<T, S>) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter().all(|value| other.contains(value))
    }
}

impl<T, S> Eq for ChainSet<T, S>
    where T: Eq + Hash,
          S: BuildHasher
{}

impl<T, S> PartialEq<VecSet<T>> for ChainSet<T, S>
    where T: Eq + Hash,
          S: BuildHasher
{
    fn eq(&self, other: &VecSet<T>) -> bool {
        self.len() == other.len() && self.iter().all(|value| other.contains(value))
    }
}

impl<T, S> PartialEq<ChainSet<T, S>> for VecSet<T>
    where T: Eq + Hash,
          S: BuildHasher
{
    fn eq(&self, other: &ChainSet<T, S>) -> bool {
        other == self
    }
}

impl<T, S> fmt::Debug for ChainSet<T, S>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S> Default for ChainSet<T, S>
    where T: Eq + Hash,
          S: BuildHasher + Default
{
    /// Creates an empty `ChainSet<T, S>` with the `Default` value for the hasher.
    fn default() -> ChainSet<T, S> {
        ChainSet::with_hasher(Default::default())
    }
}

impl<T, S> FromIterator<T> for ChainSet<T, S>
    where T: Eq + Hash,
          S: BuildHasher + Default
{
    /// Duplicates are skipped.
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> ChainSet<T, S> {
        let mut set = ChainSet::with_hasher(Default::default());
        set.extend(iter);
        set
    }
}

impl<T, S> Extend<T> for ChainSet<T, S>
    where T: Eq + Hash,
          S: BuildHasher
{
    fn extend<I: IntoIterator<Item=T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, S> Extend<&'a T> for ChainSet<T, S>
    where T: 'a + Eq + Hash + Copy,
          S: BuildHasher
{
    fn extend<I: IntoIterator<Item=&'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

/// An iterator over the elements of a `ChainSet`, in bucket order.
pub struct Iter<'a, T: 'a> {
    buckets: slice::Iter<'a, Chain<T>>,
    chain: Option<slice::Iter<'a, Slot<T>>>,
    remaining: usize,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> {
        Iter {
            buckets: self.buckets.clone(),
            chain: self.chain.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(slot) = self.chain.as_mut().and_then(|chain| chain.next()) {
                self.remaining -= 1;
                return Some(&slot.value);
            }
            match self.buckets.next() {
                Some(chain) => self.chain = Some(chain.iter()),
                None => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// An owning iterator over the elements of a `ChainSet`, in bucket order.
pub struct IntoIter<T> {
    buckets: vec::IntoIter<Chain<T>>,
    chain: Option<vec::IntoIter<Slot<T>>>,
    remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(slot) = self.chain.as_mut().and_then(|chain| chain.next()) {
                self.remaining -= 1;
                return Some(slot.value);
            }
            match self.buckets.next() {
                Some(chain) => self.chain = Some(chain.into_iter()),
                None => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for IntoIter<T> {}

/// A draining iterator over a `ChainSet`, created by `ChainSet::drain`.
pub struct Drain<'a, T: 'a, S: 'a> {
    set: &'a mut ChainSet<T, S>,
}

impl<'a, T, S> Iterator for Drain<'a, T, S> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.set.try_remove_any()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.set.len(), Some(self.set.len()))
    }
}

impl<'a, T, S> ExactSizeIterator for Drain<'a, T, S> {
    fn len(&self) -> usize {
        self.set.len()
    }
}

impl<'a, T, S> FusedIterator for Drain<'a, T, S> {}

impl<'a, T, S> Drop for Drain<'a, T, S> {
    fn drop(&mut self) {
        self.set.clear();
    }
}

impl<'a, T, S> IntoIterator for &'a ChainSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, S> IntoIterator for ChainSet<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator, that is, one that moves each value out
    /// of the set in bucket order. The set cannot be used after calling this.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainset::chain_set::ChainSet;
    /// let mut set = ChainSet::new();
    /// set.add("a".to_string());
    /// set.add("b".to_string());
    ///
    /// let mut v: Vec<String> = set.into_iter().collect();
    /// v.sort();
    /// assert_eq!(v, ["a".to_string(), "b".to_string()]);
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            remaining: self.len,
            buckets: self.table.into_iter(),
            chain: None,
        }
    }
}
