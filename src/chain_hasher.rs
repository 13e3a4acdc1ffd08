// Copyright 2018 Mohammad Rezaei.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//

//! The default `Hasher` used by `ChainSet`.
use util::*;

use std::sync::atomic::*;
use std::hash::Hasher;
use std::hash::BuildHasher;

static SEED: AtomicUsize = AtomicUsize::new(0xcafebabe_usize);

const FOLD_MUL: u64 = 0x9E37_79B9_7F4A_7C15;

fn next_seed() -> u64 {
    let x = SEED.load(Ordering::Acquire) as u64;
    let y = spread_three(x);
    let _ = SEED.compare_exchange(x as usize, y as usize, Ordering::Release, Ordering::Relaxed); // losing the race is fine
    y
}

/// Builds `ChainHasher`s sharing one seed. Every builder created with `new` draws a fresh seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainHasherBuilder {
    seed: u64
}

/// Folds each written word into the state and spreads the bits on `finish`, so the low
/// bits used to pick a bucket depend on every input byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainHasher {
    hash: u64
}

impl Default for ChainHasherBuilder {
    fn default() -> Self {
        ChainHasherBuilder::new()
    }
}

impl ChainHasherBuilder {
    pub fn new() -> Self {
        ChainHasherBuilder { seed: next_seed() }
    }

    /// A builder with a fixed seed, for reproducible bucket layouts.
    pub fn with_seed(seed: u64) -> Self {
        ChainHasherBuilder { seed }
    }
}

impl BuildHasher for ChainHasherBuilder {
    type Hasher = ChainHasher;

    #[inline]
    fn build_hasher(&self) -> <Self as BuildHasher>::Hasher {
        ChainHasher::new(self.seed)
    }
}

impl ChainHasher {
    #[inline]
    pub fn new(seed: u64) -> Self {
        ChainHasher { hash: seed }
    }

    #[inline(always)]
    fn fold(&mut self, word: u64) {
        self.hash = (self.hash ^ word).wrapping_mul(FOLD_MUL).rotate_left(29);
    }
}

impl Hasher for ChainHasher {
    #[inline(always)]
    fn finish(&self) -> u64 {
        spread_one(self.hash)
    }

    fn write(&mut self, bytes: &[u8]) {
        let mut chunks = bytes.chunks(8);
        while let Some(chunk) = chunks.next() {
            let mut x: u64 = 0;
            for byte in chunk {
                x = (x << 8) | *byte as u64;
            }
            self.fold(x);
        }
    }

    #[inline(always)]
    fn write_u8(&mut self, i: u8) {
        self.fold(i as u64)
    }

    #[inline(always)]
    fn write_u16(&mut self, i: u16) {
        self.fold(i as u64)
    }

    #[inline(always)]
    fn write_u32(&mut self, i: u32) {
        self.fold(i as u64)
    }

    #[inline(always)]
    fn write_u64(&mut self, i: u64) {
        self.fold(i)
    }

    #[inline(always)]
    fn write_u128(&mut self, i: u128) {
        self.fold(i as u64);
        self.fold((i >> 64) as u64);
    }

    #[inline(always)]
    fn write_usize(&mut self, i: usize) {
        self.fold(i as u64)
    }

    #[inline(always)]
    fn write_i8(&mut self, i: i8) {
        self.fold(i as u64)
    }

    #[inline(always)]
    fn write_i16(&mut self, i: i16) {
        self.fold(i as u64)
    }

    #[inline(always)]
    fn write_i32(&mut self, i: i32) {
        self.fold(i as u64)
    }

    #[inline(always)]
    fn write_i64(&mut self, i: i64) {
        self.fold(i as u64)
    }

    #[inline(always)]
    fn write_i128(&mut self, i: i128) {
        self.write_u128(i as u128)
    }

    #[inline(always)]
    fn write_isize(&mut self, i: isize) {
        self.fold(i as u64)
    }
}
