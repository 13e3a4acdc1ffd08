// Copyright 2018 Mohammad Rezaei.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
#![feature(test)]

extern crate test;
extern crate chainset;
extern crate rand;
extern crate xoshiro;

use chainset::chain_set::ChainSet;
use chainset::vec_set::VecSet;

use std::collections::HashSet;
use test::Bencher;
use test::black_box;

use rand::*;
use xoshiro::Xoshiro512StarStar;

fn create_rand_vec(size: usize) -> Vec<u32> {
    let mut rng1 = Xoshiro512StarStar::from_seed_u64(0x1234_5678_9ABC_DEF1);
    let mut vec = Vec::with_capacity(size);
    for _i in 0..size {
        vec.push(rng1.next_u32());
    }
    vec.sort();
    vec.dedup();
    rng1.shuffle(&mut vec);
    vec
}

fn create_chain_from_vec(src: &[u32]) -> ChainSet<u32> {
    let mut set = ChainSet::new();
    for x in src.iter() {
        set.add(*x);
    }
    set
}

fn create_std_from_vec(src: &[u32]) -> HashSet<u32> {
    let mut set = HashSet::new();
    for x in src.iter() {
        set.insert(*x);
    }
    set
}

#[bench]
fn benchs_chain_insert_100k(b: &mut Bencher) {
    let src = create_rand_vec(100_000);
    b.iter(|| black_box(create_chain_from_vec(&src).len()));
}

#[bench]
fn benchs_std_insert_100k(b: &mut Bencher) {
    let src = create_rand_vec(100_000);
    b.iter(|| black_box(create_std_from_vec(&src).len()));
}

#[bench]
fn benchs_chain_contains_100k(b: &mut Bencher) {
    let src = create_rand_vec(100_000);
    let set = create_chain_from_vec(&src);
    b.iter(|| {
        let mut found = 0;
        for x in src.iter() {
            if set.contains(x) {
                found += 1;
            }
        }
        black_box(found)
    });
}

#[bench]
fn benchs_std_contains_100k(b: &mut Bencher) {
    let src = create_rand_vec(100_000);
    let set = create_std_from_vec(&src);
    b.iter(|| {
        let mut found = 0;
        for x in src.iter() {
            if set.contains(x) {
                found += 1;
            }
        }
        black_box(found)
    });
}

#[bench]
fn benchs_chain_remove_any_100k(b: &mut Bencher) {
    let src = create_rand_vec(100_000);
    let set = create_chain_from_vec(&src);
    b.iter(|| {
        let mut set = set.clone();
        let mut sum = 0u64;
        while !set.is_empty() {
            sum += set.remove_any() as u64;
        }
        black_box(sum)
    });
}

#[bench]
fn benchs_vec_set_insert_1k(b: &mut Bencher) {
    let src = create_rand_vec(1_000);
    b.iter(|| {
        let mut set = VecSet::new();
        for x in src.iter() {
            set.add(*x);
        }
        black_box(set.len())
    });
}

#[bench]
fn benchs_chain_insert_1k(b: &mut Bencher) {
    let src = create_rand_vec(1_000);
    b.iter(|| black_box(create_chain_from_vec(&src).len()));
}
