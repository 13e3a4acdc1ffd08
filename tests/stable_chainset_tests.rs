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

#[macro_use]
extern crate chainset;
extern crate ordered_float;
extern crate rand;

use chainset::alloc_err::CollectionAllocErr;
use chainset::chain_hasher::*;
use chainset::chain_set::ChainSet;
use chainset::vec_set::VecSet;

use ordered_float::NotNan;
use rand::prelude::*;

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
struct Color {
    r: u8,
    g: u8,
    b: u8,
}

#[test]
fn custom_element()
{
    let mut colors = ChainSet::new();
    colors.add(Color { r: 0, g: 0, b: 0 });
    colors.add(Color { r: 0, g: 0, b: 1 });
    colors.add(Color { r: 1, g: 1, b: 1 });

    assert!(colors.contains(&Color { r: 0, g: 0, b: 0 }));
    assert!(colors.contains(&Color { r: 0, g: 0, b: 1 }));
    assert!(!colors.contains(&Color { r: 1, g: 0, b: 0 }));
    assert_eq!(Color { r: 1, g: 1, b: 1 }, colors.remove(&Color { r: 1, g: 1, b: 1 }));
    assert_eq!(2, colors.len());
}

#[test]
fn float_elements() {
    let mut set = ChainSet::new();
    for i in 0..100 {
        set.add(NotNan::new(i as f64 * 0.5).unwrap());
    }
    assert!(set.contains(&NotNan::new(49.5).unwrap()));
    assert!(!set.contains(&NotNan::new(49.25).unwrap()));
    assert_eq!(NotNan::new(0.5).unwrap(), set.remove(&NotNan::new(0.5).unwrap()));
    assert_eq!(99, set.len());
}

#[test]
fn test_macro() {
    let set: ChainSet<&str> = chainset!["3", "4", "5"];
    let reference: VecSet<&str> = vec!["5", "4", "3"].into_iter().collect();
    assert_eq!(set, reference);

    let empty: ChainSet<u8> = chainset![];
    assert!(empty.is_empty());
}

#[test]
#[should_panic(expected = "element is already a member of the set")]
fn test_macro_rejects_duplicates() {
    let _set: ChainSet<u8> = chainset![1, 2, 1];
}

#[test]
fn test_simple_insert() {
    let set = set_1_m();
    assert_eq!(1_000_000, set.len());
    assert!(set.max_len() >= set.len());
}

fn set_1_m() -> ChainSet<i32, ChainHasherBuilder> {
    let mut set = ChainSet::new();
    let mut c: i32 = 0;
    while c < 1_000_000 {
        set.add(c);
        c += 1;
    }
    set
}

#[test]
fn test_simple_contains() {
    let empty_set: ChainSet<i32> = ChainSet::new();
    assert!(!empty_set.contains(&0));
    assert!(!empty_set.contains(&1));
    let set = set_1_m();
    let mut c: i32 = 0;
    while c < 1_000_000 {
        assert!(set.contains(&c), "For element {}", c);
        c += 1;
    }
    while c < 2_000_000 {
        assert!(!set.contains(&c));
        c += 1;
    }
}

#[test]
fn test_remove()
{
    let mut set = set_1_m();
    let capacity = set.capacity();
    let mut c: i32 = 0;
    while c < 1_000_000 {
        assert_eq!(c, set.remove(&c), "For element {}", c);
        c += 1;
    }
    assert_eq!(0, set.len());
    assert_eq!(capacity, set.capacity());
    c = 0;
    while c < 1_000_000 {
        assert_eq!(None, set.take(&c));
        c += 1;
    }
}

#[test]
fn test_remove_any_drains_everything()
{
    let mut set = set_1_m();
    let mut seen = vec![false; 1_000_000];
    while !set.is_empty() {
        let x = set.remove_any();
        assert!(!seen[x as usize], "{} came out twice", x);
        seen[x as usize] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn test_random_sequences_match_reference() {
    let mut rng = thread_rng();
    for _ in 0..20 {
        let mut set = ChainSet::new();
        let mut reference = VecSet::new();
        for _ in 0..500 {
            let x: u16 = rng.gen_range(0, 100);
            if rng.gen() {
                if !reference.contains(&x) {
                    set.add(x);
                    reference.add(x);
                }
            } else if reference.contains(&x) {
                assert_eq!(reference.remove(&x), set.remove(&x));
            }
            assert_eq!(set.contains(&x), reference.contains(&x));
        }
        assert_eq!(set, reference);
        while !reference.is_empty() {
            let x = set.remove_any();
            reference.remove(&x);
        }
        assert!(set.is_empty());
    }
}

#[test]
fn test_try_reserve_reports_overflow() {
    let mut set: ChainSet<u64> = (0..1000).collect();
    let before = set.clone();
    assert_eq!(Err(CollectionAllocErr::CapacityOverflow), set.try_reserve(usize::max_value()));
    assert_eq!(before, set);
    assert_eq!(Ok(()), set.try_reserve(1000));
    assert!(set.max_len() >= 2000);
    assert_eq!(before, set);
}

#[test]
fn test_error_display() {
    assert_eq!("capacity overflow", CollectionAllocErr::CapacityOverflow.to_string());
    assert_eq!("memory allocation failed", CollectionAllocErr::AllocErr.to_string());
}

#[test]
fn test_fixed_seed_layout_is_reproducible() {
    let mut a = ChainSet::with_hasher(ChainHasherBuilder::with_seed(0x1234));
    let mut b = ChainSet::with_hasher(ChainHasherBuilder::with_seed(0x1234));
    for i in 0..1000u32 {
        a.add(i);
        b.add(i);
    }
    let order_a: Vec<u32> = a.iter().cloned().collect();
    let order_b: Vec<u32> = b.iter().cloned().collect();
    assert_eq!(order_a, order_b);
}

#[test]
fn test_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ChainSet<String>>();
    assert_send_sync::<VecSet<String>>();
}
