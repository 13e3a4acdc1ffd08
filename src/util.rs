// Copyright 2018 Mohammad Rezaei.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//

/// Smallest power of two that is `>= x`, or `None` if that doesn't fit in a `usize`.
#[inline]
pub fn ceil_pow2(x: usize) -> Option<usize> {
    if x <= 1 { return Some(1); }
    let highest_one_bit = 1usize << (usize::max_value().count_ones() - x.leading_zeros() - 1);
    if x > highest_one_bit { return highest_one_bit.checked_mul(2); }
    Some(highest_one_bit)
}

/// Number of buckets needed to hold `len` elements under a `num / den` load factor,
/// never less than `min`.
#[inline]
pub fn buckets_for(len: usize, min: usize, num: usize, den: usize) -> Option<usize> {
    let needed = len.checked_mul(den)?;
    let needed = needed / num + if needed % num == 0 { 0 } else { 1 };
    let size = ceil_pow2(needed)?;
    if size < min { Some(min) } else { Some(size) }
}

#[inline]
pub fn spread_one(code: u64) -> u64 {
    let mut r = code;
    r ^= r >> 28;
    r = r.wrapping_mul(-4254747342703917655i64 as u64);
    r ^= r >> 43;
    r = r.wrapping_mul(-908430792394475837i64 as u64);
    r ^= r >> 23;
    r
}

#[inline]
pub fn spread_three(code: u64) -> u64 {
    let mut r = code;
    r ^= r >> 26;
    r = r.wrapping_mul(8238576523158062045u64);
    r ^= r >> 35;
    r = r.wrapping_mul(-6410243847380211633i64 as u64);
    r ^= r >> 34;
    r
}
