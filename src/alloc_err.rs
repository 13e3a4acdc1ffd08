// Copyright 2018 Mohammad Rezaei.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//

//! The recoverable failure of `ChainSet::try_add` and `ChainSet::try_reserve`.

use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

/// Growing the table failed. The set that reported it is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectionAllocErr {
    /// The requested number of buckets doesn't fit in a `usize`.
    CapacityOverflow,
    /// The allocator refused the memory.
    AllocErr,
}

impl From<TryReserveError> for CollectionAllocErr {
    fn from(_: TryReserveError) -> Self {
        CollectionAllocErr::AllocErr
    }
}

impl fmt::Display for CollectionAllocErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CollectionAllocErr::CapacityOverflow => f.write_str("capacity overflow"),
            CollectionAllocErr::AllocErr => f.write_str("memory allocation failed"),
        }
    }
}

impl Error for CollectionAllocErr {}
