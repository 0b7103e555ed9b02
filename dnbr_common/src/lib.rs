/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! common support for the dNBR job crates: storage abstractions, config lookup, fs and date helpers

use serde::{Serialize,Deserialize};
use num::Num;
use tracing_subscriber::EnvFilter;

// re-exported so that the logging macros can be used without a direct tracing dependency
pub use tracing;

pub mod macros;
pub mod errors;
pub mod fs;
pub mod datetime;
pub mod config;
pub mod kv_store;
pub mod blob_store;

#[cfg(feature="aws")]
pub mod s3;

#[cfg(feature="aws")]
pub mod dynamodb;

pub use errors::{DnbrCommonError, Result};

// a global fn that can be used with serde(skip_serializing_if="dnbr_common::is_none")
#[inline] pub fn is_none<T> (opt: &Option<T>)->bool { opt.is_none() }

/// a generic bounding box without semantics for the coordinate type
#[derive(Debug,Copy,Clone,Serialize,Deserialize,PartialEq)]
pub struct BoundingBox <T: Num> {
    pub west: T,
    pub south: T,
    pub east: T,
    pub north: T
}

impl <T: Num + Copy + PartialOrd> BoundingBox<T> {
    pub fn new(west: T, south: T, east: T, north: T)->Self {
        BoundingBox{ west, south, east, north}
    }

    pub fn to_minmax_array (&self) -> [T;4] {
        [self.west,self.south,self.east,self.north]
    }

    /// smallest box that contains both self and other
    pub fn union (&self, other: &BoundingBox<T>) -> BoundingBox<T> {
        let min = |a: T, b: T| if a < b { a } else { b };
        let max = |a: T, b: T| if a > b { a } else { b };
        BoundingBox {
            west: min(self.west, other.west),
            south: min(self.south, other.south),
            east: max(self.east, other.east),
            north: max(self.north, other.north)
        }
    }
}

/// install a fmt subscriber that writes to stderr and uses RUST_LOG (default "info") as filter.
/// Note this only succeeds if there is no global subscriber set yet
pub fn init_env_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
