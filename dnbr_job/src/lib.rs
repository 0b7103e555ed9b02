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

//! fire severity (dNBR) jobs. A job is created by running a generator over every feature of an input
//! feature collection, which produces one analysis per feature (fire scar AOI). Jobs are persisted
//! through a [`job_service::JobService`] and later published to blob storage by a [`publisher::Publisher`]

use serde::{Serialize,Deserialize};
use dnbr_common::{define_load_config, kv_store::KvStoreConfig, blob_store::BlobStoreConfig};

/// time sortable ULID based identifiers. Job and analysis ids are distinct types
macro_rules! define_ulid_id {
    ($name:ident) => {
        #[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,PartialOrd,Ord,serde::Serialize,serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(ulid::Ulid);

        impl $name {
            pub fn new()->Self { $name( ulid::Ulid::new()) }

            pub fn timestamp_ms (&self)->u64 { self.0.timestamp_ms() }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::errors::DnbrJobError;

            fn from_str (s: &str)->crate::errors::Result<Self> {
                ulid::Ulid::from_string(s.trim())
                    .map($name)
                    .map_err(|e| crate::errors::invalid_input!("not a valid {} '{}': {}", stringify!($name), s, e))
            }
        }
    }
}

pub mod errors;
pub use errors::{DnbrJobError, Result};

pub mod fire_metadata;
pub mod aoi;
pub mod analysis;
pub mod job;
pub mod generator;
pub mod job_service;
pub mod catalog;
pub mod publisher;

define_load_config!{}

pub const DEFAULT_CONFIG: &'static str = "dnbr.ron";

/// the top level configuration shared by all dnbr_job executables
#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct DnbrConfig {
    pub job_store: KvStoreConfig,
    pub blob_store: BlobStoreConfig,

    #[serde(default)]
    pub generator: generator::GeneratorConfig,

    /// relative artifact references are resolved against this directory
    #[serde(default="default_artifact_dir")]
    pub artifact_dir: String,

    /// extension of published raster objects
    #[serde(default="default_raster_ext")]
    pub raster_ext: String,
}

fn default_artifact_dir()->String { ".".to_string() }
fn default_raster_ext()->String { "tif".to_string() }
