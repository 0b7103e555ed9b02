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
#![allow(unused)]

use serde::Deserialize;
use dnbr_common::{DnbrCommonError, config::{find_config_file,load_config,load_config_path}, kv_store::KvStoreConfig, blob_store::BlobStoreConfig};

#[derive(Deserialize,Debug)]
struct StoreConfig {
    job_store: KvStoreConfig,
    blob_store: BlobStoreConfig,
}

#[test]
fn test_load_explicit_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stores.ron");
    std::fs::write( &path, r#"(
        job_store: Local( dir: "/tmp/dnbr/jobs"),
        blob_store: Local( dir: "/tmp/dnbr/blobs", base_url: Some("http://localhost:8080")),
    )"#).unwrap();

    let found = find_config_file( "dnbr_job", path.to_str().unwrap()).unwrap();
    assert_eq!( found, path);

    let config: StoreConfig = load_config_path(&path).unwrap();
    println!("{config:?}");
    match config.job_store {
        KvStoreConfig::Local{dir} => assert_eq!( dir, "/tmp/dnbr/jobs"),
        other => panic!("wrong store config {other:?}")
    }
    match config.blob_store {
        BlobStoreConfig::Local{base_url, ..} => assert_eq!( base_url.as_deref(), Some("http://localhost:8080")),
        other => panic!("wrong store config {other:?}")
    }
}

#[test]
fn test_missing_config() {
    match load_config::<StoreConfig>( "dnbr_nonexistent", "no_such_config.ron") {
        Err(DnbrCommonError::ConfigNotFoundError(name)) => assert_eq!( name, "no_such_config.ron"),
        other => panic!("expected config not found, got {other:?}")
    }
}

#[test]
fn test_malformed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.ron");
    std::fs::write( &path, "( job_store: Nowhere )").unwrap();
    assert!( matches!( load_config_path::<StoreConfig,_>(&path), Err(DnbrCommonError::RonError(_))));
}
