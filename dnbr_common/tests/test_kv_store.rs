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

use serde_json::{json,Value};
use dnbr_common::{DnbrCommonError, kv_store::{check_key,FsKvStore,Item,KvStore,MemKvStore}};

/// run with "cargo test --test test_kv_store -- --nocapture"

fn item (v: Value)->Item {
    v.as_object().cloned().unwrap()
}

async fn check_store (store: &dyn KvStore) {
    assert!( store.get_item("01HX").await.unwrap().is_none());

    let it = item( json!({"job_id": "01HX", "status": "PENDING", "n": 1}));
    store.put_item( "01HX", it.clone()).await.unwrap();
    assert_eq!( store.get_item("01HX").await.unwrap(), Some(it));

    // last write wins
    let it2 = item( json!({"job_id": "01HX", "status": "COMPLETED", "n": 2}));
    store.put_item( "01HX", it2.clone()).await.unwrap();
    assert_eq!( store.get_item("01HX").await.unwrap(), Some(it2));
    println!("  {} ✅", store.location());
}

#[tokio::test]
async fn test_mem_kv_store() {
    let store = MemKvStore::new();
    check_store( &store).await;
    assert_eq!( store.len(), 1);
}

#[tokio::test]
async fn test_fs_kv_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsKvStore::new( dir.path().join("jobs")).unwrap();
    check_store( &store).await;
    assert!( dir.path().join("jobs/01HX.json").is_file());
}

#[tokio::test]
async fn test_fs_kv_store_rejects_non_objects() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write( dir.path().join("bad.json"), "[1,2,3]").unwrap();
    let store = FsKvStore::new( dir.path()).unwrap();

    match store.get_item("bad").await {
        Err(DnbrCommonError::InvalidRecordError(_)) => {}
        other => panic!("expected invalid record, got {:?}", other)
    }
}

#[tokio::test]
async fn test_invalid_keys() {
    assert!( check_key("01HXABC_def-1").is_ok());
    for key in ["", "../etc", "a/b", "a b", "x.json"] {
        assert!( check_key(key).is_err(), "key {key:?} should be rejected");
    }

    let store = MemKvStore::new();
    assert!( store.put_item( "a/b", Item::new()).await.is_err());
}
