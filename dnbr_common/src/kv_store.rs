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

//! opaque key -> record stores. Records are JSON objects, keys are plain identifiers

use std::{collections::HashMap, path::{Path,PathBuf}, sync::{Arc,Mutex}};
use async_trait::async_trait;
use serde::{Serialize,Deserialize};
use serde_json::{Map,Value};

use crate::{debug, store_error, errors::{DnbrCommonError,Result}, fs::{ensure_writable_dir,filepath_contents_as_string,set_filepath_contents}};

pub type Item = Map<String,Value>;

#[async_trait]
pub trait KvStore: Send + Sync {
    /// store item under key, replacing any existing item (last write wins)
    async fn put_item (&self, key: &str, item: Item)->Result<()>;

    /// retrieve item for key. This returns `Ok(None)` if there is no such item
    async fn get_item (&self, key: &str)->Result<Option<Item>>;

    /// human readable location of the store (for logging)
    fn location (&self)->String;
}

/// keys end up in file names and URLs so we only accept alphanumerics, '-' and '_'
pub fn check_key (key: &str)->Result<()> {
    if !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        Ok(())
    } else {
        Err( DnbrCommonError::InvalidKeyError(key.to_string()))
    }
}

/* #region config ***************************************************************************/

#[derive(Serialize,Deserialize,Debug,Clone)]
pub enum KvStoreConfig {
    /// one JSON file per record within dir
    Local { dir: String },

    #[cfg(feature="aws")]
    DynamoDb { region: String, table: String, key_attr: String },
}

pub async fn open_kv_store (config: &KvStoreConfig)->Result<Arc<dyn KvStore>> {
    match config {
        KvStoreConfig::Local { dir } => Ok( Arc::new( FsKvStore::new(dir)?)),

        #[cfg(feature="aws")]
        KvStoreConfig::DynamoDb { region, table, key_attr } => {
            let store = crate::dynamodb::DynamoDbStore::connect( region, table, key_attr).await?;
            Ok( Arc::new(store))
        }
    }
}

/* #endregion config */

/* #region in-memory store *****************************************************************/

#[derive(Default,Debug)]
pub struct MemKvStore {
    items: Mutex<HashMap<String,Item>>
}

impl MemKvStore {
    pub fn new()->Self { MemKvStore::default() }

    pub fn len (&self)->usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }
}

#[async_trait]
impl KvStore for MemKvStore {
    async fn put_item (&self, key: &str, item: Item)->Result<()> {
        check_key(key)?;
        let mut items = self.items.lock().map_err(|_| store_error!("poisoned item lock"))?;
        items.insert( key.to_string(), item);
        Ok(())
    }

    async fn get_item (&self, key: &str)->Result<Option<Item>> {
        check_key(key)?;
        let items = self.items.lock().map_err(|_| store_error!("poisoned item lock"))?;
        Ok( items.get(key).cloned() )
    }

    fn location (&self)->String { "memory".to_string() }
}

/* #endregion in-memory store */

/* #region file system store ***************************************************************/

#[derive(Debug)]
pub struct FsKvStore {
    dir: PathBuf
}

impl FsKvStore {
    pub fn new (dir: impl AsRef<Path>)->Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        ensure_writable_dir(&dir)?;
        Ok( FsKvStore { dir } )
    }

    fn item_path (&self, key: &str)->Result<PathBuf> {
        check_key(key)?;
        Ok( self.dir.join( format!("{key}.json")) )
    }
}

#[async_trait]
impl KvStore for FsKvStore {
    async fn put_item (&self, key: &str, item: Item)->Result<()> {
        let path = self.item_path(key)?;
        let data = serde_json::to_vec_pretty( &Value::Object(item))?;
        set_filepath_contents( &path, &data)?;
        debug!("stored item {:?}", path);
        Ok(())
    }

    async fn get_item (&self, key: &str)->Result<Option<Item>> {
        let path = self.item_path(key)?;
        if !path.is_file() { return Ok(None) }

        let data = filepath_contents_as_string(&path)?;
        match serde_json::from_str::<Value>( &data)? {
            Value::Object(item) => Ok( Some(item)),
            _ => Err( crate::errors::invalid_record( format!("not a JSON object: {:?}", path)))
        }
    }

    fn location (&self)->String { format!("{:?}", self.dir) }
}

/* #endregion file system store */
