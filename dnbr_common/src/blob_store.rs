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

//! addressable object (blob) storage. Every stored object has a URL under which it can be retrieved

use std::{collections::HashMap, path::{Path,PathBuf}, sync::{Arc,Mutex}};
use async_trait::async_trait;
use bytes::Bytes;
use serde::{Serialize,Deserialize};

use crate::{debug, store_error, errors::{DnbrCommonError,Result}, fs::{ensure_writable_dir,filepath_contents,path_to_lossy_string,set_filepath_contents}};

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// upload data under key (replacing existing objects) and return the URL of the stored object
    async fn put_object (&self, key: &str, data: Bytes, content_type: &str)->Result<String>;

    async fn get_object (&self, key: &str)->Result<Bytes>;

    fn object_url (&self, key: &str)->String;
}

/// object keys are relative '/' separated paths without empty or parent segments
pub fn check_object_key (key: &str)->Result<()> {
    let is_valid = !key.is_empty()
        && !key.contains('\\')
        && key.split('/').all(|seg| !seg.is_empty() && seg != "." && seg != "..");

    if is_valid { Ok(()) } else { Err( DnbrCommonError::InvalidKeyError(key.to_string())) }
}

/* #region config ***************************************************************************/

#[derive(Serialize,Deserialize,Debug,Clone)]
pub enum BlobStoreConfig {
    /// objects are files under dir. If base_url is set object URLs are "<base_url>/<key>", otherwise file URLs
    Local { dir: String, base_url: Option<String> },

    #[cfg(feature="aws")]
    S3 { region: String, bucket: String },
}

pub async fn open_blob_store (config: &BlobStoreConfig)->Result<Arc<dyn BlobStore>> {
    match config {
        BlobStoreConfig::Local { dir, base_url } => Ok( Arc::new( FsBlobStore::new( dir, base_url.clone())?)),

        #[cfg(feature="aws")]
        BlobStoreConfig::S3 { region, bucket } => {
            let store = crate::s3::S3BlobStore::connect( region, bucket).await?;
            Ok( Arc::new(store))
        }
    }
}

/* #endregion config */

/* #region in-memory store *****************************************************************/

#[derive(Debug,Clone)]
pub struct MemObject {
    pub content_type: String,
    pub data: Bytes
}

#[derive(Debug)]
pub struct MemBlobStore {
    base_url: String,
    objects: Mutex<HashMap<String,MemObject>>
}

impl MemBlobStore {
    pub fn new (base_url: impl ToString)->Self {
        MemBlobStore { base_url: base_url.to_string().trim_end_matches('/').to_string(), objects: Mutex::new( HashMap::new()) }
    }

    pub fn len (&self)->usize {
        self.objects.lock().map(|objs| objs.len()).unwrap_or(0)
    }

    pub fn get (&self, key: &str)->Option<MemObject> {
        self.objects.lock().ok().and_then(|objs| objs.get(key).cloned())
    }

    pub fn keys (&self)->Vec<String> {
        let mut keys: Vec<String> = self.objects.lock().map(|objs| objs.keys().cloned().collect()).unwrap_or_default();
        keys.sort();
        keys
    }
}

impl Default for MemBlobStore {
    fn default()->Self { MemBlobStore::new("mem://blobs") }
}

#[async_trait]
impl BlobStore for MemBlobStore {
    async fn put_object (&self, key: &str, data: Bytes, content_type: &str)->Result<String> {
        check_object_key(key)?;
        let mut objs = self.objects.lock().map_err(|_| store_error!("poisoned object lock"))?;
        objs.insert( key.to_string(), MemObject{ content_type: content_type.to_string(), data });
        Ok( self.object_url(key))
    }

    async fn get_object (&self, key: &str)->Result<Bytes> {
        check_object_key(key)?;
        let objs = self.objects.lock().map_err(|_| store_error!("poisoned object lock"))?;
        objs.get(key).map(|o| o.data.clone()).ok_or_else(|| store_error!("no such object {}", key))
    }

    fn object_url (&self, key: &str)->String {
        format!("{}/{}", self.base_url, key)
    }
}

/* #endregion in-memory store */

/* #region file system store ***************************************************************/

#[derive(Debug)]
pub struct FsBlobStore {
    root: PathBuf,
    base_url: Option<String>
}

impl FsBlobStore {
    pub fn new (root: impl AsRef<Path>, base_url: Option<String>)->Result<Self> {
        let root = root.as_ref().to_path_buf();
        ensure_writable_dir(&root)?;
        let base_url = base_url.map(|s| s.trim_end_matches('/').to_string());
        Ok( FsBlobStore { root, base_url } )
    }

    fn object_path (&self, key: &str)->Result<PathBuf> {
        check_object_key(key)?;
        Ok( key.split('/').fold( self.root.clone(), |path,seg| path.join(seg)) )
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    // content types are not preserved by the file system
    async fn put_object (&self, key: &str, data: Bytes, _content_type: &str)->Result<String> {
        let path = self.object_path(key)?;
        set_filepath_contents( &path, &data)?;
        debug!("stored object {:?}", path);
        Ok( self.object_url(key))
    }

    async fn get_object (&self, key: &str)->Result<Bytes> {
        let path = self.object_path(key)?;
        Ok( Bytes::from( filepath_contents(&path)?) )
    }

    fn object_url (&self, key: &str)->String {
        if let Some(base_url) = &self.base_url {
            format!("{base_url}/{key}")
        } else {
            format!("file://{}/{}", path_to_lossy_string(&self.root).trim_end_matches('/'), key)
        }
    }
}

/* #endregion file system store */
