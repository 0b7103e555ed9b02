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

//! AWS S3 backed `BlobStore`

use async_trait::async_trait;
use aws_sdk_s3::{Client, primitives::ByteStream};
use aws_config::{Region,meta::region::RegionProviderChain};
use bytes::Bytes;

use crate::{debug, blob_store::{BlobStore,check_object_key}, errors::Result};

pub type S3Client = Client;

/// create S3 Client for given region. Credentials are taken from the environment
pub async fn create_s3_client (region: &str) -> S3Client {
    let region_provider = RegionProviderChain::first_try( Region::new( region.to_string()));
    let aws_config = aws_config::from_env().region(region_provider).load().await;
    Client::new(&aws_config)
}

#[derive(Debug,Clone)]
pub struct S3BlobStore {
    client: S3Client,
    region: String,
    bucket: String,
}

impl S3BlobStore {
    pub async fn connect (region: &str, bucket: &str)->Result<Self> {
        let client = create_s3_client(region).await;
        Ok( S3BlobStore::new( client, region, bucket) )
    }

    pub fn new (client: S3Client, region: &str, bucket: &str)->Self {
        S3BlobStore { client, region: region.to_string(), bucket: bucket.to_string() }
    }

    pub fn bucket (&self)->&str { &self.bucket }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn put_object (&self, key: &str, data: Bytes, content_type: &str)->Result<String> {
        check_object_key(key)?;
        let len = data.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body( ByteStream::from(data))
            .send()
            .await?;

        debug!("uploaded {} bytes to s3://{}/{}", len, self.bucket, key);
        Ok( self.object_url(key))
    }

    async fn get_object (&self, key: &str)->Result<Bytes> {
        check_object_key(key)?;

        let output = self.client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await?;

        Ok( output.body.collect().await?.into_bytes() )
    }

    fn object_url (&self, key: &str)->String {
        format!("https://{}.s3.{}.amazonaws.com/{}", self.bucket, self.region, key)
    }
}
