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

//! persistence of job records. Each job is stored as one record under its job id. The scalar job fields are
//! top level attributes of the record, the analyses are embedded as a single JSON text attribute so that
//! backends with their own number representation (DynamoDB) cannot alter feature properties

use std::sync::Arc;
use serde_json::Value;
use dnbr_common::{DnbrCommonError, debug, info, kv_store::{open_kv_store,Item,KvStore,KvStoreConfig}};

use crate::{errors::{invalid_record,DnbrJobError,Result}, job::{Job,JobId}};

pub const ANALYSES_ATTR: &'static str = "analyses";
pub const ANALYSIS_COUNT_ATTR: &'static str = "analysis_count";

/// upper bound for the serialized size of a job record (the DynamoDB item limit)
pub const MAX_RECORD_SIZE: usize = 400 * 1024;

/// the sole access point for job records. Cloning is cheap and shares the underlying store
#[derive(Clone)]
pub struct JobService {
    store: Arc<dyn KvStore>
}

impl JobService {
    pub fn new (store: Arc<dyn KvStore>)->Self {
        JobService { store }
    }

    pub async fn from_config (config: &KvStoreConfig)->Result<Self> {
        let store = open_kv_store(config).await?;
        Ok( JobService::new(store) )
    }

    /// write the whole job, replacing any previous record with the same id
    pub async fn save (&self, job: &Job)->Result<()> {
        let item = job_to_item(job)?;
        check_record_size( job.id(), &item)?;
        self.store.put_item( &job.id().to_string(), item).await?;
        info!("saved job {} ({} analyses) to {}", job.id(), job.len(), self.store.location());
        Ok(())
    }

    pub async fn get (&self, job_id: JobId)->Result<Job> {
        let key = job_id.to_string();
        match self.store.get_item( &key).await? {
            Some(item) => {
                let job = item_to_job(item)?;
                if job.id() != job_id {
                    return Err( invalid_record!("record {} holds job {}", key, job.id()))
                }
                debug!("loaded job {} from {}", job_id, self.store.location());
                Ok(job)
            }
            None => Err( DnbrJobError::NotFoundError(key))
        }
    }
}

/// the stored record is the serialized job with its analyses as JSON text, plus the analysis count
pub fn job_to_item (job: &Job)->Result<Item> {
    match serde_json::to_value(job)? {
        Value::Object(mut item) => {
            let analyses = serde_json::to_string( job.analyses())?;
            item.insert( ANALYSES_ATTR.to_string(), Value::String(analyses));
            item.insert( ANALYSIS_COUNT_ATTR.to_string(), Value::from( job.len()));
            Ok(item)
        }
        _ => Err( invalid_record!("job {} does not serialize to an object", job.id()))
    }
}

pub fn item_to_job (mut item: Item)->Result<Job> {
    let analyses = match item.remove( ANALYSES_ATTR) {
        Some(Value::String(s)) => serde_json::from_str::<Value>(&s).map_err(|e| invalid_record!("analyses: {}", e))?,
        Some(other) => return Err( invalid_record!("analyses not stored as JSON text: {}", other)),
        None => return Err( invalid_record!("no analyses"))
    };
    item.insert( ANALYSES_ATTR.to_string(), analyses);

    let job: Job = serde_json::from_value( Value::Object(item)).map_err(|e| invalid_record!("{}", e))?;
    job.validate()?;
    Ok(job)
}

fn check_record_size (job_id: JobId, item: &Item)->Result<()> {
    let size = serde_json::to_vec(item)?.len();
    if size > MAX_RECORD_SIZE {
        Err( DnbrJobError::StorageError( DnbrCommonError::StoreError(
            format!("record of job {} has {} bytes, exceeding the limit of {} bytes", job_id, size, MAX_RECORD_SIZE))))
    } else {
        Ok(())
    }
}
