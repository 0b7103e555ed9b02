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

//! publishing of job artifacts to blob storage.
//!
//! For each completed analysis we upload the raster and the source AOI feature under
//! `jobs/<job-id>/<analysis-id>/` and a catalog entry under `catalog/<job-id>/<analysis-id>.json`.
//! Publishing is best effort per analysis: an analysis that fails to upload is marked FAILED and we continue
//! with the next one. The job is saved once at the end, regardless of individual failures

use std::{fmt, path::{Path,PathBuf}, sync::Arc};
use bytes::Bytes;
use serde::{Serialize,Deserialize};
use dnbr_common::{info, warn, blob_store::{open_blob_store,BlobStore}, datetime::utc_now, fs::filepath_contents};

use crate::{
    DnbrConfig,
    analysis::{Analysis,AnalysisId,AnalysisStatus},
    catalog::CatalogEntry,
    errors::{invalid_input,DnbrJobError,Result},
    job::{Job,JobId},
    job_service::JobService
};

pub const GEOJSON_CONTENT_TYPE: &'static str = "application/geo+json";
pub const JSON_CONTENT_TYPE: &'static str = "application/json";

/* #region storage layout *******************************************************************/

pub fn analysis_prefix (job_id: JobId, analysis_id: AnalysisId)->String {
    format!("jobs/{job_id}/{analysis_id}")
}

pub fn raster_key (job_id: JobId, analysis_id: AnalysisId, raster_ext: &str)->String {
    format!("{}/{}_dnbr.{}", analysis_prefix(job_id, analysis_id), analysis_id, raster_ext)
}

pub fn aoi_key (job_id: JobId, analysis_id: AnalysisId)->String {
    format!("{}/{}_aoi.geojson", analysis_prefix(job_id, analysis_id), analysis_id)
}

pub fn catalog_key (job_id: JobId, analysis_id: AnalysisId)->String {
    format!("catalog/{job_id}/{analysis_id}.json")
}

pub fn raster_content_type (raster_ext: &str)->&'static str {
    match raster_ext {
        "tif" | "tiff" => "image/tiff",
        "png" => "image/png",
        _ => "application/octet-stream"
    }
}

/* #endregion storage layout */

/* #region publish report *******************************************************************/

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(tag="outcome", rename_all="lowercase")]
pub enum PublishOutcome {
    Published { urls: Vec<String> },
    Failed { reason: String },
    /// analysis was not COMPLETED when we tried to publish
    Skipped { status: AnalysisStatus },
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct AnalysisReport {
    pub analysis_id: AnalysisId,
    pub aoi_id: String,
    #[serde(flatten)]
    pub outcome: PublishOutcome,
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct PublishReport {
    pub job_id: JobId,
    pub analyses: Vec<AnalysisReport>,
}

impl PublishReport {
    fn count (&self, pred: fn(&PublishOutcome)->bool)->usize {
        self.analyses.iter().filter(|r| pred(&r.outcome)).count()
    }

    pub fn published_count (&self)->usize { self.count(|o| matches!(o, PublishOutcome::Published{..})) }
    pub fn failed_count (&self)->usize { self.count(|o| matches!(o, PublishOutcome::Failed{..})) }
    pub fn skipped_count (&self)->usize { self.count(|o| matches!(o, PublishOutcome::Skipped{..})) }

    /// true if every analysis of the job was published
    pub fn is_success (&self)->bool {
        self.published_count() == self.analyses.len()
    }

    /// process exit status for this report: 0 if all analyses were published, 1 otherwise
    pub fn exit_status (&self)->u8 {
        if self.is_success() { 0 } else { 1 }
    }
}

impl fmt::Display for PublishReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "job {}: {} published, {} failed, {} skipped", self.job_id,
               self.published_count(), self.failed_count(), self.skipped_count())
    }
}

/* #endregion publish report */

pub struct Publisher {
    job_service: JobService,
    blob_store: Arc<dyn BlobStore>,
    artifact_dir: PathBuf,
    raster_ext: String,
}

impl Publisher {
    pub fn new (job_service: JobService, blob_store: Arc<dyn BlobStore>, artifact_dir: impl AsRef<Path>, raster_ext: impl ToString)->Self {
        Publisher {
            job_service,
            blob_store,
            artifact_dir: artifact_dir.as_ref().to_path_buf(),
            raster_ext: raster_ext.to_string()
        }
    }

    pub async fn from_config (config: &DnbrConfig)->Result<Self> {
        let job_service = JobService::from_config( &config.job_store).await?;
        let blob_store = open_blob_store( &config.blob_store).await?;
        Ok( Publisher::new( job_service, blob_store, &config.artifact_dir, &config.raster_ext) )
    }

    pub fn job_service (&self)->&JobService { &self.job_service }

    /// load, publish and re-save the job with the given id
    pub async fn publish (&self, job_id: JobId)->Result<PublishReport> {
        let mut job = self.job_service.get(job_id).await?;
        self.publish_job( &mut job).await
    }

    /// publish all completed analyses of job and persist the updated job. Only storage errors of the final
    /// save are returned as errors, per-analysis failures are recorded in the report (and the analysis status)
    pub async fn publish_job (&self, job: &mut Job)->Result<PublishReport> {
        let job_id = job.id();
        let mut reports: Vec<AnalysisReport> = Vec::with_capacity( job.len());

        for analysis in job.analyses_mut() {
            let outcome = if !analysis.is_completed() {
                warn!("skipping {} analysis {} of job {}", analysis.status(), analysis.id(), job_id);
                PublishOutcome::Skipped { status: analysis.status() }

            } else {
                match self.publish_analysis( job_id, analysis).await {
                    Ok(urls) => {
                        analysis.set_raster_urls( urls.clone())?;
                        info!("published analysis {} (AOI {}) of job {}", analysis.id(), analysis.aoi_id(), job_id);
                        PublishOutcome::Published { urls }
                    }
                    Err(e) => {
                        warn!("{}", e);
                        analysis.fail()?;
                        PublishOutcome::Failed { reason: e.to_string() }
                    }
                }
            };
            reports.push( AnalysisReport { analysis_id: analysis.id(), aoi_id: analysis.aoi_id().to_string(), outcome });
        }

        job.touch();
        self.job_service.save(job).await?;

        let report = PublishReport { job_id, analyses: reports };
        info!("{}", report);
        Ok(report)
    }

    /// upload raster, AOI and catalog entry. Returns `[raster-url, aoi-url]`
    async fn publish_analysis (&self, job_id: JobId, analysis: &Analysis)->Result<Vec<String>> {
        let analysis_id = analysis.id();

        let raster = self.raster_data(analysis).map_err(|e| publish_failure( analysis_id, e))?;
        let aoi = Bytes::from( serde_json::to_vec_pretty( &analysis.source_feature).map_err(|e| publish_failure( analysis_id, e))?);

        let raster_url = self.blob_store.put_object(
            &raster_key( job_id, analysis_id, &self.raster_ext), raster, raster_content_type(&self.raster_ext)
        ).await.map_err(|e| publish_failure( analysis_id, e))?;

        let aoi_url = self.blob_store.put_object(
            &aoi_key( job_id, analysis_id), aoi, GEOJSON_CONTENT_TYPE
        ).await.map_err(|e| publish_failure( analysis_id, e))?;

        let entry = CatalogEntry::new( job_id, analysis, &raster_url, &aoi_url, utc_now());
        let entry_data = Bytes::from( serde_json::to_vec_pretty(&entry).map_err(|e| publish_failure( analysis_id, e))?);
        self.blob_store.put_object(
            &catalog_key( job_id, analysis_id), entry_data, JSON_CONTENT_TYPE
        ).await.map_err(|e| publish_failure( analysis_id, e))?;

        Ok( vec![raster_url, aoi_url] )
    }

    fn raster_data (&self, analysis: &Analysis)->Result<Bytes> {
        let raster_ref = analysis.raster_ref.as_deref().ok_or_else(|| invalid_input!("no raster artifact"))?;

        let path = Path::new(raster_ref);
        let path = if path.is_absolute() { path.to_path_buf() } else { self.artifact_dir.join(path) };
        Ok( Bytes::from( filepath_contents(&path)?) )
    }
}

fn publish_failure (analysis_id: AnalysisId, reason: impl fmt::Display)->DnbrJobError {
    DnbrJobError::PublishFailure( analysis_id.to_string(), reason.to_string())
}
