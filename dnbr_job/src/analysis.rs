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

use std::fmt;
use serde::{Serialize,Deserialize};
use geojson::Feature;
use dnbr_common::BoundingBox;

use crate::{
    errors::{invalid_input,invalid_record,DnbrJobError,Result},
    fire_metadata::FireMetadata,
    generator::GeneratorType
};

define_ulid_id!(AnalysisId);

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
#[serde(rename_all="UPPERCASE")]
pub enum AnalysisStatus {
    Pending,
    Completed,
    Failed,
}

impl AnalysisStatus {
    /// status only moves forward. COMPLETED analyses can still fail during publishing
    pub fn can_transition_to (self, next: AnalysisStatus)->bool {
        use AnalysisStatus::*;
        match (self, next) {
            (a, b) if a == b => true,
            (Pending, Completed) | (Pending, Failed) | (Completed, Failed) => true,
            _ => false
        }
    }
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AnalysisStatus::Pending => "PENDING",
            AnalysisStatus::Completed => "COMPLETED",
            AnalysisStatus::Failed => "FAILED",
        };
        write!(f, "{s}")
    }
}

/// one per-feature unit of work within a job.
/// Id, status and published URLs are only accessible through methods that maintain the invariants
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Analysis {
    analysis_id: AnalysisId,
    status: AnalysisStatus,
    generator_type: GeneratorType,

    #[serde(default)]
    raster_urls: Vec<String>,

    pub fire_metadata: FireMetadata,

    /// (west,south,east,north) of the source feature geometry
    pub bbox: BoundingBox<f64>,

    /// the input feature this analysis was created from
    pub source_feature: Feature,

    /// reference to the generated raster artifact, if it is available locally
    #[serde(default, skip_serializing_if="dnbr_common::is_none")]
    pub raster_ref: Option<String>,

    /// task id of a remote (asynchronous) generator
    #[serde(default, skip_serializing_if="dnbr_common::is_none")]
    pub remote_task_id: Option<String>,
}

impl Analysis {
    /// a new PENDING analysis with a fresh id
    pub fn new (generator_type: GeneratorType, fire_metadata: FireMetadata, bbox: BoundingBox<f64>, source_feature: Feature)->Self {
        Analysis {
            analysis_id: AnalysisId::new(),
            status: AnalysisStatus::Pending,
            generator_type,
            raster_urls: Vec::new(),
            fire_metadata,
            bbox,
            source_feature,
            raster_ref: None,
            remote_task_id: None,
        }
    }

    pub fn id (&self)->AnalysisId { self.analysis_id }

    pub fn status (&self)->AnalysisStatus { self.status }

    pub fn generator_type (&self)->GeneratorType { self.generator_type }

    pub fn raster_urls (&self)->&[String] { &self.raster_urls }

    pub fn aoi_id (&self)->&str { &self.fire_metadata.aoi_id }

    pub fn is_completed (&self)->bool { self.status == AnalysisStatus::Completed }

    /// move to the next status. Failing clears all published URLs
    pub fn set_status (&mut self, next: AnalysisStatus)->Result<()> {
        if !self.status.can_transition_to(next) {
            return Err( DnbrJobError::InvalidTransitionError( self.status, next))
        }

        self.status = next;
        if next != AnalysisStatus::Completed {
            self.raster_urls.clear();
        }
        Ok(())
    }

    pub fn complete (&mut self)->Result<()> { self.set_status( AnalysisStatus::Completed) }

    pub fn fail (&mut self)->Result<()> { self.set_status( AnalysisStatus::Failed) }

    /// replace the published URLs. Only completed analyses have URLs
    pub fn set_raster_urls (&mut self, urls: Vec<String>)->Result<()> {
        if self.status != AnalysisStatus::Completed {
            return Err( invalid_input!("cannot set URLs of {} analysis {}", self.status, self.analysis_id))
        }
        self.raster_urls = urls;
        Ok(())
    }

    pub fn validate (&self)->Result<()> {
        if self.status != AnalysisStatus::Completed && !self.raster_urls.is_empty() {
            return Err( invalid_record!("{} analysis {} has URLs", self.status, self.analysis_id))
        }
        if self.fire_metadata.aoi_id.is_empty() {
            return Err( invalid_record!("analysis {} has no AOI id", self.analysis_id))
        }
        Ok(())
    }
}
