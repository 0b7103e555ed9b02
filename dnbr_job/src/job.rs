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

use std::collections::HashSet;
use chrono::{DateTime,Utc};
use serde::{Serialize,Deserialize};
use dnbr_common::{BoundingBox, datetime::utc_now};

use crate::{
    analysis::{Analysis,AnalysisId,AnalysisStatus},
    aoi::union_bounds,
    errors::{invalid_input,invalid_record,Result},
    generator::GeneratorType
};

define_ulid_id!(JobId);

/// a batch of analyses that were created by one generator from one input feature collection.
/// Jobs own their analyses and are never empty
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Job {
    job_id: JobId,
    generator_type: GeneratorType,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    analyses: Vec<Analysis>,
}

/// per status analysis counts of a job
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub struct JobSummary {
    pub analysis_count: usize,
    pub completed_count: usize,
    pub pending_count: usize,
    pub failed_count: usize,
    pub is_complete: bool,
    pub is_failed: bool,
}

impl Job {
    pub fn new (generator_type: GeneratorType, analyses: Vec<Analysis>)->Result<Self> {
        if analyses.is_empty() {
            return Err( invalid_input!("job without analyses"))
        }
        if let Some(a) = analyses.iter().find(|a| a.generator_type() != generator_type) {
            return Err( invalid_input!("{} analysis {} in {} job", a.generator_type(), a.id(), generator_type))
        }

        let now = utc_now();
        Ok( Job { job_id: JobId::new(), generator_type, created_at: now, updated_at: now, analyses } )
    }

    pub fn id (&self)->JobId { self.job_id }

    pub fn generator_type (&self)->GeneratorType { self.generator_type }

    pub fn created_at (&self)->DateTime<Utc> { self.created_at }

    pub fn updated_at (&self)->DateTime<Utc> { self.updated_at }

    pub fn analyses (&self)->&[Analysis] { &self.analyses }

    /// mutable access to the analyses. The collection itself cannot change
    pub fn analyses_mut (&mut self)->&mut [Analysis] { &mut self.analyses }

    pub fn analysis (&self, id: AnalysisId)->Option<&Analysis> {
        self.analyses.iter().find(|a| a.id() == id)
    }

    pub fn analysis_mut (&mut self, id: AnalysisId)->Option<&mut Analysis> {
        self.analyses.iter_mut().find(|a| a.id() == id)
    }

    pub fn len (&self)->usize { self.analyses.len() }

    pub fn touch (&mut self) {
        self.updated_at = utc_now();
    }

    pub fn count_status (&self, status: AnalysisStatus)->usize {
        self.analyses.iter().filter(|a| a.status() == status).count()
    }

    pub fn summary (&self)->JobSummary {
        let completed_count = self.count_status( AnalysisStatus::Completed);
        let failed_count = self.count_status( AnalysisStatus::Failed);

        JobSummary {
            analysis_count: self.analyses.len(),
            completed_count,
            pending_count: self.count_status( AnalysisStatus::Pending),
            failed_count,
            is_complete: completed_count == self.analyses.len(),
            is_failed: failed_count > 0,
        }
    }

    /// the bounds of all AOIs of this job
    pub fn bounds (&self)->Option<BoundingBox<f64>> {
        union_bounds( self.analyses.iter().map(|a| &a.bbox))
    }

    /// check the invariants of a job that was not constructed through `Job::new` (e.g. deserialized)
    pub fn validate (&self)->Result<()> {
        if self.analyses.is_empty() {
            return Err( invalid_record!("job {} has no analyses", self.job_id))
        }

        let mut ids: HashSet<AnalysisId> = HashSet::with_capacity( self.analyses.len());
        for a in &self.analyses {
            if a.generator_type() != self.generator_type {
                return Err( invalid_record!("{} analysis {} in {} job {}", a.generator_type(), a.id(), self.generator_type, self.job_id))
            }
            if !ids.insert( a.id()) {
                return Err( invalid_record!("duplicate analysis {} in job {}", a.id(), self.job_id))
            }
            a.validate()?;
        }

        if self.updated_at < self.created_at {
            return Err( invalid_record!("job {} updated before it was created", self.job_id))
        }
        Ok(())
    }
}
