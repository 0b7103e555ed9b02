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

//! generators turn input features into analyses. The `dummy` generator completes immediately with a
//! pre-selected placeholder raster, the `gee` generator only records a remote task and leaves the analysis
//! PENDING (completion is detected out of process)

use std::{fmt, str::FromStr};
use serde::{Serialize,Deserialize};
use geojson::{Feature,FeatureCollection};
use ulid::Ulid;
use dnbr_common::{debug, info};

use crate::{
    analysis::{Analysis,AnalysisStatus},
    aoi::feature_bounds,
    errors::{invalid_input,DnbrJobError,Result},
    fire_metadata::{FireDataProvider,FireMetadata},
    job::Job
};

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
#[serde(rename_all="lowercase")]
pub enum GeneratorType {
    Dummy,
    Gee,
}

impl FromStr for GeneratorType {
    type Err = DnbrJobError;

    fn from_str (s: &str)->Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dummy" => Ok(GeneratorType::Dummy),
            "gee" => Ok(GeneratorType::Gee),
            _ => Err( DnbrJobError::UnsupportedGeneratorTypeError(s.to_string()))
        }
    }
}

impl fmt::Display for GeneratorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorType::Dummy => write!(f, "dummy"),
            GeneratorType::Gee => write!(f, "gee"),
        }
    }
}

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub provider: FireDataProvider,

    /// the placeholder raster all dummy analyses refer to
    #[serde(default="default_dummy_raster")]
    pub dummy_raster: String,
}

fn default_dummy_raster()->String { "data/dummy_data/raw_dnbr.tif".to_string() }

impl Default for GeneratorConfig {
    fn default()->Self {
        GeneratorConfig { provider: FireDataProvider::default(), dummy_raster: default_dummy_raster() }
    }
}

pub trait Generator: Send + Sync {
    fn generator_type (&self)->GeneratorType;

    /// create a new analysis for the given feature. Fails if the feature has no usable geometry
    fn generate (&self, feature: &Feature)->Result<Analysis>;
}

/// the common part of all generators: metadata extraction and bounds computation
fn new_analysis (generator_type: GeneratorType, provider: FireDataProvider, feature: &Feature)->Result<Analysis> {
    let bbox = feature_bounds(feature)?;
    let fire_metadata = FireMetadata::from_properties( provider, feature.properties.as_ref());
    Ok( Analysis::new( generator_type, fire_metadata, bbox, feature.clone()) )
}

/// synchronous generator that does not compute anything
pub struct DummyGenerator {
    provider: FireDataProvider,
    raster_ref: String,
}

impl DummyGenerator {
    pub fn new (provider: FireDataProvider, raster_ref: impl ToString)->Self {
        DummyGenerator { provider, raster_ref: raster_ref.to_string() }
    }
}

impl Generator for DummyGenerator {
    fn generator_type (&self)->GeneratorType { GeneratorType::Dummy }

    fn generate (&self, feature: &Feature)->Result<Analysis> {
        let mut analysis = new_analysis( GeneratorType::Dummy, self.provider, feature)?;
        analysis.raster_ref = Some( self.raster_ref.clone());
        analysis.complete()?;
        Ok(analysis)
    }
}

/// generator for remote (Google Earth Engine) processing. Submission is not implemented yet, we only
/// assign a task id
pub struct GeeGenerator {
    provider: FireDataProvider,
}

impl GeeGenerator {
    pub fn new (provider: FireDataProvider)->Self {
        GeeGenerator { provider }
    }
}

impl Generator for GeeGenerator {
    fn generator_type (&self)->GeneratorType { GeneratorType::Gee }

    fn generate (&self, feature: &Feature)->Result<Analysis> {
        let mut analysis = new_analysis( GeneratorType::Gee, self.provider, feature)?;
        let task_id = Ulid::new().to_string();
        debug!("submitted remote task {} for AOI {}", task_id, analysis.aoi_id());
        analysis.remote_task_id = Some(task_id);
        Ok(analysis)
    }
}

pub fn create_generator (generator_type: GeneratorType, config: &GeneratorConfig)->Box<dyn Generator> {
    match generator_type {
        GeneratorType::Dummy => Box::new( DummyGenerator::new( config.provider, &config.dummy_raster)),
        GeneratorType::Gee => Box::new( GeeGenerator::new( config.provider)),
    }
}

/// run the generator over all features (in order). This either returns a job with one analysis per
/// feature or fails without producing anything
pub fn create_job (generator: &dyn Generator, features: &FeatureCollection)->Result<Job> {
    if features.features.is_empty() {
        return Err( invalid_input!("empty feature collection"))
    }

    let analyses = features.features.iter().enumerate()
        .map(|(i,feature)| generator.generate(feature).map_err(|e| match e {
            DnbrJobError::InvalidInputError(msg) => invalid_input!("feature {}: {}", i, msg),
            e => e
        }))
        .collect::<Result<Vec<Analysis>>>()?;

    let job = Job::new( generator.generator_type(), analyses)?;
    info!("created {} job {} with {} analyses ({} completed, {} pending)", job.generator_type(), job.id(), job.len(),
          job.count_status(AnalysisStatus::Completed), job.count_status(AnalysisStatus::Pending));
    Ok(job)
}

/// parse the generator type and create a job from the given features
pub fn execute_job (generator_type: &str, config: &GeneratorConfig, features: &FeatureCollection)->Result<Job> {
    let generator = create_generator( generator_type.parse()?, config);
    create_job( generator.as_ref(), features)
}
