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

//! minimal per-analysis index documents for published artifacts. These are not STAC items, just enough
//! to locate and place an artifact on a map

use chrono::{DateTime,NaiveDate,Utc};
use serde::{Serialize,Deserialize};

use crate::{
    analysis::{Analysis,AnalysisId},
    fire_metadata::FireDataProvider,
    generator::GeneratorType,
    job::JobId
};

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct CatalogAssets {
    pub raster: String,
    pub aoi: String,
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct CatalogEntry {
    pub id: AnalysisId,
    pub job_id: JobId,
    pub aoi_id: String,
    pub provider: FireDataProvider,
    pub generator_type: GeneratorType,

    /// normalized (ISO) fire date, if the provided one could be parsed
    #[serde(default, skip_serializing_if="dnbr_common::is_none")]
    pub fire_date: Option<NaiveDate>,

    /// [west,south,east,north] in degrees
    pub bbox: [f64;4],
    pub published_at: DateTime<Utc>,
    pub assets: CatalogAssets,
}

impl CatalogEntry {
    pub fn new (job_id: JobId, analysis: &Analysis, raster_url: &str, aoi_url: &str, published_at: DateTime<Utc>)->Self {
        CatalogEntry {
            id: analysis.id(),
            job_id,
            aoi_id: analysis.aoi_id().to_string(),
            provider: analysis.fire_metadata.provider,
            generator_type: analysis.generator_type(),
            fire_date: analysis.fire_metadata.parsed_fire_date(),
            bbox: analysis.bbox.to_minmax_array(),
            published_at,
            assets: CatalogAssets { raster: raster_url.to_string(), aoi: aoi_url.to_string() }
        }
    }
}
