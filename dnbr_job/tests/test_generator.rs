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

use std::collections::HashSet;
use dnbr_job::{
    DnbrJobError,
    analysis::{AnalysisId,AnalysisStatus},
    aoi::{load_feature_collection,parse_feature_collection},
    generator::{create_generator,create_job,execute_job,GeneratorConfig,GeneratorType},
    job::JobId
};

/// run with "cargo test --test test_generator -- --nocapture"

const FIRES: &str = concat!( env!("CARGO_MANIFEST_DIR"), "/tests/data/fires.geojson");

#[test]
fn test_dummy_job() {
    let fc = load_feature_collection(FIRES).unwrap();
    let job = execute_job( "dummy", &GeneratorConfig::default(), &fc).unwrap();
    println!("{}", serde_json::to_string_pretty(&job).unwrap());

    assert_eq!( job.generator_type(), GeneratorType::Dummy);
    assert_eq!( job.len(), fc.features.len());
    for a in job.analyses() {
        assert_eq!( a.status(), AnalysisStatus::Completed);
        assert_eq!( a.generator_type(), GeneratorType::Dummy);
        assert_eq!( a.raster_ref.as_deref(), Some("data/dummy_data/raw_dnbr.tif"));
        assert!( a.raster_urls().is_empty()); // not published yet
    }

    // input order is preserved
    let aoi_ids: Vec<&str> = job.analyses().iter().map(|a| a.aoi_id()).collect();
    assert_eq!( aoi_ids, vec!["20191230_KI_01", "prescribed_burn_20200404"]);
    assert!( job.summary().is_complete);
}

#[test]
fn test_gee_job_is_pending() {
    let fc = load_feature_collection(FIRES).unwrap();
    let generator = create_generator( GeneratorType::Gee, &GeneratorConfig::default());
    let job = create_job( generator.as_ref(), &fc).unwrap();

    assert_eq!( job.count_status( AnalysisStatus::Pending), 2);
    assert!( job.analyses().iter().all(|a| a.remote_task_id.is_some() && a.raster_ref.is_none()));
    assert!( !job.summary().is_complete);
}

#[test]
fn test_unsupported_generator() {
    let fc = load_feature_collection(FIRES).unwrap();
    match execute_job( "landsat", &GeneratorConfig::default(), &fc) {
        Err(DnbrJobError::UnsupportedGeneratorTypeError(s)) => assert_eq!( s, "landsat"),
        other => panic!("expected unsupported generator type, got {other:?}")
    }
    assert_eq!( " GEE ".parse::<GeneratorType>().unwrap(), GeneratorType::Gee);
}

#[test]
fn test_job_creation_is_atomic() {
    // second feature has no geometry
    let fc = parse_feature_collection( r#"{
        "type": "FeatureCollection",
        "features": [
            { "type": "Feature", "properties": {"INCIDENTNU": "A1"},
              "geometry": { "type": "Point", "coordinates": [138.6, -34.9] } },
            { "type": "Feature", "properties": {"INCIDENTNU": "A2"}, "geometry": null }
        ]
    }"#).unwrap();

    match execute_job( "dummy", &GeneratorConfig::default(), &fc) {
        Err(DnbrJobError::InvalidInputError(msg)) => println!("rejected: {msg}"),
        other => panic!("expected invalid input, got {other:?}")
    }

    let empty = parse_feature_collection( r#"{"type": "FeatureCollection", "features": []}"#).unwrap();
    assert!( matches!( execute_job( "dummy", &GeneratorConfig::default(), &empty), Err(DnbrJobError::InvalidInputError(_))));
}

#[test]
fn test_unique_ids() {
    let mut job_ids: HashSet<JobId> = HashSet::new();
    let mut analysis_ids: HashSet<AnalysisId> = HashSet::new();

    for _ in 0..10_000 {
        assert!( job_ids.insert( JobId::new()));
        assert!( analysis_ids.insert( AnalysisId::new()));
    }

    let fc = load_feature_collection(FIRES).unwrap();
    for _ in 0..100 {
        let job = execute_job( "dummy", &GeneratorConfig::default(), &fc).unwrap();
        assert!( job_ids.insert( job.id()));
        for a in job.analyses() { assert!( analysis_ids.insert( a.id())); }
    }
}
