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

use dnbr_job::{
    DnbrJobError,
    analysis::{Analysis,AnalysisId,AnalysisStatus},
    aoi::parse_feature_collection,
    generator::{DummyGenerator,GeeGenerator,Generator,GeneratorType},
    fire_metadata::FireDataProvider,
    job::{Job,JobId}
};

const AOI: &str = r#"{
    "type": "Feature",
    "properties": { "INCIDENTTY": "Bushfire", "FIREDATE": "30/12/2019" },
    "geometry": { "type": "Polygon", "coordinates": [[[138.0,-35.0],[138.5,-35.0],[138.5,-34.5],[138.0,-35.0]]] }
}"#;

fn pending_analysis ()->Analysis {
    let fc = parse_feature_collection(AOI).unwrap();
    GeeGenerator::new( FireDataProvider::SaFire).generate( &fc.features[0]).unwrap()
}

#[test]
fn test_forward_transitions() {
    use AnalysisStatus::*;
    assert!( Pending.can_transition_to(Completed));
    assert!( Pending.can_transition_to(Failed));
    assert!( Completed.can_transition_to(Failed));
    assert!( Completed.can_transition_to(Completed));

    assert!( !Completed.can_transition_to(Pending));
    assert!( !Failed.can_transition_to(Pending));
    assert!( !Failed.can_transition_to(Completed));
}

#[test]
fn test_status_changes() {
    let mut a = pending_analysis();
    assert_eq!( a.status(), AnalysisStatus::Pending);
    assert!( a.raster_urls().is_empty());

    // no URLs before completion
    assert!( a.set_raster_urls( vec!["https://x/y.tif".to_string()]).is_err());

    a.complete().unwrap();
    a.set_raster_urls( vec!["https://x/y.tif".to_string(), "https://x/y.geojson".to_string()]).unwrap();
    assert_eq!( a.raster_urls().len(), 2);

    // failing clears URLs and is final
    a.fail().unwrap();
    assert!( a.raster_urls().is_empty());
    match a.complete() {
        Err(DnbrJobError::InvalidTransitionError(from,to)) => {
            assert_eq!( from, AnalysisStatus::Failed);
            assert_eq!( to, AnalysisStatus::Completed);
        }
        other => panic!("expected invalid transition, got {other:?}")
    }
}

#[test]
fn test_serialized_status_names() {
    let mut a = pending_analysis();
    let v = serde_json::to_value(&a).unwrap();
    println!("{}", serde_json::to_string_pretty(&v).unwrap());

    assert_eq!( v["status"], "PENDING");
    assert_eq!( v["generator_type"], "gee");
    assert_eq!( v["analysis_id"].as_str().unwrap(), a.id().to_string());
    assert_eq!( v["raster_urls"], serde_json::json!([]));
    assert!( v["remote_task_id"].is_string());
}

#[test]
fn test_ids() {
    let id = AnalysisId::new();
    let parsed: AnalysisId = id.to_string().parse().unwrap();
    assert_eq!( id, parsed);

    assert!( "not-a-ulid".parse::<JobId>().is_err());

    // ids are time sortable
    let a = JobId::new();
    std::thread::sleep( std::time::Duration::from_millis(2));
    let b = JobId::new();
    assert!( a < b);
}

#[test]
fn test_job_invariants() {
    let a = pending_analysis();

    assert!( Job::new( GeneratorType::Gee, vec![]).is_err());
    assert!( Job::new( GeneratorType::Dummy, vec![a.clone()]).is_err());

    let mut b = pending_analysis();
    b.complete().unwrap();
    let job = Job::new( GeneratorType::Gee, vec![a, b]).unwrap();
    job.validate().unwrap();

    let summary = job.summary();
    assert_eq!( summary.analysis_count, 2);
    assert_eq!( summary.pending_count, 1);
    assert_eq!( summary.completed_count, 1);
    assert!( !summary.is_complete);
    assert!( !summary.is_failed);

    let bounds = job.bounds().unwrap();
    assert_eq!( bounds.to_minmax_array(), [138.0, -35.0, 138.5, -34.5]);
}
