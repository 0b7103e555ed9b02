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
    DnbrConfig, load_config,
    analysis::AnalysisStatus,
    aoi::load_feature_collection,
    generator::{create_generator,create_job,GeneratorType},
    job_service::JobService,
    publisher::Publisher
};

/// end-to-end run of execute -> show -> publish with file system stores.
/// run with "cargo test --test test_scenario -- --nocapture"

const FIRES: &str = concat!( env!("CARGO_MANIFEST_DIR"), "/tests/data/fires.geojson");
const ARTIFACT_DIR: &str = concat!( env!("CARGO_MANIFEST_DIR"), "/..");

#[tokio::test]
async fn test_execute_and_publish() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_str().unwrap();
    let config_path = dir.path().join("dnbr_test.ron");
    std::fs::write( &config_path, format!(r#"(
        job_store: Local( dir: "{root}/jobs"),
        blob_store: Local( dir: "{root}/blobs", base_url: Some("http://localhost:9000/dnbr")),
        generator: ( provider: "sa_fire", dummy_raster: "data/dummy_data/raw_dnbr.tif"),
        artifact_dir: "{ARTIFACT_DIR}",
    )"#)).unwrap();

    let config: DnbrConfig = load_config( config_path.to_str().unwrap()).unwrap();
    assert_eq!( config.raster_ext, "tif");

    //--- execute-job dummy fires.geojson
    let features = load_feature_collection(FIRES).unwrap();
    let generator = create_generator( GeneratorType::Dummy, &config.generator);
    let job = create_job( generator.as_ref(), &features).unwrap();
    let job_service = JobService::from_config( &config.job_store).await.unwrap();
    job_service.save(&job).await.unwrap();
    let j1 = job.id();
    println!("created job {j1}");

    //--- show J1
    let stored = job_service.get(j1).await.unwrap();
    assert_eq!( stored.len(), 2);
    assert!( stored.analyses().iter().all(|a| a.status() == AnalysisStatus::Completed));

    //--- publish-job J1
    let publisher = Publisher::from_config( &config).await.unwrap();
    let report = publisher.publish(j1).await.unwrap();
    println!("{report}");
    assert!( report.is_success());

    let published = job_service.get(j1).await.unwrap();
    for a in published.analyses() {
        assert_eq!( a.raster_urls().len(), 2);
        let raster_url = &a.raster_urls()[0];
        assert!( raster_url.starts_with("http://localhost:9000/dnbr/jobs/"));
        assert!( raster_url.ends_with("_dnbr.tif"));

        let raster_path = dir.path().join( format!("blobs/jobs/{}/{}/{}_dnbr.tif", j1, a.id(), a.id()));
        assert!( raster_path.is_file());
        assert!( dir.path().join( format!("blobs/catalog/{}/{}.json", j1, a.id())).is_file());
    }
}
