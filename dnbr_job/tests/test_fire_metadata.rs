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

use serde_json::json;
use geojson::JsonObject;
use dnbr_job::{fire_metadata::{FireDataProvider,FireMetadata}, generator::GeneratorConfig};

/// run with "cargo test --test test_fire_metadata -- --nocapture"

fn props (v: serde_json::Value)->JsonObject {
    v.as_object().cloned().unwrap()
}

#[test]
fn test_incident_number_is_aoi_id() {
    let p = props( json!({"INCIDENTTY": "Bushfire", "FIREDATE": "30/12/2019", "INCIDENTNU": "KI-2019/01"}));
    let md = FireMetadata::from_properties( FireDataProvider::SaFire, Some(&p));
    println!("{md:?}");

    assert_eq!( md.aoi_id, "KI_2019_01");
    assert_eq!( md.incident_type.as_deref(), Some("Bushfire"));
    assert_eq!( md.parsed_fire_date().unwrap().to_string(), "2019-12-30");
}

#[test]
fn test_numeric_incident_number() {
    let p = props( json!({"INCIDENTTY": "Bushfire", "INCIDENTNU": 4711}));
    let md = FireMetadata::from_properties( FireDataProvider::SaFire, Some(&p));
    assert_eq!( md.aoi_id, "4711");
    assert!( md.fire_date.is_none());
}

#[test]
fn test_type_and_date_fallback() {
    let p = props( json!({"INCIDENTTY": "Prescribed Burn", "FIREDATE": "04/04/2020"}));
    let md = FireMetadata::from_properties( FireDataProvider::SaFire, Some(&p));
    assert_eq!( md.aoi_id, "prescribed_burn_20200404");

    // unparseable dates only contribute their digits
    let p = props( json!({"INCIDENTTY": "Bushfire", "FIREDATE": "2020-04-04"}));
    let md = FireMetadata::from_properties( FireDataProvider::SaFire, Some(&p));
    assert_eq!( md.aoi_id, "bushfire_20200404");
    assert!( md.parsed_fire_date().is_none());

    let md = FireMetadata::from_properties( FireDataProvider::SaFire, None);
    assert_eq!( md.aoi_id, "unknown_undated");
}

#[test]
fn test_provider_names() {
    assert_eq!( "sa_fire".parse::<FireDataProvider>().unwrap(), FireDataProvider::SaFire);
    assert_eq!( FireDataProvider::SaFire.to_string(), "sa_fire");
    assert!( "nsw_fire".parse::<FireDataProvider>().is_err());
}

#[test]
fn test_provider_deserialization() {
    let config: GeneratorConfig = serde_json::from_str( r#"{ "provider": " sa_fire" }"#).unwrap();
    assert_eq!( config.provider, FireDataProvider::SaFire);
    assert_eq!( serde_json::to_value( config.provider).unwrap(), json!("sa_fire"));

    let err = serde_json::from_str::<GeneratorConfig>( r#"{ "provider": "nsw_fire" }"#).unwrap_err();
    println!("{err}");
    assert!( err.to_string().contains("unknown fire data provider: nsw_fire"));
}
