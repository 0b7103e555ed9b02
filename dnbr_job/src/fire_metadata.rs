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

//! provider specific fire (AOI) metadata that is extracted from input feature properties

use std::{fmt, str::FromStr};
use chrono::NaiveDate;
use serde::{Serialize,Deserialize};
use serde_json::Value;
use geojson::JsonObject;
use dnbr_common::datetime::{compact_date_string,parse_dmy_date};

use crate::errors::{invalid_input,DnbrJobError,Result};

/// the fire data providers we know how to extract metadata from. Deserialized from its name string
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize)]
#[serde(rename_all="snake_case", try_from="String")]
pub enum FireDataProvider {
    /// South Australian fire scars (INCIDENTTY, FIREDATE, INCIDENTNU properties)
    #[default]
    SaFire,
}

impl FromStr for FireDataProvider {
    type Err = DnbrJobError;

    fn from_str (s: &str)->Result<Self> {
        match s.trim() {
            "sa_fire" => Ok(FireDataProvider::SaFire),
            other => Err( invalid_input!("unknown fire data provider: {}", other))
        }
    }
}

impl TryFrom<String> for FireDataProvider {
    type Error = DnbrJobError;

    fn try_from (s: String)->Result<Self> {
        s.parse()
    }
}

impl fmt::Display for FireDataProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FireDataProvider::SaFire => write!(f, "sa_fire")
        }
    }
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct FireMetadata {
    /// identifier of the area of interest, usable in storage keys
    pub aoi_id: String,
    pub provider: FireDataProvider,

    #[serde(default, skip_serializing_if="dnbr_common::is_none")]
    pub incident_type: Option<String>,

    #[serde(default, skip_serializing_if="dnbr_common::is_none")]
    pub incident_number: Option<String>,

    /// fire date as provided (not normalized)
    #[serde(default, skip_serializing_if="dnbr_common::is_none")]
    pub fire_date: Option<String>,
}

impl FireMetadata {
    pub fn from_properties (provider: FireDataProvider, props: Option<&JsonObject>)->Self {
        match provider {
            FireDataProvider::SaFire => sa_fire_metadata(props)
        }
    }

    pub fn parsed_fire_date (&self)->Option<NaiveDate> {
        self.fire_date.as_deref().and_then(parse_dmy_date)
    }
}

fn sa_fire_metadata (props: Option<&JsonObject>)->FireMetadata {
    let incident_type = props.and_then(|p| property_string(p, "INCIDENTTY"));
    let incident_number = props.and_then(|p| property_string(p, "INCIDENTNU"));
    let fire_date = props.and_then(|p| property_string(p, "FIREDATE"));

    let aoi_id = if let Some(nu) = &incident_number {
        sanitize(nu, false)
    } else {
        let incident = sanitize( incident_type.as_deref().unwrap_or("unknown"), true);
        format!("{}_{}", incident, date_component( fire_date.as_deref()))
    };

    FireMetadata { aoi_id, provider: FireDataProvider::SaFire, incident_type, incident_number, fire_date }
}

/// non-empty string or number property value
fn property_string (props: &JsonObject, key: &str)->Option<String> {
    match props.get(key)? {
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() { None } else { Some(s.to_string()) }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None
    }
}

/// "20191230" for parseable dates, the digits of unparseable ones and "undated" otherwise
fn date_component (fire_date: Option<&str>)->String {
    match fire_date {
        Some(s) => {
            if let Some(nd) = parse_dmy_date(s) {
                compact_date_string(&nd)
            } else {
                let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
                if digits.is_empty() { "undated".to_string() } else { digits }
            }
        }
        None => "undated".to_string()
    }
}

/// replace everything that is not an ASCII alphanumeric with '_'
fn sanitize (s: &str, lowercase: bool)->String {
    s.chars().map(|c| {
        if c.is_ascii_alphanumeric() {
            if lowercase { c.to_ascii_lowercase() } else { c }
        } else { '_' }
    }).collect()
}
