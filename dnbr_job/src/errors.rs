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

use thiserror::Error;
use dnbr_common::DnbrCommonError;

use crate::analysis::AnalysisStatus;

pub type Result<T> = std::result::Result<T,DnbrJobError>;

#[derive(Error,Debug)]
pub enum DnbrJobError {
    #[error("invalid input {0}")]
    InvalidInputError(String),

    #[error("unsupported generator type {0}")]
    UnsupportedGeneratorTypeError(String),

    #[error("job not found {0}")]
    NotFoundError(String),

    #[error("storage error {0}")]
    StorageError( #[from] DnbrCommonError),

    #[error("publishing analysis {0} failed: {1}")]
    PublishFailure(String,String),

    #[error("invalid analysis status transition {0} -> {1}")]
    InvalidTransitionError(AnalysisStatus,AnalysisStatus),

    #[error("invalid job record {0}")]
    InvalidRecordError(String),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("serde error {0}")]
    SerdeError( #[from] serde_json::Error),

    #[error("GeoJSON error {0}")]
    GeoJsonError( #[from] geojson::Error),
}

macro_rules! invalid_input {
    ($fmt:literal $(, $arg:expr )* ) => {
        crate::errors::DnbrJobError::InvalidInputError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use invalid_input;

macro_rules! invalid_record {
    ($fmt:literal $(, $arg:expr )* ) => {
        crate::errors::DnbrJobError::InvalidRecordError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use invalid_record;
