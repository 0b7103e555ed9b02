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

pub type Result<T> = std::result::Result<T, DnbrCommonError>;

#[derive(Error,Debug)]
pub enum DnbrCommonError {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("config RON error {0}")]
    RonError( #[from] ron::error::SpannedError),

    #[error("serde error {0}")]
    SerdeError( #[from] serde_json::Error),

    #[error("config not found {0}")]
    ConfigNotFoundError(String),

    #[error("invalid store key {0}")]
    InvalidKeyError(String),

    #[error("invalid record {0}")]
    InvalidRecordError(String),

    #[error("store operation failed {0}")]
    StoreError(String),

    #[cfg(feature="aws")]
    #[error("AWS S3 put object error {0}")]
    AWSS3PutObjectError( #[from] aws_sdk_s3::error::SdkError<aws_sdk_s3::operation::put_object::PutObjectError>),

    #[cfg(feature="aws")]
    #[error("AWS S3 get object error {0}")]
    AWSS3GetObjectError( #[from] aws_sdk_s3::error::SdkError<aws_sdk_s3::operation::get_object::GetObjectError>),

    #[cfg(feature="aws")]
    #[error("AWS byte stream download error {0}")]
    AWSByteStreamError( #[from] aws_sdk_s3::primitives::ByteStreamError),

    #[cfg(feature="aws")]
    #[error("AWS DynamoDB put item error {0}")]
    AWSDynamoDbPutItemError( #[from] aws_sdk_dynamodb::error::SdkError<aws_sdk_dynamodb::operation::put_item::PutItemError>),

    #[cfg(feature="aws")]
    #[error("AWS DynamoDB get item error {0}")]
    AWSDynamoDbGetItemError( #[from] aws_sdk_dynamodb::error::SdkError<aws_sdk_dynamodb::operation::get_item::GetItemError>),

    #[cfg(feature="aws")]
    #[error("AWS DynamoDB describe table error {0}")]
    AWSDynamoDbDescribeTableError( #[from] aws_sdk_dynamodb::error::SdkError<aws_sdk_dynamodb::operation::describe_table::DescribeTableError>),
}

pub fn invalid_record (msg: impl ToString)->DnbrCommonError {
    DnbrCommonError::InvalidRecordError(msg.to_string())
}
