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

use std::process::ExitCode;
use anyhow::Result;
use dnbr_common::{define_cli, init_env_tracing};
use dnbr_job::{DnbrConfig, DEFAULT_CONFIG, load_config, job::JobId, publisher::Publisher};

define_cli! { ARGS [about="publish_job - upload the artifacts of a stored dNBR job"] =
    config: String [help="filename of config file", long, short, default_value=DEFAULT_CONFIG],
    json: bool [help="print publish report as JSON", long],
    job_id: String [help="id of job to publish"]
}

/// exits with a non-zero status if any analysis of the job was not published
#[tokio::main]
async fn main()->Result<ExitCode> {
    init_env_tracing();

    let job_id: JobId = ARGS.job_id.parse()?;
    let config: DnbrConfig = load_config( &ARGS.config)?;

    let publisher = Publisher::from_config( &config).await?;
    let report = publisher.publish( job_id).await?;

    if ARGS.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    Ok( ExitCode::from( report.exit_status()) )
}
