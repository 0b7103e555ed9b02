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

use anyhow::Result;
use serde_json::json;
use dnbr_common::{define_cli, init_env_tracing};
use dnbr_job::{DnbrConfig, DEFAULT_CONFIG, load_config, job::JobId, job_service::JobService};

define_cli! { ARGS [about="show_job - print a stored dNBR job as JSON"] =
    config: String [help="filename of config file", long, short, default_value=DEFAULT_CONFIG],
    job_id: String [help="id of job to show"]
}

#[tokio::main]
async fn main()->Result<()> {
    init_env_tracing();

    let job_id: JobId = ARGS.job_id.parse()?;
    let config: DnbrConfig = load_config( &ARGS.config)?;

    let job_service = JobService::from_config( &config.job_store).await?;
    let job = job_service.get( job_id).await?;

    let doc = json!({
        "summary": job.summary(),
        "bounds": job.bounds(),
        "job": job
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
