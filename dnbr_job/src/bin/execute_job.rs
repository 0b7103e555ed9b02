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
use dnbr_common::{define_cli, init_env_tracing};
use dnbr_job::{DnbrConfig, DEFAULT_CONFIG, load_config, aoi::load_feature_collection, generator::{create_generator,create_job,GeneratorType}, job_service::JobService};

define_cli! { ARGS [about="execute_job - create a dNBR job from a GeoJSON feature collection and store it"] =
    config: String [help="filename of config file", long, short, default_value=DEFAULT_CONFIG],
    generator_type: String [help="generator to use {dummy,gee}"],
    input: String [help="path of GeoJSON feature collection with fire scar AOIs"]
}

/// prints the id of the new job to stdout. Everything else goes to the log (stderr)
#[tokio::main]
async fn main()->Result<()> {
    init_env_tracing();

    // check generator type and input before we touch any store
    let generator_type: GeneratorType = ARGS.generator_type.parse()?;
    let config: DnbrConfig = load_config( &ARGS.config)?;
    let features = load_feature_collection( &ARGS.input)?;

    let generator = create_generator( generator_type, &config.generator);
    let job = create_job( generator.as_ref(), &features)?;

    let job_service = JobService::from_config( &config.job_store).await?;
    job_service.save( &job).await?;

    println!("{}", job.id());
    Ok(())
}
