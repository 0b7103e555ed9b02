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

//! RON config lookup and loading.
//!
//! Config files are looked up in the following order:
//! 1. the filename itself if it denotes an existing file
//! 2. `$DNBR_HOME/configs/<crate>/<filename>`
//! 3. `~/.dnbr/configs/<crate>/<filename>`
//! 4. `<workspace>/<crate>/configs/<filename>` (the defaults that are kept in the repository)

use std::{env, path::{Path,PathBuf}};
use serde::de::DeserializeOwned;

use crate::{errors::{DnbrCommonError,Result}, fs::filepath_contents_as_string};

pub const CONFIGS: &'static str = "configs";

macro_rules! path_cond {
    ( $pred:ident, $path_expr:expr, $($e:expr),* ) => {
        {
            let path: &mut PathBuf = $path_expr;
            let n0 = path.components().count();
            $( path.push($e); )*
            if path.$pred() {
                true
            } else {
                // restore path
                let mut n = path.components().count();
                while n > n0 { path.pop(); n -= 1; }
                false
            }
        }
    }
}

/// the closest ancestor of the current dir that holds a workspace Cargo.toml
pub fn get_workspace_dir()->Option<PathBuf> {
    let mut path = env::current_dir().ok()?;
    loop {
        let manifest = path.join("Cargo.toml");
        if let Ok(contents) = filepath_contents_as_string(&manifest) {
            if contents.contains("[workspace]") { return Some(path) }
        }
        if !path.pop() { return None }
    }
}

pub fn find_config_file (resource_crate: &str, filename: &str) -> Option<PathBuf> {
    let explicit = Path::new(filename);
    if explicit.is_file() {
        return Some(explicit.to_path_buf())
    }

    if let Ok(dnbr_home) = env::var("DNBR_HOME") {
        let mut path = PathBuf::from(dnbr_home);
        if path_cond!( is_file, &mut path, CONFIGS, resource_crate, filename) { return Some(path) }
    }

    if let Ok(usr_home) = env::var("HOME") {
        let mut path = PathBuf::from(usr_home);
        if path_cond!( is_file, &mut path, ".dnbr", CONFIGS, resource_crate, filename) { return Some(path) }
    }

    if let Some(mut path) = get_workspace_dir() {
        if path_cond!( is_file, &mut path, resource_crate, CONFIGS, filename) { return Some(path) }
    }

    None
}

pub fn load_config_path<C,P> (path: P) -> Result<C> where C: DeserializeOwned, P: AsRef<Path> {
    let data = filepath_contents_as_string(&path.as_ref())?;
    Ok( ron::de::from_str( data.as_str())? )
}

pub fn load_config<C> (resource_crate: &str, filename: &str) -> Result<C> where C: DeserializeOwned {
    if let Some(path) = find_config_file( resource_crate, filename) {
        load_config_path(&path)
    } else {
        Err( DnbrCommonError::ConfigNotFoundError(filename.to_string()) )
    }
}

/// this is the macro that needs to be expanded at the top of crates (lib.rs) that define configs.
/// Config users call the defined `load_config(..)` function to instantiate config structs
#[macro_export]
macro_rules! define_load_config {
    () => {
        /// load config using the dnbr_common lookup mechanism for this crate
        pub fn load_config<C> (filename: &str) -> dnbr_common::Result<C> where C: serde::de::DeserializeOwned {
            dnbr_common::config::load_config( env!("CARGO_PKG_NAME"), filename)
        }
    }
}
