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

/*
 * we intercept logging/tracing macros here to have a central place where we can remove/replace them
 */

#[macro_export]
macro_rules! trace {
    ( $($tokens:tt)* ) => { $crate::tracing::trace!( $($tokens)* ) }
}

#[macro_export]
macro_rules! debug {
    ( $($tokens:tt)* ) => { $crate::tracing::debug!( $($tokens)* ) }
}

#[macro_export]
macro_rules! info {
    ( $($tokens:tt)* ) => { $crate::tracing::info!( $($tokens)* ) }
}

#[macro_export]
macro_rules! warn {
    ( $($tokens:tt)* ) => { $crate::tracing::warn!( $($tokens)* ) }
}

#[macro_export]
macro_rules! error {
    ( $($tokens:tt)* ) => { $crate::tracing::error!( $($tokens)* ) }
}

#[macro_export]
macro_rules! io_error {
    ( $kind:expr, $fmt:literal $(, $($arg:expr),* )? ) =>
    {
        std::io::Error::new( $kind, format!($fmt, $( $($arg),* )?))
    }
}
pub use io_error;

/// syntactic sugar to create a `DnbrCommonError::StoreError` from a format string
#[macro_export]
macro_rules! store_error {
    ( $fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::DnbrCommonError::StoreError( format!( $fmt $(, $arg)* ))
    };
}
pub use store_error;

/// define a lazy static CLI options struct with the given name, options and fields. Use like
/// ```ignore
/// define_cli! { ARGS [about="show_job - print stored job"] =
///     config: String [help="filename of config file", long, default_value="dnbr.ron"],
///     job_id: String [help="id of job to show"]
/// }
/// ```
/// Expanding crates need `clap` and `lazy_static` dependencies
#[macro_export]
macro_rules! define_cli {
    ($name:ident [ $( $sopt:ident $(= $sx:expr)? ),* ] = $( $( #[$meta:meta] )? $fname:ident : $ftype:ty [ $( $fopt:ident $(= $fx:expr)?),* ] ),* ) => {
        use clap::Parser;
        use lazy_static::lazy_static;

        #[derive(Parser,Debug)]
        #[command( $( $sopt $(=$sx)? ),* )]
        struct CliOpts {
            $(
                #[arg( $( $fopt $(=$fx)? ),* )]
                $(#[$meta])?
                $fname : $ftype,
            )*
        }
        lazy_static! { static ref $name: CliOpts = CliOpts::parse(); }
    }
}
