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

use chrono::{DateTime, NaiveDate, Utc};

/// this should be used wherever we might have to use a sim clock instead of wall clock
#[inline]
pub fn utc_now()->DateTime<Utc> {
    Utc::now()
}

/// parse day-first dates such as "30/12/2019" (the format used by SA fire data)
pub fn parse_dmy_date (s: &str)->Option<NaiveDate> {
    NaiveDate::parse_from_str( s.trim(), "%d/%m/%Y").ok()
}

/// "20191230"
pub fn compact_date_string (nd: &NaiveDate)->String {
    nd.format("%Y%m%d").to_string()
}
