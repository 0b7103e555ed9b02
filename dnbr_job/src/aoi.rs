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

//! loading of AOI feature collections and AOI geometry support

use std::path::Path;
use geo::BoundingRect;
use geojson::{Feature, FeatureCollection, GeoJson};
use dnbr_common::{BoundingBox, fs::filepath_contents_as_string};

use crate::errors::{invalid_input,Result};

/// read a GeoJSON file. A single feature is treated as a one element collection
pub fn load_feature_collection (path: impl AsRef<Path>)->Result<FeatureCollection> {
    let path = path.as_ref();
    let data = filepath_contents_as_string(&path)?;
    parse_feature_collection( &data).map_err(|e| invalid_input!("{:?}: {}", path, e))
}

pub fn parse_feature_collection (data: &str)->Result<FeatureCollection> {
    match data.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(fc) => Ok(fc),
        GeoJson::Feature(feature) => Ok( FeatureCollection { bbox: None, features: vec![feature], foreign_members: None }),
        GeoJson::Geometry(_) => Err( invalid_input!("expected feature collection, got bare geometry"))
    }
}

/// the (west,south,east,north) bounds of the feature geometry. This fails if the feature has no geometry
/// or the geometry is empty or not finite
pub fn feature_bounds (feature: &Feature)->Result<BoundingBox<f64>> {
    let geometry = feature.geometry.as_ref().ok_or_else(|| invalid_input!("feature without geometry"))?;
    let geom: geo_types::Geometry<f64> = geometry.clone().try_into()
        .map_err(|e: geojson::Error| invalid_input!("unusable geometry: {}", e))?;

    let rect = geom.bounding_rect().ok_or_else(|| invalid_input!("empty geometry"))?;
    let (min, max) = (rect.min(), rect.max());
    let bbox = BoundingBox::new( min.x, min.y, max.x, max.y);

    if bbox.to_minmax_array().iter().all(|v| v.is_finite()) {
        Ok(bbox)
    } else {
        Err( invalid_input!("non-finite geometry coordinates"))
    }
}

/// the smallest box containing all given boxes, `None` if there are none
pub fn union_bounds<'a> (boxes: impl IntoIterator<Item=&'a BoundingBox<f64>>)->Option<BoundingBox<f64>> {
    boxes.into_iter().fold( None, |acc: Option<BoundingBox<f64>>, bb| {
        Some( acc.map_or( *bb, |a| a.union(bb)))
    })
}
