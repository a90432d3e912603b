//! Gradient assembly from a shoreline's accepted intersections.

use serde_json::{Map, Value};
use tracing::trace;

use shore_common::geometry::{point_at_distance, polyline_length, Point};
use shore_geojson::Feature;

use crate::colormap::Color;

/// One accepted shoreline/transect intersection.
#[derive(Debug, Clone)]
pub struct Intersection {
    /// Arc-length distance along the shoreline, in degrees.
    pub distance: f64,
    /// Color derived from the transect's trend.
    pub color: Color,
    /// Identifier of the contributing transect.
    pub transect_id: String,
    /// The transect's trend value, if it had one.
    pub trend: Option<f64>,
}

/// A shoreline re-sampled at its intersection positions, each coordinate
/// paired with a color.
#[derive(Debug, Clone)]
pub struct Gradient {
    /// Re-sampled coordinates in ascending arc-length order.
    pub coordinates: Vec<Point>,
    /// One color per coordinate.
    pub colors: Vec<Color>,
    /// Total arc length of the original shoreline.
    pub original_length: f64,
    /// Number of accepted intersections (including any dropped during
    /// resampling).
    pub intersection_count: usize,
    /// Contributing transect ids in ascending distance order.
    pub transect_ids: Vec<String>,
}

impl Gradient {
    /// Re-express this gradient as a GeoJSON feature, merging the original
    /// shoreline's attributes in. Gradient-specific keys win collisions.
    pub fn into_feature(self, original_properties: Map<String, Value>) -> Feature {
        let mut properties = original_properties;
        properties.insert(
            "colors".to_string(),
            Value::Array(
                self.colors
                    .iter()
                    .map(|c| Value::String(c.to_rgb_string()))
                    .collect(),
            ),
        );
        properties.insert("original_length".to_string(), self.original_length.into());
        properties.insert(
            "intersection_count".to_string(),
            (self.intersection_count as u64).into(),
        );
        properties.insert(
            "transect_ids".to_string(),
            Value::Array(self.transect_ids.into_iter().map(Value::String).collect()),
        );

        Feature::line_string(self.coordinates).with_properties(properties)
    }
}

/// Build a gradient from a shoreline and its intersections, or `None` when
/// fewer than two anchor points survive.
///
/// Intersections are sorted ascending by distance with a stable sort, so
/// equal distances keep their discovery order. Each sorted intersection is
/// re-sampled via `point_at_distance`; any whose distance exceeds the
/// shoreline's total length is dropped (the engine's snap tolerance should
/// prevent this, but it is handled rather than trusted).
pub fn build_gradient(shoreline: &[Point], mut intersections: Vec<Intersection>) -> Option<Gradient> {
    intersections.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    if intersections.len() < 2 {
        return None;
    }

    let original_length = polyline_length(shoreline);

    let mut coordinates = Vec::with_capacity(intersections.len());
    let mut colors = Vec::with_capacity(intersections.len());
    for intersection in &intersections {
        match point_at_distance(shoreline, intersection.distance) {
            Some(coord) => {
                coordinates.push(coord);
                colors.push(intersection.color);
            }
            None => {
                trace!(
                    distance = intersection.distance,
                    transect_id = %intersection.transect_id,
                    "dropping intersection beyond shoreline length"
                );
            }
        }
    }

    if coordinates.len() < 2 {
        return None;
    }

    Some(Gradient {
        coordinates,
        colors,
        original_length,
        intersection_count: intersections.len(),
        transect_ids: intersections
            .into_iter()
            .map(|i| i.transect_id)
            .collect(),
    })
}
