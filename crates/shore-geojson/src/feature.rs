//! GeoJSON Feature and Geometry types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use shore_common::geometry::Point;

/// GeoJSON geometry types.
///
/// Only `LineString` carries processable coordinates for this pipeline; the
/// other variants exist so mixed collections deserialize without failing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    /// A point geometry.
    Point {
        /// Coordinates as [longitude, latitude].
        coordinates: Point,
    },

    /// A line string geometry.
    LineString {
        /// Array of [longitude, latitude] coordinate pairs.
        coordinates: Vec<Point>,
    },

    /// A polygon geometry.
    Polygon {
        /// Array of linear rings (first is exterior, rest are holes).
        coordinates: Vec<Vec<Point>>,
    },

    /// Any geometry type this pipeline does not process, kept verbatim.
    #[serde(untagged)]
    Other(Value),
}

impl Geometry {
    /// Create a line string geometry.
    pub fn line_string(coordinates: Vec<Point>) -> Self {
        Geometry::LineString { coordinates }
    }
}

/// A GeoJSON feature: a geometry plus a free-form property map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    /// Type identifier (always "Feature").
    #[serde(rename = "type")]
    pub type_: String,

    /// The geometry of this feature.
    pub geometry: Geometry,

    /// Pass-through attribute mapping. A missing or null `properties` member
    /// loads as an empty map.
    #[serde(default, deserialize_with = "nullable_map")]
    pub properties: Map<String, Value>,
}

fn nullable_map<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<Map<String, Value>>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

impl Feature {
    /// Create a feature with a LineString geometry.
    pub fn line_string(coordinates: Vec<Point>) -> Self {
        Self {
            type_: "Feature".to_string(),
            geometry: Geometry::line_string(coordinates),
            properties: Map::new(),
        }
    }

    /// Set the properties.
    pub fn with_properties(mut self, properties: Map<String, Value>) -> Self {
        self.properties = properties;
        self
    }

    /// Coordinates if this feature's geometry is a LineString.
    pub fn line_coordinates(&self) -> Option<&[Point]> {
        match &self.geometry {
            Geometry::LineString { coordinates } => Some(coordinates),
            _ => None,
        }
    }

    /// Transect identifier, `"unknown"` when absent or non-string.
    pub fn transect_id(&self) -> String {
        self.properties
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string()
    }

    /// Transect trend value. `None` for a missing or null property.
    pub fn trend(&self) -> Option<f64> {
        self.properties.get("trend").and_then(Value::as_f64)
    }

    /// Transect sample count (`n_points_nonan`), defaulting to 0 when absent.
    pub fn sample_count(&self) -> i64 {
        self.properties
            .get("n_points_nonan")
            .and_then(Value::as_i64)
            .unwrap_or(0)
    }
}
