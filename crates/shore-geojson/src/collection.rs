//! FeatureCollection container and file I/O.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GeoJsonError, GeoJsonResult};
use crate::feature::Feature;

/// A GeoJSON FeatureCollection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureCollection {
    /// Type identifier (always "FeatureCollection").
    #[serde(rename = "type")]
    pub type_: String,

    /// Array of features.
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Create a new empty FeatureCollection.
    pub fn new() -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            features: Vec::new(),
        }
    }

    /// Add a feature to the collection.
    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    /// Add multiple features to the collection.
    pub fn with_features(mut self, features: Vec<Feature>) -> Self {
        self.features.extend(features);
        self
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Load a collection from a GeoJSON file.
    pub fn from_file(path: impl AsRef<Path>) -> GeoJsonResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let file = File::open(path).map_err(|e| GeoJsonError::io(&display, &e))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| GeoJsonError::parse(&display, &e))
    }

    /// Parse a collection from a GeoJSON string.
    pub fn from_json(json: &str) -> GeoJsonResult<Self> {
        serde_json::from_str(json).map_err(|e| GeoJsonError::parse("<string>", &e))
    }

    /// Write the collection to a GeoJSON file.
    pub fn to_file(&self, path: impl AsRef<Path>) -> GeoJsonResult<()> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let file = File::create(path).map_err(|e| GeoJsonError::io(&display, &e))?;
        serde_json::to_writer(BufWriter::new(file), self)
            .map_err(|e| GeoJsonError::parse(&display, &e))
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new()
    }
}
