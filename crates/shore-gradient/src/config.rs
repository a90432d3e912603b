//! Tuning configuration for gradient processing.

use serde::{Deserialize, Serialize};

/// The three spatial tuning constants of the pipeline.
///
/// All three trade correctness against performance and are exposed rather
/// than hard-coded. One cell size is threaded through index construction and
/// every cell lookup; there is deliberately no second default anywhere.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GradientConfig {
    /// Grid cell edge length in degrees for the transect index
    /// (0.05 is roughly 5.5 km at mid latitudes).
    pub cell_size: f64,

    /// Buffer in degrees applied to the bounding-box overlap fast-reject
    /// (0.001 is roughly 100 m).
    pub bbox_buffer: f64,

    /// Maximum perpendicular distance in degrees between a reported
    /// intersection point and the shoreline polyline for the intersection to
    /// be accepted.
    pub snap_tolerance: f64,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            cell_size: 0.05,
            bbox_buffer: 0.001,
            snap_tolerance: 0.001,
        }
    }
}

impl GradientConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("SHORE_CELL_SIZE") {
            if let Ok(size) = val.parse() {
                config.cell_size = size;
            }
        }

        if let Ok(val) = std::env::var("SHORE_BBOX_BUFFER") {
            if let Ok(buffer) = val.parse() {
                config.bbox_buffer = buffer;
            }
        }

        if let Ok(val) = std::env::var("SHORE_SNAP_TOLERANCE") {
            if let Ok(tolerance) = val.parse() {
                config.snap_tolerance = tolerance;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.cell_size > 0.0) {
            return Err("cell_size must be > 0".to_string());
        }

        if self.bbox_buffer < 0.0 {
            return Err("bbox_buffer must be >= 0".to_string());
        }

        if !(self.snap_tolerance > 0.0) {
            return Err("snap_tolerance must be > 0".to_string());
        }

        Ok(())
    }
}
