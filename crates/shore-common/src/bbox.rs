//! Bounding box types and operations.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// An axis-aligned geographic bounding box in degree space.
///
/// Coordinates are (longitude, latitude) with x = longitude, y = latitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Min/max reduction over a polyline's points.
    ///
    /// Returns `None` for an empty polyline; callers must guard that case.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut bbox = Self::new(first[0], first[1], first[0], first[1]);
        for p in &points[1..] {
            bbox.min_x = bbox.min_x.min(p[0]);
            bbox.min_y = bbox.min_y.min(p[1]);
            bbox.max_x = bbox.max_x.max(p[0]);
            bbox.max_y = bbox.max_y.max(p[1]);
        }
        Some(bbox)
    }

    /// Width of the bounding box in coordinate units.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box in coordinate units.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Check if this bbox intersects another.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }

    /// Overlap test with a tolerance buffer applied on every edge.
    ///
    /// A pair of polylines that truly intersect can have bounding boxes whose
    /// edges only touch to within floating-point error; the buffer keeps such
    /// near-boundary pairs in the candidate set.
    pub fn intersects_buffered(&self, other: &BoundingBox, buffer: f64) -> bool {
        !(self.max_x < other.min_x - buffer
            || other.max_x < self.min_x - buffer
            || self.max_y < other.min_y - buffer
            || other.max_y < self.min_y - buffer)
    }

    /// Check if a point is contained within this bbox.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}
