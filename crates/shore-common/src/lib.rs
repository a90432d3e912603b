//! Common types and geometry utilities shared across the shoreline-gradients
//! workspace.
//!
//! All geometry here is planar: coordinates are (longitude, latitude) pairs
//! treated as a flat Euclidean plane in degree units. No reprojection, no
//! geodesic corrections.

pub mod bbox;
pub mod geometry;

pub use bbox::BoundingBox;
pub use geometry::{
    bounding_box, point_at_distance, point_segment_distance, polyline_intersection,
    polyline_length, segment_intersection, segment_length, Point,
};
