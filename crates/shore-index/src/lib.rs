//! Grid-cell spatial index for candidate lookup.
//!
//! Divides the coordinate plane into fixed-size cells and registers each
//! reference polyline under every cell its bounding box overlaps. Queries
//! return a superset of the true geometric candidates (bounding boxes overlap,
//! nothing more), so results must always be refined by an exact intersection
//! test.

pub mod grid;

pub use grid::{cells_overlapping, GridCell, GridIndex};
