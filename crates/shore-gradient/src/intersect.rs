//! Shoreline/transect intersection engine.

use std::sync::atomic::{AtomicUsize, Ordering};

use shore_common::geometry::{
    bounding_box, point_segment_distance, polyline_intersection, segment_length, Point,
};

use crate::config::GradientConfig;

/// Decides whether a shoreline and a candidate transect intersect and, if so,
/// at what arc-length distance along the shoreline.
///
/// Immutable after construction and safe to share across worker threads. The
/// engine counts how many pairs reach the exact geometric test (pairs
/// rejected by the buffered bounding-box check are not counted), which is how
/// the fast-reject path is asserted on in tests and reported in batch
/// summaries.
#[derive(Debug)]
pub struct IntersectionEngine {
    bbox_buffer: f64,
    snap_tolerance: f64,
    exact_tests: AtomicUsize,
}

impl IntersectionEngine {
    pub fn new(config: &GradientConfig) -> Self {
        Self {
            bbox_buffer: config.bbox_buffer,
            snap_tolerance: config.snap_tolerance,
            exact_tests: AtomicUsize::new(0),
        }
    }

    /// Number of pairs that passed the bbox fast-reject and were handed to
    /// the exact polyline intersection test.
    pub fn exact_tests(&self) -> usize {
        self.exact_tests.load(Ordering::Relaxed)
    }

    /// Arc-length distance along `shoreline` of its crossing with `transect`,
    /// or `None` when the pair does not intersect.
    ///
    /// When the pair crosses more than once only the first crossing (in
    /// shoreline path order) is reported; multi-crossing pairs collapse to a
    /// single distance by design. Degenerate geometry on either side is
    /// treated as "no intersection", never an error.
    pub fn find_intersection(&self, shoreline: &[Point], transect: &[Point]) -> Option<f64> {
        let shore_bbox = bounding_box(shoreline)?;
        let trans_bbox = bounding_box(transect)?;
        if !shore_bbox.intersects_buffered(&trans_bbox, self.bbox_buffer) {
            return None;
        }

        self.exact_tests.fetch_add(1, Ordering::Relaxed);
        let crossing = polyline_intersection(shoreline, transect)?;

        self.distance_along(shoreline, crossing)
    }

    /// Re-derive the arc-length position of `point` on the shoreline by
    /// scanning every segment for the minimum perpendicular distance. The
    /// result is only trusted when that minimum is within the snap tolerance;
    /// a numerically-reported crossing that does not actually lie on the
    /// polyline is rejected.
    fn distance_along(&self, shoreline: &[Point], point: Point) -> Option<f64> {
        let mut accumulated = 0.0;
        let mut min_dist = f64::INFINITY;
        let mut best_distance = None;

        for w in shoreline.windows(2) {
            let seg = segment_length(w[0], w[1]);
            if seg == 0.0 {
                continue;
            }

            let (dist, t) = point_segment_distance(point, w[0], w[1]);
            if dist < min_dist {
                min_dist = dist;
                best_distance = Some(accumulated + t * seg);
            }

            accumulated += seg;
        }

        if min_dist < self.snap_tolerance {
            best_distance
        } else {
            None
        }
    }
}
