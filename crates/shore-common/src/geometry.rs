//! Pure polyline geometry: lengths, arc-length positions, projections, and
//! segment/polyline intersection.
//!
//! Every function operates in planar degree space and is total over its
//! inputs: degenerate polylines (fewer than 2 points, zero-length segments)
//! contribute zero length or yield `None` rather than failing.

use crate::bbox::BoundingBox;

/// A (longitude, latitude) coordinate pair.
pub type Point = [f64; 2];

/// Min/max reduction over a polyline's points.
///
/// `None` on empty input.
pub fn bounding_box(polyline: &[Point]) -> Option<BoundingBox> {
    BoundingBox::from_points(polyline)
}

/// Planar Euclidean distance between two points, in degree units.
pub fn segment_length(p1: Point, p2: Point) -> f64 {
    let dx = p2[0] - p1[0];
    let dy = p2[1] - p1[1];
    (dx * dx + dy * dy).sqrt()
}

/// Total arc length of a polyline: sum of consecutive segment lengths.
///
/// 0.0 for polylines with fewer than 2 points.
pub fn polyline_length(polyline: &[Point]) -> f64 {
    polyline
        .windows(2)
        .map(|w| segment_length(w[0], w[1]))
        .sum()
}

/// Find the point at `target_distance` along a polyline's path.
///
/// Walks segments accumulating length and linearly interpolates within the
/// segment where the running total reaches the target. Returns `None` when
/// the polyline has fewer than 2 points or the target exceeds the total
/// length. Zero-length segments are skipped so the interpolation never
/// divides by zero.
pub fn point_at_distance(polyline: &[Point], target_distance: f64) -> Option<Point> {
    if polyline.len() < 2 {
        return None;
    }

    let mut current = 0.0;
    for w in polyline.windows(2) {
        let seg = segment_length(w[0], w[1]);
        if seg == 0.0 {
            continue;
        }

        if current + seg >= target_distance {
            let ratio = (target_distance - current) / seg;
            return Some([
                w[0][0] + (w[1][0] - w[0][0]) * ratio,
                w[0][1] + (w[1][1] - w[0][1]) * ratio,
            ]);
        }

        current += seg;
    }

    None
}

/// Distance from a point to a segment, with the clamped projection parameter.
///
/// Projects `point` onto the segment `a`-`b` and clamps the parameter to
/// [0, 1], so the result is the closest point *on the segment*, not on the
/// infinite line. Returns `(distance, t)`. A zero-length segment projects
/// everything onto `a` with t = 0.
pub fn point_segment_distance(point: Point, a: Point, b: Point) -> (f64, f64) {
    let seg = segment_length(a, b);
    if seg == 0.0 {
        return (segment_length(point, a), 0.0);
    }

    let t = ((point[0] - a[0]) * (b[0] - a[0]) + (point[1] - a[1]) * (b[1] - a[1])) / (seg * seg);
    let t = t.clamp(0.0, 1.0);

    let closest = [a[0] + t * (b[0] - a[0]), a[1] + t * (b[1] - a[1])];
    (segment_length(point, closest), t)
}

/// Proper intersection of two line segments.
///
/// Returns the crossing point when the segments cross within both of their
/// extents (endpoints inclusive). Parallel, collinear, and degenerate pairs
/// yield `None`.
pub fn segment_intersection(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Point> {
    let r = [a2[0] - a1[0], a2[1] - a1[1]];
    let s = [b2[0] - b1[0], b2[1] - b1[1]];

    let denom = r[0] * s[1] - r[1] * s[0];
    if denom.abs() < f64::EPSILON {
        return None;
    }

    let qp = [b1[0] - a1[0], b1[1] - a1[1]];
    let t = (qp[0] * s[1] - qp[1] * s[0]) / denom;
    let u = (qp[0] * r[1] - qp[1] * r[0]) / denom;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some([a1[0] + t * r[0], a1[1] + t * r[1]])
    } else {
        None
    }
}

/// First crossing point of two piecewise-linear curves.
///
/// Scans segments of `a` in path order (and segments of `b` in order within
/// each), returning the first crossing found. When the curves cross more than
/// once only the first crossing is reported.
pub fn polyline_intersection(a: &[Point], b: &[Point]) -> Option<Point> {
    for wa in a.windows(2) {
        for wb in b.windows(2) {
            if let Some(p) = segment_intersection(wa[0], wa[1], wb[0], wb[1]) {
                return Some(p);
            }
        }
    }
    None
}
