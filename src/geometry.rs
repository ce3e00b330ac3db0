//! Control point synthesis and cubic curve evaluation.
//!
//! Everything here is pure: no state, no allocation except for
//! [`cubic_path`] and [`flatten`] which return owned descriptions.

use vek::bezier::CubicBezier2;
use vek::vec::Vec2;

#[allow(unused_imports)]
use num_traits::real::Real;

use alloc::{vec, vec::Vec};

pub type Float = f32;
pub type Point = Vec2<Float>;
pub const P_ZERO: Point = Point::new(0.0, 0.0);

/// One step of a path description, in canvas coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathStep {
    MoveTo(Point),
    /// control 1, control 2, end
    CubicTo(Point, Point, Point),
}

pub type Path = Vec<PathStep>;

/// Synthesizes the two control points of a drag from `start` to `end`.
///
/// Both tangents are horizontal: `control1` sits right of `start` and
/// `control2` left of `end`, each offset by half the horizontal distance.
/// A vertical drag gives `d = 0` and both controls collapse onto the
/// endpoints.
pub fn derive_control_points(start: Point, end: Point) -> (Point, Point) {
    let d = (start.x - end.x).abs() / 2.0;
    let offset = Point::new(d, 0.0);
    (start + offset, end - offset)
}

/// Point at `t` (in `[0, 1]`) on the cubic curve `p0 → p3`.
pub fn evaluate_cubic_bezier(p0: Point, p1: Point, p2: Point, p3: Point, t: Float) -> Point {
    to_vek(p0, p1, p2, p3).evaluate(t)
}

/// Samples `segments + 1` evenly spaced (in `t`) points, both endpoints included.
pub fn flatten(p0: Point, p1: Point, p2: Point, p3: Point, segments: usize) -> Vec<Point> {
    let segments = segments.max(1);
    let curve = to_vek(p0, p1, p2, p3);
    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let t = (i as Float) / (segments as Float);
        points.push(curve.evaluate(t));
    }
    points
}

pub fn cubic_path(p0: Point, p1: Point, p2: Point, p3: Point) -> Path {
    vec![PathStep::MoveTo(p0), PathStep::CubicTo(p1, p2, p3)]
}

/// Geometric center of a `width` x `height` canvas.
pub fn center(width: Float, height: Float) -> Point {
    Point::new(width / 2.0, height / 2.0)
}

pub(crate) fn to_vek(p0: Point, p1: Point, p2: Point, p3: Point) -> CubicBezier2<Float> {
    CubicBezier2 {
        start: p0,
        ctrl0: p1,
        ctrl1: p2,
        end: p3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_drag_has_no_offset() {
        let start = Point::new(40.0, 10.0);
        let end = Point::new(40.0, 90.0);
        assert_eq!(derive_control_points(start, end), (start, end));
    }

    #[test]
    fn evaluation_hits_endpoints() {
        let (a, b, c, d) = (
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 20.0),
            Point::new(20.0, 20.0),
        );
        assert_eq!(evaluate_cubic_bezier(a, b, c, d, 0.0), a);
        assert_eq!(evaluate_cubic_bezier(a, b, c, d, 1.0), d);
        // symmetric S-curve passes through its middle
        assert_eq!(evaluate_cubic_bezier(a, b, c, d, 0.5), Point::new(10.0, 10.0));
    }

    #[test]
    fn flatten_sample_count() {
        let p = Point::new(1.0, 2.0);
        assert_eq!(flatten(p, p, p, p, 0).len(), 2);
        let pts = flatten(P_ZERO, P_ZERO, Point::new(8.0, 0.0), Point::new(8.0, 0.0), 4);
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0], P_ZERO);
        assert_eq!(pts[4], Point::new(8.0, 0.0));
    }
}
