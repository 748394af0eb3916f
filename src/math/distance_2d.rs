use crate::geometry::{Beam, Line, Segment, Vector};

use super::algebra::scalar_multiplication;
use super::Scalar;

/// Euclidean distance from a shape to a point.
pub trait Distance {
    /// Returns the minimum distance from `self` to `v`.
    fn dist(&self, v: Vector) -> Scalar;
}

/// Returns the minimum distance from `shape` to `v`.
#[must_use]
pub fn dist<S: Distance>(shape: &S, v: Vector) -> Scalar {
    shape.dist(v)
}

impl Distance for Vector {
    fn dist(&self, v: Vector) -> Scalar {
        (v - *self).length()
    }
}

impl Distance for Line {
    fn dist(&self, v: Vector) -> Scalar {
        self.eval(v).abs() / self.normal().length()
    }
}

impl Distance for Beam {
    /// Distance to the supporting line when `v` projects onto the beam,
    /// otherwise distance to the origin. NaN for a beam with
    /// `origin == through`.
    fn dist(&self, v: Vector) -> Scalar {
        if scalar_multiplication(self.direction(), v - self.origin) >= 0.0 {
            self.line().dist(v)
        } else {
            self.origin.dist(v)
        }
    }
}

impl Distance for Segment {
    /// Distance to the supporting line when `v` projects inside the segment,
    /// otherwise distance to the nearer endpoint. A degenerate segment is
    /// treated as its point `a`.
    fn dist(&self, v: Vector) -> Scalar {
        if self.is_degenerate() {
            return self.a.dist(v);
        }
        let ahead_of_a = scalar_multiplication(self.b - self.a, v - self.a) >= 0.0;
        let ahead_of_b = scalar_multiplication(self.a - self.b, v - self.b) >= 0.0;
        if ahead_of_a && ahead_of_b {
            self.line().dist(v)
        } else {
            self.a.dist(v).min(self.b.dist(v))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    // ── point ──

    #[test]
    fn point_dist() {
        let d = dist(&Vector::new(1.0, 1.0), Vector::new(4.0, 5.0));
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn point_dist_to_itself() {
        let p = Vector::new(-3.5, 2.25);
        assert!(dist(&p, p).abs() < TOL);
    }

    // ── line ──

    #[test]
    fn line_dist_unit_offset() {
        let line = Line::through(Vector::new(0.0, 0.0), Vector::new(1.0, 0.0));
        let d = dist(&line, Vector::new(1.0, 1.0));
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn line_dist_ignores_coefficient_scale() {
        let point = Vector::new(3.0, 4.0);
        let d1 = dist(&Line::new(1.0, 1.0, -1.0), point);
        let d2 = dist(&Line::new(10.0, 10.0, -10.0), point);
        assert!((d1 - 6.0 / 2.0_f64.sqrt()).abs() < TOL, "d1={d1}");
        assert!((d1 - d2).abs() < TOL, "d1={d1} d2={d2}");
    }

    #[test]
    fn line_dist_on_line() {
        let line = Line::through(Vector::new(-1.0, -1.0), Vector::new(2.0, 5.0));
        assert!(dist(&line, Vector::new(0.5, 2.0)).abs() < TOL);
    }

    // ── beam ──

    #[test]
    fn beam_dist_ahead_of_origin() {
        let beam = Beam::new(Vector::new(0.0, 0.0), Vector::new(1.0, 0.0));
        let d = dist(&beam, Vector::new(10.0, -2.0));
        assert!((d - 2.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn beam_dist_behind_origin() {
        let beam = Beam::new(Vector::new(0.0, 0.0), Vector::new(1.0, 0.0));
        let d = dist(&beam, Vector::new(-3.0, 4.0));
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn beam_dist_beside_origin() {
        // dot product exactly zero counts as ahead
        let beam = Beam::new(Vector::new(0.0, 0.0), Vector::new(1.0, 0.0));
        let d = dist(&beam, Vector::new(0.0, 3.0));
        assert!((d - 3.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn beam_dist_at_origin() {
        let beam = Beam::new(Vector::new(2.0, 2.0), Vector::new(3.0, 5.0));
        assert!(dist(&beam, Vector::new(2.0, 2.0)).abs() < TOL);
    }

    // ── segment ──

    #[test]
    fn segment_dist_perpendicular_projection() {
        let s = Segment::new(Vector::new(0.0, 0.0), Vector::new(2.0, 0.0));
        let d = dist(&s, Vector::new(1.0, 1.0));
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_endpoint_closest() {
        let s = Segment::new(Vector::new(0.0, 0.0), Vector::new(2.0, 0.0));
        let d = dist(&s, Vector::new(-1.0, 0.0));
        assert!((d - 1.0).abs() < TOL, "d={d}");
        let d = dist(&s, Vector::new(5.0, 4.0));
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_on_segment() {
        let s = Segment::new(Vector::new(0.0, 0.0), Vector::new(2.0, 0.0));
        assert!(dist(&s, Vector::new(1.0, 0.0)).abs() < TOL);
        assert!(dist(&s, s.midpoint()).abs() < TOL);
    }

    #[test]
    fn segment_dist_degenerate() {
        let s = Segment::new(Vector::new(0.0, 0.0), Vector::new(0.0, 0.0));
        let d = dist(&s, Vector::new(3.0, 4.0));
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }
}
