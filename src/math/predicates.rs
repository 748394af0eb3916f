//! Incidence, betweenness and side-of-line tests.
//!
//! Every test composes [`EPS`]; the inclusive/exclusive direction of each
//! comparison decides how touching configurations are classified.

use crate::geometry::{Line, Segment, Vector};

use super::algebra::{angle_cos, vector_multiplication};
use super::EPS;

/// Returns `true` if `v` lies on `segment`, endpoints included.
///
/// A degenerate segment contains only its own point. Otherwise `v` must see
/// the segment direction co-directionally from both endpoints.
#[must_use]
pub fn lies_on(segment: Segment, v: Vector) -> bool {
    if segment.has_endpoint(v) {
        return true;
    }
    if segment.is_degenerate() {
        return false;
    }
    // Neither v - a nor v - b is zero here, so both cosines are defined.
    let forward = angle_cos(segment.b - segment.a, v - segment.a);
    let backward = angle_cos(segment.a - segment.b, v - segment.b);
    (forward - 1.0).abs() < EPS && (backward - 1.0).abs() < EPS
}

/// Returns `true` if `m` lies in the angular wedge between `a` and `b`, as
/// seen from the origin.
///
/// Boundary rays count as inside (tolerance `EPS` on both cross products).
/// Only cross-product signs are compared, so `-m` is between `a` and `b`
/// whenever `m` is: the wedge and its point reflection are not told apart.
#[must_use]
pub fn is_between(a: Vector, b: Vector, m: Vector) -> bool {
    let bm = vector_multiplication(b, m);
    let ma = vector_multiplication(m, a);
    (bm >= -EPS && ma >= -EPS) || (bm <= EPS && ma <= EPS)
}

/// Returns `true` if `a` and `b` lie strictly on the same side of `line`.
///
/// A point on the line (within `EPS`) makes the answer `false`.
#[must_use]
pub fn on_same_side(line: Line, a: Vector, b: Vector) -> bool {
    let (alpha, beta) = (line.eval(a), line.eval(b));
    if alpha.abs() < EPS || beta.abs() < EPS {
        return false;
    }
    same_sign(alpha, beta)
}

/// Inclusive variant of [`on_same_side`]: a point on the line counts as
/// being on the same side as anything.
#[must_use]
pub fn on_same_side_eq(line: Line, a: Vector, b: Vector) -> bool {
    let (alpha, beta) = (line.eval(a), line.eval(b));
    if alpha.abs() < EPS || beta.abs() < EPS {
        return true;
    }
    same_sign(alpha, beta)
}

fn same_sign(alpha: f64, beta: f64) -> bool {
    (alpha < 0.0 && beta < 0.0) || (alpha > 0.0 && beta > 0.0)
}
