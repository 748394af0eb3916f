//! Products, angles and unit conversion over [`Vector`].

use std::f64::consts::PI;

use crate::geometry::Vector;

use super::Scalar;

/// Dot product `a.x·b.x + a.y·b.y`.
#[must_use]
pub fn scalar_multiplication(a: Vector, b: Vector) -> Scalar {
    a.x * b.x + a.y * b.y
}

/// 2D cross product `a.x·b.y - a.y·b.x`.
///
/// Positive when `b` is counter-clockwise from `a`, negative when clockwise,
/// zero when collinear.
#[must_use]
pub fn vector_multiplication(a: Vector, b: Vector) -> Scalar {
    a.x * b.y - a.y * b.x
}

/// Cosine of the angle between `a` and `b`.
///
/// NaN if either vector has zero length.
#[must_use]
pub fn angle_cos(a: Vector, b: Vector) -> Scalar {
    scalar_multiplication(a, b) / a.length() / b.length()
}

/// Unsigned angle between `a` and `b` in radians, in `[0, π]`.
///
/// NaN if either vector has zero length.
#[must_use]
pub fn angle(a: Vector, b: Vector) -> Scalar {
    // Rounding can push the cosine of (anti)parallel vectors just past ±1.
    angle_cos(a, b).clamp(-1.0, 1.0).acos()
}

/// Degrees to radians.
#[must_use]
pub fn deg_to_rad(x: Scalar) -> Scalar {
    x * PI / 180.0
}

/// Radians to degrees.
#[must_use]
pub fn rad_to_deg(x: Scalar) -> Scalar {
    x * 180.0 / PI
}
