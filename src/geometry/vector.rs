use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use approx::AbsDiffEq;

use crate::math::{Point2, Scalar, Vector2, EPS};

/// A 2D vector. Doubles as a point: there is no separate point type.
///
/// Equality is approximate: two vectors are equal when both components
/// differ by less than [`EPS`]. The relation is not transitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector {
    pub x: Scalar,
    pub y: Scalar,
}

impl Vector {
    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    /// Euclidean norm.
    #[must_use]
    pub fn length(self) -> Scalar {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Rotates the vector 90° clockwise: `(x, y) -> (y, -x)`.
    #[must_use]
    pub fn perpendicular(self) -> Self {
        Self::new(self.y, -self.x)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl Mul<Scalar> for Vector {
    type Output = Vector;

    fn mul(self, k: Scalar) -> Vector {
        Vector::new(self.x * k, self.y * k)
    }
}

impl Div<Scalar> for Vector {
    type Output = Vector;

    fn div(self, k: Scalar) -> Vector {
        Vector::new(self.x / k, self.y / k)
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = Scalar;

    fn default_epsilon() -> Scalar {
        EPS
    }

    /// Strict comparison: a component difference of exactly `epsilon` is unequal.
    fn abs_diff_eq(&self, other: &Self, epsilon: Scalar) -> bool {
        (other.x - self.x).abs() < epsilon && (other.y - self.y).abs() < epsilon
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, EPS)
    }
}

impl From<Vector2> for Vector {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point2> for Vector {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vector> for Vector2 {
    fn from(v: Vector) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector> for Point2 {
    fn from(v: Vector) -> Self {
        Point2::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn length_of_pythagorean_triple() {
        let len = Vector::new(3.0, 4.0).length();
        assert!((len - 5.0).abs() < TOL, "len={len}");
    }

    #[test]
    fn length_of_zero_vector() {
        assert!(Vector::default().length().abs() < TOL);
    }

    #[test]
    fn perpendicular_rotates_clockwise() {
        let p = Vector::new(1.0, 0.0).perpendicular();
        assert_eq!(p, Vector::new(0.0, -1.0));
        let q = Vector::new(0.0, 1.0).perpendicular();
        assert_eq!(q, Vector::new(1.0, 0.0));
    }

    #[test]
    fn arithmetic_operators() {
        let a = Vector::new(1.0, 2.0);
        let b = Vector::new(-3.0, 0.5);
        assert_eq!(a + b, Vector::new(-2.0, 2.5));
        assert_eq!(a - b, Vector::new(4.0, 1.5));
        assert_eq!(-a, Vector::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Vector::new(2.0, 4.0));
        assert_eq!((a + b) / 2.0, Vector::new(-1.0, 1.25));
    }

    #[test]
    fn accumulation_mutates_receiver_only() {
        let step = Vector::new(0.5, -1.0);
        let mut acc = Vector::new(1.0, 1.0);
        acc += step;
        assert_eq!(acc, Vector::new(1.5, 0.0));
        acc -= step;
        acc -= step;
        assert_eq!(acc, Vector::new(0.5, 2.0));
        assert_eq!(step, Vector::new(0.5, -1.0));
    }

    #[test]
    fn equality_within_eps() {
        let a = Vector::new(1.0, 1.0);
        assert_eq!(a, Vector::new(1.0 + EPS / 2.0, 1.0 - EPS / 2.0));
        assert_ne!(a, Vector::new(1.0 + 2.0 * EPS, 1.0));
        assert_ne!(a, Vector::new(1.0, 1.0 - 2.0 * EPS));
    }

    #[test]
    fn equality_is_absolute_not_relative() {
        let big = Vector::new(1e12, 0.0);
        assert_ne!(big, Vector::new(1e12 + 1e-3, 0.0));
    }

    #[test]
    fn approx_macros_agree_with_eq() {
        let a = Vector::new(2.0, -7.0);
        let b = Vector::new(2.0 + 1e-9, -7.0);
        approx::assert_abs_diff_eq!(a, b);
        approx::assert_abs_diff_ne!(a, Vector::new(2.0, -7.1));
    }

    #[test]
    fn nalgebra_round_trip() {
        let p = Point2::new(1.5, -2.5);
        let v = Vector::from(p);
        assert_eq!(v, Vector::new(1.5, -2.5));
        let back: Vector2 = v.into();
        assert!((back.x - 1.5).abs() < TOL && (back.y + 2.5).abs() < TOL);
        let pt: Point2 = Vector::new(4.0, 5.0).into();
        assert!((pt.coords.norm() - 41.0_f64.sqrt()).abs() < TOL);
    }
}
