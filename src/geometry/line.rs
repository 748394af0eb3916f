use crate::math::{Scalar, EPS};

use super::Vector;

/// An infinite line in implicit form: `a·x + b·y + c = 0`.
///
/// Coefficients are never normalized. Equality compares the lines the
/// coefficients describe, not the coefficients themselves, so
/// `Line::new(1.0, 2.0, 3.0) == Line::new(2.0, 4.0, 6.0)`.
///
/// A line with `(a, b) == (0, 0)` is ill-formed; every operation on one
/// yields IEEE garbage (NaN or infinity).
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub a: Scalar,
    pub b: Scalar,
    pub c: Scalar,
}

impl Line {
    /// Creates a line from its coefficients.
    #[must_use]
    pub const fn new(a: Scalar, b: Scalar, c: Scalar) -> Self {
        Self { a, b, c }
    }

    /// Creates the line through `p` and `q`.
    ///
    /// The normal is exactly `(q - p).perpendicular()`. The points must be
    /// distinct; coincident points produce the ill-formed line `(0, 0, 0)`.
    #[must_use]
    pub fn through(p: Vector, q: Vector) -> Self {
        let normal = (q - p).perpendicular();
        Self {
            a: normal.x,
            b: normal.y,
            c: -(normal.x * p.x + normal.y * p.y),
        }
    }

    /// Returns the (unnormalized) normal vector `(a, b)`.
    #[must_use]
    pub fn normal(self) -> Vector {
        Vector::new(self.a, self.b)
    }

    /// Signed implicit value `a·x + b·y + c` at `v`.
    ///
    /// Zero on the line; the sign tells the side.
    #[must_use]
    pub fn eval(self, v: Vector) -> Scalar {
        self.a * v.x + self.b * v.y + self.c
    }
}

impl Default for Line {
    /// The line `y = x`.
    fn default() -> Self {
        Self::new(1.0, -1.0, 0.0)
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        // Pairwise 2x2 minors of the coefficient rows; all vanish iff the rows
        // are proportional. The a/c minor separates parallel vertical lines.
        (self.a * other.b - other.a * self.b).abs() < EPS
            && (self.b * other.c - other.b * self.c).abs() < EPS
            && (self.a * other.c - other.a * self.c).abs() < EPS
    }
}
