use super::{Line, Vector};

/// A bounded line piece between `a` and `b`.
///
/// `a == b` is a valid degenerate segment that behaves as the single point `a`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Vector,
    pub b: Vector,
}

impl Segment {
    /// Creates a segment from its endpoints.
    #[must_use]
    pub const fn new(a: Vector, b: Vector) -> Self {
        Self { a, b }
    }

    /// Returns `true` if the endpoints coincide (within `EPS`).
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.a == self.b
    }

    /// Returns `true` if either endpoint equals `v`.
    #[must_use]
    pub fn has_endpoint(self, v: Vector) -> bool {
        self.a == v || self.b == v
    }

    /// Midpoint `(a + b) / 2`.
    #[must_use]
    pub fn midpoint(self) -> Vector {
        (self.a + self.b) / 2.0
    }

    /// The infinite line supporting the segment. Ill-formed when degenerate.
    #[must_use]
    pub fn line(self) -> Line {
        Line::through(self.a, self.b)
    }
}

impl Default for Segment {
    fn default() -> Self {
        Self::new(Vector::new(0.0, 0.0), Vector::new(1.0, 1.0))
    }
}
