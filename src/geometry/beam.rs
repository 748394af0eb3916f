use super::{Line, Vector};

/// A ray starting at `origin` and extending through `through` to infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beam {
    pub origin: Vector,
    pub through: Vector,
}

impl Beam {
    /// Creates a beam from its origin and a second point on it.
    #[must_use]
    pub const fn new(origin: Vector, through: Vector) -> Self {
        Self { origin, through }
    }

    /// Direction `through - origin`, unnormalized.
    #[must_use]
    pub fn direction(self) -> Vector {
        self.through - self.origin
    }

    /// The infinite line supporting the beam.
    #[must_use]
    pub fn line(self) -> Line {
        Line::through(self.origin, self.through)
    }
}

impl Default for Beam {
    fn default() -> Self {
        Self::new(Vector::new(0.0, 0.0), Vector::new(1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_and_line() {
        let beam = Beam::new(Vector::new(1.0, 1.0), Vector::new(3.0, 2.0));
        assert_eq!(beam.direction(), Vector::new(2.0, 1.0));
        assert_eq!(beam.line(), Line::through(Vector::new(-1.0, 0.0), Vector::new(5.0, 3.0)));
    }

    #[test]
    fn default_is_diagonal() {
        let beam = Beam::default();
        assert_eq!(beam.line(), Line::default());
    }
}
