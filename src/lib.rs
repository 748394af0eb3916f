//! 2D geometry primitives with tolerant predicates.
//!
//! Every approximate comparison uses the single absolute tolerance
//! [`math::EPS`]; see [`geometry::Vector`] for the equality it induces.

pub mod error;
pub mod geometry;
pub mod math;
pub mod text;

pub use error::{ParseError, PlanimetryError, Result};
pub use geometry::{Beam, Line, Segment, Vector};
pub use math::{
    angle, angle_cos, deg_to_rad, dist, intersect, is_between, lies_on, on_same_side,
    on_same_side_eq, rad_to_deg, scalar_multiplication, vector_multiplication, Distance, Scalar,
    EPS,
};
pub use text::{ReadText, TextReader};
