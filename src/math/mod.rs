pub mod algebra;
pub mod distance_2d;
pub mod intersect_2d;
pub mod predicates;

pub use algebra::{
    angle, angle_cos, deg_to_rad, rad_to_deg, scalar_multiplication, vector_multiplication,
};
pub use distance_2d::{dist, Distance};
pub use intersect_2d::intersect;
pub use predicates::{is_between, lies_on, on_same_side, on_same_side_eq};

/// Scalar type used for every coordinate and coefficient.
pub type Scalar = f64;

/// nalgebra 2D point type accepted at the interop boundary.
pub type Point2 = nalgebra::Point2<Scalar>;

/// nalgebra 2D vector type accepted at the interop boundary.
pub type Vector2 = nalgebra::Vector2<Scalar>;

/// Global absolute tolerance for floating-point comparisons.
pub const EPS: Scalar = 1e-8;
