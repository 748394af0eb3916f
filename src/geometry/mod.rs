mod beam;
mod line;
mod segment;
mod vector;

pub use beam::Beam;
pub use line::Line;
pub use segment::Segment;
pub use vector::Vector;
