//! Shapes supported by the intersection and classification queries.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::segment::{Segment, SegmentPointLocation};
#[cfg(feature = "dim3")]
pub use self::triangle::Triangle;

mod ball;
mod capsule;
mod segment;
#[cfg(feature = "dim3")]
mod triangle;
