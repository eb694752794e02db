//! Classification tests: where is a first shape with respect to a second one?
//!
//! Every test replies an [`IntersectionType`](crate::query::IntersectionType), and is
//! consistent with its boolean counterpart in [`crate::query`]: the classification is
//! `Outside` if and only if the intersection test replies `false`.

pub use self::classification_aligned_box_aligned_box::{
    classify_aligned_box_aligned_box, classify_aligned_intervals,
};
pub use self::classification_ball_aligned_box::classify_ball_aligned_box;
pub use self::classification_ball_oriented_box::classify_ball_oriented_box;
pub use self::classification_capsule::{classify_ball_capsule, classify_point_capsule};
pub use self::classification_oriented_box_capsule::classify_oriented_box_capsule;
pub use self::classification_oriented_box_oriented_box::{
    classify_aligned_box_oriented_box, classify_oriented_box_oriented_box,
};

mod classification_aligned_box_aligned_box;
mod classification_ball_aligned_box;
mod classification_ball_oriented_box;
mod classification_capsule;
mod classification_oriented_box_capsule;
mod classification_oriented_box_oriented_box;
