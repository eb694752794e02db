//! Non-persistent geometric queries between bounding volumes and simple shapes.
//!
//! # Intersection tests and classifications
//! Two families of queries are provided for each supported pair of shapes:
//!
//! * `intersection_test_[shape1]_[shape2]()` replies `true` if the two shapes intersect.
//! * `classify_[shape1]_[shape2]()` replies an [`IntersectionType`] telling how the first
//!   shape is placed with respect to the second one (see the documentation of each function
//!   for the few exceptions).
//!
//! Both families agree with each other: a classification is [`IntersectionType::Outside`]
//! if and only if the matching intersection test replies `false`.
//!
//! `[shape1]` and `[shape2]` identify the types of the arguments, e.g., `ball`,
//! `aligned_box` or `oriented_box`.
//!
//! # Closest points
//! [`closest_farthest_points_oriented_box()`] computes the points of an oriented box closest to,
//! and farthest from, a given point. [`closest_points_segment_segment()`] computes the closest
//! points between two segments.
//!
//! # Separating axes
//! The [`sat`] module exposes the separating axis machinery shared by the oriented box queries.

pub use self::classification::{
    classify_aligned_box_aligned_box, classify_aligned_box_oriented_box,
    classify_aligned_intervals, classify_ball_aligned_box, classify_ball_capsule,
    classify_ball_oriented_box, classify_oriented_box_capsule, classify_oriented_box_oriented_box,
    classify_point_capsule,
};
pub use self::closest_points::{
    closest_farthest_points_oriented_box, closest_point_oriented_box,
    closest_points_segment_segment, closest_points_segment_segment_with_locations,
    distance_segment_segment, farthest_point_oriented_box, ExtremePoints,
};
#[cfg(feature = "dim3")]
pub use self::intersection_test::{
    intersection_test_coplanar_triangles, overlap_test_coplanar_triangles,
};
pub use self::intersection_test::{
    intersection_test_aligned_box_aligned_box, intersection_test_aligned_box_oriented_box,
    intersection_test_aligned_intervals, intersection_test_ball_aligned_box,
    intersection_test_ball_capsule, intersection_test_ball_oriented_box,
    intersection_test_capsule_capsule, intersection_test_oriented_box_capsule,
    intersection_test_oriented_box_oriented_box, intersection_test_point_capsule,
};
pub use self::intersection_type::IntersectionType;
pub use self::sat::classify_sat_axis;

mod classification;
mod closest_points;
mod intersection_test;
mod intersection_type;
pub mod sat;
