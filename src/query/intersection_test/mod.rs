//! Boolean intersection tests.

pub use self::intersection_test_aligned_box_aligned_box::{
    intersection_test_aligned_box_aligned_box, intersection_test_aligned_intervals,
};
pub use self::intersection_test_ball_aligned_box::intersection_test_ball_aligned_box;
pub use self::intersection_test_ball_oriented_box::intersection_test_ball_oriented_box;
pub use self::intersection_test_capsule::{
    intersection_test_ball_capsule, intersection_test_capsule_capsule,
    intersection_test_point_capsule,
};
#[cfg(feature = "dim3")]
pub use self::intersection_test_coplanar_triangles::{
    intersection_test_coplanar_triangles, overlap_test_coplanar_triangles,
};
pub use self::intersection_test_oriented_box_capsule::intersection_test_oriented_box_capsule;
pub(crate) use self::intersection_test_oriented_box_capsule::{
    capsule_reaches_segment, closest_segment_oriented_box,
};
pub use self::intersection_test_oriented_box_oriented_box::{
    intersection_test_aligned_box_oriented_box, intersection_test_oriented_box_oriented_box,
};

mod intersection_test_aligned_box_aligned_box;
mod intersection_test_ball_aligned_box;
mod intersection_test_ball_oriented_box;
mod intersection_test_capsule;
#[cfg(feature = "dim3")]
mod intersection_test_coplanar_triangles;
mod intersection_test_oriented_box_capsule;
mod intersection_test_oriented_box_oriented_box;
