//! Closest and farthest points computations.

pub(crate) use self::closest_points_oriented_box::closest_and_farthest_points_oriented_box;
pub use self::closest_points_oriented_box::{
    closest_farthest_points_oriented_box, closest_point_oriented_box,
    farthest_point_oriented_box, ExtremePoints,
};
pub use self::closest_points_segment_segment::{
    closest_points_segment_segment, closest_points_segment_segment_with_locations,
    distance_segment_segment,
};

mod closest_points_oriented_box;
mod closest_points_segment_segment;
