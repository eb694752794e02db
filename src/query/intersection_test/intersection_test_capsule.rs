use crate::math::{Point, Real};
use crate::query::closest_points_segment_segment;
use crate::shape::{Ball, Capsule};

/// Intersection test between a ball and a capsule.
///
/// The ball and the capsule intersect if the distance between the ball center and the capsule
/// medial segment is strictly smaller than the sum of the radii: tangent shapes do not
/// intersect.
#[inline]
pub fn intersection_test_ball_capsule<N: Real>(ball: &Ball<N>, capsule: &Capsule<N>) -> bool {
    let dist2 = capsule.segment.distance_squared_to_point(&ball.center);
    let radius = ball.radius + capsule.radius;
    dist2 < radius * radius
}

/// Intersection test between two capsules.
///
/// Tangent capsules intersect.
#[inline]
pub fn intersection_test_capsule_capsule<N: Real>(
    capsule1: &Capsule<N>,
    capsule2: &Capsule<N>,
) -> bool {
    let (p1, p2) = closest_points_segment_segment(&capsule1.segment, &capsule2.segment);
    let radius = capsule1.radius + capsule2.radius;
    na::distance_squared(&p1, &p2) <= radius * radius
}

/// Does `capsule` contain `point`? Points on the boundary are contained.
#[inline]
pub fn intersection_test_point_capsule<N: Real>(point: &Point<N>, capsule: &Capsule<N>) -> bool {
    capsule.segment.distance_squared_to_point(point) <= capsule.radius * capsule.radius
}
