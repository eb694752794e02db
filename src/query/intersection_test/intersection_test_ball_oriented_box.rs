use crate::bounding_volume::OrientedBox;
use crate::math::{default_epsilon, Real};
use crate::query::closest_point_oriented_box;
use crate::shape::Ball;

/// Intersection test between a ball and an oriented box.
///
/// The ball and the box intersect if the squared distance from the ball center to the box
/// does not exceed `radius² + ε`, where `ε` is [`default_epsilon`]: a ball touching the box
/// intersects it.
#[inline]
pub fn intersection_test_ball_oriented_box<N: Real>(ball: &Ball<N>, obb: &OrientedBox<N>) -> bool {
    let closest = closest_point_oriented_box(obb, &ball.center);
    na::distance_squared(&ball.center, &closest) <= ball.radius * ball.radius + default_epsilon()
}
