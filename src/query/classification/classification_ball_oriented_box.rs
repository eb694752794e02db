use crate::bounding_volume::OrientedBox;
use crate::math::{default_epsilon, ComplexField, Real, DIM};
use crate::query::closest_points::closest_and_farthest_points_oriented_box;
use crate::query::IntersectionType;
use crate::shape::Ball;

/// Classifies a ball with respect to an oriented box.
///
/// Replies:
/// - `Enclosing` if the farthest point of the box is strictly inside of the ball,
/// - `Outside` if the closest point of the box is farther than `radius² + ε` (squared
///   distance, `ε` being [`default_epsilon`]), which is consistent with
///   [`intersection_test_ball_oriented_box`](crate::query::intersection_test_ball_oriented_box),
/// - `Inside` if the ball center is inside of the box and the ball does not cross any face,
/// - `Spanning` otherwise.
pub fn classify_ball_oriented_box<N: Real>(ball: &Ball<N>, obb: &OrientedBox<N>) -> IntersectionType {
    let (closest, farthest) = closest_and_farthest_points_oriented_box(obb, &ball.center);

    let eps = default_epsilon::<N>();
    let sq_radius = ball.radius * ball.radius;

    if na::distance_squared(&ball.center, &farthest) < sq_radius {
        return IntersectionType::Enclosing;
    }

    let dist2 = na::distance_squared(&ball.center, &closest);
    if dist2 > sq_radius + eps {
        return IntersectionType::Outside;
    }

    if dist2 <= eps {
        // The center is inside of the box.
        let local = obb.basis.to_local(&(ball.center - obb.center));
        let fits = (0..DIM).all(|i| ComplexField::abs(local[i]) + ball.radius <= obb.half_extents[i]);

        if fits {
            return IntersectionType::Inside;
        }
    }

    IntersectionType::Spanning
}
