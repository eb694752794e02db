use crate::bounding_volume::AlignedBox;
use crate::math::{Real, DIM};
use crate::query::IntersectionType;
use crate::shape::Ball;

/// Classifies a ball with respect to an aligned box.
///
/// Replies:
/// - `Enclosing` if every corner of the box is strictly inside of the ball,
/// - `Outside` if the squared distance from the ball center to the box exceeds the squared
///   radius, so a ball touching the box is never `Outside`,
/// - `Inside` if the ball center lies in the box and the radius is strictly smaller than the
///   distance to each face,
/// - `Spanning` otherwise.
///
/// This is the classifying version of Arvo's algorithm, see
/// [`intersection_test_ball_aligned_box`](crate::query::intersection_test_ball_aligned_box).
pub fn classify_ball_aligned_box<N: Real>(ball: &Ball<N>, aabb: &AlignedBox<N>) -> IntersectionType {
    let center = &ball.center;
    let radius = ball.radius;

    let mut dmin = N::zero();
    let mut dmax = N::zero();
    let mut fits = true;

    for i in 0..DIM {
        let to_min = center[i] - aabb.mins[i];
        let to_max = aabb.maxs[i] - center[i];
        let sq_to_min = to_min * to_min;
        let sq_to_max = to_max * to_max;

        dmax += sq_to_min.max(sq_to_max);

        if to_min < N::zero() {
            fits = false;
            dmin += sq_to_min;
        } else if to_max < N::zero() {
            fits = false;
            dmin += sq_to_max;
        } else if !(radius < to_min && radius < to_max) {
            fits = false;
        }
    }

    let sq_radius = radius * radius;

    if sq_radius > dmax {
        IntersectionType::Enclosing
    } else if sq_radius < dmin {
        IntersectionType::Outside
    } else if fits {
        IntersectionType::Inside
    } else {
        IntersectionType::Spanning
    }
}
