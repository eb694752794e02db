use crate::math::{ComplexField, Point, Real};
use crate::query::IntersectionType;
use crate::shape::{Ball, Capsule};

/// Classifies a ball with respect to a capsule.
///
/// Replies:
/// - `Outside` if the ball does not intersect the capsule, in the sense of
///   [`intersection_test_ball_capsule`](crate::query::intersection_test_ball_capsule): tangent
///   shapes are `Outside`,
/// - `Same` if the capsule is degenerate and equal to the ball,
/// - `Inside` if the ball is contained in the capsule,
/// - `Enclosing` if the capsule is contained in the ball,
/// - `Spanning` otherwise.
pub fn classify_ball_capsule<N: Real>(ball: &Ball<N>, capsule: &Capsule<N>) -> IntersectionType {
    let dist2 = capsule.segment.distance_squared_to_point(&ball.center);
    let radius = ball.radius + capsule.radius;

    if !(dist2 < radius * radius) {
        return IntersectionType::Outside;
    }

    // The capsule is the union of balls centered on its medial segment, the farthest ones
    // being centered at its endpoints.
    let inside = ComplexField::sqrt(dist2) + ball.radius <= capsule.radius;
    let farthest_endpoint = na::distance(&ball.center, &capsule.segment.a)
        .max(na::distance(&ball.center, &capsule.segment.b));
    let enclosing = farthest_endpoint + capsule.radius <= ball.radius;

    match (inside, enclosing) {
        (true, true) => IntersectionType::Same,
        (true, false) => IntersectionType::Inside,
        (false, true) => IntersectionType::Enclosing,
        (false, false) => IntersectionType::Spanning,
    }
}

/// Classifies a point with respect to a capsule.
///
/// Replies `Inside` if the point is in the interior of the capsule, `Spanning` if it lies
/// exactly on its boundary, and `Outside` otherwise.
pub fn classify_point_capsule<N: Real>(point: &Point<N>, capsule: &Capsule<N>) -> IntersectionType {
    let dist2 = capsule.segment.distance_squared_to_point(point);
    let sq_radius = capsule.radius * capsule.radius;

    if dist2 > sq_radius {
        IntersectionType::Outside
    } else if dist2 == sq_radius {
        IntersectionType::Spanning
    } else {
        IntersectionType::Inside
    }
}
