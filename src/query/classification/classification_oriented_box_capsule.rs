use crate::bounding_volume::OrientedBox;
use crate::math::Real;
use crate::query::intersection_test::{capsule_reaches_segment, closest_segment_oriented_box};
use crate::query::{classify_ball_oriented_box, IntersectionType};
use crate::shape::{Ball, Capsule};

/// Classifies a capsule with respect to an oriented box.
///
/// Unlike most classifications of this crate, the result describes the **capsule** (the second
/// argument) relative to the box:
/// - `Outside` if [`intersection_test_oriented_box_capsule`](crate::query::intersection_test_oriented_box_capsule)
///   replies `false`,
/// - `Enclosing` if every vertex of the box is within `capsule.radius` of the capsule medial
///   segment, i.e., the box is inside of the capsule,
/// - `Inside` if the balls at both ends of the capsule are inside of the box,
/// - `Spanning` otherwise.
pub fn classify_oriented_box_capsule<N: Real>(
    obb: &OrientedBox<N>,
    capsule: &Capsule<N>,
) -> IntersectionType {
    let closest = closest_segment_oriented_box(obb, &capsule.segment);
    if !capsule_reaches_segment(capsule, &closest) {
        return IntersectionType::Outside;
    }

    let sq_radius = capsule.radius * capsule.radius;
    let box_inside = obb
        .vertices()
        .iter()
        .all(|v| capsule.segment.distance_squared_to_point(v) <= sq_radius);

    if box_inside {
        return IntersectionType::Enclosing;
    }

    // A box is convex, and a capsule is the convex hull of its two end balls.
    let end_a = Ball::new(capsule.segment.a, capsule.radius);
    let end_b = Ball::new(capsule.segment.b, capsule.radius);

    if classify_ball_oriented_box(&end_a, obb) == IntersectionType::Inside
        && classify_ball_oriented_box(&end_b, obb) == IntersectionType::Inside
    {
        IntersectionType::Inside
    } else {
        IntersectionType::Spanning
    }
}
