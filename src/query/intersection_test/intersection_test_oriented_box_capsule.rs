use crate::bounding_volume::OrientedBox;
use crate::math::{default_epsilon, Real};
use crate::query::{closest_point_oriented_box, closest_points_segment_segment};
use crate::shape::{Capsule, Segment};

/// The segment joining the points of `obb` closest to each endpoint of the capsule axis.
#[inline]
pub(crate) fn closest_segment_oriented_box<N: Real>(
    obb: &OrientedBox<N>,
    segment: &Segment<N>,
) -> Segment<N> {
    Segment::new(
        closest_point_oriented_box(obb, &segment.a),
        closest_point_oriented_box(obb, &segment.b),
    )
}

/// Is `segment` within `capsule.radius` of the capsule medial segment?
///
/// Segments crossing each other yield a non-zero distance because of rounding errors, hence
/// the comparison of squared distances with a tolerance.
#[inline]
pub(crate) fn capsule_reaches_segment<N: Real>(capsule: &Capsule<N>, segment: &Segment<N>) -> bool {
    let (p1, p2) = closest_points_segment_segment(&capsule.segment, segment);
    na::distance_squared(&p1, &p2) <= capsule.radius * capsule.radius + default_epsilon()
}

/// Intersection test between an oriented box and a capsule.
///
/// The points of the box closest to each endpoint of the capsule's medial segment are
/// joined by a segment lying inside of the box. The capsule intersects the box if that
/// segment is not farther than `capsule.radius` from its medial segment.
///
/// This is conservative: a reply of `true` is always exact, but a capsule grazing an edge or
/// a vertex of the box without containing any point closest to its endpoints may be missed.
#[inline]
pub fn intersection_test_oriented_box_capsule<N: Real>(
    obb: &OrientedBox<N>,
    capsule: &Capsule<N>,
) -> bool {
    let closest = closest_segment_oriented_box(obb, &capsule.segment);
    capsule_reaches_segment(capsule, &closest)
}
