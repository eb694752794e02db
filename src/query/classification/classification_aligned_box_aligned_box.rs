use crate::bounding_volume::AlignedBox;
use crate::math::{Real, DIM};
use crate::query::IntersectionType;

/// Classifies the interval `[l1, u1]` with respect to the interval `[l2, u2]`.
///
/// Intervals sharing a single endpoint are `Outside` of each other, equal intervals are the
/// `Same`.
#[inline]
pub fn classify_aligned_intervals<N: Real>(l1: N, u1: N, l2: N, u2: N) -> IntersectionType {
    debug_assert!(l1 <= u1 && l2 <= u2, "Malformed intervals.");

    if l1 < l2 {
        if u1 <= l2 {
            IntersectionType::Outside
        } else if u1 < u2 {
            IntersectionType::Spanning
        } else {
            IntersectionType::Enclosing
        }
    } else if l1 > l2 {
        if u2 <= l1 {
            IntersectionType::Outside
        } else if u1 <= u2 {
            IntersectionType::Inside
        } else {
            IntersectionType::Spanning
        }
    } else if u1 == u2 {
        IntersectionType::Same
    } else if u1 < u2 {
        IntersectionType::Inside
    } else {
        IntersectionType::Enclosing
    }
}

/// Classifies an aligned box with respect to another one.
///
/// Each axis is classified with [`classify_aligned_intervals`], and the results are merged
/// with [`IntersectionType::and`].
pub fn classify_aligned_box_aligned_box<N: Real>(
    aabb1: &AlignedBox<N>,
    aabb2: &AlignedBox<N>,
) -> IntersectionType {
    let mut result = IntersectionType::Same;

    for i in 0..DIM {
        let axis = classify_aligned_intervals(aabb1.mins[i], aabb1.maxs[i], aabb2.mins[i], aabb2.maxs[i]);

        if axis == IntersectionType::Outside {
            return axis;
        }

        result = result.and(axis);
    }

    result
}
