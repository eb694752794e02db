use crate::bounding_volume::AlignedBox;
use crate::math::{Real, DIM};

/// Intersection test between two intervals `[l1, u1]` and `[l2, u2]`.
///
/// Intervals sharing a single endpoint do not intersect, unless it is their lower bound:
/// intervals with the same lower bound always intersect (even if one of them is empty), as
/// [`classify_aligned_intervals`](crate::query::classify_aligned_intervals) never replies
/// `Outside` for them.
#[inline]
pub fn intersection_test_aligned_intervals<N: Real>(l1: N, u1: N, l2: N, u2: N) -> bool {
    debug_assert!(l1 <= u1 && l2 <= u2, "Malformed intervals.");

    if l1 < l2 {
        u1 > l2
    } else if l1 > l2 {
        u2 > l1
    } else {
        true
    }
}

/// Intersection test between two aligned boxes.
///
/// Boxes sharing only a face (or an edge, or a vertex) do not intersect.
#[inline]
pub fn intersection_test_aligned_box_aligned_box<N: Real>(
    aabb1: &AlignedBox<N>,
    aabb2: &AlignedBox<N>,
) -> bool {
    (0..DIM).all(|i| {
        intersection_test_aligned_intervals(aabb1.mins[i], aabb1.maxs[i], aabb2.mins[i], aabb2.maxs[i])
    })
}
