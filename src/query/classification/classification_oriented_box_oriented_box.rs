use crate::bounding_volume::{AlignedBox, OrientedBox};
use crate::math::Real;
use crate::query::{sat, IntersectionType};
use core::ops::ControlFlow;

/// Classifies an oriented box with respect to another one.
///
/// Replies:
/// - `Outside` if the boxes do not intersect (boxes with touching faces do intersect),
/// - `Inside` if `obb1` is inside of `obb2`,
/// - `Enclosing` if `obb1` encloses `obb2`,
/// - `Same` if both boxes are equal, or if their projections coincide on every axis,
/// - `Spanning` otherwise.
///
/// The candidate axes are the same as for
/// [`intersection_test_oriented_box_oriented_box`](crate::query::intersection_test_oriented_box_oriented_box).
/// The verdicts of every axis are merged with [`IntersectionType::and`], and the
/// computation stops as soon as an axis is separating.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "dim3")] {
/// use sepax3d::bounding_volume::{AlignedBox, OrientedBox};
/// use sepax3d::math::{Point, Vector};
/// use sepax3d::query::{classify_oriented_box_oriented_box, IntersectionType};
///
/// let small = OrientedBox::from(AlignedBox::from_half_extents(Point::origin(), Vector::repeat(0.1)));
/// let large = OrientedBox::from(AlignedBox::from_half_extents(Point::origin(), Vector::repeat(5.0)));
///
/// assert_eq!(classify_oriented_box_oriented_box(&small, &large), IntersectionType::Inside);
/// assert_eq!(classify_oriented_box_oriented_box(&large, &small), IntersectionType::Enclosing);
/// assert_eq!(classify_oriented_box_oriented_box(&large, &large), IntersectionType::Same);
/// # }
/// ```
pub fn classify_oriented_box_oriented_box<N: Real>(
    obb1: &OrientedBox<N>,
    obb2: &OrientedBox<N>,
) -> IntersectionType {
    // Rounding errors on rotated bases would hide equality from the axis tests.
    if obb1 == obb2 {
        return IntersectionType::Same;
    }

    let mut running = None;

    let _ = sat::oriented_box_oriented_box_visit_axes(obb1, obb2, |proj| {
        running = proj.classify(running);

        if running == Some(IntersectionType::Outside) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    running.unwrap_or(IntersectionType::Same)
}

/// Classifies an aligned box with respect to an oriented box.
#[inline]
pub fn classify_aligned_box_oriented_box<N: Real>(
    aabb: &AlignedBox<N>,
    obb: &OrientedBox<N>,
) -> IntersectionType {
    classify_oriented_box_oriented_box(&OrientedBox::from_aligned_box(aabb), obb)
}
