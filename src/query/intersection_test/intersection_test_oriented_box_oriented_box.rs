use crate::bounding_volume::{AlignedBox, OrientedBox};
use crate::math::Real;
use crate::query::sat;
use core::ops::ControlFlow;

/// Intersection test between two oriented boxes.
///
/// This is the separating axis test on the 15 candidate axes in 3D (the 4 face normals
/// in 2D), exiting as soon as a separating axis is found. Boxes with touching faces
/// intersect.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "dim3")] {
/// use sepax3d::bounding_volume::{AlignedBox, OrientedBox};
/// use sepax3d::math::{Point, Vector};
/// use sepax3d::query::intersection_test_oriented_box_oriented_box;
///
/// let cube1 = OrientedBox::from(AlignedBox::from_half_extents(Point::origin(), Vector::repeat(1.0)));
/// let mut cube2 = cube1;
///
/// cube2.center = Point::new(0.5, 0.0, 0.0);
/// assert!(intersection_test_oriented_box_oriented_box(&cube1, &cube2));
///
/// cube2.center = Point::new(3.0, 0.0, 0.0);
/// assert!(!intersection_test_oriented_box_oriented_box(&cube1, &cube2));
/// # }
/// ```
#[inline]
pub fn intersection_test_oriented_box_oriented_box<N: Real>(
    obb1: &OrientedBox<N>,
    obb2: &OrientedBox<N>,
) -> bool {
    let flow = sat::oriented_box_oriented_box_visit_axes(obb1, obb2, |proj| {
        if proj.is_separating() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    flow.is_continue()
}

/// Intersection test between an aligned box and an oriented box.
#[inline]
pub fn intersection_test_aligned_box_oriented_box<N: Real>(
    aabb: &AlignedBox<N>,
    obb: &OrientedBox<N>,
) -> bool {
    intersection_test_oriented_box_oriented_box(&OrientedBox::from_aligned_box(aabb), obb)
}
