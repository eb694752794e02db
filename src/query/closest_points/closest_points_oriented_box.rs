use crate::bounding_volume::OrientedBox;
use crate::math::{Point, Real, DIM};

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// Selects the points computed by [`closest_farthest_points_oriented_box`].
pub struct ExtremePoints(u8);

bitflags::bitflags! {
    impl ExtremePoints: u8 {
        /// Compute the point of the box closest to the query point.
        const CLOSEST = 1;
        /// Compute the point of the box farthest from the query point.
        const FARTHEST = 1 << 1;
    }
}

/// Computes the points of an oriented box closest to, and farthest from, a given point.
///
/// Only the points selected by `request` are computed, the others are `None`.
///
/// The closest point is `point` itself if it lies inside of the box. The farthest point is
/// always a vertex of the box. If the projection of `point` on some axis of the box is
/// exactly zero, the farthest point is taken on the negative side of that axis.
pub fn closest_farthest_points_oriented_box<N: Real>(
    obb: &OrientedBox<N>,
    point: &Point<N>,
    request: ExtremePoints,
) -> (Option<Point<N>>, Option<Point<N>>) {
    let want_closest = request.contains(ExtremePoints::CLOSEST);
    let want_farthest = request.contains(ExtremePoints::FARTHEST);
    let (closest, farthest) = extreme_points(obb, point, want_closest, want_farthest);

    (
        want_closest.then_some(closest),
        want_farthest.then_some(farthest),
    )
}

/// Both the closest and the farthest points of `obb` from `point`.
#[inline]
pub(crate) fn closest_and_farthest_points_oriented_box<N: Real>(
    obb: &OrientedBox<N>,
    point: &Point<N>,
) -> (Point<N>, Point<N>) {
    extreme_points(obb, point, true, true)
}

// Points that are not requested are left at the center of the box.
#[inline]
fn extreme_points<N: Real>(
    obb: &OrientedBox<N>,
    point: &Point<N>,
    want_closest: bool,
    want_farthest: bool,
) -> (Point<N>, Point<N>) {
    let dpt = point - obb.center;
    let mut closest = obb.center;
    let mut farthest = obb.center;

    for i in 0..DIM {
        let axis = &obb.basis[i];
        let extent = obb.half_extents[i];
        let proj = dpt.dot(axis);

        if want_closest {
            closest += axis * na::clamp(proj, -extent, extent);
        }

        if want_farthest {
            let coord = if proj >= N::zero() { -extent } else { extent };
            farthest += axis * coord;
        }
    }

    (closest, farthest)
}

/// The point of `obb` closest to `point`.
#[inline]
pub fn closest_point_oriented_box<N: Real>(obb: &OrientedBox<N>, point: &Point<N>) -> Point<N> {
    extreme_points(obb, point, true, false).0
}

/// The point of `obb` farthest from `point`.
#[inline]
pub fn farthest_point_oriented_box<N: Real>(obb: &OrientedBox<N>, point: &Point<N>) -> Point<N> {
    extreme_points(obb, point, false, true).1
}
