use crate::bounding_volume::AlignedBox;
use crate::math::{Point, Real, DIM};
use crate::shape::Ball;

/// The squared distance from `pt` to the aligned box, zero if it lies inside the box.
///
/// From "A Simple Method for Box-Sphere Intersection Testing", Jim Arvo, Graphics Gems 1990.
#[inline]
fn distance_squared_aligned_box<N: Real>(aabb: &AlignedBox<N>, pt: &Point<N>) -> N {
    let mut dmin = N::zero();

    for i in 0..DIM {
        let a = if pt[i] < aabb.mins[i] {
            pt[i] - aabb.mins[i]
        } else if pt[i] > aabb.maxs[i] {
            pt[i] - aabb.maxs[i]
        } else {
            continue;
        };
        dmin += a * a;
    }

    dmin
}

/// Intersection test between a ball and an aligned box.
///
/// A ball touching the box intersects it.
#[inline]
pub fn intersection_test_ball_aligned_box<N: Real>(ball: &Ball<N>, aabb: &AlignedBox<N>) -> bool {
    distance_squared_aligned_box(aabb, &ball.center) <= ball.radius * ball.radius
}
