use crate::math::{Point, Real};

/// A solid ball: a sphere in 3D, a disk in 2D.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball<N: Real> {
    /// The center of the ball.
    pub center: Point<N>,
    /// The radius of the ball.
    pub radius: N,
}

impl<N: Real> Ball<N> {
    /// Creates a new ball with the given center and radius.
    ///
    /// The radius must be non-negative.
    #[inline]
    pub fn new(center: Point<N>, radius: N) -> Ball<N> {
        debug_assert!(
            radius >= N::zero(),
            "The radius of a ball must be non-negative."
        );
        Ball { center, radius }
    }

    /// Does this ball contain `point`? Points on the boundary are contained.
    #[inline]
    pub fn contains_point(&self, point: &Point<N>) -> bool {
        na::distance_squared(&self.center, point) <= self.radius * self.radius
    }
}
