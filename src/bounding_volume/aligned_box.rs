//! Axis Aligned Bounding Box.

use crate::math::{real, Point, Real, Vector, DIM};

/// An Axis-Aligned Bounding Box, defined by its minimum and maximum corners.
///
/// - **mins**: the point with the smallest coordinates on each axis.
/// - **maxs**: the point with the largest coordinates on each axis.
/// - **Invariant**: `mins[i] <= maxs[i]` for every axis `i`. A zero width along some axis is
///   legal and describes a flattened box.
///
/// It is equivalent to an [`OrientedBox`](super::OrientedBox) with the identity basis, see
/// [`OrientedBox::from_aligned_box`](super::OrientedBox::from_aligned_box).
///
/// ```
/// # #[cfg(feature = "dim3")] {
/// use sepax3d::bounding_volume::AlignedBox;
/// use sepax3d::math::{Point, Vector};
///
/// let aabb = AlignedBox::new(Point::new(-1.0, 0.0, 2.0), Point::new(1.0, 4.0, 5.0));
///
/// assert_eq!(aabb.center(), Point::new(0.0, 2.0, 3.5));
/// assert_eq!(aabb.half_extents(), Vector::new(1.0, 2.0, 1.5));
/// assert!(aabb.contains_point(&Point::new(1.0, 1.0, 3.0)));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct AlignedBox<N: Real> {
    /// The point with minimum coordinates.
    pub mins: Point<N>,
    /// The point with maximum coordinates.
    pub maxs: Point<N>,
}

impl<N: Real> AlignedBox<N> {
    /// Creates a new aligned box.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<N>, maxs: Point<N>) -> Self {
        debug_assert!(
            (0..DIM).all(|i| mins[i] <= maxs[i]),
            "The mins of an aligned box must not exceed its maxs."
        );
        AlignedBox { mins, maxs }
    }

    /// Creates a new aligned box from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<N>, half_extents: Vector<N>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The center of this aligned box.
    #[inline]
    pub fn center(&self) -> Point<N> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half-extents of this aligned box.
    #[inline]
    pub fn half_extents(&self) -> Vector<N> {
        (self.maxs - self.mins) * real::<N>(0.5)
    }

    /// The extents of this aligned box, i.e., its width along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<N> {
        self.maxs - self.mins
    }

    /// Does this aligned box contain `point`? Points on the boundary are contained.
    #[inline]
    pub fn contains_point(&self, point: &Point<N>) -> bool {
        (0..DIM).all(|i| point[i] >= self.mins[i] && point[i] <= self.maxs[i])
    }
}
