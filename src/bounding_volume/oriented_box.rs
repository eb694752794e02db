//! Oriented Bounding Box.

use crate::bounding_volume::{AlignedBox, OrthonormalBasis};
use crate::math::{Isometry, Point, Real, Vector, BOX_VERTICES, DIM};

/// An Oriented Bounding Box (OBB).
///
/// A box with arbitrary orientation: it is the set of points `center + Σ tᵢ * basis[i]` with
/// `|tᵢ| <= half_extents[i]`.
///
/// - **center**: the center of the box.
/// - **basis**: the orthonormal axes of the box.
/// - **half_extents**: the half-width of the box along each axis of its basis. Each
///   half-extent must be non-negative. Zero is allowed and describes a flattened box
///   (a rectangle, a segment or a single point in 3D).
///
/// All the queries of this crate take boxes by reference and never mutate them.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct OrientedBox<N: Real> {
    /// The center of this box.
    pub center: Point<N>,
    /// The axes of this box.
    pub basis: OrthonormalBasis<N>,
    /// The half-extents of this box along each axis of `basis`.
    pub half_extents: Vector<N>,
}

impl<N: Real> OrientedBox<N> {
    /// Creates a new oriented box.
    ///
    /// The half-extents must be non-negative.
    #[inline]
    pub fn new(center: Point<N>, basis: OrthonormalBasis<N>, half_extents: Vector<N>) -> Self {
        debug_assert!(
            half_extents.iter().all(|e| *e >= N::zero()),
            "The half-extents of an oriented box must be non-negative."
        );
        OrientedBox {
            center,
            basis,
            half_extents,
        }
    }

    /// Creates an oriented box centered at the translation of `pos` and oriented by its
    /// rotation.
    #[inline]
    pub fn from_isometry(pos: &Isometry<N>, half_extents: Vector<N>) -> Self {
        Self::new(
            pos.translation.vector.into(),
            OrthonormalBasis::from_rotation(&pos.rotation),
            half_extents,
        )
    }

    /// The oriented box with the identity basis covering exactly `aabb`.
    #[inline]
    pub fn from_aligned_box(aabb: &AlignedBox<N>) -> Self {
        Self::new(
            aabb.center(),
            OrthonormalBasis::identity(),
            aabb.half_extents(),
        )
    }

    /// Computes an oriented box enclosing the given points.
    ///
    /// Returns `None` if `pts` is empty. See [`crate::utils::obb`].
    #[inline]
    pub fn from_points(pts: &[Point<N>]) -> Option<Self> {
        crate::utils::obb(pts)
    }

    /// The `i`-th axis of this box.
    #[inline]
    pub fn axis(&self, i: usize) -> &Vector<N> {
        self.basis.axis(i)
    }

    /// The world-space position of the point which coordinates in the frame of this box
    /// are `local`.
    #[inline]
    pub fn local_to_world(&self, local: &Vector<N>) -> Point<N> {
        self.center + self.basis.to_matrix() * local
    }

    /// Computes the vertices of this box.
    ///
    /// The `i`-th bit of the index of a vertex is set iff. its `i`-th local coordinate is
    /// negative.
    pub fn vertices(&self) -> [Point<N>; BOX_VERTICES] {
        core::array::from_fn(|id| {
            let mut local = self.half_extents;
            for i in 0..DIM {
                if id & (1 << i) != 0 {
                    local[i] = -local[i];
                }
            }
            self.local_to_world(&local)
        })
    }
}

impl<N: Real> From<AlignedBox<N>> for OrientedBox<N> {
    fn from(aabb: AlignedBox<N>) -> Self {
        Self::from_aligned_box(&aabb)
    }
}
