//! Compilation flags dependent aliases for mathematical types.
//!
//! Every type here is generic over the scalar `N`, which must implement [`Real`].
//! The dimension is fixed by the `dim2` or `dim3` feature.

pub use na::{ComplexField, RealField};

/// The scalar types accepted by the queries of this crate.
///
/// This is automatically implemented for every `Copy` [`RealField`], i.e., `f32` and `f64`.
pub trait Real: RealField + Copy {}

impl<T: RealField + Copy> Real for T {}

#[cfg(feature = "dim3")]
mod dim {
    pub use na::{Isometry3, Matrix3, Point3, UnitQuaternion, Vector3, U3};

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The number of vertices of a box.
    pub const BOX_VERTICES: usize = 8;

    /// The dimension of the ambient space.
    pub type Dim = U3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;
}

#[cfg(feature = "dim2")]
mod dim {
    pub use na::{Isometry2, Matrix2, Point2, UnitComplex, Vector2, U2};

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The number of vertices of a box.
    pub const BOX_VERTICES: usize = 4;

    /// The dimension of the ambient space.
    pub type Dim = U2;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The matrix type.
    pub use Matrix2 as Matrix;

    /// The transformation matrix type.
    pub use Isometry2 as Isometry;

    /// The rotation type.
    pub type Rotation<N> = UnitComplex<N>;
}

pub use dim::*;

/// The default tolerance used for geometric operations.
///
/// This is the machine epsilon of `N`.
#[inline]
pub fn default_epsilon<N: Real>() -> N {
    <N as approx::AbsDiffEq>::default_epsilon()
}

/// Converts a `f64` constant into the scalar type `N`.
#[inline]
pub(crate) fn real<N: Real>(val: f64) -> N {
    na::convert::<f64, N>(val)
}
