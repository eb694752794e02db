//! Orthonormal axis sets of oriented bounding volumes.

use crate::math::{default_epsilon, ComplexField, Matrix, Real, Rotation, Vector, DIM};
use core::ops::Index;

/// Error raised when the axes given to [`OrthonormalBasis::try_new`] do not form an orthonormal basis.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum BasisError {
    /// One of the axes does not have a unit length (or contains NaN).
    #[error("the basis axis {axis} is not a unit vector.")]
    NotUnit {
        /// Index of the faulty axis.
        axis: usize,
    },
    /// Two axes are not orthogonal.
    #[error("the basis axes {axis1} and {axis2} are not orthogonal.")]
    NotOrthogonal {
        /// Index of the first faulty axis.
        axis1: usize,
        /// Index of the second faulty axis.
        axis2: usize,
    },
}

/// A set of `DIM` unit vectors, mutually orthogonal.
///
/// This is the orientation of an [`OrientedBox`](super::OrientedBox). The invariant is
/// established once, at construction, so the queries of this crate never have to check it.
/// The basis may be left-handed: the separating axis tests do not depend on handedness.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrthonormalBasis<N: Real> {
    axes: [Vector<N>; DIM],
}

impl<N: Real> OrthonormalBasis<N> {
    /// The canonical basis: `x`, `y` (and `z` in 3D).
    #[inline]
    pub fn identity() -> Self {
        Self {
            axes: core::array::from_fn(|i| Vector::ith(i, N::one())),
        }
    }

    /// Creates a basis from axes that are already known to be orthonormal.
    ///
    /// Nothing is checked, except with a `debug_assert`.
    #[inline]
    pub fn new_unchecked(axes: [Vector<N>; DIM]) -> Self {
        debug_assert!(
            Self::validate(&axes, default_epsilon::<N>().sqrt()).is_ok(),
            "The axes do not form an orthonormal basis."
        );
        Self { axes }
    }

    /// Creates a basis from the given axes if they are orthonormal, up to a tolerance equal
    /// to the square root of the machine epsilon.
    pub fn try_new(axes: [Vector<N>; DIM]) -> Result<Self, BasisError> {
        Self::try_new_with_tolerance(axes, default_epsilon::<N>().sqrt())
    }

    /// Creates a basis from the given axes if they are orthonormal, up to the given tolerance.
    ///
    /// The tolerance applies to `|axis.norm_squared() - 1|` and to `|axis_i.dot(axis_j)|`.
    pub fn try_new_with_tolerance(
        axes: [Vector<N>; DIM],
        tolerance: N,
    ) -> Result<Self, BasisError> {
        Self::validate(&axes, tolerance)?;
        Ok(Self { axes })
    }

    fn validate(axes: &[Vector<N>; DIM], tolerance: N) -> Result<(), BasisError> {
        for (i, axis) in axes.iter().enumerate() {
            let err = ComplexField::abs(axis.norm_squared() - N::one());
            // Written that way so NaNs are rejected.
            if !(err <= tolerance) {
                return Err(BasisError::NotUnit { axis: i });
            }
        }

        for i in 0..DIM {
            for j in i + 1..DIM {
                if !(ComplexField::abs(axes[i].dot(&axes[j])) <= tolerance) {
                    return Err(BasisError::NotOrthogonal { axis1: i, axis2: j });
                }
            }
        }

        Ok(())
    }

    /// The basis made of the columns of the given rotation.
    #[inline]
    pub fn from_rotation(rot: &Rotation<N>) -> Self {
        let mat = rot.to_rotation_matrix();
        Self {
            axes: core::array::from_fn(|i| mat.matrix().column(i).into_owned()),
        }
    }

    /// The basis made of the eigenvectors of a symmetric covariance matrix.
    ///
    /// The result is always right-handed.
    pub fn from_covariance(cov: &Matrix<N>) -> Self {
        let mut eigv = cov.symmetric_eigen().eigenvectors;

        if eigv.determinant() < N::zero() {
            let mut last = eigv.column_mut(DIM - 1);
            last.neg_mut();
        }

        Self::from_matrix_columns(&eigv)
    }

    /// The basis made of the columns of a matrix assumed to be orthogonal.
    #[inline]
    pub fn from_matrix_columns(mat: &Matrix<N>) -> Self {
        Self {
            axes: core::array::from_fn(|i| mat.column(i).into_owned()),
        }
    }

    /// Orthonormalizes `u` and `v` (in that order), and completes them with `u × v`.
    ///
    /// Degenerate inputs do not fail: a zero `u` is replaced by the `x` axis, and a `v` that
    /// is zero or parallel to `u` is replaced by an arbitrary direction orthogonal to `u`.
    #[cfg(feature = "dim3")]
    pub fn gram_schmidt(u: &Vector<N>, v: &Vector<N>) -> Self {
        let eps = default_epsilon::<N>();

        let u = u.try_normalize(eps).unwrap_or_else(|| {
            log::debug!("Gram-Schmidt: the first direction is zero, using the x axis instead.");
            Vector::x()
        });
        let v = (v - u * u.dot(v)).try_normalize(eps).unwrap_or_else(|| {
            log::debug!("Gram-Schmidt: the second direction is degenerate, picking an arbitrary orthogonal one.");
            any_orthonormal_vector(&u)
        });
        let w = u.cross(&v);

        Self { axes: [u, v, w] }
    }

    /// Normalizes `u` and completes it with its counterclockwise perpendicular.
    ///
    /// A zero `u` is replaced by the `x` axis.
    #[cfg(feature = "dim2")]
    pub fn gram_schmidt(u: &Vector<N>) -> Self {
        let u = u
            .try_normalize(default_epsilon::<N>())
            .unwrap_or_else(|| {
                log::debug!("Gram-Schmidt: the direction is zero, using the x axis instead.");
                Vector::x()
            });

        Self {
            axes: [u, Vector::new(-u.y, u.x)],
        }
    }

    /// The `i`-th axis.
    #[inline]
    pub fn axis(&self, i: usize) -> &Vector<N> {
        &self.axes[i]
    }

    /// All the axes.
    #[inline]
    pub fn axes(&self) -> &[Vector<N>; DIM] {
        &self.axes
    }

    /// The matrix which columns are the axes of this basis.
    ///
    /// It maps coordinates expressed in this basis into world coordinates.
    pub fn to_matrix(&self) -> Matrix<N> {
        Matrix::from_columns(&self.axes)
    }

    /// Expresses the world-space vector `v` in this basis.
    #[inline]
    pub fn to_local(&self, v: &Vector<N>) -> Vector<N> {
        Vector::from_fn(|i, _| self.axes[i].dot(v))
    }
}

impl<N: Real> Default for OrthonormalBasis<N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<N: Real> Index<usize> for OrthonormalBasis<N> {
    type Output = Vector<N>;

    #[inline]
    fn index(&self, i: usize) -> &Vector<N> {
        &self.axes[i]
    }
}

/// A unit vector orthogonal to the unit vector `u`.
#[cfg(feature = "dim3")]
fn any_orthonormal_vector<N: Real>(u: &Vector<N>) -> Vector<N> {
    // Cross with the canonical axis the least aligned with `u`.
    let abs = u.abs();
    let canonical = if abs.x <= abs.y && abs.x <= abs.z {
        Vector::x()
    } else if abs.y <= abs.z {
        Vector::y()
    } else {
        Vector::z()
    };

    u.cross(&canonical).normalize()
}
