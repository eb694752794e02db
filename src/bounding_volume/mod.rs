//! Bounding volumes.

#[doc(inline)]
pub use self::aligned_box::AlignedBox;
#[doc(inline)]
pub use self::oriented_box::OrientedBox;
#[doc(inline)]
pub use self::orthonormal_basis::{BasisError, OrthonormalBasis};

#[doc(hidden)]
pub mod aligned_box;
#[doc(hidden)]
pub mod oriented_box;
#[doc(hidden)]
pub mod orthonormal_basis;
