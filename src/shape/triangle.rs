//! Definition of the triangle shape.

use crate::math::{Point, Real, Vector};

/// A triangle shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle<N: Real> {
    /// The triangle first point.
    pub a: Point<N>,
    /// The triangle second point.
    pub b: Point<N>,
    /// The triangle third point.
    pub c: Point<N>,
}

impl<N: Real> From<[Point<N>; 3]> for Triangle<N> {
    fn from(arr: [Point<N>; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl<N: Real> Triangle<N> {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<N>, b: Point<N>, c: Point<N>) -> Triangle<N> {
        Triangle { a, b, c }
    }

    /// The vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<N>; 3] {
        [self.a, self.b, self.c]
    }

    /// A vector normal of this triangle, scaled by twice its area.
    ///
    /// The vector points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product). It is zero if the triangle is degenerate.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<N> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// Reverse the orientation of this triangle by swapping b and c.
    #[inline]
    pub fn reverse(&mut self) {
        core::mem::swap(&mut self.b, &mut self.c);
    }

    /// Is this triangle degenerate, i.e., are its vertices collinear up to `eps`?
    #[inline]
    pub fn is_affinely_dependent(&self, eps: N) -> bool {
        self.scaled_normal().norm_squared() <= eps * eps
    }
}
