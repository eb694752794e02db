//! Definition of the segment shape.

use crate::math::{default_epsilon, Point, Real, Vector};

use na::{self, Unit};

/// A segment shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment<N: Real> {
    /// The segment first point.
    pub a: Point<N>,
    /// The segment second point.
    pub b: Point<N>,
}

/// Logical description of the location of a point on a segment.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum SegmentPointLocation<N: Real> {
    /// The point lies on a vertex.
    OnVertex(u32),
    /// The point lies on the segment interior.
    OnEdge([N; 2]),
}

impl<N: Real> Segment<N> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<N>, b: Point<N>) -> Segment<N> {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    pub fn scaled_direction(&self) -> Vector<N> {
        self.b - self.a
    }

    /// The length of this segment.
    pub fn length(&self) -> N {
        self.scaled_direction().norm()
    }

    /// The unit direction of this segment.
    ///
    /// Points from `self.a` toward `self.b`.
    /// Returns `None` is both points are equal.
    pub fn direction(&self) -> Option<Unit<Vector<N>>> {
        Unit::try_new(self.scaled_direction(), default_epsilon())
    }

    /// Computes the point at the given location.
    pub fn point_at(&self, location: &SegmentPointLocation<N>) -> Point<N> {
        match *location {
            SegmentPointLocation::OnVertex(0) => self.a,
            SegmentPointLocation::OnVertex(_) => self.b,
            SegmentPointLocation::OnEdge(bcoords) => {
                self.a * bcoords[0] + self.b.coords * bcoords[1]
            }
        }
    }

    /// The point of this segment closest to `pt`, with its location.
    pub fn project_point_with_location(&self, pt: &Point<N>) -> (Point<N>, SegmentPointLocation<N>) {
        let ab = self.scaled_direction();
        let ap = pt - self.a;
        let ab_ap = ab.dot(&ap);
        let sqnab = ab.norm_squared();

        if ab_ap <= N::zero() {
            // Voronoï region of vertex 'a'.
            (self.a, SegmentPointLocation::OnVertex(0))
        } else if ab_ap >= sqnab {
            // Voronoï region of vertex 'b'.
            (self.b, SegmentPointLocation::OnVertex(1))
        } else {
            // Voronoï region of the segment interior.
            let u = ab_ap / sqnab;
            let bcoords = [N::one() - u, u];
            (self.a + ab * u, SegmentPointLocation::OnEdge(bcoords))
        }
    }

    /// The squared distance from `pt` to this segment.
    #[inline]
    pub fn distance_squared_to_point(&self, pt: &Point<N>) -> N {
        na::distance_squared(pt, &self.project_point_with_location(pt).0)
    }
}

impl<N: Real> From<[Point<N>; 2]> for Segment<N> {
    fn from(arr: [Point<N>; 2]) -> Self {
        Segment::new(arr[0], arr[1])
    }
}
