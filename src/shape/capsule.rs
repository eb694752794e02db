use crate::math::{Point, Real};
use crate::shape::Segment;

#[derive(PartialEq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// A capsule shape defined as a round segment.
pub struct Capsule<N: Real> {
    /// The axis and endpoint of the capsule.
    pub segment: Segment<N>,
    /// The radius of the capsule.
    pub radius: N,
}

impl<N: Real> Capsule<N> {
    /// Creates a new capsule defined as the segment between `a` and `b` and with the given `radius`.
    ///
    /// The radius must be non-negative. `a` and `b` may be equal, the capsule is then a ball.
    pub fn new(a: Point<N>, b: Point<N>, radius: N) -> Self {
        debug_assert!(
            radius >= N::zero(),
            "The radius of a capsule must be non-negative."
        );
        let segment = Segment::new(a, b);
        Self { segment, radius }
    }

    /// The height of this capsule, i.e., the length of its medial segment.
    pub fn height(&self) -> N {
        self.segment.length()
    }

    /// The center of this capsule.
    pub fn center(&self) -> Point<N> {
        na::center(&self.segment.a, &self.segment.b)
    }
}
