use crate::math::Real;
use crate::query::IntersectionType;

/// The projections of two shapes on a candidate separating axis.
///
/// The axis does not need to be normalized: the three values are all scaled by its norm.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SatProjection<N: Real> {
    /// The distance between the projections of the centers of the two shapes (non-negative).
    pub distance: N,
    /// The projection radius of the first shape.
    pub radius1: N,
    /// The projection radius of the second shape.
    pub radius2: N,
}

impl<N: Real> SatProjection<N> {
    /// Creates a new projection.
    #[inline]
    pub fn new(distance: N, radius1: N, radius2: N) -> Self {
        Self {
            distance,
            radius1,
            radius2,
        }
    }

    /// Is this axis separating the two shapes? Touching projections are not separated.
    #[inline]
    pub fn is_separating(&self) -> bool {
        self.distance > self.radius1 + self.radius2
    }

    /// Classifies this projection, merged with the classification obtained on the previous
    /// axes. See [`classify_sat_axis`].
    #[inline]
    pub fn classify(&self, running: Option<IntersectionType>) -> Option<IntersectionType> {
        classify_sat_axis(self.distance, self.radius1, self.radius2, running)
    }
}

/// Classifies the first shape with respect to the second one along a single candidate axis.
///
/// - `t`: the distance between the projected centers.
/// - `ra`, `rb`: the projection radii of the first and second shape.
/// - `running`: the classification accumulated over the axes already visited, `None` if no
///   axis contributed yet.
///
/// An axis where both projections coincide (`t == 0` and `ra == rb`) gives no information
/// and leaves `running` unchanged. Otherwise the verdict of this axis is merged into
/// `running` with [`IntersectionType::and`]. `Outside` is returned as soon as the
/// projections do not overlap.
///
/// A result still `None` after every axis means the two shapes coincide, i.e.,
/// [`IntersectionType::Same`].
#[inline]
pub fn classify_sat_axis<N: Real>(
    t: N,
    ra: N,
    rb: N,
    running: Option<IntersectionType>,
) -> Option<IntersectionType> {
    if t == N::zero() && ra == rb {
        return running;
    }

    if t > ra + rb {
        return Some(IntersectionType::Outside);
    }

    let this = if t + rb < ra {
        IntersectionType::Enclosing
    } else if t + ra < rb {
        IntersectionType::Inside
    } else {
        IntersectionType::Spanning
    };

    Some(running.map_or(this, |running| running.and(this)))
}
