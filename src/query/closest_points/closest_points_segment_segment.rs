use crate::math::{default_epsilon, Point, Real};
use crate::shape::{Segment, SegmentPointLocation};

/// Closest points between two segments.
///
/// Returns the point of `seg1` and the point of `seg2` realizing the distance between the
/// two segments. Degenerate segments (reduced to a point) are supported.
#[inline]
pub fn closest_points_segment_segment<N: Real>(
    seg1: &Segment<N>,
    seg2: &Segment<N>,
) -> (Point<N>, Point<N>) {
    let (loc1, loc2) = closest_points_segment_segment_with_locations(seg1, seg2);
    (seg1.point_at(&loc1), seg2.point_at(&loc2))
}

/// The distance between two segments.
#[inline]
pub fn distance_segment_segment<N: Real>(seg1: &Segment<N>, seg2: &Segment<N>) -> N {
    let (p1, p2) = closest_points_segment_segment(seg1, seg2);
    na::distance(&p1, &p2)
}

/// Closest points between two segments, given as locations on each segment.
#[inline]
pub fn closest_points_segment_segment_with_locations<N: Real>(
    seg1: &Segment<N>,
    seg2: &Segment<N>,
) -> (SegmentPointLocation<N>, SegmentPointLocation<N>) {
    // Inspired by Real-time collision detection by Christer Ericson.
    let d1 = seg1.scaled_direction();
    let d2 = seg2.scaled_direction();
    let r = seg1.a - seg2.a;

    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);

    let (zero, one) = (N::zero(), N::one());
    let mut s;
    let mut t;

    let eps = default_epsilon::<N>();
    if a <= eps && e <= eps {
        s = zero;
        t = zero;
    } else if a <= eps {
        s = zero;
        t = na::clamp(f / e, zero, one);
    } else {
        let c = d1.dot(&r);
        if e <= eps {
            t = zero;
            s = na::clamp(-c / a, zero, one);
        } else {
            let b = d1.dot(&d2);
            let ae = a * e;
            let bb = b * b;
            let denom = ae - bb;

            // Use absolute and ulps error to test collinearity.
            if denom > eps && !ulps_eq!(ae, bb) {
                s = na::clamp((b * f - c * e) / denom, zero, one);
            } else {
                s = zero;
            }

            t = (b * s + f) / e;

            if t < zero {
                t = zero;
                s = na::clamp(-c / a, zero, one);
            } else if t > one {
                t = one;
                s = na::clamp((b - c) / a, zero, one);
            }
        }
    }

    (location(s), location(t))
}

fn location<N: Real>(param: N) -> SegmentPointLocation<N> {
    if param == N::zero() {
        SegmentPointLocation::OnVertex(0)
    } else if param == N::one() {
        SegmentPointLocation::OnVertex(1)
    } else {
        SegmentPointLocation::OnEdge([N::one() - param, param])
    }
}
