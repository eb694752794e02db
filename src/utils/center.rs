use crate::math::{real, Point, Real};

/// Computes the geometric center (centroid) of a set of points.
///
/// All points are weighted equally.
///
/// # Panics
///
/// Panics if the input slice is empty.
///
/// ```
/// # #[cfg(feature = "dim2")] {
/// use sepax2d::utils::center;
/// use sepax2d::math::Point;
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(2.0, 2.0),
///     Point::new(0.0, 2.0),
/// ];
///
/// let c = center(&points);
/// assert!((c.x - 1.0f64).abs() < 1.0e-9);
/// assert!((c.y - 1.0f64).abs() < 1.0e-9);
/// # }
/// ```
#[inline]
pub fn center<N: Real>(pts: &[Point<N>]) -> Point<N> {
    assert!(
        !pts.is_empty(),
        "Cannot compute the center of less than 1 point."
    );

    let denom: N = real(1.0 / (pts.len() as f64));

    let mut res = Point::origin();
    for pt in pts {
        res += pt.coords * denom;
    }

    res
}
