use crate::bounding_volume::{OrientedBox, OrthonormalBasis};
use crate::math::{real, Point, Real, Vector, DIM};

/// Computes an oriented bounding box for the given set of points.
///
/// The axes are the eigenvectors of the covariance matrix of the points, and the extents
/// are the tightest ones along those axes. Returns `None` if `pts` is empty.
///
/// The returned OBB is not guaranteed to be the smallest enclosing OBB.
/// Though it should be a pretty good on for most purposes.
pub fn obb<N: Real>(pts: &[Point<N>]) -> Option<OrientedBox<N>> {
    if pts.is_empty() {
        return None;
    }

    if pts.len() == 1 {
        log::debug!("Fitting an oriented box to a single point: the result is degenerate.");
    }

    let (centroid, cov) = crate::utils::center_cov(pts);
    let basis = OrthonormalBasis::from_covariance(&cov);

    let mut mins = Vector::repeat(N::max_value()?);
    let mut maxs = -mins;

    for pt in pts {
        let dpt = pt - centroid;
        for i in 0..DIM {
            let dot = basis[i].dot(&dpt);
            mins[i] = mins[i].min(dot);
            maxs[i] = maxs[i].max(dot);
        }
    }

    let mid = (maxs + mins) * real::<N>(0.5);
    let mut center = centroid;
    for i in 0..DIM {
        center += basis[i] * mid[i];
    }

    Some(OrientedBox::new(
        center,
        basis,
        (maxs - mins) * real::<N>(0.5),
    ))
}
