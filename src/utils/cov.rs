use crate::math::{real, Matrix, Point, Real};

/// Computes the covariance matrix of a set of points.
pub fn cov<N: Real>(pts: &[Point<N>]) -> Matrix<N> {
    center_cov(pts).1
}

/// Computes the center and the covariance matrix of a set of points.
///
/// # Panics
///
/// Panics if the input slice is empty.
pub fn center_cov<N: Real>(pts: &[Point<N>]) -> (Point<N>, Matrix<N>) {
    let center = crate::utils::center(pts);
    let mut cov: Matrix<N> = Matrix::zeros();
    let normalizer: N = real(1.0 / (pts.len() as f64));

    for p in pts.iter() {
        let cp = *p - center;
        // NOTE: this is more numerically stable than using cov.syger.
        cov += cp * (cp * normalizer).transpose();
    }

    (center, cov)
}
