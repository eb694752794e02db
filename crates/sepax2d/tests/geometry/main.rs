use sepax2d::bounding_volume::OrientedBox;
use sepax2d::na::{Isometry2, Vector2};

mod ball_oriented_box;
mod obb_obb_sat;

/// A uniform random number in `[-scale, scale]`.
pub fn signed(rng: &mut oorandom::Rand64, scale: f64) -> f64 {
    (rng.rand_float() * 2.0 - 1.0) * scale
}

/// A rectangle with a random position in `[-3, 3]²`, a random orientation, and random
/// half-extents in `[0.2, 2]`.
pub fn random_obb(rng: &mut oorandom::Rand64) -> OrientedBox<f64> {
    let translation = Vector2::new(signed(rng, 3.0), signed(rng, 3.0));
    let angle = signed(rng, std::f64::consts::PI);
    let half_extents = Vector2::new(0.2 + rng.rand_float() * 1.8, 0.2 + rng.rand_float() * 1.8);

    OrientedBox::from_isometry(&Isometry2::new(translation, angle), half_extents)
}
