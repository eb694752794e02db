use sepax3d::bounding_volume::OrientedBox;
use sepax3d::na::{Isometry3, UnitQuaternion, Vector3};

mod aabb_obb_consistency;
mod ball_oriented_box;
mod capsules;
mod closest_farthest_points;
mod obb_obb_sat;

/// A uniform random number in `[-scale, scale]`.
pub fn signed(rng: &mut oorandom::Rand64, scale: f64) -> f64 {
    (rng.rand_float() * 2.0 - 1.0) * scale
}

/// A box with a random position in `[-3, 3]³`, a random orientation, and random
/// half-extents in `[0.2, 2]`.
pub fn random_obb(rng: &mut oorandom::Rand64) -> OrientedBox<f64> {
    let translation = Vector3::new(signed(rng, 3.0), signed(rng, 3.0), signed(rng, 3.0));
    let rotation = UnitQuaternion::from_euler_angles(
        signed(rng, std::f64::consts::PI),
        signed(rng, std::f64::consts::PI),
        signed(rng, std::f64::consts::PI),
    );
    let half_extents = Vector3::new(
        0.2 + rng.rand_float() * 1.8,
        0.2 + rng.rand_float() * 1.8,
        0.2 + rng.rand_float() * 1.8,
    );

    OrientedBox::from_isometry(&Isometry3::from_parts(translation.into(), rotation), half_extents)
}
