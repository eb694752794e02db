use crate::{random_obb, signed};
use sepax3d::na::{self, Point3};
use sepax3d::query::{closest_farthest_points_oriented_box, ExtremePoints};

#[test]
fn closest_and_farthest_points_bound_the_box() {
    let mut rng = oorandom::Rand64::new(2024);

    for _ in 0..200 {
        let obb = random_obb(&mut rng);
        let pt = Point3::new(signed(&mut rng, 6.0), signed(&mut rng, 6.0), signed(&mut rng, 6.0));

        let (closest, farthest) = closest_farthest_points_oriented_box(&obb, &pt, ExtremePoints::all());
        let closest = closest.unwrap();
        let farthest = farthest.unwrap();

        // The closest point lies in the box.
        let local = obb.basis.to_local(&(closest - obb.center));
        for i in 0..3 {
            assert!(local[i].abs() <= obb.half_extents[i] + 1.0e-9);
        }

        let closest_dist = na::distance(&pt, &closest);
        let farthest_dist = na::distance(&pt, &farthest);
        assert!(closest_dist <= farthest_dist);

        // Every vertex lies between the two bounds.
        for vertex in obb.vertices() {
            let dist = na::distance(&pt, &vertex);
            assert!(closest_dist <= dist + 1.0e-9);
            assert!(dist <= farthest_dist + 1.0e-9);
        }
    }
}

#[test]
fn only_the_requested_points_are_computed() {
    let mut rng = oorandom::Rand64::new(5);
    let obb = random_obb(&mut rng);
    let pt = Point3::origin();

    let (closest, farthest) = closest_farthest_points_oriented_box(&obb, &pt, ExtremePoints::CLOSEST);
    assert!(closest.is_some() && farthest.is_none());

    let (closest, farthest) = closest_farthest_points_oriented_box(&obb, &pt, ExtremePoints::FARTHEST);
    assert!(closest.is_none() && farthest.is_some());

    let (closest, farthest) = closest_farthest_points_oriented_box(&obb, &pt, ExtremePoints::empty());
    assert!(closest.is_none() && farthest.is_none());
}
