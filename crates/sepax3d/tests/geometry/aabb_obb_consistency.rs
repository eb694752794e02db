use crate::{random_obb, signed};
use sepax3d::bounding_volume::{AlignedBox, OrientedBox, OrthonormalBasis};
use sepax3d::na::{Point3, Vector3};
use sepax3d::query::{
    classify_aligned_box_aligned_box, classify_aligned_box_oriented_box,
    classify_oriented_box_oriented_box, intersection_test_aligned_box_aligned_box,
    intersection_test_aligned_box_oriented_box, intersection_test_oriented_box_oriented_box,
};

fn random_aabb(rng: &mut oorandom::Rand64) -> AlignedBox<f64> {
    let center = Point3::new(signed(rng, 3.0), signed(rng, 3.0), signed(rng, 3.0));
    let half_extents = Vector3::new(
        0.1 + rng.rand_float() * 2.0,
        0.1 + rng.rand_float() * 2.0,
        0.1 + rng.rand_float() * 2.0,
    );
    AlignedBox::from_half_extents(center, half_extents)
}

#[test]
fn aligned_box_is_an_oriented_box_with_identity_basis() {
    let mut rng = oorandom::Rand64::new(31);

    for _ in 0..500 {
        let aabb = random_aabb(&mut rng);
        let obb = random_obb(&mut rng);
        let as_obb = OrientedBox::new(aabb.center(), OrthonormalBasis::identity(), aabb.half_extents());

        assert_eq!(
            intersection_test_aligned_box_oriented_box(&aabb, &obb),
            intersection_test_oriented_box_oriented_box(&as_obb, &obb)
        );
        assert_eq!(
            classify_aligned_box_oriented_box(&aabb, &obb),
            classify_oriented_box_oriented_box(&as_obb, &obb)
        );
    }
}

#[test]
fn separating_axes_agree_with_interval_tests_on_aligned_boxes() {
    let mut rng = oorandom::Rand64::new(1789);
    let mut num_hits = 0;

    for _ in 0..500 {
        let aabb1 = random_aabb(&mut rng);
        let aabb2 = random_aabb(&mut rng);
        let obb1 = OrientedBox::from(aabb1);
        let obb2 = OrientedBox::from(aabb2);

        let hit = intersection_test_aligned_box_aligned_box(&aabb1, &aabb2);
        assert_eq!(hit, intersection_test_oriented_box_oriented_box(&obb1, &obb2));
        assert_eq!(
            classify_aligned_box_aligned_box(&aabb1, &aabb2),
            classify_oriented_box_oriented_box(&obb1, &obb2),
            "{aabb1:?} {aabb2:?}"
        );
        num_hits += hit as usize;
    }

    assert!(num_hits > 0 && num_hits < 500);
}
