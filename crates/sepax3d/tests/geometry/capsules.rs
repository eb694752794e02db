use crate::{random_obb, signed};
use sepax3d::na::Point3;
use sepax3d::query::{
    classify_ball_capsule, classify_oriented_box_capsule, classify_point_capsule,
    intersection_test_ball_capsule, intersection_test_oriented_box_capsule,
    intersection_test_point_capsule, IntersectionType,
};
use sepax3d::shape::{Ball, Capsule};

fn random_point(rng: &mut oorandom::Rand64, scale: f64) -> Point3<f64> {
    Point3::new(signed(rng, scale), signed(rng, scale), signed(rng, scale))
}

fn random_capsule(rng: &mut oorandom::Rand64) -> Capsule<f64> {
    let a = random_point(rng, 4.0);
    let b = random_point(rng, 4.0);
    Capsule::new(a, b, rng.rand_float() * 1.5)
}

#[test]
fn oriented_box_capsule_classification_refines_intersection() {
    let mut rng = oorandom::Rand64::new(0xca95);
    let mut num_hits = 0;

    for _ in 0..1000 {
        let obb = random_obb(&mut rng);
        let capsule = random_capsule(&mut rng);

        let hit = intersection_test_oriented_box_capsule(&obb, &capsule);
        assert_eq!(
            classify_oriented_box_capsule(&obb, &capsule).is_intersecting(),
            hit
        );
        num_hits += hit as usize;
    }

    assert!(num_hits > 0 && num_hits < 1000);
}

#[test]
fn capsule_through_the_box_intersects_it() {
    let mut rng = oorandom::Rand64::new(11);

    for _ in 0..100 {
        let obb = random_obb(&mut rng);
        let dir = random_point(&mut rng, 1.0).coords;
        let capsule = Capsule::new(obb.center - dir * 10.0, obb.center + dir * 10.0, 0.0);

        assert!(intersection_test_oriented_box_capsule(&obb, &capsule));
        assert_ne!(
            classify_oriented_box_capsule(&obb, &capsule),
            IntersectionType::Outside
        );
    }
}

#[test]
fn ball_and_point_classifications_refine_intersection() {
    let mut rng = oorandom::Rand64::new(0xb0b);

    for _ in 0..1000 {
        let capsule = random_capsule(&mut rng);
        let ball = Ball::new(random_point(&mut rng, 5.0), rng.rand_float() * 2.0);
        let point = random_point(&mut rng, 5.0);

        assert_eq!(
            classify_ball_capsule(&ball, &capsule).is_intersecting(),
            intersection_test_ball_capsule(&ball, &capsule)
        );
        assert_eq!(
            classify_point_capsule(&point, &capsule).is_intersecting(),
            intersection_test_point_capsule(&point, &capsule)
        );
    }
}
