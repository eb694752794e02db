use crate::{random_obb, signed};
use sepax3d::na::Point3;
use sepax3d::query::{
    classify_ball_oriented_box, intersection_test_ball_oriented_box, IntersectionType,
};
use sepax3d::shape::Ball;

#[test]
fn classification_refines_intersection() {
    let mut rng = oorandom::Rand64::new(0xba11);
    let mut num_hits = 0;

    for _ in 0..1000 {
        let obb = random_obb(&mut rng);
        let center = Point3::new(signed(&mut rng, 5.0), signed(&mut rng, 5.0), signed(&mut rng, 5.0));
        let ball = Ball::new(center, rng.rand_float() * 3.0);

        let hit = intersection_test_ball_oriented_box(&ball, &obb);
        assert_eq!(
            classify_ball_oriented_box(&ball, &obb).is_intersecting(),
            hit,
            "{ball:?} {obb:?}"
        );
        num_hits += hit as usize;
    }

    assert!(num_hits > 0 && num_hits < 1000);
}

#[test]
fn balls_around_and_inside_a_box() {
    let mut rng = oorandom::Rand64::new(3);

    for _ in 0..100 {
        let obb = random_obb(&mut rng);
        let min_extent = obb.half_extents.min();
        let max_extent = obb.half_extents.norm();

        let inner = Ball::new(obb.center, min_extent * 0.9);
        let outer = Ball::new(obb.center, max_extent * 1.1);

        assert_eq!(classify_ball_oriented_box(&inner, &obb), IntersectionType::Inside);
        assert_eq!(classify_ball_oriented_box(&outer, &obb), IntersectionType::Enclosing);
    }
}
