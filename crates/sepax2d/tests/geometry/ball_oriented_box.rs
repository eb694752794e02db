use crate::{random_obb, signed};
use sepax2d::bounding_volume::AlignedBox;
use sepax2d::na::Point2;
use sepax2d::query::{
    classify_ball_aligned_box, classify_ball_oriented_box, closest_point_oriented_box,
    farthest_point_oriented_box, intersection_test_ball_aligned_box,
    intersection_test_ball_oriented_box, IntersectionType,
};
use sepax2d::shape::Ball;

#[test]
fn circle_classification_refines_intersection() {
    let mut rng = oorandom::Rand64::new(0xc12c1e);
    let mut num_hits = 0;

    for _ in 0..1000 {
        let obb = random_obb(&mut rng);
        let center = Point2::new(signed(&mut rng, 5.0), signed(&mut rng, 5.0));
        let ball = Ball::new(center, rng.rand_float() * 3.0);

        let hit = intersection_test_ball_oriented_box(&ball, &obb);
        assert_eq!(classify_ball_oriented_box(&ball, &obb).is_intersecting(), hit);
        num_hits += hit as usize;
    }

    assert!(num_hits > 0 && num_hits < 1000);
}

#[test]
fn circle_against_aligned_rectangle() {
    let aabb = AlignedBox::new(Point2::new(-2.0, -1.0), Point2::new(2.0, 1.0));

    let cases = [
        (Ball::new(Point2::origin(), 0.5), IntersectionType::Inside),
        (Ball::new(Point2::origin(), 1.5), IntersectionType::Spanning),
        (Ball::new(Point2::origin(), 3.0), IntersectionType::Enclosing),
        (Ball::new(Point2::new(4.0, 0.0), 1.0), IntersectionType::Outside),
    ];

    for (ball, expected) in cases {
        assert_eq!(classify_ball_aligned_box(&ball, &aabb), expected);
        assert_eq!(
            intersection_test_ball_aligned_box(&ball, &aabb),
            expected.is_intersecting()
        );
    }
}

#[test]
fn closest_and_farthest_points_on_a_rectangle() {
    let mut rng = oorandom::Rand64::new(12);

    for _ in 0..200 {
        let obb = random_obb(&mut rng);
        let pt = Point2::new(signed(&mut rng, 6.0), signed(&mut rng, 6.0));

        let closest = closest_point_oriented_box(&obb, &pt);
        let farthest = farthest_point_oriented_box(&obb, &pt);

        let local = obb.basis.to_local(&(closest - obb.center));
        assert!(local.x.abs() <= obb.half_extents.x + 1.0e-9);
        assert!(local.y.abs() <= obb.half_extents.y + 1.0e-9);

        let vertex_dists = obb.vertices().map(|v| (v - pt).norm());
        for dist in vertex_dists {
            assert!((closest - pt).norm() <= dist + 1.0e-9);
            assert!((farthest - pt).norm() + 1.0e-9 >= dist);
        }
    }
}
