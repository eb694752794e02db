use crate::random_obb;
use sepax2d::bounding_volume::{OrientedBox, OrthonormalBasis};
use sepax2d::na::{Point2, Vector2};
use sepax2d::query::{
    classify_oriented_box_oriented_box, intersection_test_oriented_box_oriented_box,
    IntersectionType,
};

#[test]
fn intersection_test_is_symmetric() {
    let mut rng = oorandom::Rand64::new(0x2d);
    let mut num_hits = 0;

    for _ in 0..1000 {
        let obb1 = random_obb(&mut rng);
        let obb2 = random_obb(&mut rng);

        let hit = intersection_test_oriented_box_oriented_box(&obb1, &obb2);
        assert_eq!(hit, intersection_test_oriented_box_oriented_box(&obb2, &obb1));
        num_hits += hit as usize;
    }

    assert!(num_hits > 0 && num_hits < 1000);
}

#[test]
fn classification_refines_intersection_and_inverts_when_swapped() {
    let mut rng = oorandom::Rand64::new(0xface);

    for _ in 0..1000 {
        let obb1 = random_obb(&mut rng);
        let obb2 = random_obb(&mut rng);

        let classification = classify_oriented_box_oriented_box(&obb1, &obb2);
        assert_eq!(
            classification.is_intersecting(),
            intersection_test_oriented_box_oriented_box(&obb1, &obb2)
        );
        assert_eq!(
            classification.invert(),
            classify_oriented_box_oriented_box(&obb2, &obb1)
        );
    }
}

#[test]
fn nested_and_identical_rectangles() {
    let mut rng = oorandom::Rand64::new(8);

    for _ in 0..100 {
        let outer = random_obb(&mut rng);
        let inner = OrientedBox::new(outer.center, outer.basis, outer.half_extents * 0.25);

        assert_eq!(
            classify_oriented_box_oriented_box(&inner, &outer),
            IntersectionType::Inside
        );
        assert_eq!(
            classify_oriented_box_oriented_box(&outer, &inner),
            IntersectionType::Enclosing
        );
        assert_eq!(
            classify_oriented_box_oriented_box(&outer, &outer),
            IntersectionType::Same
        );
    }
}

#[test]
fn diamond_against_a_square() {
    // A square rotated by 45 degrees, its corners pointing along the axes.
    let diamond = OrientedBox::new(
        Point2::origin(),
        OrthonormalBasis::gram_schmidt(&Vector2::new(1.0, 1.0)),
        Vector2::repeat(1.0),
    );
    // Its corners are at distance sqrt(2) from its center.
    let close = OrientedBox::new(
        Point2::new(2.3, 0.0),
        OrthonormalBasis::identity(),
        Vector2::repeat(1.0),
    );
    let far = OrientedBox::new(
        Point2::new(2.5, 0.0),
        OrthonormalBasis::identity(),
        Vector2::repeat(1.0),
    );

    assert!(intersection_test_oriented_box_oriented_box(&diamond, &close));
    assert!(!intersection_test_oriented_box_oriented_box(&diamond, &far));
    assert_eq!(
        classify_oriented_box_oriented_box(&diamond, &far),
        IntersectionType::Outside
    );
}
