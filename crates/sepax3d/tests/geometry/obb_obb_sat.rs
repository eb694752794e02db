use crate::random_obb;
use sepax3d::bounding_volume::OrientedBox;
use sepax3d::query::{
    classify_oriented_box_oriented_box, intersection_test_oriented_box_oriented_box,
    IntersectionType,
};

#[test]
fn intersection_test_is_symmetric() {
    let mut rng = oorandom::Rand64::new(0x5a7);
    let mut num_hits = 0;

    for _ in 0..1000 {
        let obb1 = random_obb(&mut rng);
        let obb2 = random_obb(&mut rng);

        let hit = intersection_test_oriented_box_oriented_box(&obb1, &obb2);
        assert_eq!(
            hit,
            intersection_test_oriented_box_oriented_box(&obb2, &obb1),
            "{obb1:?} {obb2:?}"
        );
        num_hits += hit as usize;
    }

    // Both outcomes must have been exercised.
    assert!(num_hits > 0 && num_hits < 1000);
}

#[test]
fn classification_refines_intersection() {
    let mut rng = oorandom::Rand64::new(0xc1a55);

    for _ in 0..1000 {
        let obb1 = random_obb(&mut rng);
        let obb2 = random_obb(&mut rng);

        let classification = classify_oriented_box_oriented_box(&obb1, &obb2);
        assert_eq!(
            classification != IntersectionType::Outside,
            intersection_test_oriented_box_oriented_box(&obb1, &obb2),
            "{classification}: {obb1:?} {obb2:?}"
        );
    }
}

#[test]
fn swapping_the_boxes_inverts_the_classification() {
    let mut rng = oorandom::Rand64::new(42);

    for _ in 0..1000 {
        let obb1 = random_obb(&mut rng);
        let obb2 = random_obb(&mut rng);

        assert_eq!(
            classify_oriented_box_oriented_box(&obb1, &obb2).invert(),
            classify_oriented_box_oriented_box(&obb2, &obb1)
        );
    }
}

#[test]
fn shrunk_box_is_inside() {
    let mut rng = oorandom::Rand64::new(7);

    for _ in 0..100 {
        let outer = random_obb(&mut rng);
        let inner = OrientedBox::new(outer.center, outer.basis, outer.half_extents * 0.5);

        assert_eq!(
            classify_oriented_box_oriented_box(&inner, &outer),
            IntersectionType::Inside
        );
        assert_eq!(
            classify_oriented_box_oriented_box(&outer, &inner),
            IntersectionType::Enclosing
        );
        assert!(intersection_test_oriented_box_oriented_box(&inner, &outer));
    }
}

#[test]
fn identical_boxes_are_the_same() {
    let mut rng = oorandom::Rand64::new(99);

    for _ in 0..100 {
        let obb = random_obb(&mut rng);
        assert_eq!(
            classify_oriented_box_oriented_box(&obb, &obb),
            IntersectionType::Same
        );
    }
}
