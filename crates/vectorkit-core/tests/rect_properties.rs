//! Property-based tests for the rectangle algebra.

use proptest::prelude::*;

use vectorkit_core::{align, AffineTransform, Alignment, Rectangle, Vector2};

fn canonical_rect() -> impl Strategy<Value = Rectangle> {
    (
        -1.0e6..1.0e6f64,
        -1.0e6..1.0e6f64,
        0.0..1.0e4f64,
        0.0..1.0e4f64,
    )
        .prop_map(|(x, y, width, height)| Rectangle::new(x, y, width, height))
}

fn nondegenerate_rect() -> impl Strategy<Value = Rectangle> {
    (
        -1.0e4..1.0e4f64,
        -1.0e4..1.0e4f64,
        1.0..1.0e3f64,
        1.0..1.0e3f64,
    )
        .prop_map(|(x, y, width, height)| Rectangle::new(x, y, width, height))
}

fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance * (1.0 + a.abs().max(b.abs()))
}

fn rect_approx_eq(a: &Rectangle, b: &Rectangle) -> bool {
    approx_eq(a.x, b.x, 1e-9)
        && approx_eq(a.y, b.y, 1e-9)
        && approx_eq(a.width, b.width, 1e-9)
        && approx_eq(a.height, b.height, 1e-9)
}

proptest! {
    #[test]
    fn union_is_commutative(a in canonical_rect(), b in canonical_rect()) {
        prop_assert_eq!(
            Rectangle::union(&[a, b]).unwrap(),
            Rectangle::union(&[b, a]).unwrap()
        );
    }

    #[test]
    fn union_is_associative(
        a in canonical_rect(),
        b in canonical_rect(),
        c in canonical_rect(),
    ) {
        let left = Rectangle::union(&[Rectangle::union(&[a, b]).unwrap(), c]).unwrap();
        let right = Rectangle::union(&[a, Rectangle::union(&[b, c]).unwrap()]).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn union_contains_every_input(a in canonical_rect(), b in canonical_rect()) {
        let u = Rectangle::union(&[a, b]).unwrap();
        prop_assert!(u.contains(&a));
        prop_assert!(u.contains(&b));
    }

    #[test]
    fn from_points_contains_every_point(
        points in prop::collection::vec((-1.0e6..1.0e6f64, -1.0e6..1.0e6f64), 1..32)
    ) {
        let points: Vec<Vector2> = points
            .into_iter()
            .map(|(x, y)| Vector2::new(x, y))
            .collect();
        let rect = Rectangle::from_points(&points).unwrap();
        for p in &points {
            prop_assert!(rect.contains_point(*p));
        }
    }

    #[test]
    fn intersects_is_symmetric(a in canonical_rect(), b in canonical_rect()) {
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
    }

    #[test]
    fn intersection_implies_intersects(a in canonical_rect(), b in canonical_rect()) {
        // intersection() is strict (positive area), intersects() is
        // inclusive of touching; a Some result always implies overlap.
        if a.intersection(&b).is_some() {
            prop_assert!(a.intersects(&b));
        }
    }

    #[test]
    fn identity_transform_is_a_fixpoint(rect in canonical_rect()) {
        prop_assert_eq!(rect.transform(&AffineTransform::IDENTITY), rect);
    }

    #[test]
    fn relative_transform_round_trips(
        a in nondegenerate_rect(),
        b in nondegenerate_rect(),
    ) {
        let t = a.relative_transform(&b);
        let mapped = a.transform(&t);
        prop_assert!(
            rect_approx_eq(&mapped, &b),
            "expected {:?}, got {:?}",
            b,
            mapped
        );
    }

    #[test]
    fn normalized_is_idempotent(
        rect in canonical_rect(),
        sx in -4.0..4.0f64,
        sy in -4.0..4.0f64,
    ) {
        let scaled = rect.scale(Vector2::ZERO, Vector2::new(sx, sy));
        let once = scaled.normalized();
        prop_assert_eq!(once.normalized(), once);
        prop_assert!(once.width >= 0.0 && once.height >= 0.0);
    }

    #[test]
    fn align_none_is_identity(rects in prop::collection::vec(canonical_rect(), 1..8)) {
        prop_assert_eq!(align(&rects, Alignment::default()), rects);
    }
}
