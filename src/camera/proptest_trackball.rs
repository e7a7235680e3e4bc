//! Property-based tests for the trackball mapping using proptest.
//!
//! These verify that any drag within the viewport produces a valid
//! rotation, no matter how the endpoints are chosen.

use proptest::prelude::*;

use bevy::math::{Quat, Vec2};

use super::trackball::drag_rotation;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any two pointer positions strictly inside the viewport yield a
    /// finite, unit-norm rotation.
    #[test]
    fn prop_drag_yields_unit_rotation(
        fx in -0.999f32..0.999,
        fy in -0.999f32..0.999,
        tx in -0.999f32..0.999,
        ty in -0.999f32..0.999,
    ) {
        let q = drag_rotation(Vec2::new(fx, fy), Vec2::new(tx, ty));

        prop_assert!(q.is_finite(), "rotation has NaN/inf: {q:?}");
        prop_assert!(
            (q.length() - 1.0).abs() < 1.0e-4,
            "rotation is not unit norm: |q| = {}",
            q.length()
        );
    }

    /// A drag that starts and ends at the same pointer position is the
    /// identity rotation.
    #[test]
    fn prop_zero_drag_is_identity(
        x in -0.999f32..0.999,
        y in -0.999f32..0.999,
    ) {
        let p = Vec2::new(x, y);
        prop_assert_eq!(drag_rotation(p, p), Quat::IDENTITY);
    }

    /// Accumulating drags never lets the orientation drift off unit norm
    /// when renormalized after each composition.
    #[test]
    fn prop_accumulated_orientation_stays_normalized(
        steps in proptest::collection::vec((-0.5f32..0.5, -0.5f32..0.5), 1..50),
    ) {
        let mut orientation = Quat::IDENTITY;
        let mut cursor = Vec2::ZERO;

        for (dx, dy) in steps {
            let next = Vec2::new(
                (cursor.x + dx).clamp(-0.999, 0.999),
                (cursor.y + dy).clamp(-0.999, 0.999),
            );
            orientation = (drag_rotation(cursor, next) * orientation).normalize();
            cursor = next;
        }

        prop_assert!((orientation.length() - 1.0).abs() < 1.0e-4);
    }
}
