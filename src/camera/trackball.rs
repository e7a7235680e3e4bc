//! Virtual-trackball rotation math.
//!
//! Maps 2D pointer drags onto a virtual sphere to produce incremental 3D
//! rotations. Inside the sphere's silhouette the pointer is projected onto
//! the sphere surface; outside it, onto a hyperbolic sheet, so the mapping
//! stays well-defined for arbitrarily large drags.

use bevy::math::{Quat, Vec2, Vec3};

/// Radius of the virtual trackball in normalized viewport units.
pub const TRACKBALL_RADIUS: f32 = 0.8;

/// Drags shorter than this produce no rotation.
const MIN_DRAG: f32 = 1.0e-6;

/// Height of the trackball surface above the viewport plane at `(x, y)`.
///
/// Sphere of radius `r` inside `r/sqrt(2)` of the axis, hyperbolic sheet
/// beyond it.
fn project_to_sphere(r: f32, x: f32, y: f32) -> f32 {
    let d = (x * x + y * y).sqrt();
    if d < r * std::f32::consts::FRAC_1_SQRT_2 {
        (r * r - d * d).sqrt()
    } else {
        let t = r * std::f32::consts::FRAC_1_SQRT_2;
        t * t / d
    }
}

/// Incremental rotation for a drag between two pointer positions, both in
/// normalized viewport coordinates ([-1, 1] per axis).
///
/// Returns a unit quaternion; a degenerate drag (identical endpoints)
/// returns the identity.
pub fn drag_rotation(from: Vec2, to: Vec2) -> Quat {
    let p_from = Vec3::new(
        from.x,
        from.y,
        project_to_sphere(TRACKBALL_RADIUS, from.x, from.y),
    );
    let p_to = Vec3::new(to.x, to.y, project_to_sphere(TRACKBALL_RADIUS, to.x, to.y));

    let axis = p_from.cross(p_to);
    if axis.length_squared() < MIN_DRAG * MIN_DRAG {
        return Quat::IDENTITY;
    }

    // Classic trackball angle: how far the drag moved relative to the
    // sphere diameter, doubled so a cross-viewport drag turns the scene
    // roughly half way around.
    let t = ((p_to - p_from).length() / (2.0 * TRACKBALL_RADIUS)).clamp(-1.0, 1.0);
    let angle = 2.0 * t.asin();

    Quat::from_axis_angle(axis.normalize(), angle)
}

/// Convert a cursor position in window coordinates (origin top-left,
/// y down) to normalized viewport coordinates ([-1, 1] per axis, y up).
pub fn normalize_cursor(cursor: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        (2.0 * cursor.x - width) / width,
        (height - 2.0 * cursor.y) / height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn stationary_drag_is_identity() {
        let p = Vec2::new(0.3, -0.2);
        assert_eq!(drag_rotation(p, p), Quat::IDENTITY);
    }

    #[test]
    fn small_drag_is_unit_quaternion() {
        let q = drag_rotation(Vec2::new(0.0, 0.0), Vec2::new(0.1, 0.05));
        assert!(q.is_finite());
        assert_relative_eq!(q.length(), 1.0, epsilon = 1.0e-5);
    }

    #[test]
    fn large_drag_stays_well_defined() {
        // Endpoints far outside the unit circle land on the hyperbolic
        // sheet instead of producing NaN.
        let q = drag_rotation(Vec2::new(-0.95, -0.95), Vec2::new(0.95, 0.95));
        assert!(q.is_finite());
        assert_relative_eq!(q.length(), 1.0, epsilon = 1.0e-5);
    }

    #[test]
    fn opposite_drags_cancel() {
        let a = Vec2::new(-0.2, 0.1);
        let b = Vec2::new(0.25, -0.15);
        let forward = drag_rotation(a, b);
        let back = drag_rotation(b, a);

        let round_trip = back * forward;
        assert!(round_trip.angle_between(Quat::IDENTITY) < 1.0e-4);
    }

    #[test]
    fn horizontal_drag_rotates_about_vertical_axis() {
        let q = drag_rotation(Vec2::new(-0.2, 0.0), Vec2::new(0.2, 0.0));
        let (axis, angle) = q.to_axis_angle();

        assert!(angle > 0.0);
        assert_relative_eq!(axis.x, 0.0, epsilon = 1.0e-5);
        assert_relative_eq!(axis.z, 0.0, epsilon = 1.0e-5);
        assert_relative_eq!(axis.y.abs(), 1.0, epsilon = 1.0e-5);
    }

    #[test]
    fn drag_carries_front_point_toward_cursor() {
        // Dragging right should move the front of the sphere to the right.
        let q = drag_rotation(Vec2::new(0.0, 0.0), Vec2::new(0.3, 0.0));
        let front = q * Vec3::Z;
        assert!(front.x > 0.0);
    }

    #[test]
    fn projection_is_continuous_at_the_sheet_boundary() {
        let r = TRACKBALL_RADIUS;
        let boundary = r * std::f32::consts::FRAC_1_SQRT_2;

        let inside = project_to_sphere(r, boundary - 1.0e-4, 0.0);
        let outside = project_to_sphere(r, boundary + 1.0e-4, 0.0);
        assert_relative_eq!(inside, outside, epsilon = 1.0e-2);
    }

    #[test]
    fn cursor_normalization_maps_corners() {
        let (w, h) = (1280.0, 960.0);

        let center = normalize_cursor(Vec2::new(640.0, 480.0), w, h);
        assert_relative_eq!(center.x, 0.0);
        assert_relative_eq!(center.y, 0.0);

        let top_left = normalize_cursor(Vec2::new(0.0, 0.0), w, h);
        assert_relative_eq!(top_left.x, -1.0);
        assert_relative_eq!(top_left.y, 1.0);

        let bottom_right = normalize_cursor(Vec2::new(w, h), w, h);
        assert_relative_eq!(bottom_right.x, 1.0);
        assert_relative_eq!(bottom_right.y, -1.0);
    }
}
