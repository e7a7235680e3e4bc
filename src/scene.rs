//! Pure scene-composition math.
//!
//! Everything here is a plain function of camera and animation state, so
//! the per-frame transform pipeline can be tested without a graphics
//! context. The render systems apply the same compositions through the
//! entity hierarchy: the camera sits at `(0, 0, VIEWER_DISTANCE)` and the
//! scene pivot carries `T(pan) * R(orientation) * S(scale)`.

use bevy::math::{Mat4, Quat, Vec3};

use crate::camera::{CameraState, FAR_PLANE, FOV_DEGREES, NEAR_PLANE, VIEWER_DISTANCE};
use crate::types::AnimationState;

/// Radius of the sun's orbit around the scene, in scene units.
pub const SUN_DISTANCE: f32 = 10.0;

/// View transform: viewer translation, pan, accumulated trackball
/// rotation, and scale, composed in that order.
pub fn view_matrix(camera: &CameraState) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -VIEWER_DISTANCE))
        * Mat4::from_translation(camera.pan.extend(0.0))
        * Mat4::from_quat(camera.orientation)
        * Mat4::from_scale(Vec3::splat(camera.scale))
}

/// Perspective projection for the given viewport size.
pub fn projection_matrix(width: f32, height: f32) -> Mat4 {
    Mat4::perspective_rh(
        FOV_DEGREES.to_radians(),
        width / height,
        NEAR_PLANE,
        FAR_PLANE,
    )
}

/// Earth self-rotation about the vertical axis.
pub fn earth_rotation(state: &AnimationState) -> Quat {
    Quat::from_rotation_y(state.earth_rotation.to_radians())
}

/// Full Earth model transform: camera view x self-rotation. The mesh's
/// intrinsic orientation is identity (UV sphere poles already on Y).
pub fn earth_model_matrix(camera: &CameraState, state: &AnimationState) -> Mat4 {
    view_matrix(camera) * Mat4::from_quat(earth_rotation(state))
}

/// Sun position for the current sun-orbit angle: a circle of radius
/// [`SUN_DISTANCE`] in the horizontal plane, fixed relative to the viewer.
pub fn sun_position(state: &AnimationState) -> Vec3 {
    let radians = state.sun_angle.rem_euclid(360.0).to_radians();
    Vec3::new(
        SUN_DISTANCE * radians.cos(),
        0.0,
        SUN_DISTANCE * radians.sin(),
    )
}
