//! Trackball camera for the Earth viewer.
//!
//! Pointer drags accumulate into a rotation quaternion, with pan and scale
//! as independent offsets. The accumulated state is applied to a scene
//! pivot entity each frame; the camera entity itself never moves.

pub mod trackball;

#[cfg(test)]
mod proptest_trackball;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use self::trackball::{drag_rotation, normalize_cursor};

/// Distance from the camera to the scene origin in scene units.
pub const VIEWER_DISTANCE: f32 = 3.0;

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 45.0;

/// Near clip plane.
pub const NEAR_PLANE: f32 = 0.1;

/// Far clip plane.
pub const FAR_PLANE: f32 = 100.0;

/// Minimum scene scale factor. Keeps the scale strictly positive no matter
/// how far a scale drag goes.
pub const MIN_SCALE: f32 = 0.01;

/// Maximum scene scale factor.
pub const MAX_SCALE: f32 = 100.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Marker component for the scene pivot that carries the trackball
/// transform. The Earth and all satellite markers are children of this
/// entity.
#[derive(Component)]
pub struct ViewPivot;

/// What the current pointer drag manipulates.
///
/// Selected once when the drag begins and frozen until the button is
/// released; modifier keys pressed mid-drag have no effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragMode {
    /// No drag in progress.
    #[default]
    Idle,
    /// Plain drag: rotate the trackball.
    Rotating,
    /// Alt-drag: translate the scene in the view plane.
    Panning,
    /// Shift-drag: scale the scene.
    Scaling,
}

/// Resource tracking accumulated camera state.
#[derive(Resource, Clone, Debug)]
pub struct CameraState {
    /// Accumulated trackball orientation. Unit norm; renormalized after
    /// every composition.
    pub orientation: Quat,
    /// Accumulated pan offset in the view plane, normalized by viewport
    /// size.
    pub pan: Vec2,
    /// Scene scale factor, clamped to [`MIN_SCALE`, `MAX_SCALE`].
    pub scale: f32,
    /// Current interaction mode.
    pub mode: DragMode,
    /// Last pointer position in window coordinates, valid while dragging.
    pub last_cursor: Vec2,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            orientation: Quat::IDENTITY,
            pan: Vec2::ZERO,
            scale: 1.0,
            mode: DragMode::Idle,
            last_cursor: Vec2::ZERO,
        }
    }
}

impl CameraState {
    /// Start a drag: record the mode and the starting pointer position.
    pub fn begin_drag(&mut self, mode: DragMode, cursor: Vec2) {
        self.mode = mode;
        self.last_cursor = cursor;
    }

    /// Continue the current drag to a new pointer position within a
    /// viewport of the given size.
    pub fn drag_to(&mut self, cursor: Vec2, viewport: Vec2) {
        let last = self.last_cursor;

        match self.mode {
            DragMode::Idle => return,
            DragMode::Rotating => {
                let from = normalize_cursor(last, viewport.x, viewport.y);
                let to = normalize_cursor(cursor, viewport.x, viewport.y);
                self.orientation = (drag_rotation(from, to) * self.orientation).normalize();
            }
            DragMode::Panning => {
                self.pan += Vec2::new(
                    (cursor.x - last.x) / viewport.x,
                    (last.y - cursor.y) / viewport.y,
                );
            }
            DragMode::Scaling => {
                let dx = (cursor.x - last.x) / viewport.x;
                self.scale = (self.scale * (1.0 + dx)).clamp(MIN_SCALE, MAX_SCALE);
            }
        }

        self.last_cursor = cursor;
    }

    /// End the current drag; no further mutation until the next begin.
    pub fn end_drag(&mut self) {
        self.mode = DragMode::Idle;
    }
}

/// Plugin providing the camera entity, scene pivot, and drag handling.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraState>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (trackball_drag, apply_camera_to_pivot).chain());
    }
}

/// Spawn the perspective camera and the scene pivot it orbits.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, VIEWER_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));

    commands.spawn((Transform::IDENTITY, Visibility::default(), ViewPivot));
}

/// Drive the trackball from mouse input.
///
/// Mode is chosen from the modifier keys held at button press and kept
/// until release. Drags that start over the UI are ignored, but a drag
/// already in progress keeps updating even when the pointer crosses a UI
/// panel.
fn trackball_drag(
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut camera: ResMut<CameraState>,
    mut contexts: EguiContexts,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    if mouse.just_pressed(MouseButton::Left) && camera.mode == DragMode::Idle {
        if let Ok(ctx) = contexts.ctx_mut() {
            if ctx.wants_pointer_input() {
                return;
            }
        }

        let Some(cursor) = window.cursor_position() else {
            return;
        };

        let shift = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);
        let alt = keys.pressed(KeyCode::AltLeft) || keys.pressed(KeyCode::AltRight);

        let mode = if shift {
            DragMode::Scaling
        } else if alt {
            DragMode::Panning
        } else {
            DragMode::Rotating
        };

        camera.begin_drag(mode, cursor);
        return;
    }

    if mouse.pressed(MouseButton::Left) && camera.mode != DragMode::Idle {
        if let Some(cursor) = window.cursor_position() {
            let viewport = Vec2::new(window.width(), window.height());
            camera.drag_to(cursor, viewport);
        }
    }

    if mouse.just_released(MouseButton::Left) {
        camera.end_drag();
    }
}

/// Copy the accumulated camera state onto the scene pivot transform.
fn apply_camera_to_pivot(
    camera: Res<CameraState>,
    mut pivot_query: Query<&mut Transform, With<ViewPivot>>,
) {
    if !camera.is_changed() {
        return;
    }

    let Ok(mut transform) = pivot_query.single_mut() else {
        return;
    };

    transform.translation = camera.pan.extend(0.0);
    transform.rotation = camera.orientation;
    transform.scale = Vec3::splat(camera.scale);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const VIEWPORT: Vec2 = Vec2::new(1280.0, 960.0);

    #[test]
    fn one_mode_at_a_time() {
        let mut camera = CameraState::default();
        assert_eq!(camera.mode, DragMode::Idle);

        camera.begin_drag(DragMode::Rotating, Vec2::new(100.0, 100.0));
        assert_eq!(camera.mode, DragMode::Rotating);

        camera.end_drag();
        assert_eq!(camera.mode, DragMode::Idle);
    }

    #[test]
    fn idle_drag_mutates_nothing() {
        let mut camera = CameraState::default();
        camera.drag_to(Vec2::new(500.0, 500.0), VIEWPORT);

        assert_eq!(camera.orientation, Quat::IDENTITY);
        assert_eq!(camera.pan, Vec2::ZERO);
        assert_eq!(camera.scale, 1.0);
    }

    #[test]
    fn rotation_accumulates_and_stays_unit() {
        let mut camera = CameraState::default();
        camera.begin_drag(DragMode::Rotating, Vec2::new(400.0, 400.0));

        for i in 1..=50 {
            let cursor = Vec2::new(400.0 + 8.0 * i as f32, 400.0 + 3.0 * i as f32);
            camera.drag_to(cursor, VIEWPORT);
            assert_relative_eq!(camera.orientation.length(), 1.0, epsilon = 1.0e-4);
        }

        assert_ne!(camera.orientation, Quat::IDENTITY);
    }

    #[test]
    fn pan_accumulates_pointer_deltas() {
        let mut camera = CameraState::default();
        camera.begin_drag(DragMode::Panning, Vec2::new(0.0, 0.0));
        camera.drag_to(Vec2::new(128.0, 96.0), VIEWPORT);

        // Normalized by viewport size; window y points down, pan y up.
        assert_relative_eq!(camera.pan.x, 0.1);
        assert_relative_eq!(camera.pan.y, -0.1);

        camera.drag_to(Vec2::new(256.0, 0.0), VIEWPORT);
        assert_relative_eq!(camera.pan.x, 0.2);
        assert_relative_eq!(camera.pan.y, 0.0);
    }

    #[test]
    fn scale_never_reaches_zero() {
        let mut camera = CameraState::default();
        camera.begin_drag(DragMode::Scaling, Vec2::new(1280.0, 0.0));

        // Keep dragging hard to the left; each step multiplies by
        // (1 + dx) with dx close to -1.
        for _ in 0..100 {
            camera.last_cursor = Vec2::new(1280.0, 0.0);
            camera.drag_to(Vec2::new(0.0, 0.0), VIEWPORT);
            assert!(camera.scale >= MIN_SCALE);
        }
    }

    #[test]
    fn scale_is_multiplicative() {
        let mut camera = CameraState::default();
        camera.begin_drag(DragMode::Scaling, Vec2::new(0.0, 0.0));
        camera.drag_to(Vec2::new(640.0, 0.0), VIEWPORT);

        // Half-viewport drag right: scale *= 1.5.
        assert_relative_eq!(camera.scale, 1.5);
    }

    #[test]
    fn mode_is_frozen_until_release() {
        let mut camera = CameraState::default();
        camera.begin_drag(DragMode::Panning, Vec2::ZERO);
        camera.drag_to(Vec2::new(100.0, 0.0), VIEWPORT);

        // Still panning: rotation untouched.
        assert_eq!(camera.mode, DragMode::Panning);
        assert_eq!(camera.orientation, Quat::IDENTITY);
    }
}
