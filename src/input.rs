//! Keyboard input handling.
//!
//! Single-key toggles for playback, display options, and speed, matching
//! the controls listed in the startup banner and the help overlay.

use bevy::app::AppExit;
use bevy::prelude::*;

use crate::types::{AnimationState, DisplayToggles};
use crate::ui::HelpOverlayState;

/// Plugin providing keyboard shortcut handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, log_controls)
            .add_systems(Update, keyboard_shortcuts);
    }
}

/// Handle single-key shortcuts for playback and display control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<AnimationState>,
    mut toggles: ResMut<DisplayToggles>,
    mut help: ResMut<HelpOverlayState>,
    mut exit: MessageWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }

    if keys.just_pressed(KeyCode::Space) {
        state.paused = !state.paused;
        info!("{}", if state.paused { "Paused" } else { "Playing" });
    }

    if keys.just_pressed(KeyCode::KeyW) {
        toggles.wireframe = !toggles.wireframe;
        info!("Wireframe: {}", on_off(toggles.wireframe));
    }

    if keys.just_pressed(KeyCode::KeyS) {
        toggles.show_satellites = !toggles.show_satellites;
        info!("Satellites: {}", on_off(toggles.show_satellites));
    }

    if keys.just_pressed(KeyCode::KeyT) {
        toggles.show_trails = !toggles.show_trails;
        info!("Trails: {}", on_off(toggles.show_trails));
    }

    if keys.just_pressed(KeyCode::KeyA) {
        state.auto_rotate = !state.auto_rotate;
        info!("Auto-rotate: {}", on_off(state.auto_rotate));
    }

    if keys.just_pressed(KeyCode::ArrowUp) {
        state.speed_up();
        info!("Speed: {}x", state.playback_speed);
    }

    if keys.just_pressed(KeyCode::ArrowDown) {
        state.slow_down();
        info!("Speed: {}x", state.playback_speed);
    }

    if keys.just_pressed(KeyCode::ArrowLeft) {
        state.rotation_slower();
        info!("Rotation speed: {} deg/tick", state.rotation_speed);
    }

    if keys.just_pressed(KeyCode::ArrowRight) {
        state.rotation_faster();
        info!("Rotation speed: {} deg/tick", state.rotation_speed);
    }

    if keys.just_pressed(KeyCode::KeyR) {
        state.reset();
        info!("Reset to frame 0");
    }

    if keys.just_pressed(KeyCode::KeyH) {
        help.visible = !help.visible;
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "ON" } else { "OFF" }
}

/// Print the control reference once at startup.
fn log_controls() {
    info!("=== Earth Viewer Controls ===");
    info!("Mouse drag    - Rotate view");
    info!("Shift + drag  - Zoom");
    info!("Alt + drag    - Pan");
    info!("SPACE         - Pause/Play");
    info!("A             - Toggle auto-rotate");
    info!("S             - Toggle satellites");
    info!("T             - Toggle trails");
    info!("W             - Toggle wireframe");
    info!("UP/DOWN       - Satellite animation speed");
    info!("LEFT/RIGHT    - Earth rotation speed");
    info!("R             - Reset animation");
    info!("H             - Help overlay");
    info!("ESC           - Quit");
}
