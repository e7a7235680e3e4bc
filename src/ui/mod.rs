//! UI module providing the egui status bar, help overlay, and window
//! title.

mod help;
mod status_bar;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiPrimaryContextPass;

use crate::types::{AnimationState, DisplayToggles};

pub use help::HelpOverlayState;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HelpOverlayState>()
            .add_systems(
                EguiPrimaryContextPass,
                (status_bar::status_bar, help::help_overlay),
            )
            .add_systems(Update, update_window_title);
    }
}

/// Keep the window title in sync with the display state.
///
/// The title only changes when a toggle or the speed does, so the string
/// is cached and winit is touched only on an actual change.
fn update_window_title(
    state: Res<AnimationState>,
    toggles: Res<DisplayToggles>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mut last: Local<String>,
) {
    let Ok(mut window) = windows.single_mut() else {
        return;
    };

    let title = format!(
        "Earth Viewer | Sats: {} | Trails: {} | Rotate: {} | Speed: {:.1}x | [H] Help",
        on_off(toggles.show_satellites),
        on_off(toggles.show_trails),
        on_off(state.auto_rotate),
        state.playback_speed,
    );

    if *last != title {
        window.title = title.clone();
        *last = title;
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "ON" } else { "OFF" }
}
