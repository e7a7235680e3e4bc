//! Help overlay listing the keyboard and mouse controls.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

/// Resource for help overlay visibility, toggled with H.
#[derive(Resource, Default)]
pub struct HelpOverlayState {
    pub visible: bool,
}

/// Control reference shown in the overlay.
const CONTROLS: &[(&str, &str)] = &[
    ("Mouse drag", "Rotate view"),
    ("Shift + drag", "Zoom"),
    ("Alt + drag", "Pan"),
    ("SPACE", "Pause / play"),
    ("A", "Toggle auto-rotate"),
    ("S", "Toggle satellites"),
    ("T", "Toggle trails"),
    ("W", "Toggle wireframe"),
    ("UP / DOWN", "Satellite animation speed"),
    ("LEFT / RIGHT", "Earth rotation speed"),
    ("R", "Reset animation"),
    ("H", "This help"),
    ("ESC", "Quit"),
];

/// System that renders the help overlay while visible.
pub fn help_overlay(mut contexts: EguiContexts, mut state: ResMut<HelpOverlayState>) {
    if !state.visible {
        return;
    }
    let Some(ctx) = contexts.ctx_mut().ok() else {
        return;
    };

    let mut open = state.visible;
    egui::Window::new("Controls")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            for (key, action) in CONTROLS {
                ui.horizontal(|ui| {
                    ui.monospace(format!("{key:<14}"));
                    ui.label(*action);
                });
            }
        });
    state.visible = open;
}
