//! Status bar at the bottom of the screen.
//!
//! Play/pause, playback speed, frame counter, display toggles, reset, and
//! help, mirroring the keyboard shortcuts.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::trajectory::TrajectoryStore;
use crate::types::{AnimationState, DisplayToggles};

use super::HelpOverlayState;

/// System that renders the status bar.
pub fn status_bar(
    mut contexts: EguiContexts,
    mut state: ResMut<AnimationState>,
    mut toggles: ResMut<DisplayToggles>,
    store: Res<TrajectoryStore>,
    mut help: ResMut<HelpOverlayState>,
) {
    let Some(ctx) = contexts.ctx_mut().ok() else {
        return;
    };

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            // Play/Pause button
            let icon = if state.paused { "\u{25B6}" } else { "\u{23F8}" };
            if ui
                .button(icon)
                .on_hover_text(if state.paused {
                    "Play (Space)"
                } else {
                    "Pause (Space)"
                })
                .clicked()
            {
                state.paused = !state.paused;
            }

            ui.separator();

            ui.monospace(format!("{}x", state.playback_speed));
            if store.controlling_len() > 0 {
                ui.monospace(format!(
                    "frame {:>4}/{}",
                    state.frame,
                    store.controlling_len()
                ));
            } else {
                ui.monospace("Earth-only mode");
            }

            ui.separator();

            if ui
                .selectable_label(toggles.show_satellites, "Sats")
                .on_hover_text("Toggle satellites (S)")
                .clicked()
            {
                toggles.show_satellites = !toggles.show_satellites;
            }
            if ui
                .selectable_label(toggles.show_trails, "Trails")
                .on_hover_text("Toggle trails (T)")
                .clicked()
            {
                toggles.show_trails = !toggles.show_trails;
            }
            if ui
                .selectable_label(state.auto_rotate, "Spin")
                .on_hover_text("Toggle auto-rotate (A)")
                .clicked()
            {
                state.auto_rotate = !state.auto_rotate;
            }
            if ui
                .selectable_label(toggles.wireframe, "Wire")
                .on_hover_text("Toggle wireframe (W)")
                .clicked()
            {
                toggles.wireframe = !toggles.wireframe;
            }

            ui.separator();

            if ui
                .button("\u{21BA}")
                .on_hover_text("Reset animation (R)")
                .clicked()
            {
                state.reset();
            }

            if ui.button("?").on_hover_text("Help (H)").clicked() {
                help.visible = !help.visible;
            }
        });
    });
}
