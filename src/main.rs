//! EarthView - Interactive Earth and Satellite Trajectory Viewer
//!
//! A desktop application rendering a textured Earth with day/night
//! blending and animated clouds, overlaying satellite trajectories loaded
//! from a data file, with trackball camera controls.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use earthview::camera::CameraPlugin;
use earthview::clock::ClockPlugin;
use earthview::input::InputPlugin;
use earthview::render::RenderPlugin;
use earthview::trajectory::TrajectoryPlugin;
use earthview::types::{AnimationState, DisplayToggles};
use earthview::ui::UiPlugin;

fn main() -> AppExit {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(AnimationState::default())
        .insert_resource(DisplayToggles::default())
        // Add viewer plugins
        .add_plugins((
            TrajectoryPlugin,
            CameraPlugin,
            ClockPlugin,
            InputPlugin,
            RenderPlugin,
            UiPlugin,
        ))
        .run()
}
