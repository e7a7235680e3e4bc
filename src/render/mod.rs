//! Rendering systems for the Earth viewer.
//!
//! Pure transform math lives in [`crate::scene`]; this module owns the
//! effectful boundary: entities, materials, gizmo draws, and the wireframe
//! toggle.

pub mod earth;
pub mod satellites;
pub mod textures;

use bevy::pbr::wireframe::{Wireframe, WireframePlugin};
use bevy::prelude::*;

use crate::types::DisplayToggles;

use self::earth::{Earth, EarthPlugin};
use self::satellites::SatellitePlugin;

// Re-export for use in other modules
pub use self::earth::EarthMaterial;
pub use self::satellites::SatelliteMarker;

/// Background clear color: nearly black with a hint of blue.
const CLEAR_COLOR: Color = Color::srgb(0.0, 0.0, 0.02);

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(CLEAR_COLOR))
            .add_plugins((WireframePlugin::default(), EarthPlugin, SatellitePlugin))
            .add_systems(Update, sync_wireframe);
    }
}

/// Mirror the wireframe toggle onto the Earth entity. Only the Earth mesh
/// is affected; satellite markers stay filled.
fn sync_wireframe(
    toggles: Res<DisplayToggles>,
    mut commands: Commands,
    earth_query: Query<Entity, With<Earth>>,
) {
    if !toggles.is_changed() {
        return;
    }
    let Ok(earth) = earth_query.single() else {
        return;
    };

    if toggles.wireframe {
        commands.entity(earth).insert(Wireframe);
    } else {
        commands.entity(earth).remove::<Wireframe>();
    }
}
