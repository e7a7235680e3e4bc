//! Satellite rendering: current-position markers and trailing paths.
//!
//! Each non-empty trajectory gets a small unlit marker sphere under the
//! scene pivot, moved to the trajectory's current frame every tick. Trails
//! are drawn per frame with gizmo line strips in a dimmed, half-opacity
//! version of the trajectory color.

use bevy::prelude::*;

use crate::camera::ViewPivot;
use crate::trajectory::{Trajectory, TrajectoryStore};
use crate::types::{AnimationState, DisplayToggles};

/// Number of trailing positions drawn behind each satellite.
pub const TRAIL_LENGTH: usize = 100;

/// Marker sphere radius in scene units (Earth radius = 1).
pub const MARKER_RADIUS: f32 = 0.02;

/// Component tying a marker entity to its trajectory index in the store.
#[derive(Component)]
pub struct SatelliteMarker {
    /// Index into [`TrajectoryStore::trajectories`].
    pub index: usize,
}

/// Plugin providing satellite markers and trail drawing.
pub struct SatellitePlugin;

impl Plugin for SatellitePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostStartup, spawn_markers)
            .add_systems(Update, (sync_markers, draw_trails));
    }
}

/// Full-opacity marker color for a trajectory.
fn marker_color(trajectory: &Trajectory) -> Color {
    let c = trajectory.color;
    Color::srgb(c.x, c.y, c.z)
}

/// Dimmed, half-opacity trail color for a trajectory.
fn trail_color(trajectory: &Trajectory) -> Color {
    let c = trajectory.color * 0.5;
    Color::srgba(c.x, c.y, c.z, 0.5)
}

/// Spawn one marker per non-empty trajectory under the scene pivot.
fn spawn_markers(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    store: Res<TrajectoryStore>,
    pivot_query: Query<Entity, With<ViewPivot>>,
) {
    if store.is_empty() {
        return;
    }
    let Ok(pivot) = pivot_query.single() else {
        return;
    };

    let mesh = meshes.add(Sphere::new(MARKER_RADIUS));

    commands.entity(pivot).with_children(|parent| {
        for (index, trajectory) in store.iter().enumerate() {
            if trajectory.is_empty() {
                continue;
            }

            let material = materials.add(StandardMaterial {
                base_color: marker_color(trajectory),
                unlit: true,
                ..default()
            });

            parent.spawn((
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material),
                Transform::from_translation(trajectory.positions[0]),
                SatelliteMarker { index },
            ));
        }
    });

    info!("Spawned {} satellite markers", store.len());
}

/// Move each marker to its trajectory's current frame and apply the
/// satellite visibility toggle.
fn sync_markers(
    state: Res<AnimationState>,
    toggles: Res<DisplayToggles>,
    store: Res<TrajectoryStore>,
    mut markers: Query<(&SatelliteMarker, &mut Transform, &mut Visibility)>,
) {
    for (marker, mut transform, mut visibility) in &mut markers {
        *visibility = if toggles.show_satellites {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };

        let Some(trajectory) = store.trajectories.get(marker.index) else {
            continue;
        };
        if let Some(position) = trajectory.current_position(state.frame) {
            transform.translation = position;
        }
    }
}

/// Draw the trailing window of each trajectory as a connected line path.
///
/// Trail points are fixed in the pivot frame: they follow the trackball
/// but not the Earth's self-rotation.
fn draw_trails(
    mut gizmos: Gizmos,
    state: Res<AnimationState>,
    toggles: Res<DisplayToggles>,
    store: Res<TrajectoryStore>,
    pivot_query: Query<&GlobalTransform, With<ViewPivot>>,
) {
    if !toggles.show_satellites || !toggles.show_trails {
        return;
    }
    let Ok(pivot) = pivot_query.single() else {
        return;
    };

    for trajectory in store.iter() {
        let window = trajectory.trail_window(state.frame, TRAIL_LENGTH);
        if window.len() < 2 {
            continue;
        }

        gizmos.linestrip(
            window.iter().map(|p| pivot.transform_point(*p)),
            trail_color(trajectory),
        );
    }
}
