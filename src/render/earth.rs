//! Earth rendering: textured sphere with day/night blending and animated
//! clouds.
//!
//! The surface is a custom material whose fragment shader blends the day
//! and night maps across the terminator and drifts a cloud layer using a
//! gradient-noise map. Per-frame uniforms (sun position, cloud time) come
//! from [`AnimationState`].

use bevy::prelude::*;
use bevy::render::render_resource::AsBindGroup;
use bevy::shader::ShaderRef;

use crate::camera::ViewPivot;
use crate::scene;
use crate::types::AnimationState;

use super::textures::{
    self, CLOUD_TEXTURE_PATH, DAY_TEXTURE_PATH, NIGHT_TEXTURE_PATH, NOISE_TEXTURE_PATH,
};

/// Longitude/latitude segments of the Earth sphere mesh.
const SPHERE_SEGMENTS: u32 = 64;

/// Marker component for the Earth entity.
#[derive(Component)]
pub struct Earth;

/// Custom material for the Earth surface.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct EarthMaterial {
    /// Sun position in scene units (w unused).
    #[uniform(0)]
    pub sun_position: Vec4,
    /// x: elapsed simulated time driving cloud drift; y, z, w unused.
    #[uniform(1)]
    pub params: Vec4,
    /// Day-side color map. `None` leaves the slot unbound.
    #[texture(2)]
    #[sampler(3)]
    pub day_texture: Option<Handle<Image>>,
    /// Night-side city-lights map.
    #[texture(4)]
    #[sampler(5)]
    pub night_texture: Option<Handle<Image>>,
    /// Cloud cover map.
    #[texture(6)]
    #[sampler(7)]
    pub cloud_texture: Option<Handle<Image>>,
    /// Gradient noise for cloud distortion.
    #[texture(8)]
    #[sampler(9)]
    pub noise_texture: Option<Handle<Image>>,
}

impl Material for EarthMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/earth.wgsl".into()
    }
}

/// Plugin providing the Earth entity and its per-frame updates.
pub struct EarthPlugin;

impl Plugin for EarthPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<EarthMaterial>::default())
            .add_systems(PostStartup, spawn_earth)
            .add_systems(Update, (sync_earth_rotation, update_earth_material));
    }
}

/// Spawn the Earth sphere as a child of the scene pivot.
fn spawn_earth(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<EarthMaterial>>,
    mut images: ResMut<Assets<Image>>,
    pivot_query: Query<Entity, With<ViewPivot>>,
) {
    let Ok(pivot) = pivot_query.single() else {
        return;
    };

    let mesh = meshes.add(Sphere::new(1.0).mesh().uv(SPHERE_SEGMENTS, SPHERE_SEGMENTS));

    let material = materials.add(EarthMaterial {
        sun_position: scene::sun_position(&AnimationState::default()).extend(1.0),
        params: Vec4::ZERO,
        day_texture: textures::load_texture(DAY_TEXTURE_PATH, true, &mut images),
        night_texture: textures::load_texture(NIGHT_TEXTURE_PATH, true, &mut images),
        cloud_texture: textures::load_texture(CLOUD_TEXTURE_PATH, true, &mut images),
        noise_texture: textures::load_texture(NOISE_TEXTURE_PATH, false, &mut images),
    });

    commands.entity(pivot).with_children(|parent| {
        parent.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::IDENTITY,
            Earth,
        ));
    });
}

/// Apply the Earth's self-rotation about the vertical axis.
///
/// Only the Earth spins: satellite markers and trails live directly under
/// the pivot and orbit in an independent inertial frame.
fn sync_earth_rotation(
    state: Res<AnimationState>,
    mut earth_query: Query<&mut Transform, With<Earth>>,
) {
    let Ok(mut transform) = earth_query.single_mut() else {
        return;
    };
    transform.rotation = scene::earth_rotation(&state);
}

/// Push the sun position and cloud time into the Earth material.
fn update_earth_material(
    state: Res<AnimationState>,
    mut materials: ResMut<Assets<EarthMaterial>>,
    earth_query: Query<&MeshMaterial3d<EarthMaterial>, With<Earth>>,
) {
    let Ok(handle) = earth_query.single() else {
        return;
    };
    let Some(material) = materials.get_mut(&handle.0) else {
        return;
    };

    material.sun_position = scene::sun_position(&state).extend(1.0);
    material.params.x = state.elapsed;
}
