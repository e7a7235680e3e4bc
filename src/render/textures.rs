//! Texture decoding for the Earth surface layers.
//!
//! PNG decoding is delegated to the `image` crate. A texture that fails to
//! decode is reported and its material slot left unbound, which makes the
//! renderer fall back to a flat placeholder instead of crashing.

use std::path::Path;

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;

/// NASA Blue Marble day-side color map.
pub const DAY_TEXTURE_PATH: &str = "assets/textures/earth_day.png";

/// Black Marble city-lights map shown on the night side.
pub const NIGHT_TEXTURE_PATH: &str = "assets/textures/earth_night.png";

/// Cloud cover map, drifted over time in the shader.
pub const CLOUD_TEXTURE_PATH: &str = "assets/textures/earth_clouds.png";

/// Gradient-noise map used to wobble the cloud drift.
pub const NOISE_TEXTURE_PATH: &str = "assets/textures/noise.png";

/// Decode a PNG into a GPU image asset.
///
/// Returns `None` (leaving the material slot unbound) when the file is
/// missing or undecodable; the failure is logged and rendering continues
/// degraded.
pub fn load_texture(
    path: impl AsRef<Path>,
    is_srgb: bool,
    images: &mut Assets<Image>,
) -> Option<Handle<Image>> {
    let path = path.as_ref();
    match image::open(path) {
        Ok(decoded) => {
            let decoded = decoded.to_rgba8();
            info!(
                "Loaded texture {}: {}x{}",
                path.display(),
                decoded.width(),
                decoded.height()
            );
            Some(images.add(Image::from_dynamic(
                decoded.into(),
                is_srgb,
                RenderAssetUsages::RENDER_WORLD,
            )))
        }
        Err(err) => {
            warn!("Texture load error for {}: {err}", path.display());
            None
        }
    }
}
