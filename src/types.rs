//! Core animation state and constants for the Earth viewer.

use bevy::prelude::*;

/// Animation ticks per second. The clock advances in fixed steps of
/// `1 / TICK_RATE` seconds regardless of the display refresh rate.
pub const TICK_RATE: f32 = 60.0;

/// Simulated seconds added to `elapsed` per tick at 1x speed. Drives the
/// cloud-layer drift in the Earth shader.
pub const TIME_STEP: f32 = 0.0001;

/// Wall-clock seconds for one full sun orbit at 1x speed.
pub const SUN_CYCLE_SECONDS: f32 = 25.0;

/// Minimum playback speed multiplier.
pub const MIN_PLAYBACK_SPEED: f32 = 0.125;

/// Maximum playback speed multiplier.
pub const MAX_PLAYBACK_SPEED: f32 = 16.0;

/// Default Earth self-rotation in degrees per tick.
pub const DEFAULT_ROTATION_SPEED: f32 = 0.08;

/// Minimum Earth self-rotation speed (degrees per tick).
pub const MIN_ROTATION_SPEED: f32 = 0.005;

/// Maximum Earth self-rotation speed (degrees per tick).
pub const MAX_ROTATION_SPEED: f32 = 5.12;

/// Animation state resource tracking simulated time, rotation angles, and
/// satellite playback.
///
/// Mutated in place for the lifetime of the process; nothing here persists
/// across runs.
#[derive(Resource, Clone, Debug)]
pub struct AnimationState {
    /// Elapsed simulated time in seconds.
    pub elapsed: f32,
    /// Earth self-rotation angle, wrapped to [0, 360).
    pub earth_rotation: f32,
    /// Sun-orbit angle in degrees. Unbounded; wrapped at the trig call site.
    pub sun_angle: f32,
    /// Global satellite playback frame index.
    pub frame: usize,
    /// Playback speed multiplier, clamped to
    /// [`MIN_PLAYBACK_SPEED`, `MAX_PLAYBACK_SPEED`].
    pub playback_speed: f32,
    /// Earth self-rotation speed in degrees per tick, clamped to
    /// [`MIN_ROTATION_SPEED`, `MAX_ROTATION_SPEED`].
    pub rotation_speed: f32,
    /// Whether playback is paused.
    pub paused: bool,
    /// Whether the Earth spins on its own axis each tick.
    pub auto_rotate: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            earth_rotation: 0.0,
            sun_angle: 0.0,
            frame: 0,
            playback_speed: 1.0,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            paused: false,
            auto_rotate: true,
        }
    }
}

impl AnimationState {
    /// Advance the animation by exactly one tick.
    ///
    /// `controlling_len` is the length of the longest loaded trajectory;
    /// the global frame index wraps there. Zero means no trajectory data,
    /// in which case the frame index stays put.
    ///
    /// A paused clock never changes state, no matter how often it is
    /// ticked.
    pub fn tick(&mut self, controlling_len: usize) {
        if self.paused {
            return;
        }

        self.elapsed += TIME_STEP * self.playback_speed;
        self.sun_angle += (360.0 / SUN_CYCLE_SECONDS) * (1.0 / TICK_RATE) * self.playback_speed;

        if self.auto_rotate {
            self.earth_rotation =
                (self.earth_rotation + self.rotation_speed * self.playback_speed).rem_euclid(360.0);
        }

        if controlling_len > 0 {
            self.frame = (self.frame + 1) % controlling_len;
        }
    }

    /// Double the playback speed, up to [`MAX_PLAYBACK_SPEED`].
    pub fn speed_up(&mut self) {
        self.playback_speed = (self.playback_speed * 2.0).min(MAX_PLAYBACK_SPEED);
    }

    /// Halve the playback speed, down to [`MIN_PLAYBACK_SPEED`].
    pub fn slow_down(&mut self) {
        self.playback_speed = (self.playback_speed * 0.5).max(MIN_PLAYBACK_SPEED);
    }

    /// Double the Earth self-rotation speed, up to [`MAX_ROTATION_SPEED`].
    pub fn rotation_faster(&mut self) {
        self.rotation_speed = (self.rotation_speed * 2.0).min(MAX_ROTATION_SPEED);
    }

    /// Halve the Earth self-rotation speed, down to [`MIN_ROTATION_SPEED`].
    pub fn rotation_slower(&mut self) {
        self.rotation_speed = (self.rotation_speed * 0.5).max(MIN_ROTATION_SPEED);
    }

    /// Reset playback to frame 0 and the Earth to its initial orientation.
    pub fn reset(&mut self) {
        self.frame = 0;
        self.earth_rotation = 0.0;
    }
}

/// Independent display toggles, each flipped by a single key.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DisplayToggles {
    /// Draw satellite position markers.
    pub show_satellites: bool,
    /// Draw trailing path segments behind each satellite.
    pub show_trails: bool,
    /// Render the Earth mesh as wireframe instead of filled.
    pub wireframe: bool,
}

impl Default for DisplayToggles {
    fn default() -> Self {
        Self {
            show_satellites: true,
            show_trails: true,
            wireframe: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn paused_tick_changes_nothing() {
        let mut state = AnimationState {
            paused: true,
            ..Default::default()
        };
        let before = state.clone();

        for _ in 0..1000 {
            state.tick(500);
        }

        assert_eq!(state.elapsed, before.elapsed);
        assert_eq!(state.earth_rotation, before.earth_rotation);
        assert_eq!(state.sun_angle, before.sun_angle);
        assert_eq!(state.frame, before.frame);
    }

    #[test]
    fn frame_index_stays_in_range() {
        let mut state = AnimationState::default();
        let len = 37;

        for _ in 0..10_000 {
            state.tick(len);
            assert!(state.frame < len);
        }
    }

    #[test]
    fn frame_index_wraps_to_zero() {
        let mut state = AnimationState::default();
        for _ in 0..5 {
            state.tick(5);
        }
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn frame_index_frozen_without_trajectories() {
        let mut state = AnimationState::default();
        for _ in 0..100 {
            state.tick(0);
        }
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn playback_speed_clamped() {
        let mut state = AnimationState::default();

        for _ in 0..50 {
            state.speed_up();
            assert!(state.playback_speed <= MAX_PLAYBACK_SPEED);
        }
        assert_eq!(state.playback_speed, MAX_PLAYBACK_SPEED);

        for _ in 0..50 {
            state.slow_down();
            assert!(state.playback_speed >= MIN_PLAYBACK_SPEED);
        }
        assert_eq!(state.playback_speed, MIN_PLAYBACK_SPEED);
    }

    #[test]
    fn rotation_speed_clamped() {
        let mut state = AnimationState::default();

        for _ in 0..50 {
            state.rotation_faster();
        }
        assert_relative_eq!(state.rotation_speed, MAX_ROTATION_SPEED);

        for _ in 0..50 {
            state.rotation_slower();
        }
        assert_relative_eq!(state.rotation_speed, MIN_ROTATION_SPEED);
    }

    #[test]
    fn earth_rotation_wraps() {
        let mut state = AnimationState {
            rotation_speed: MAX_ROTATION_SPEED,
            playback_speed: MAX_PLAYBACK_SPEED,
            ..Default::default()
        };

        for _ in 0..10_000 {
            state.tick(0);
            assert!((0.0..360.0).contains(&state.earth_rotation));
        }
    }

    #[test]
    fn reset_restores_frame_and_rotation() {
        let mut state = AnimationState::default();
        for _ in 0..17 {
            state.tick(100);
        }
        assert_ne!(state.frame, 0);

        state.reset();
        assert_eq!(state.frame, 0);
        assert_eq!(state.earth_rotation, 0.0);
    }
}
