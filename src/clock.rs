//! Animation clock: fixed-step advancement decoupled from frame rate.
//!
//! Real frame deltas accumulate while unpaused; once a full 60 Hz interval
//! has elapsed the animation advances by exactly one tick and the
//! accumulator resets to zero. Fast displays therefore never advance the
//! animation faster than 60 steps per second, and at most one step happens
//! per rendered frame.

use bevy::prelude::*;

use crate::trajectory::TrajectoryStore;
use crate::types::{AnimationState, TICK_RATE};

/// Wall-clock time banked toward the next animation tick.
#[derive(Resource, Default, Debug)]
pub struct TickAccumulator(pub f32);

/// Plugin driving [`AnimationState`] from the render loop.
pub struct ClockPlugin;

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TickAccumulator>()
            .add_systems(Update, advance_animation);
    }
}

/// Advance the animation when a full tick interval has accumulated.
fn advance_animation(
    time: Res<Time>,
    mut accumulator: ResMut<TickAccumulator>,
    mut state: ResMut<AnimationState>,
    store: Res<TrajectoryStore>,
) {
    if state.paused {
        return;
    }

    accumulator.0 += time.delta_secs();
    if accumulator.0 < 1.0 / TICK_RATE {
        return;
    }

    state.tick(store.controlling_len());
    accumulator.0 = 0.0;
}
