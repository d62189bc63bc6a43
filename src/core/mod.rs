//! Core domain: simulation control, fixed-tick ordering, camera, and
//! cross-domain events.

mod events;
mod math;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use events::{AnimationTrigger, BodyNudge, DialogueEnded, DialogueStarted, PlayerDied};
pub use math::{smooth_damp, smooth_damp_vec2};
pub use resources::{AnimatorValues, SimulationControl, movement_enabled};
pub use systems::CameraRig;

use bevy::prelude::*;

/// Ordering of the per-tick simulation chain. Every fixed-step system in the
/// crate lives in exactly one of these sets; the sets run strictly in order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// Ground sensing. Result is cached for the rest of the tick.
    Sense,
    /// Landing reconciliation: ability cancellation and charge refill.
    Reconcile,
    /// Jump hold bookkeeping and base locomotion forces.
    Locomotion,
    /// Active ability ticks and external nudges.
    Abilities,
    /// Damping and animator value publication.
    Post,
    /// State evaluation, always last.
    Evaluate,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationControl>()
            .init_resource::<AnimatorValues>()
            .add_message::<PlayerDied>()
            .add_message::<DialogueStarted>()
            .add_message::<DialogueEnded>()
            .add_message::<BodyNudge>()
            .add_message::<AnimationTrigger>()
            .configure_sets(
                FixedUpdate,
                (
                    TickSet::Sense,
                    TickSet::Reconcile,
                    TickSet::Locomotion,
                    TickSet::Abilities,
                    TickSet::Post,
                    TickSet::Evaluate,
                )
                    .chain(),
            )
            .add_systems(Startup, systems::setup_camera)
            .add_systems(Update, (systems::apply_time_scale, systems::camera_follow));
    }
}
