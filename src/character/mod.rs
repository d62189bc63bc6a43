//! Character domain: ground sensing, locomotion, jump mechanics, and the
//! derived character state.

mod bootstrap;
mod components;
mod resources;
mod state;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{Facing, GroundContact, GroundSensor, JumpHold, Player};
pub use resources::{CharacterTuning, ControlState};
pub use state::{CharacterState, StateKind, derive_state};

use bevy::prelude::*;

use crate::core::{TickSet, movement_enabled};

/// Physics layers for collision filtering.
#[derive(avian2d::prelude::PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Destructible blocks, consumed by the dash probe
    Breakable,
    /// Player character
    Player,
    /// Sensor volumes (pits, wind, checkpoints) - never block movement
    Trigger,
}

pub struct CharacterPlugin;

impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlState>()
            .add_systems(Startup, bootstrap::spawn_player)
            .add_systems(
                Update,
                (systems::input::read_input, systems::locomotion::sync_facing_sprite),
            )
            .add_systems(
                FixedUpdate,
                systems::ground::detect_ground.in_set(TickSet::Sense),
            )
            .add_systems(
                FixedUpdate,
                (
                    systems::locomotion::update_jump_hold.run_if(movement_enabled),
                    // Consumes the press edge itself so a press made while
                    // movement is locked is dropped, not deferred.
                    systems::locomotion::ground_jump,
                    systems::locomotion::apply_run.run_if(movement_enabled),
                )
                    .chain()
                    .in_set(TickSet::Locomotion),
            )
            .add_systems(
                FixedUpdate,
                (
                    systems::locomotion::apply_damping,
                    systems::locomotion::publish_animator_values,
                )
                    .in_set(TickSet::Post),
            )
            .add_systems(
                FixedUpdate,
                (state::apply_dialogue_messages, state::evaluate_state)
                    .chain()
                    .in_set(TickSet::Evaluate),
            );
    }
}
