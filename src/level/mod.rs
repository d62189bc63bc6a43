//! Level domain: trigger volumes, respawn management, and the demo arena.
//! Everything here is a thin collaborator around the controller's entry
//! points; none of it owns character state.

mod arena;
mod components;
mod respawn;
mod systems;

pub use components::{CheckpointZone, CrackedBlock, Ground, Pit, Wall, WindZone};
pub use respawn::RespawnPoint;

use bevy::prelude::*;

use crate::core::TickSet;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RespawnPoint>()
            .add_systems(Startup, arena::spawn_arena)
            .add_systems(
                FixedUpdate,
                (
                    systems::pit_contact,
                    systems::wind_zones,
                    systems::checkpoint_zones,
                )
                    .in_set(TickSet::Sense),
            )
            .add_systems(
                FixedUpdate,
                respawn::handle_player_died.in_set(TickSet::Reconcile),
            );
    }
}
