//! Level domain: respawn management. Observes the death signal and puts the
//! body back at the active checkpoint; the controller never repositions
//! itself.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::character::Player;
use crate::core::PlayerDied;

/// The active respawn position. Checkpoint zones overwrite it as the player
/// progresses.
#[derive(Resource, Debug)]
pub struct RespawnPoint(pub Vec2);

impl Default for RespawnPoint {
    fn default() -> Self {
        Self(Vec2::new(0.0, 60.0))
    }
}

pub(crate) fn handle_player_died(
    mut died: MessageReader<PlayerDied>,
    respawn: Res<RespawnPoint>,
    mut query: Query<(&mut Transform, &mut LinearVelocity), With<Player>>,
) {
    if died.read().count() == 0 {
        return;
    }

    for (mut transform, mut velocity) in &mut query {
        transform.translation.x = respawn.0.x;
        transform.translation.y = respawn.0.y;
        velocity.0 = Vec2::ZERO;
        info!("Respawned at {:?}", respawn.0);
    }
}
