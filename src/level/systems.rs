//! Level domain: trigger volume systems.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::character::Player;
use crate::core::{BodyNudge, PlayerDied};
use crate::level::components::{CheckpointZone, Pit, WindZone};
use crate::level::respawn::RespawnPoint;

/// Pits kill on contact. The respawn manager does the rest.
pub(crate) fn pit_contact(
    mut died: MessageWriter<PlayerDied>,
    player_query: Query<Entity, With<Player>>,
    pits: Query<&CollidingEntities, With<Pit>>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };

    for colliding in &pits {
        if colliding.contains(&player) {
            died.write(PlayerDied);
            return;
        }
    }
}

/// Wind fields request an additive nudge once per entry. Whether the body
/// actually takes it is the controller's call (dash state only).
pub(crate) fn wind_zones(
    mut nudges: MessageWriter<BodyNudge>,
    player_query: Query<Entity, With<Player>>,
    mut zones: Query<(&mut WindZone, &CollidingEntities)>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };

    for (mut zone, colliding) in &mut zones {
        let inside = colliding.contains(&player);

        if inside && !zone.was_inside {
            nudges.write(BodyNudge {
                impulse: zone.impulse(),
            });
        }

        zone.was_inside = inside;
    }
}

/// Checkpoints update the respawn point directly, bypassing the controller.
pub(crate) fn checkpoint_zones(
    mut respawn: ResMut<RespawnPoint>,
    player_query: Query<Entity, With<Player>>,
    zones: Query<(&Transform, &CollidingEntities), With<CheckpointZone>>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };

    for (transform, colliding) in &zones {
        if colliding.contains(&player) {
            let point = transform.translation.truncate();
            if respawn.0 != point {
                info!("Checkpoint reached at {:?}", point);
                respawn.0 = point;
            }
        }
    }
}
