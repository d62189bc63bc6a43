//! Character domain: player spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::abilities::{AbilityState, AbilityTuning, ArmedAbility, VoltCharge};
use crate::character::GameLayer;
use crate::character::components::{Facing, GroundContact, GroundSensor, JumpHold, Player};
use crate::character::resources::CharacterTuning;
use crate::character::state::CharacterState;

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<CharacterTuning>,
    abilities: Res<AbilityTuning>,
) {
    let size = tuning.collider_size;

    info!(
        "Spawning player: collider={}x{}, charge_max={}",
        size.x, size.y, abilities.charge_max
    );

    commands.spawn((
        // Identity & controller state
        (
            Player,
            Facing::default(),
            GroundSensor {
                box_size: tuning.ground_box_size,
                cast_offset: tuning.ground_cast_offset,
                cast_distance: tuning.ground_cast_distance,
            },
            GroundContact::default(),
            JumpHold::default(),
            CharacterState::default(),
        ),
        // Abilities
        (
            AbilityState::default(),
            ArmedAbility::default(),
            VoltCharge::new(abilities.charge_max),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.95, 0.85, 0.55),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(0.0, 60.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(size.x, size.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(1.0),
            LinearDamping(tuning.air_linear_damping),
            ExternalForce::default().with_persistence(false),
            ExternalImpulse::default().with_persistence(false),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [
                    GameLayer::Ground,
                    GameLayer::Wall,
                    GameLayer::Breakable,
                    GameLayer::Trigger,
                ],
            ),
        ),
    ));
}
