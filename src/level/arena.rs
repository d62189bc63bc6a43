//! Level domain: a static demo arena exercising every trigger type.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::character::GameLayer;
use crate::level::components::{CheckpointZone, CrackedBlock, Ground, Pit, Wall, WindZone};

pub(crate) fn spawn_arena(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let block_color = Color::srgb(0.6, 0.45, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);
    let breakable_layers = CollisionLayers::new(GameLayer::Breakable, [GameLayer::Player]);
    let trigger_layers = CollisionLayers::new(GameLayer::Trigger, [GameLayer::Player]);

    // Main floor, split so there is a pit gap in the middle right
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(700.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(-150.0, -200.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(700.0, 40.0),
        ground_layers,
    ));
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(300.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(450.0, -200.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(300.0, 40.0),
        ground_layers,
    ));

    // Pit volume under the gap
    commands.spawn((
        Pit,
        Transform::from_xyz(250.0, -320.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(200.0, 80.0),
        Sensor,
        CollisionEventsEnabled,
        CollidingEntities::default(),
        trigger_layers,
    ));

    // Boundary walls
    for x in [-520.0, 620.0] {
        commands.spawn((
            Wall,
            Sprite {
                color: wall_color,
                custom_size: Some(Vec2::new(40.0, 600.0)),
                ..default()
            },
            Transform::from_xyz(x, 60.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(40.0, 600.0),
            wall_layers,
        ));
    }

    // Platforms
    for (x, y, w) in [(-280.0, -60.0, 150.0), (0.0, 40.0, 120.0), (450.0, -80.0, 150.0)] {
        commands.spawn((
            Ground,
            Sprite {
                color: platform_color,
                custom_size: Some(Vec2::new(w, 20.0)),
                ..default()
            },
            Transform::from_xyz(x, y, 0.0),
            RigidBody::Static,
            Collider::rectangle(w, 20.0),
            ground_layers,
        ));
    }

    // Cracked blocks sealing the right ledge, breakable by the dash
    for y in [-150.0, -110.0] {
        commands.spawn((
            CrackedBlock,
            Sprite {
                color: block_color,
                custom_size: Some(Vec2::new(40.0, 40.0)),
                ..default()
            },
            Transform::from_xyz(280.0, y, 0.0),
            RigidBody::Static,
            Collider::rectangle(40.0, 40.0),
            breakable_layers,
        ));
    }

    // Updraft column over the pit
    commands.spawn((
        WindZone::new(Vec2::new(0.0, 1.0), 220.0),
        Transform::from_xyz(250.0, -100.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(120.0, 360.0),
        Sensor,
        CollisionEventsEnabled,
        CollidingEntities::default(),
        trigger_layers,
    ));

    // Checkpoint on the far ledge
    commands.spawn((
        CheckpointZone,
        Transform::from_xyz(450.0, -140.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(60.0, 80.0),
        Sensor,
        CollisionEventsEnabled,
        CollidingEntities::default(),
        trigger_layers,
    ));
}
