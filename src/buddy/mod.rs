//! Buddy domain: the floating companion. Purely reactive: follows the
//! character with a smooth-damped lag and mirrors the charge count.

use bevy::prelude::*;

use crate::abilities::VoltCharge;
use crate::character::Player;
use crate::core::smooth_damp_vec2;

#[derive(Component, Debug)]
pub struct VoltBuddy {
    pub offset: Vec2,
    pub smooth_time: f32,
    velocity: Vec2,
    /// Mirrored charge count, the companion's own copy of the value.
    pub count: u32,
}

impl Default for VoltBuddy {
    fn default() -> Self {
        Self {
            offset: Vec2::new(-34.0, 36.0),
            smooth_time: 0.25,
            velocity: Vec2::ZERO,
            count: 0,
        }
    }
}

pub struct BuddyPlugin;

impl Plugin for BuddyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_buddy)
            .add_systems(Update, (follow_player, mirror_count));
    }
}

fn spawn_buddy(mut commands: Commands) {
    commands.spawn((
        VoltBuddy::default(),
        Sprite {
            color: Color::srgb(0.95, 0.9, 0.35),
            custom_size: Some(Vec2::splat(14.0)),
            ..default()
        },
        Transform::from_xyz(-34.0, 96.0, 0.5),
    ));
}

fn follow_player(
    time: Res<Time>,
    player_query: Query<&Transform, (With<Player>, Without<VoltBuddy>)>,
    mut buddy_query: Query<(&mut Transform, &mut VoltBuddy)>,
) {
    let Ok(player_transform) = player_query.single() else {
        return;
    };

    for (mut transform, mut buddy) in &mut buddy_query {
        let current = transform.translation.truncate();
        let target = player_transform.translation.truncate() + buddy.offset;

        let mut velocity = buddy.velocity;
        let next =
            smooth_damp_vec2(current, target, &mut velocity, buddy.smooth_time, time.delta_secs());
        buddy.velocity = velocity;

        transform.translation.x = next.x;
        transform.translation.y = next.y;
    }
}

fn mirror_count(
    player_query: Query<&VoltCharge, With<Player>>,
    mut buddy_query: Query<(&mut VoltBuddy, &mut Sprite)>,
) {
    let Ok(charge) = player_query.single() else {
        return;
    };

    for (mut buddy, mut sprite) in &mut buddy_query {
        if buddy.count != charge.current() {
            buddy.count = charge.current();
        }

        // Dim while the meter is empty.
        sprite.color = if buddy.count == 0 {
            Color::srgb(0.45, 0.43, 0.25)
        } else {
            Color::srgb(0.95, 0.9, 0.35)
        };
    }
}
