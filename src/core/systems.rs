//! Core domain: camera and time-scale systems.

use bevy::prelude::*;

use crate::character::Player;
use crate::core::math::smooth_damp_vec2;
use crate::core::resources::SimulationControl;

/// Smooth-damped follow camera.
#[derive(Component, Debug)]
pub struct CameraRig {
    pub offset: Vec2,
    pub smooth_time: f32,
    velocity: Vec2,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            offset: Vec2::new(0.0, 40.0),
            smooth_time: 0.3,
            velocity: Vec2::ZERO,
        }
    }
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, CameraRig::default()));
}

/// Publishes the effective time scale to virtual time. Runs every frame so a
/// release is picked up immediately.
pub(crate) fn apply_time_scale(
    control: Res<SimulationControl>,
    mut time: ResMut<Time<Virtual>>,
) {
    let scale = control.effective_time_scale();
    if (time.relative_speed() - scale).abs() > f32::EPSILON {
        time.set_relative_speed(scale);
    }
}

pub(crate) fn camera_follow(
    time: Res<Time>,
    player_query: Query<&Transform, (With<Player>, Without<CameraRig>)>,
    mut camera_query: Query<(&mut Transform, &mut CameraRig)>,
) {
    let Ok(player_transform) = player_query.single() else {
        return;
    };

    for (mut transform, mut rig) in &mut camera_query {
        let current = transform.translation.truncate();
        let target = player_transform.translation.truncate() + rig.offset;

        let mut velocity = rig.velocity;
        let next = smooth_damp_vec2(current, target, &mut velocity, rig.smooth_time, time.delta_secs());
        rig.velocity = velocity;

        transform.translation.x = next.x;
        transform.translation.y = next.y;
    }
}
