//! Character domain: locomotion systems for running, jumping, and damping.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::abilities::{AbilityKind, AbilityState, ArmedAbility};
use crate::character::components::{Facing, GroundContact, JumpHold, Player};
use crate::character::resources::{CharacterTuning, ControlState};
use crate::character::state::{CharacterState, StateKind};
use crate::core::{AnimationTrigger, AnimatorValues, SimulationControl};

/// Converts the tuned jump force into impulse units.
pub const IMPULSE_UNIT_SCALE: f32 = 1000.0;

/// The proportional drive law: force toward `max_vel` in `direction`,
/// shrinking as the body approaches the target speed. Only ever applied as
/// force, so damping and collisions still perturb the result.
pub fn drive_force(direction: f32, max_vel: f32, current_vel: f32, accel_rate: f32) -> f32 {
    direction * (max_vel - current_vel) * accel_rate
}

/// One step of the jump-hold window. Returns the advanced timer and whether
/// the window ends this tick. Release and timeout are the only exits, and a
/// tick reports at most one of them; the timer is zeroed on exit.
pub fn jump_hold_step(timer: f32, dt: f32, held: bool, max_held_time: f32) -> (f32, bool) {
    if !held {
        return (0.0, true);
    }

    let advanced = timer + dt;
    if advanced >= max_held_time {
        (0.0, true)
    } else {
        (advanced, false)
    }
}

/// Advances the jump-hold window while the state is Jumping. Release or
/// timeout clears the sticky state to MidAir and zeroes the timer; nothing
/// else ends the window.
pub(crate) fn update_jump_hold(
    time: Res<Time>,
    input: Res<ControlState>,
    tuning: Res<CharacterTuning>,
    mut query: Query<(&mut JumpHold, &mut LinearVelocity, &mut CharacterState), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut hold, mut velocity, mut state) in &mut query {
        if !state.is(StateKind::Jumping) {
            continue;
        }

        if input.jump_held {
            velocity.y += tuning.held_jump_force * dt;
        }

        let (timer, exited) = jump_hold_step(hold.timer, dt, input.jump_held, tuning.max_jump_held_time);
        hold.timer = timer;
        if exited {
            state.clear_override(StateKind::MidAir);
        }
    }
}

/// Edge-triggered grounded jump: consumes the press edge, applies the
/// upward impulse, pins the Jumping state, and fires the jump animation.
/// Presses while movement is locked are consumed and discarded.
pub(crate) fn ground_jump(
    mut input: ResMut<ControlState>,
    control: Res<SimulationControl>,
    tuning: Res<CharacterTuning>,
    mut anim: MessageWriter<AnimationTrigger>,
    mut query: Query<(&GroundContact, &mut ExternalImpulse, &mut CharacterState), With<Player>>,
) {
    if !input.take_jump_pressed() {
        return;
    }

    if !control.movement_enabled() {
        return;
    }

    for (contact, mut impulse, mut state) in &mut query {
        if !contact.grounded {
            continue;
        }

        impulse.apply_impulse(Vec2::Y * tuning.initial_jump_force * IMPULSE_UNIT_SCALE);
        state.set_override(StateKind::Jumping);
        anim.write(AnimationTrigger::JumpStart);
        debug!("Ground jump");
    }
}

/// Directional ground run / air drift. While the dash is active it owns the
/// horizontal axis and base air drift stands down.
pub(crate) fn apply_run(
    input: Res<ControlState>,
    tuning: Res<CharacterTuning>,
    mut query: Query<
        (
            &GroundContact,
            &AbilityState,
            &mut Facing,
            &mut ExternalForce,
            &LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let direction = input.axis.x;
    if direction == 0.0 {
        return;
    }

    for (contact, abilities, mut facing, mut force, velocity) in &mut query {
        if contact.grounded {
            let next = facing.from_direction(direction);
            if *facing != next {
                *facing = next;
            }

            let movement =
                drive_force(direction, tuning.ground_max_vel, velocity.x, tuning.ground_accel_rate);
            force.apply_force(Vec2::X * movement);
        } else {
            if abilities.is_active(AbilityKind::RoundAbout) {
                continue;
            }

            let movement =
                drive_force(direction, tuning.air_max_vel, velocity.x, tuning.air_accel_rate);
            force.apply_force(Vec2::X * movement);
        }
    }
}

/// Reapplies linear damping from ground state, unconditionally, every tick.
pub(crate) fn apply_damping(
    tuning: Res<CharacterTuning>,
    mut query: Query<(&GroundContact, &mut LinearDamping), With<Player>>,
) {
    for (contact, mut damping) in &mut query {
        damping.0 = if contact.grounded {
            tuning.ground_linear_damping
        } else {
            tuning.air_linear_damping
        };
    }
}

/// Mirrors the continuous animator inputs. Consumers of these values are
/// optional; publishing is unconditional.
pub(crate) fn publish_animator_values(
    mut values: ResMut<AnimatorValues>,
    query: Query<(&LinearVelocity, &GroundContact, &ArmedAbility), With<Player>>,
) {
    let Ok((velocity, contact, armed)) = query.single() else {
        return;
    };

    values.horizontal_speed = velocity.x.abs();
    values.grounded = contact.grounded;
    values.armed_slot = armed.0.index();
}

/// Keeps the sprite flipped to the facing direction.
pub(crate) fn sync_facing_sprite(mut query: Query<(&Facing, &mut Sprite), With<Player>>) {
    for (facing, mut sprite) in &mut query {
        sprite.flip_x = *facing == Facing::Left;
    }
}
