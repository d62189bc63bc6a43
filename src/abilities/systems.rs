//! Abilities domain: per-tick ability drives and the landing reconciler.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::abilities::components::{AbilityState, ActiveAbility, ArmedAbility, VoltCharge};
use crate::abilities::engine::{Activation, try_activate};
use crate::abilities::resources::AbilityTuning;
use crate::character::{CharacterState, ControlState, Facing, GameLayer, GroundContact, Player, StateKind};
use crate::core::{AnimationTrigger, BodyNudge, SimulationControl, smooth_damp_vec2};
use crate::level::CrackedBlock;

/// Edge-triggered activation of the armed volt jump.
pub(crate) fn activate_on_press(
    mut input: ResMut<ControlState>,
    control: Res<SimulationControl>,
    tuning: Res<AbilityTuning>,
    mut anim: MessageWriter<AnimationTrigger>,
    mut query: Query<
        (
            &ArmedAbility,
            &mut VoltCharge,
            &mut AbilityState,
            &mut Facing,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    if !input.take_volt_pressed() {
        return;
    }

    let held_dir = input.axis.x;

    for (armed, mut charge, mut state, mut facing, mut velocity, mut gravity) in &mut query {
        let outcome = try_activate(
            armed.0,
            control.movement_enabled(),
            held_dir,
            &mut charge,
            &mut state,
            &mut facing,
            &mut velocity,
            &mut gravity,
            &tuning,
        );

        match outcome {
            Activation::Fired(kind) => {
                anim.write(AnimationTrigger::AbilityUsed);
                if !kind.has_drive() {
                    anim.write(AnimationTrigger::AbilityReset);
                }
                debug!("Volt jump fired: {}", kind.name());
            }
            Activation::FreePuff => debug!("Charge-free puff"),
            Activation::NoCharge | Activation::Blocked => {}
        }
    }
}

/// Landing reconciliation: every grounded tick refills the meter and
/// cancels whatever ability is live, before locomotion runs.
pub(crate) fn cancel_on_landing(
    mut anim: MessageWriter<AnimationTrigger>,
    mut query: Query<
        (
            &GroundContact,
            &mut VoltCharge,
            &mut AbilityState,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    for (contact, mut charge, mut state, mut velocity, mut gravity) in &mut query {
        if !contact.grounded {
            continue;
        }

        charge.refill();

        if let Some(kind) = state.cancel_all(&mut velocity, &mut gravity) {
            anim.write(AnimationTrigger::AbilityReset);
            debug!("Landing cancelled {}", kind.name());
        }
    }
}

/// Puff: vertical velocity is pinned to zero every tick the mode is live.
/// Horizontal control is untouched.
pub(crate) fn puff_hold(
    mut query: Query<(&AbilityState, &mut LinearVelocity), With<Player>>,
) {
    for (state, mut velocity) in &mut query {
        if matches!(state.active(), Some(ActiveAbility::Puff { .. })) {
            velocity.y = 0.0;
        }
    }
}

/// Frame-rate recomputation of the dash target. The next fixed step
/// consumes whatever this produced last.
pub(crate) fn roundabout_retarget(
    tuning: Res<AbilityTuning>,
    mut query: Query<(&mut AbilityState, &LinearVelocity), With<Player>>,
) {
    for (mut state, velocity) in &mut query {
        let vel_y = velocity.y;
        if let Some(ActiveAbility::RoundAbout(drive)) = state.active_mut() {
            drive.retarget(tuning.roundabout_force, vel_y);
        }
    }
}

/// Fixed-step dash drive: advances the active window and smooths the body's
/// velocity toward the target with a critically damped filter. Expiry
/// halves the horizontal target and shortens the smoothing time, producing
/// a decaying tail rather than a cutoff.
pub(crate) fn roundabout_drive(
    time: Res<Time>,
    tuning: Res<AbilityTuning>,
    mut query: Query<(&mut AbilityState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut state, mut velocity) in &mut query {
        let vel_y = velocity.y;
        let Some(ActiveAbility::RoundAbout(drive)) = state.active_mut() else {
            continue;
        };

        drive.elapsed += dt;
        if !drive.expired && drive.elapsed >= tuning.roundabout_active_duration {
            drive.expired = true;
            drive.retarget(tuning.roundabout_force, vel_y);
        }

        let smooth_time = if drive.expired {
            tuning.roundabout_tail_smooth_time
        } else {
            tuning.roundabout_smooth_time
        };

        let mut smoothing = drive.smoothing;
        velocity.0 = smooth_damp_vec2(velocity.0, drive.target, &mut smoothing, smooth_time, dt);
        drive.smoothing = smoothing;
    }
}

/// Forward collision probe of the dash: walls bounce the dash back
/// (flipping orientation and re-arming the window), cracked blocks are
/// consumed.
pub(crate) fn roundabout_probe(
    mut commands: Commands,
    spatial_query: SpatialQuery,
    tuning: Res<AbilityTuning>,
    breakables: Query<(), With<CrackedBlock>>,
    mut query: Query<(&Transform, &mut AbilityState, &mut Facing), With<Player>>,
) {
    let filter = SpatialQueryFilter::from_mask([
        GameLayer::Ground,
        GameLayer::Wall,
        GameLayer::Breakable,
    ]);

    for (transform, mut state, mut facing) in &mut query {
        let Some(ActiveAbility::RoundAbout(drive)) = state.active_mut() else {
            continue;
        };

        let origin = transform.translation.truncate();
        let direction = if drive.direction >= 0.0 { Dir2::X } else { Dir2::NEG_X };
        let shape =
            Collider::rectangle(tuning.roundabout_probe_size.x, tuning.roundabout_probe_size.y);
        let config = ShapeCastConfig::from_max_distance(tuning.roundabout_probe_distance);

        let Some(hit) = spatial_query.cast_shape(&shape, origin, 0.0, direction, &config, &filter)
        else {
            continue;
        };

        if breakables.contains(hit.entity) {
            commands.entity(hit.entity).despawn();
            debug!("Dash consumed a cracked block");
        } else {
            drive.bounce(tuning.roundabout_force);
            *facing = facing.from_direction(drive.direction);
            debug!("Wall bounce");
        }
    }
}

/// Applies additive impulses requested by level volumes. The window is
/// deliberately narrow: only a body published as RoundAbout takes them.
pub(crate) fn apply_body_nudges(
    mut nudges: MessageReader<BodyNudge>,
    mut query: Query<(&CharacterState, &mut ExternalImpulse), With<Player>>,
) {
    for nudge in nudges.read() {
        for (state, mut impulse) in &mut query {
            if state.is(StateKind::RoundAbout) {
                impulse.apply_impulse(nudge.impulse);
            }
        }
    }
}
