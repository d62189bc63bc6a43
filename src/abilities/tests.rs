//! Abilities domain: unit tests for activation, cancellation, and the dash
//! drive.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{AbilityState, ActiveAbility, RoundAboutDrive, VoltCharge};
use super::engine::{Activation, try_activate};
use super::kind::AbilityKind;
use super::resources::{AbilityTuning, Progression};
use crate::character::Facing;

struct Body {
    charge: VoltCharge,
    state: AbilityState,
    facing: Facing,
    velocity: LinearVelocity,
    gravity: GravityScale,
}

fn body_with_charge(charge: u32) -> Body {
    // A fresh meter starts empty; refill tops it up to the requested max.
    let mut volt = VoltCharge::new(charge.max(1));
    if charge > 0 {
        volt.refill();
    }
    Body {
        charge: volt,
        state: AbilityState::default(),
        facing: Facing::Right,
        velocity: LinearVelocity(Vec2::ZERO),
        gravity: GravityScale(1.0),
    }
}

fn activate(body: &mut Body, kind: AbilityKind, movement_allowed: bool, held_dir: f32) -> Activation {
    try_activate(
        kind,
        movement_allowed,
        held_dir,
        &mut body.charge,
        &mut body.state,
        &mut body.facing,
        &mut body.velocity,
        &mut body.gravity,
        &AbilityTuning::default(),
    )
}

#[test]
fn test_spiral_activation_spends_charge_and_swaps_gravity() {
    let tuning = AbilityTuning::default();
    let mut body = body_with_charge(1);

    let outcome = activate(&mut body, AbilityKind::Spiral, true, 0.0);

    assert_eq!(outcome, Activation::Fired(AbilityKind::Spiral));
    assert_eq!(body.charge.current(), 0);
    assert_eq!(body.gravity.0, tuning.spiral_gravity_scale);
    assert!(body.state.is_active(AbilityKind::Spiral));
}

#[test]
fn test_landing_cancels_and_refills_within_one_tick() {
    // Spiral active, then ground contact: the reconciler cancels and
    // refills in the same tick.
    let mut body = body_with_charge(1);
    activate(&mut body, AbilityKind::Spiral, true, 0.0);

    body.charge.refill();
    body.state.cancel_all(&mut body.velocity, &mut body.gravity);

    assert_eq!(body.state.active_kind(), None);
    assert_eq!(body.charge.current(), body.charge.max());
    assert_eq!(body.gravity.0, 1.0, "default gravity scale restored");
}

#[test]
fn test_no_charge_non_puff_is_a_noop() {
    let mut body = body_with_charge(0);
    body.velocity = LinearVelocity(Vec2::new(3.0, -2.0));

    let outcome = activate(&mut body, AbilityKind::Spiral, true, 0.0);

    assert_eq!(outcome, Activation::NoCharge);
    assert_eq!(body.charge.current(), 0);
    assert_eq!(body.state.active_kind(), None);
    assert_eq!(body.gravity.0, 1.0);
    assert_eq!(body.velocity.0, Vec2::new(3.0, -2.0));
}

#[test]
fn test_puff_fires_free_with_empty_meter() {
    let mut body = body_with_charge(0);
    body.velocity = LinearVelocity(Vec2::new(0.0, 120.0));

    let outcome = activate(&mut body, AbilityKind::Puff, true, 0.0);

    assert_eq!(outcome, Activation::FreePuff);
    assert_eq!(body.charge.current(), 0);
    assert!(body.state.is_active(AbilityKind::Puff));
}

#[test]
fn test_movement_lock_blocks_even_puff() {
    let mut body = body_with_charge(1);

    let outcome = activate(&mut body, AbilityKind::Puff, false, 0.0);

    assert_eq!(outcome, Activation::Blocked);
    assert_eq!(body.charge.current(), 1);
    assert_eq!(body.state.active_kind(), None);
}

#[test]
fn test_puff_cancel_restores_half_momentum() {
    let mut body = body_with_charge(1);
    body.velocity = LinearVelocity(Vec2::new(0.0, -180.0));

    activate(&mut body, AbilityKind::Puff, true, 0.0);
    // The mode pins vertical velocity to zero while live.
    body.velocity.y = 0.0;

    let cancelled = body.state.cancel_all(&mut body.velocity, &mut body.gravity);

    assert_eq!(cancelled, Some(AbilityKind::Puff));
    assert_eq!(body.velocity.y, -90.0);
}

#[test]
fn test_activation_cancels_previous_ability_first() {
    let mut body = body_with_charge(2);
    body.velocity = LinearVelocity(Vec2::new(0.0, 100.0));

    activate(&mut body, AbilityKind::Puff, true, 0.0);
    body.velocity.y = 0.0;

    let outcome = activate(&mut body, AbilityKind::Spiral, true, 0.0);

    assert_eq!(outcome, Activation::Fired(AbilityKind::Spiral));
    // Puff's restore ran before Spiral took over.
    assert_eq!(body.velocity.y, 50.0);
    assert!(body.state.is_active(AbilityKind::Spiral));
}

#[test]
fn test_at_most_one_ability_active() {
    let mut body = body_with_charge(3);

    activate(&mut body, AbilityKind::Puff, true, 0.0);
    activate(&mut body, AbilityKind::RoundAbout, true, 1.0);
    activate(&mut body, AbilityKind::Spiral, true, 0.0);

    assert_eq!(body.state.active_kind(), Some(AbilityKind::Spiral));
}

#[test]
fn test_cancel_all_is_idempotent() {
    let mut body = body_with_charge(1);
    body.velocity = LinearVelocity(Vec2::new(0.0, 60.0));
    activate(&mut body, AbilityKind::Puff, true, 0.0);

    let first = body.state.cancel_all(&mut body.velocity, &mut body.gravity);
    let velocity_after_first = body.velocity.0;
    let gravity_after_first = body.gravity.0;

    let second = body.state.cancel_all(&mut body.velocity, &mut body.gravity);

    assert_eq!(first, Some(AbilityKind::Puff));
    assert_eq!(second, None);
    assert_eq!(body.velocity.0, velocity_after_first);
    assert_eq!(body.gravity.0, gravity_after_first);
}

#[test]
fn test_inert_slots_consume_charge_without_a_drive() {
    for kind in [
        AbilityKind::Bounce,
        AbilityKind::Nibble,
        AbilityKind::ZapLine,
        AbilityKind::CatchNChuck,
        AbilityKind::Glide,
    ] {
        let mut body = body_with_charge(1);
        let outcome = activate(&mut body, kind, true, 0.0);

        assert_eq!(outcome, Activation::Fired(kind));
        assert_eq!(body.charge.current(), 0);
        assert_eq!(body.state.active_kind(), None, "{} must stay inert", kind.name());
    }
}

#[test]
fn test_roundabout_uses_held_direction_and_reorients() {
    let mut body = body_with_charge(1);
    body.facing = Facing::Right;

    activate(&mut body, AbilityKind::RoundAbout, true, -1.0);

    assert_eq!(body.facing, Facing::Left);
    let Some(ActiveAbility::RoundAbout(drive)) = body.state.active() else {
        panic!("dash not active");
    };
    assert_eq!(drive.direction, -1.0);
    assert_eq!(drive.target.x, -AbilityTuning::default().roundabout_force.x);
}

#[test]
fn test_roundabout_falls_back_to_facing_without_input() {
    let mut body = body_with_charge(1);
    body.facing = Facing::Left;

    activate(&mut body, AbilityKind::RoundAbout, true, 0.0);

    let Some(ActiveAbility::RoundAbout(drive)) = body.state.active() else {
        panic!("dash not active");
    };
    assert_eq!(drive.direction, -1.0);
    assert_eq!(body.facing, Facing::Left);
}

#[test]
fn test_roundabout_target_halves_after_expiry() {
    // Target before expiry (6, 2); after expiry (3, current vy).
    let force = Vec2::new(6.0, 2.0);
    let mut drive = RoundAboutDrive::new(1.0, force);
    assert_eq!(drive.target, Vec2::new(6.0, 2.0));

    drive.expired = true;
    drive.retarget(force, -4.0);

    assert_eq!(drive.target, Vec2::new(3.0, -4.0));
}

#[test]
fn test_roundabout_bounce_flips_and_rearms() {
    let force = Vec2::new(6.0, 2.0);
    let mut drive = RoundAboutDrive::new(1.0, force);
    drive.elapsed = 0.3;
    drive.expired = true;

    drive.bounce(force);

    assert_eq!(drive.direction, -1.0);
    assert_eq!(drive.elapsed, 0.0);
    assert!(!drive.expired);
    assert_eq!(drive.target, Vec2::new(-6.0, 2.0));
}

#[test]
fn test_volt_charge_bounds() {
    let mut charge = VoltCharge::new(2);
    assert!(charge.is_empty());
    assert!(!charge.spend(), "spending an empty meter changes nothing");

    charge.refill();
    assert_eq!(charge.current(), 2);

    assert!(charge.spend());
    assert!(charge.spend());
    assert!(!charge.spend());
    assert_eq!(charge.current(), 0);
}

#[test]
fn test_progression_ceiling_clamps_allowed_slots() {
    let progression = Progression::from_ceiling_index(3);
    assert!(progression.allows(AbilityKind::Puff));
    assert!(progression.allows(AbilityKind::Nibble));
    assert!(!progression.allows(AbilityKind::Spiral));
    assert!(!progression.allows(AbilityKind::Glide));
}

#[test]
fn test_ability_indices_round_trip() {
    for (index, kind) in AbilityKind::ALL.iter().enumerate() {
        assert_eq!(kind.index(), index);
        assert_eq!(AbilityKind::from_index(index), Some(*kind));
    }
    assert_eq!(AbilityKind::from_index(8), None);
}
