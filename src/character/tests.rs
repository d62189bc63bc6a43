//! Character domain: unit tests for locomotion laws and state derivation.

use super::components::Facing;
use super::state::{CharacterState, StateKind, derive_state};
use super::systems::locomotion::{drive_force, jump_hold_step};
use crate::abilities::AbilityKind;

#[test]
fn test_drive_force_proportional_law() {
    // Grounded, input +1, max 5, rate 2, at rest: force = 1 * (5 - 0) * 2.
    assert_eq!(drive_force(1.0, 5.0, 0.0, 2.0), 10.0);
}

#[test]
fn test_drive_force_vanishes_at_target_speed() {
    assert_eq!(drive_force(1.0, 5.0, 5.0, 2.0), 0.0);
}

#[test]
fn test_drive_force_leftward() {
    assert_eq!(drive_force(-1.0, 5.0, 0.0, 2.0), -10.0);
}

#[test]
fn test_facing_flips_only_on_opposite_direction() {
    let facing = Facing::Left;
    assert_eq!(facing.from_direction(1.0), Facing::Right);
    assert_eq!(facing.from_direction(-1.0), Facing::Left);
    // No input keeps the current facing.
    assert_eq!(facing.from_direction(0.0), Facing::Left);
    assert_eq!(Facing::Right.sign(), 1.0);
    assert_eq!(Facing::Left.sign(), -1.0);
}

#[test]
fn test_jump_hold_release_exits_and_resets() {
    let (timer, exited) = jump_hold_step(0.1, 0.016, false, 0.25);
    assert!(exited);
    assert_eq!(timer, 0.0);
}

#[test]
fn test_jump_hold_timeout_exits_and_resets() {
    let (timer, exited) = jump_hold_step(0.24, 0.016, true, 0.25);
    assert!(exited);
    assert_eq!(timer, 0.0);
}

#[test]
fn test_jump_hold_advances_while_held_under_max() {
    let (timer, exited) = jump_hold_step(0.1, 0.016, true, 0.25);
    assert!(!exited);
    assert!((timer - 0.116).abs() < 1e-6);
}

#[test]
fn test_jump_hold_exits_exactly_once_per_window() {
    // Simulate a full hold window; exactly one tick reports the exit.
    let mut timer = 0.0;
    let mut exits = 0;
    for _ in 0..30 {
        let (next, exited) = jump_hold_step(timer, 0.016, true, 0.25);
        timer = next;
        if exited {
            exits += 1;
        }
    }
    assert_eq!(exits, 1);
    // After the exit the timer restarted from zero.
    assert!(timer < 0.25);
}

#[test]
fn test_derive_state_grounded_by_speed() {
    assert_eq!(derive_state(true, 0.05, None), StateKind::Idle);
    assert_eq!(derive_state(true, 3.0, None), StateKind::Running);
}

#[test]
fn test_derive_state_airborne_ability_priority() {
    assert_eq!(derive_state(false, 0.0, None), StateKind::MidAir);
    assert_eq!(
        derive_state(false, 0.0, Some(AbilityKind::Puff)),
        StateKind::Puff
    );
    assert_eq!(
        derive_state(false, 0.0, Some(AbilityKind::RoundAbout)),
        StateKind::RoundAbout
    );
    assert_eq!(
        derive_state(false, 0.0, Some(AbilityKind::Spiral)),
        StateKind::Spiral
    );
}

#[test]
fn test_derive_state_is_total_over_inert_kinds() {
    // Inert abilities never hold an active drive, but the derivation still
    // answers for them.
    assert_eq!(
        derive_state(false, 0.0, Some(AbilityKind::Glide)),
        StateKind::MidAir
    );
}

#[test]
fn test_sticky_override_blocks_derivation() {
    let mut state = CharacterState::default();
    state.set_override(StateKind::Jumping);

    state.apply_derived(StateKind::Idle);
    assert_eq!(state.kind(), StateKind::Jumping);

    state.clear_override(StateKind::MidAir);
    assert_eq!(state.kind(), StateKind::MidAir);

    state.apply_derived(StateKind::Running);
    assert_eq!(state.kind(), StateKind::Running);
}

#[test]
fn test_clear_override_without_override_is_noop() {
    let mut state = CharacterState::default();
    state.apply_derived(StateKind::Running);

    state.clear_override(StateKind::MidAir);
    assert_eq!(state.kind(), StateKind::Running);
}

#[test]
fn test_dialogue_override_survives_until_cleared() {
    let mut state = CharacterState::default();
    state.set_override(StateKind::Dialogue);

    for _ in 0..10 {
        state.apply_derived(StateKind::Idle);
    }
    assert_eq!(state.kind(), StateKind::Dialogue);

    state.clear_override(StateKind::Idle);
    assert_eq!(state.kind(), StateKind::Idle);
}

#[test]
#[should_panic]
fn test_override_with_non_sticky_state_is_a_defect() {
    let mut state = CharacterState::default();
    state.set_override(StateKind::Running);
}
