//! Abilities domain: activation dispatch.

use avian2d::prelude::*;

use crate::abilities::components::{AbilityState, ActiveAbility, RoundAboutDrive, VoltCharge};
use crate::abilities::kind::AbilityKind;
use crate::abilities::resources::AbilityTuning;
use crate::character::Facing;

/// Outcome of one activation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Charge was spent and the ability dispatched.
    Fired(AbilityKind),
    /// The charge-free Puff fallback fired (slot 0 with an empty meter).
    FreePuff,
    /// Empty meter on a non-Puff slot. Soft no-op.
    NoCharge,
    /// Movement is disabled. Soft no-op.
    Blocked,
}

/// One edge-triggered activation attempt against the armed slot.
///
/// Preconditions per the engine contract: a charge available and movement
/// enabled. A failed check on slot 0 still fires the free Puff variant.
/// Activating anything first cancels whatever is currently active, running
/// its restore logic, then ownership of the affected axis transfers to the
/// new ability within the same tick.
#[allow(clippy::too_many_arguments)]
pub fn try_activate(
    kind: AbilityKind,
    movement_allowed: bool,
    held_dir: f32,
    charge: &mut VoltCharge,
    state: &mut AbilityState,
    facing: &mut Facing,
    velocity: &mut LinearVelocity,
    gravity: &mut GravityScale,
    tuning: &AbilityTuning,
) -> Activation {
    if !movement_allowed {
        return Activation::Blocked;
    }

    if charge.is_empty() {
        if kind == AbilityKind::Puff {
            state.cancel_all(velocity, gravity);
            enter_puff(state, velocity);
            return Activation::FreePuff;
        }
        return Activation::NoCharge;
    }

    charge.spend();
    state.cancel_all(velocity, gravity);

    match kind {
        AbilityKind::Puff => enter_puff(state, velocity),
        AbilityKind::RoundAbout => {
            // Dash in the held direction, or dead ahead when none is held.
            let direction = if held_dir != 0.0 {
                held_dir.signum()
            } else {
                facing.sign()
            };
            *facing = facing.from_direction(direction);
            state.enter(ActiveAbility::RoundAbout(RoundAboutDrive::new(
                direction,
                tuning.roundabout_force,
            )));
        }
        AbilityKind::Spiral => {
            state.enter(ActiveAbility::Spiral {
                default_gravity_scale: gravity.0,
            });
            gravity.0 = tuning.spiral_gravity_scale;
        }
        // Reserved slots: the charge is consumed and the trigger cycle runs,
        // but there is no drive to enter.
        AbilityKind::Bounce
        | AbilityKind::Nibble
        | AbilityKind::ZapLine
        | AbilityKind::CatchNChuck
        | AbilityKind::Glide => {}
    }

    Activation::Fired(kind)
}

fn enter_puff(state: &mut AbilityState, velocity: &LinearVelocity) {
    state.enter(ActiveAbility::Puff {
        saved_momentum_y: velocity.y,
    });
}
