//! Abilities domain: the eight-variant volt-jump engine. One ability may be
//! active at a time; landing cancels whatever is live and refills the
//! charge.

mod components;
mod engine;
mod kind;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{AbilityState, ActiveAbility, ArmedAbility, RoundAboutDrive, VoltCharge};
pub use engine::{Activation, try_activate};
pub use kind::AbilityKind;
pub use resources::{AbilityTuning, Progression};

use bevy::prelude::*;

use crate::core::{TickSet, movement_enabled};

pub struct AbilitiesPlugin;

impl Plugin for AbilitiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            systems::roundabout_retarget.run_if(movement_enabled),
        )
        .add_systems(
            FixedUpdate,
            systems::cancel_on_landing.in_set(TickSet::Reconcile),
        )
        .add_systems(
            FixedUpdate,
            (
                systems::activate_on_press,
                (
                    systems::puff_hold,
                    systems::roundabout_drive,
                    systems::roundabout_probe,
                )
                    .chain()
                    .run_if(movement_enabled),
                systems::apply_body_nudges,
            )
                .chain()
                .in_set(TickSet::Abilities),
        );
    }
}
