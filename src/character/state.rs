//! Character domain: the externally visible character state and its
//! per-tick derivation.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::abilities::{AbilityKind, AbilityState};
use crate::character::components::{GroundContact, Player};
use crate::core::{DialogueEnded, DialogueStarted};

/// Horizontal speeds below this read as Idle on the ground.
pub const IDLE_SPEED_THRESHOLD: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateKind {
    #[default]
    Idle,
    Running,
    Jumping,
    MidAir,
    HitStun,
    Dead,
    Dialogue,
    Cutscene,
    Puff,
    RoundAbout,
    Spiral,
}

impl StateKind {
    /// States written directly by triggers and pinned against re-derivation.
    pub fn is_sticky(self) -> bool {
        matches!(self, StateKind::Jumping | StateKind::Dialogue)
    }
}

/// The published character state. Derived values are recomputed every tick;
/// an override (Jumping, Dialogue) pins the state until the owning
/// transition clears it, so the evaluator can never clobber it mid-window.
#[derive(Component, Debug, Default)]
pub struct CharacterState {
    kind: StateKind,
    held: bool,
}

impl CharacterState {
    pub fn kind(&self) -> StateKind {
        self.kind
    }

    pub fn is(&self, kind: StateKind) -> bool {
        self.kind == kind
    }

    /// Pins a sticky state. Non-sticky kinds are rejected: a defect in
    /// development, logged and ignored in release.
    pub fn set_override(&mut self, kind: StateKind) {
        if !kind.is_sticky() {
            debug_assert!(false, "set_override with non-sticky state {kind:?}");
            error!("ignoring override with non-sticky state {:?}", kind);
            return;
        }
        self.kind = kind;
        self.held = true;
    }

    /// Releases the current override, landing on `to` until the next
    /// derivation pass. No-op when nothing is pinned.
    pub fn clear_override(&mut self, to: StateKind) {
        if self.held {
            self.kind = to;
            self.held = false;
        }
    }

    /// Applies a derived value. Ignored while an override is pinned.
    pub fn apply_derived(&mut self, kind: StateKind) {
        if !self.held {
            self.kind = kind;
        }
    }
}

/// Derives the state from this tick's data. Total over its inputs: grounded
/// bodies read Idle/Running by speed, airborne bodies read the active
/// ability (at most one can be active) or MidAir.
pub fn derive_state(
    grounded: bool,
    horizontal_speed: f32,
    active_ability: Option<AbilityKind>,
) -> StateKind {
    if grounded {
        if horizontal_speed < IDLE_SPEED_THRESHOLD {
            StateKind::Idle
        } else {
            StateKind::Running
        }
    } else {
        match active_ability {
            Some(AbilityKind::Puff) => StateKind::Puff,
            Some(AbilityKind::RoundAbout) => StateKind::RoundAbout,
            Some(AbilityKind::Spiral) => StateKind::Spiral,
            // Inert abilities never stay active; an airborne body without a
            // live ability is simply mid-air.
            Some(_) | None => StateKind::MidAir,
        }
    }
}

/// Runs last in the tick: publishes the derived state unless a sticky
/// override is pinned.
pub(crate) fn evaluate_state(
    mut query: Query<
        (&GroundContact, &LinearVelocity, &AbilityState, &mut CharacterState),
        With<Player>,
    >,
) {
    for (contact, velocity, abilities, mut state) in &mut query {
        let derived = derive_state(contact.grounded, velocity.x.abs(), abilities.active_kind());
        state.apply_derived(derived);
    }
}

/// Applies dialogue start/end signals from scripts to the sticky state.
pub(crate) fn apply_dialogue_messages(
    mut started: MessageReader<DialogueStarted>,
    mut ended: MessageReader<DialogueEnded>,
    mut query: Query<&mut CharacterState, With<Player>>,
) {
    let begin = started.read().count() > 0;
    let end = ended.read().count() > 0;

    for mut state in &mut query {
        if begin {
            state.set_override(StateKind::Dialogue);
        }
        if end && state.is(StateKind::Dialogue) {
            state.clear_override(StateKind::Idle);
        }
    }
}
