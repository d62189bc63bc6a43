//! Abilities domain: runtime state for the volt-jump engine.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::abilities::kind::AbilityKind;

/// The currently armed volt jump, committed by the selector overlay.
#[derive(Component, Debug, Default)]
pub struct ArmedAbility(pub AbilityKind);

/// Bounded charge counter gating activation. Refilled to max on ground
/// contact; there is no regeneration while airborne.
#[derive(Component, Debug)]
pub struct VoltCharge {
    current: u32,
    max: u32,
}

impl VoltCharge {
    pub fn new(max: u32) -> Self {
        Self { current: 0, max }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Spends one charge. Returns false (and changes nothing) when empty.
    pub fn spend(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn refill(&mut self) {
        self.current = self.max;
    }
}

/// Per-tick drive state of the RoundAbout dash.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundAboutDrive {
    /// Chosen horizontal direction, ±1.
    pub direction: f32,
    pub elapsed: f32,
    /// Set once the active window has run out; the drive then decays toward
    /// a halved horizontal target instead of cutting off.
    pub expired: bool,
    pub target: Vec2,
    /// Smooth-damp accumulator carried between ticks.
    pub smoothing: Vec2,
}

impl RoundAboutDrive {
    pub fn new(direction: f32, force: Vec2) -> Self {
        Self {
            direction,
            elapsed: 0.0,
            expired: false,
            target: Vec2::new(force.x * direction, force.y),
            smoothing: Vec2::ZERO,
        }
    }

    /// Recomputes the target from the configured force vector. After expiry
    /// the horizontal component is halved and the vertical target follows
    /// the body's current fall.
    pub fn retarget(&mut self, force: Vec2, current_vel_y: f32) {
        self.target = if self.expired {
            Vec2::new(force.x * self.direction * 0.5, current_vel_y)
        } else {
            Vec2::new(force.x * self.direction, force.y)
        };
    }

    /// Wall bounce: flips direction and re-arms the active window.
    pub fn bounce(&mut self, force: Vec2) {
        self.direction = -self.direction;
        self.elapsed = 0.0;
        self.expired = false;
        self.target = Vec2::new(force.x * self.direction, force.y);
    }
}

/// The live ability, if any. Variant payloads hold what cancellation needs
/// to restore.
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveAbility {
    Puff { saved_momentum_y: f32 },
    RoundAbout(RoundAboutDrive),
    Spiral { default_gravity_scale: f32 },
}

impl ActiveAbility {
    pub fn kind(&self) -> AbilityKind {
        match self {
            ActiveAbility::Puff { .. } => AbilityKind::Puff,
            ActiveAbility::RoundAbout(_) => AbilityKind::RoundAbout,
            ActiveAbility::Spiral { .. } => AbilityKind::Spiral,
        }
    }
}

/// Ability runtime state. Holding at most one [`ActiveAbility`] makes the
/// mutual-exclusion invariant structural: two concurrent abilities cannot
/// be represented.
#[derive(Component, Debug, Default)]
pub struct AbilityState {
    active: Option<ActiveAbility>,
}

impl AbilityState {
    pub fn active(&self) -> Option<&ActiveAbility> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut ActiveAbility> {
        self.active.as_mut()
    }

    pub fn active_kind(&self) -> Option<AbilityKind> {
        self.active.as_ref().map(ActiveAbility::kind)
    }

    pub fn is_active(&self, kind: AbilityKind) -> bool {
        self.active_kind() == Some(kind)
    }

    pub(crate) fn enter(&mut self, ability: ActiveAbility) {
        self.active = Some(ability);
    }

    /// Cancels whatever is active, running its restore logic. Cancelling
    /// with nothing active is a no-op; calling twice is the same as calling
    /// once. Returns the cancelled kind.
    pub fn cancel_all(
        &mut self,
        velocity: &mut LinearVelocity,
        gravity: &mut GravityScale,
    ) -> Option<AbilityKind> {
        let active = self.active.take()?;
        let kind = active.kind();

        match active {
            ActiveAbility::Puff { saved_momentum_y } => {
                // Soft unpause: give back half the momentum held at entry.
                velocity.y = saved_momentum_y / 2.0;
            }
            ActiveAbility::RoundAbout(_) => {}
            ActiveAbility::Spiral { default_gravity_scale } => {
                gravity.0 = default_gravity_scale;
            }
        }

        Some(kind)
    }
}
