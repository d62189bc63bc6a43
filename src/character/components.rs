//! Character domain: components for the player body and ground sensing.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

/// Horizontal orientation of the character, the ±1 scalar the dash and the
/// sprite flip read.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    /// Facing for a nonzero input direction. Zero keeps the current facing.
    pub fn from_direction(self, direction: f32) -> Self {
        if direction > 0.0 {
            Facing::Right
        } else if direction < 0.0 {
            Facing::Left
        } else {
            self
        }
    }
}

/// Downward box-cast configuration sized from the character's footprint.
#[derive(Component, Debug, Clone)]
pub struct GroundSensor {
    pub box_size: Vec2,
    pub cast_offset: Vec2,
    pub cast_distance: f32,
}

/// Cached ground-contact result for the current tick. Recomputed exactly
/// once per tick by the sensor system; every other system reads this, so a
/// tick never sees two different answers.
#[derive(Component, Debug, Default)]
pub struct GroundContact {
    pub grounded: bool,
    pub just_landed: bool,
}

/// Mutable jump-hold bookkeeping. The timer is reset on every transition
/// out of the Jumping state.
#[derive(Component, Debug, Default)]
pub struct JumpHold {
    pub timer: f32,
}
