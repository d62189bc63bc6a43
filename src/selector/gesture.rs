//! Selector domain: the eight-direction gesture mapping.

use bevy::prelude::*;

use crate::abilities::{AbilityKind, Progression};

fn sign(value: f32) -> i32 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// Maps the held direction signs to a compass slot. Total over all nine
/// sign combinations: no input returns `None` (retain the previous
/// selection), the eight nonzero combinations map bijectively onto the
/// ability indices in compass order starting up-left.
pub fn compass_slot(axis: Vec2) -> Option<AbilityKind> {
    match (sign(axis.x), sign(axis.y)) {
        (0, 0) => None,
        (-1, 1) => Some(AbilityKind::Puff),
        (0, 1) => Some(AbilityKind::RoundAbout),
        (1, 1) => Some(AbilityKind::Bounce),
        (1, 0) => Some(AbilityKind::Nibble),
        (1, -1) => Some(AbilityKind::Spiral),
        (0, -1) => Some(AbilityKind::ZapLine),
        (-1, -1) => Some(AbilityKind::CatchNChuck),
        (-1, 0) => Some(AbilityKind::Glide),
        // sign() only produces -1, 0, or 1; reaching this is a defect.
        _ => unreachable!("direction signs outside -1..=1"),
    }
}

/// Clamps a mapped slot to the progression ceiling. Anything beyond the
/// ceiling resolves to the base ability.
pub fn clamp_to_ceiling(kind: AbilityKind, progression: &Progression) -> AbilityKind {
    if progression.allows(kind) {
        kind
    } else {
        AbilityKind::Puff
    }
}
