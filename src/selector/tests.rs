//! Selector domain: unit tests for the gesture mapping.

use bevy::prelude::*;

use super::gesture::{clamp_to_ceiling, compass_slot};
use crate::abilities::{AbilityKind, Progression};

#[test]
fn test_no_input_retains_previous_selection() {
    assert_eq!(compass_slot(Vec2::ZERO), None);
}

#[test]
fn test_compass_order_matches_slot_indices() {
    let cases = [
        (Vec2::new(-1.0, 1.0), AbilityKind::Puff),
        (Vec2::new(0.0, 1.0), AbilityKind::RoundAbout),
        (Vec2::new(1.0, 1.0), AbilityKind::Bounce),
        (Vec2::new(1.0, 0.0), AbilityKind::Nibble),
        (Vec2::new(1.0, -1.0), AbilityKind::Spiral),
        (Vec2::new(0.0, -1.0), AbilityKind::ZapLine),
        (Vec2::new(-1.0, -1.0), AbilityKind::CatchNChuck),
        (Vec2::new(-1.0, 0.0), AbilityKind::Glide),
    ];

    for (axis, expected) in cases {
        assert_eq!(compass_slot(axis), Some(expected), "axis {axis:?}");
    }
}

#[test]
fn test_mapping_is_bijective_over_nonzero_inputs() {
    let mut seen = Vec::new();
    for x in [-1.0, 0.0, 1.0] {
        for y in [-1.0, 0.0, 1.0] {
            if let Some(kind) = compass_slot(Vec2::new(x, y)) {
                assert!(!seen.contains(&kind), "{kind:?} mapped twice");
                seen.push(kind);
            }
        }
    }
    assert_eq!(seen.len(), 8);
}

#[test]
fn test_mapping_uses_signs_not_magnitudes() {
    assert_eq!(
        compass_slot(Vec2::new(0.4, -0.9)),
        Some(AbilityKind::Spiral)
    );
}

#[test]
fn test_slots_beyond_ceiling_fall_back_to_base() {
    let progression = Progression::from_ceiling_index(3);

    assert_eq!(
        clamp_to_ceiling(AbilityKind::Spiral, &progression),
        AbilityKind::Puff
    );
    assert_eq!(
        clamp_to_ceiling(AbilityKind::Glide, &progression),
        AbilityKind::Puff
    );
    assert_eq!(
        clamp_to_ceiling(AbilityKind::Nibble, &progression),
        AbilityKind::Nibble
    );
}

#[test]
fn test_full_ceiling_allows_everything() {
    let progression = Progression::from_ceiling_index(7);
    for kind in AbilityKind::ALL {
        assert_eq!(clamp_to_ceiling(kind, &progression), kind);
    }
}
