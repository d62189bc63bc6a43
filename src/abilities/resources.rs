//! Abilities domain: tuning and progression resources.

use bevy::prelude::*;

use crate::abilities::kind::AbilityKind;

/// Immutable ability tuning, populated from `assets/data/tuning.ron`.
#[derive(Resource, Debug, Clone)]
pub struct AbilityTuning {
    /// Charge capacity. Refilled in full on every ground contact; kept at
    /// the reference's 1 pending a real economy.
    pub charge_max: u32,
    /// Target-velocity vector of the dash; x is scaled by the chosen
    /// direction.
    pub roundabout_force: Vec2,
    /// Seconds of full drive before the decaying tail begins.
    pub roundabout_active_duration: f32,
    pub roundabout_smooth_time: f32,
    /// Shorter smoothing used for the tail after the window expires.
    pub roundabout_tail_smooth_time: f32,
    pub roundabout_probe_size: Vec2,
    pub roundabout_probe_distance: f32,
    pub spiral_gravity_scale: f32,
}

impl Default for AbilityTuning {
    fn default() -> Self {
        Self {
            charge_max: 1,
            roundabout_force: Vec2::new(360.0, 60.0),
            roundabout_active_duration: 0.35,
            roundabout_smooth_time: 0.08,
            roundabout_tail_smooth_time: 0.04,
            roundabout_probe_size: Vec2::new(8.0, 32.0),
            roundabout_probe_distance: 18.0,
            spiral_gravity_scale: 0.25,
        }
    }
}

/// Highest unlocked volt jump. The selector clamps every mapped index to
/// this ceiling.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Progression {
    pub ceiling: AbilityKind,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            ceiling: AbilityKind::Glide,
        }
    }
}

impl Progression {
    /// Builds from an externally supplied index, clamping out-of-range
    /// values: a defect in development, clamp-and-log in release.
    pub fn from_ceiling_index(index: i64) -> Self {
        let clamped = index.clamp(0, 7) as usize;
        if index != clamped as i64 {
            debug_assert!(false, "progression ceiling {index} outside 0-7");
            error!("progression ceiling {} outside 0-7, clamping", index);
        }
        Self {
            // Index is in range by construction after the clamp.
            ceiling: AbilityKind::from_index(clamped).unwrap_or_default(),
        }
    }

    pub fn allows(&self, kind: AbilityKind) -> bool {
        kind.index() <= self.ceiling.index()
    }
}
