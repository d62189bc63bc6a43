//! Core domain: shared simulation-control and animator-facing resources.

use bevy::prelude::*;
use std::collections::{HashMap, HashSet};

/// Resource mediating the global movement-enable flag and the virtual time
/// scale. Callers acquire and release by source name; the flags are never
/// toggled directly, so no owner can clobber another's request.
#[derive(Resource, Debug, Default)]
pub struct SimulationControl {
    movement_locks: HashSet<String>,
    time_scales: HashMap<String, f32>,
}

impl SimulationControl {
    pub fn movement_enabled(&self) -> bool {
        self.movement_locks.is_empty()
    }

    pub fn lock_movement(&mut self, source: impl Into<String>) {
        self.movement_locks.insert(source.into());
    }

    pub fn unlock_movement(&mut self, source: impl Into<String>) {
        self.movement_locks.remove(&source.into());
    }

    /// Request a slowed (or sped up) time scale. The strongest slowdown among
    /// all live requests wins.
    pub fn request_time_scale(&mut self, source: impl Into<String>, scale: f32) {
        self.time_scales.insert(source.into(), scale.max(0.01));
    }

    pub fn release_time_scale(&mut self, source: impl Into<String>) {
        self.time_scales.remove(&source.into());
    }

    pub fn effective_time_scale(&self) -> f32 {
        self.time_scales
            .values()
            .copied()
            .fold(1.0_f32, |acc, s| acc.min(s))
    }
}

/// Run condition: true while no source holds the movement lock.
pub fn movement_enabled(control: Res<SimulationControl>) -> bool {
    control.movement_enabled()
}

/// Continuous values mirrored to the animation sink every tick. Consumers are
/// optional; the controller only ever writes here.
#[derive(Resource, Debug, Default)]
pub struct AnimatorValues {
    /// Absolute horizontal speed of the body.
    pub horizontal_speed: f32,
    pub grounded: bool,
    /// Index of the armed volt jump (0-7).
    pub armed_slot: usize,
}
