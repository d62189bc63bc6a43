//! Selector domain: overlay tuning and session state.

use bevy::prelude::*;

use crate::abilities::AbilityKind;

/// Immutable overlay tuning, populated from `assets/data/tuning.ron`.
#[derive(Resource, Debug, Clone)]
pub struct SelectorTuning {
    /// Time-scale fraction while the overlay is held open.
    pub slow_factor: f32,
    pub not_selected_brightness: f32,
    pub disabled_brightness: f32,
}

impl Default for SelectorTuning {
    fn default() -> Self {
        Self {
            slow_factor: 0.3,
            not_selected_brightness: 0.6,
            disabled_brightness: 0.3,
        }
    }
}

/// Live overlay state. The pending selection survives across opens so an
/// empty gesture retains the previous choice.
#[derive(Resource, Debug, Default)]
pub struct SelectorSession {
    pub open: bool,
    pub selected: AbilityKind,
}
