//! Content domain: tuning data loaded from RON at startup, validated before
//! anything spawns.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{HudConfig, TuningFile};
pub use loader::ContentLoadError;
pub use validation::{ValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

use crate::abilities::Progression;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_tuning);
    }
}

/// Loads `assets/data/tuning.ron` and publishes the tuning resources. A
/// missing or unparsable file falls back to the built-in defaults; values
/// that fail validation abort setup outright.
fn load_tuning(mut commands: Commands) {
    let path = Path::new("assets/data/tuning.ron");

    let file = match loader::load_tuning_file(path) {
        Ok(file) => {
            info!("Tuning loaded from {}", path.display());
            file
        }
        Err(e) => {
            warn!("{}; using built-in tuning defaults", e);
            TuningFile::default()
        }
    };

    let errors = validate_tuning(&file);
    if !errors.is_empty() {
        for error in &errors {
            error!("{}", error);
        }
        panic!("tuning validation failed with {} error(s)", errors.len());
    }

    commands.insert_resource(file.character_tuning());
    commands.insert_resource(file.ability_tuning());
    commands.insert_resource(file.selector_tuning());
    commands.insert_resource(Progression::from_ceiling_index(file.progression_ceiling));
    commands.insert_resource(file.hud.clone());
}
