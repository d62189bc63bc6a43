//! UI domain: the voltage meter HUD.

mod volt_meter;
#[cfg(test)]
mod tests;

pub use volt_meter::{DisplayedVoltage, VOLT_METER_CAPACITY};

use bevy::prelude::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DisplayedVoltage>()
            .add_systems(Startup, volt_meter::spawn_volt_meter)
            .add_systems(
                Update,
                (volt_meter::mirror_charge, volt_meter::paint_volt_icons).chain(),
            );
    }
}
