//! Selector domain: the volt-jump selection overlay. While the toggle is
//! held the simulation slows, movement locks, and an eight-direction
//! gesture picks the armed ability; release commits and immediately
//! attempts one activation.

mod gesture;
mod resources;
mod systems;
#[cfg(test)]
mod tests;
mod ui;

pub use gesture::{clamp_to_ceiling, compass_slot};
pub use resources::{SelectorSession, SelectorTuning};

use bevy::prelude::*;

pub struct SelectorPlugin;

impl Plugin for SelectorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectorSession>()
            .add_systems(Startup, ui::spawn_panel)
            .add_systems(
                Update,
                (
                    systems::open_overlay,
                    systems::sample_gesture,
                    systems::close_overlay,
                    ui::paint_icons,
                )
                    .chain(),
            );
    }
}
