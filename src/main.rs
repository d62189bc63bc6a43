mod abilities;
mod buddy;
mod character;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod level;
mod selector;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Voltbound".to_string(),
            resolution: (1280.0, 720.0).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    // Gravity in pixels/s^2; per-entity GravityScale multiplies this.
    .insert_resource(Gravity(Vec2::NEG_Y * 1400.0))
    .add_plugins((
        content::ContentPlugin,
        core::CorePlugin,
        character::CharacterPlugin,
        abilities::AbilitiesPlugin,
        selector::SelectorPlugin,
        level::LevelPlugin,
        ui::UiPlugin,
        buddy::BuddyPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
