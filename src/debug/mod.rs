//! Debug overlay for fast iteration (dev-tools feature). F1 toggles an
//! info panel with the controller's live state.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::abilities::{AbilityState, ArmedAbility, VoltCharge};
use crate::character::{CharacterState, GroundContact, Player};
use crate::core::{DialogueEnded, DialogueStarted, SimulationControl};

/// Marker for the debug info overlay.
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub show_info: bool,
    pub in_dialogue: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (toggle_info_overlay, toggle_dialogue, update_info_overlay).chain(),
            );
    }
}

/// F2 fakes the external dialogue script: start on the first press, end on
/// the next.
fn toggle_dialogue(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut started: MessageWriter<DialogueStarted>,
    mut ended: MessageWriter<DialogueEnded>,
) {
    if !keyboard.just_pressed(KeyCode::F2) {
        return;
    }

    if debug_state.in_dialogue {
        ended.write(DialogueEnded);
        info!("[DEBUG] Dialogue ended");
    } else {
        started.write(DialogueStarted);
        info!("[DEBUG] Dialogue started");
    }
    debug_state.in_dialogue = !debug_state.in_dialogue;
}

fn toggle_info_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    debug_state.show_info = !debug_state.show_info;

    if debug_state.show_info {
        spawn_info_overlay(&mut commands);
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

fn update_info_overlay(
    debug_state: Res<DebugState>,
    control: Res<SimulationControl>,
    player_query: Query<
        (
            &Transform,
            &LinearVelocity,
            &GroundContact,
            &CharacterState,
            &AbilityState,
            &ArmedAbility,
            &VoltCharge,
        ),
        With<Player>,
    >,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        return;
    }

    let (Ok(player), Ok(mut text)) = (player_query.single(), overlay_query.single_mut()) else {
        return;
    };

    let (transform, velocity, contact, state, abilities, armed, charge) = player;
    let pos = transform.translation;

    **text = format!(
        "Pos: ({:.0}, {:.0})\nVel: ({:.0}, {:.0})\nGrounded: {}\nState: {:?}\nArmed: {}\nActive: {}\nCharge: {}/{}\nMovement: {}",
        pos.x,
        pos.y,
        velocity.x,
        velocity.y,
        contact.grounded,
        state.kind(),
        armed.0.name(),
        abilities.active_kind().map_or("-", |k| k.name()),
        charge.current(),
        charge.max(),
        if control.movement_enabled() { "enabled" } else { "locked" },
    );
}

fn spawn_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
