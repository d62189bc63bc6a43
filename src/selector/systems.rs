//! Selector domain: overlay lifecycle systems. All of these run per frame;
//! the gesture result is consumed by the next fixed step after commit.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::abilities::{ArmedAbility, Progression};
use crate::character::{ControlState, Player};
use crate::core::{AnimationTrigger, SimulationControl};
use crate::selector::gesture;
use crate::selector::resources::{SelectorSession, SelectorTuning};
use crate::selector::ui::SelectorPanel;

/// Source key for the overlay's simulation-control requests.
const SELECTOR_SOURCE: &str = "ability-selector";

pub(crate) fn open_overlay(
    input: Res<ControlState>,
    tuning: Res<SelectorTuning>,
    mut control: ResMut<SimulationControl>,
    mut session: ResMut<SelectorSession>,
    mut anim: MessageWriter<AnimationTrigger>,
    armed_query: Query<&ArmedAbility, With<Player>>,
    mut panel_query: Query<&mut Visibility, With<SelectorPanel>>,
) {
    if session.open || !input.toggle_just_pressed {
        return;
    }

    session.open = true;
    if let Ok(armed) = armed_query.single() {
        session.selected = armed.0;
    }

    control.lock_movement(SELECTOR_SOURCE);
    control.request_time_scale(SELECTOR_SOURCE, tuning.slow_factor);
    anim.write(AnimationTrigger::ToggleUsed);

    for mut visibility in &mut panel_query {
        *visibility = Visibility::Visible;
    }

    debug!("Selector opened");
}

/// Samples the held directions while the overlay is open. No input retains
/// the previous selection; a slot beyond the ceiling falls back to Puff.
pub(crate) fn sample_gesture(
    input: Res<ControlState>,
    progression: Res<Progression>,
    mut session: ResMut<SelectorSession>,
) {
    if !session.open {
        return;
    }

    if let Some(kind) = gesture::compass_slot(input.axis) {
        session.selected = gesture::clamp_to_ceiling(kind, &progression);
    }
}

/// Release: hide the panel, restore movement and time scale, commit the
/// selection, and queue one activation attempt with the new slot.
pub(crate) fn close_overlay(
    mut input: ResMut<ControlState>,
    mut control: ResMut<SimulationControl>,
    mut session: ResMut<SelectorSession>,
    mut armed_query: Query<&mut ArmedAbility, With<Player>>,
    mut panel_query: Query<&mut Visibility, With<SelectorPanel>>,
) {
    if !session.open || !input.toggle_just_released {
        return;
    }

    session.open = false;
    control.unlock_movement(SELECTOR_SOURCE);
    control.release_time_scale(SELECTOR_SOURCE);

    for mut visibility in &mut panel_query {
        *visibility = Visibility::Hidden;
    }

    for mut armed in &mut armed_query {
        armed.0 = session.selected;
    }

    // Arm-and-use: the committed slot fires on the next fixed step.
    input.press_volt();

    debug!("Selector committed {}", session.selected.name());
}
