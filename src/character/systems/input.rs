//! Character domain: per-frame sampling of the control surface.

use bevy::prelude::*;

use crate::character::ControlState;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<ControlState>) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);

    input.jump_held = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyK);
    if keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK) {
        input.press_jump();
    }

    if keyboard.just_pressed(KeyCode::KeyJ) {
        input.press_volt();
    }

    input.toggle_held = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::Tab);
    input.toggle_just_pressed =
        keyboard.just_pressed(KeyCode::ShiftLeft) || keyboard.just_pressed(KeyCode::Tab);
    input.toggle_just_released =
        keyboard.just_released(KeyCode::ShiftLeft) || keyboard.just_released(KeyCode::Tab);
}
