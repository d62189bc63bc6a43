//! Character domain: movement tuning and the per-frame input snapshot.

use bevy::prelude::*;

/// Immutable tuning for locomotion, jumps, and the ground sensor. Populated
/// from `assets/data/tuning.ron` at startup, with these defaults as the
/// fallback.
#[derive(Resource, Debug, Clone)]
pub struct CharacterTuning {
    pub ground_max_vel: f32,
    pub ground_accel_rate: f32,
    pub air_max_vel: f32,
    pub air_accel_rate: f32,
    pub ground_linear_damping: f32,
    pub air_linear_damping: f32,
    pub initial_jump_force: f32,
    /// Extra upward acceleration applied each tick while the jump is held.
    pub held_jump_force: f32,
    pub max_jump_held_time: f32,
    pub collider_size: Vec2,
    pub ground_box_size: Vec2,
    pub ground_cast_offset: Vec2,
    pub ground_cast_distance: f32,
}

impl Default for CharacterTuning {
    fn default() -> Self {
        Self {
            ground_max_vel: 220.0,
            ground_accel_rate: 15.0,
            air_max_vel: 180.0,
            air_accel_rate: 10.0,
            ground_linear_damping: 4.0,
            air_linear_damping: 0.4,
            initial_jump_force: 0.62,
            held_jump_force: 900.0,
            max_jump_held_time: 0.25,
            collider_size: Vec2::new(24.0, 48.0),
            ground_box_size: Vec2::new(20.0, 6.0),
            ground_cast_offset: Vec2::ZERO,
            ground_cast_distance: 6.0,
        }
    }
}

/// Per-frame snapshot of the control surface. Held booleans are level
/// sampled; press edges accumulate until a fixed tick consumes them, so a
/// press landing between ticks is never dropped.
#[derive(Resource, Debug, Default)]
pub struct ControlState {
    pub axis: Vec2,
    pub jump_held: bool,
    jump_pressed: bool,
    volt_pressed: bool,
    pub toggle_held: bool,
    pub toggle_just_pressed: bool,
    pub toggle_just_released: bool,
}

impl ControlState {
    pub fn press_jump(&mut self) {
        self.jump_pressed = true;
    }

    pub fn press_volt(&mut self) {
        self.volt_pressed = true;
    }

    /// Consumes the jump press edge.
    pub fn take_jump_pressed(&mut self) -> bool {
        std::mem::take(&mut self.jump_pressed)
    }

    /// Consumes the volt-jump press edge.
    pub fn take_volt_pressed(&mut self) -> bool {
        std::mem::take(&mut self.volt_pressed)
    }
}
