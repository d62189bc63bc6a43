//! Content domain: value validation for loaded tuning. A failed check here
//! aborts setup; degrading silently would leave the controller running with
//! nonsense constants.

use super::data::TuningFile;
use crate::ui::VOLT_METER_CAPACITY;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tuning field '{}': {}", self.field, self.message)
    }
}

macro_rules! check {
    ($errors:expr, $cond:expr, $field:expr, $($msg:tt)*) => {
        if !$cond {
            $errors.push(ValidationError {
                field: $field,
                message: format!($($msg)*),
            });
        }
    };
}

/// Validates every tuned value. Returns all failures, empty when the file
/// is usable.
pub fn validate_tuning(file: &TuningFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let movement = &file.movement;
    check!(
        errors,
        movement.ground_max_vel > 0.0,
        "movement.ground_max_vel",
        "must be positive, got {}",
        movement.ground_max_vel
    );
    check!(
        errors,
        movement.air_max_vel > 0.0,
        "movement.air_max_vel",
        "must be positive, got {}",
        movement.air_max_vel
    );
    check!(
        errors,
        movement.ground_accel_rate > 0.0,
        "movement.ground_accel_rate",
        "must be positive, got {}",
        movement.ground_accel_rate
    );
    check!(
        errors,
        movement.air_accel_rate > 0.0,
        "movement.air_accel_rate",
        "must be positive, got {}",
        movement.air_accel_rate
    );
    check!(
        errors,
        movement.ground_linear_damping >= 0.0,
        "movement.ground_linear_damping",
        "must not be negative, got {}",
        movement.ground_linear_damping
    );
    check!(
        errors,
        movement.air_linear_damping >= 0.0,
        "movement.air_linear_damping",
        "must not be negative, got {}",
        movement.air_linear_damping
    );

    let jump = &file.jump;
    check!(
        errors,
        jump.initial_jump_force > 0.0,
        "jump.initial_jump_force",
        "must be positive, got {}",
        jump.initial_jump_force
    );
    check!(
        errors,
        jump.held_jump_force >= 0.0,
        "jump.held_jump_force",
        "must not be negative, got {}",
        jump.held_jump_force
    );
    check!(
        errors,
        jump.max_jump_held_time > 0.0,
        "jump.max_jump_held_time",
        "must be positive, got {}",
        jump.max_jump_held_time
    );

    let sensor = &file.ground_sensor;
    check!(
        errors,
        sensor.collider_size[0] > 0.0 && sensor.collider_size[1] > 0.0,
        "ground_sensor.collider_size",
        "must be positive on both axes, got {:?}",
        sensor.collider_size
    );
    check!(
        errors,
        sensor.box_size[0] > 0.0 && sensor.box_size[1] > 0.0,
        "ground_sensor.box_size",
        "must be positive on both axes, got {:?}",
        sensor.box_size
    );
    check!(
        errors,
        sensor.cast_distance > 0.0,
        "ground_sensor.cast_distance",
        "must be positive, got {}",
        sensor.cast_distance
    );

    let abilities = &file.abilities;
    check!(
        errors,
        abilities.charge_max >= 1,
        "abilities.charge_max",
        "must be at least 1, got {}",
        abilities.charge_max
    );
    check!(
        errors,
        abilities.roundabout_active_duration > 0.0,
        "abilities.roundabout_active_duration",
        "must be positive, got {}",
        abilities.roundabout_active_duration
    );
    check!(
        errors,
        abilities.roundabout_smooth_time > 0.0,
        "abilities.roundabout_smooth_time",
        "must be positive, got {}",
        abilities.roundabout_smooth_time
    );
    check!(
        errors,
        abilities.roundabout_tail_smooth_time > 0.0,
        "abilities.roundabout_tail_smooth_time",
        "must be positive, got {}",
        abilities.roundabout_tail_smooth_time
    );
    check!(
        errors,
        abilities.roundabout_probe_distance > 0.0,
        "abilities.roundabout_probe_distance",
        "must be positive, got {}",
        abilities.roundabout_probe_distance
    );

    let selector = &file.selector;
    check!(
        errors,
        selector.slow_factor > 0.0 && selector.slow_factor <= 1.0,
        "selector.slow_factor",
        "must be in (0, 1], got {}",
        selector.slow_factor
    );
    check!(
        errors,
        (0.0..=1.0).contains(&selector.not_selected_brightness),
        "selector.not_selected_brightness",
        "must be in [0, 1], got {}",
        selector.not_selected_brightness
    );
    check!(
        errors,
        (0.0..=1.0).contains(&selector.disabled_brightness),
        "selector.disabled_brightness",
        "must be in [0, 1], got {}",
        selector.disabled_brightness
    );

    check!(
        errors,
        file.hud.volt_icon_count == VOLT_METER_CAPACITY,
        "hud.volt_icon_count",
        "volt meter requires exactly {} icons, got {}",
        VOLT_METER_CAPACITY,
        file.hud.volt_icon_count
    );

    errors
}
