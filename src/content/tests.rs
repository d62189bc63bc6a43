//! Content domain: unit tests for tuning parsing and validation.

use super::data::TuningFile;
use super::loader::parse_tuning;
use super::validation::validate_tuning;

#[test]
fn test_defaults_validate_clean() {
    let file = TuningFile::default();
    let errors = validate_tuning(&file);
    assert!(errors.is_empty(), "default tuning must validate: {errors:?}");
}

#[test]
fn test_parse_partial_file_fills_defaults() {
    let file = parse_tuning(
        "(movement: (ground_max_vel: 5.0, ground_accel_rate: 2.0))",
        "inline",
    )
    .expect("partial tuning should parse");

    assert_eq!(file.movement.ground_max_vel, 5.0);
    assert_eq!(file.movement.ground_accel_rate, 2.0);
    // Untouched sections keep their defaults.
    assert_eq!(file.abilities.charge_max, 1);
    assert_eq!(file.progression_ceiling, 7);
}

#[test]
fn test_parse_error_is_reported_with_file_name() {
    let err = parse_tuning("(movement: oops)", "tuning.ron").unwrap_err();
    assert_eq!(err.file, "tuning.ron");
    assert!(err.message.contains("Parse error"));
}

#[test]
fn test_validation_rejects_nonpositive_hold_time() {
    let mut file = TuningFile::default();
    file.jump.max_jump_held_time = 0.0;

    let errors = validate_tuning(&file);
    assert!(errors.iter().any(|e| e.field == "jump.max_jump_held_time"));
}

#[test]
fn test_validation_rejects_zero_smoothing() {
    let mut file = TuningFile::default();
    file.abilities.roundabout_smooth_time = 0.0;

    let errors = validate_tuning(&file);
    assert!(
        errors
            .iter()
            .any(|e| e.field == "abilities.roundabout_smooth_time")
    );
}

#[test]
fn test_validation_rejects_wrong_icon_count() {
    let mut file = TuningFile::default();
    file.hud.volt_icon_count = 8;

    let errors = validate_tuning(&file);
    assert!(errors.iter().any(|e| e.field == "hud.volt_icon_count"));
}

#[test]
fn test_validation_rejects_out_of_range_slow_factor() {
    let mut file = TuningFile::default();
    file.selector.slow_factor = 0.0;
    let errors = validate_tuning(&file);
    assert!(errors.iter().any(|e| e.field == "selector.slow_factor"));

    let mut file = TuningFile::default();
    file.selector.slow_factor = 1.5;
    let errors = validate_tuning(&file);
    assert!(errors.iter().any(|e| e.field == "selector.slow_factor"));
}

#[test]
fn test_validation_collects_multiple_errors() {
    let mut file = TuningFile::default();
    file.movement.ground_max_vel = -1.0;
    file.jump.initial_jump_force = 0.0;
    file.abilities.charge_max = 0;

    let errors = validate_tuning(&file);
    assert!(errors.len() >= 3, "expected all failures reported: {errors:?}");
}
