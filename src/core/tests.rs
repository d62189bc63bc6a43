//! Core domain: unit tests for simulation control and smoothing.

use super::math::{smooth_damp, smooth_damp_vec2};
use super::resources::SimulationControl;
use bevy::prelude::*;

#[test]
fn test_movement_lock_sources() {
    let mut control = SimulationControl::default();
    assert!(control.movement_enabled());

    control.lock_movement("selector");
    control.lock_movement("cutscene");
    assert!(!control.movement_enabled());

    control.unlock_movement("selector");
    assert!(!control.movement_enabled());

    control.unlock_movement("cutscene");
    assert!(control.movement_enabled());
}

#[test]
fn test_unlock_unknown_source_is_noop() {
    let mut control = SimulationControl::default();
    control.unlock_movement("nobody");
    assert!(control.movement_enabled());
}

#[test]
fn test_time_scale_strongest_slowdown_wins() {
    let mut control = SimulationControl::default();
    assert_eq!(control.effective_time_scale(), 1.0);

    control.request_time_scale("selector", 0.3);
    control.request_time_scale("hitpause", 0.1);
    assert_eq!(control.effective_time_scale(), 0.1);

    control.release_time_scale("hitpause");
    assert_eq!(control.effective_time_scale(), 0.3);

    control.release_time_scale("selector");
    assert_eq!(control.effective_time_scale(), 1.0);
}

#[test]
fn test_smooth_damp_converges() {
    let mut velocity = 0.0;
    let mut current = 0.0;
    let target = 10.0;

    for _ in 0..600 {
        current = smooth_damp(current, target, &mut velocity, 0.2, 1.0 / 60.0);
    }

    assert!((current - target).abs() < 0.01, "current = {current}");
}

#[test]
fn test_smooth_damp_never_overshoots() {
    let mut velocity = 0.0;
    let mut current = 0.0;
    let target = 5.0;

    for _ in 0..600 {
        current = smooth_damp(current, target, &mut velocity, 0.05, 1.0 / 60.0);
        assert!(current <= target + 1e-4, "overshot to {current}");
    }
}

#[test]
fn test_smooth_damp_vec2_tracks_both_axes() {
    let mut velocity = Vec2::ZERO;
    let mut current = Vec2::new(-3.0, 8.0);
    let target = Vec2::new(6.0, 2.0);

    for _ in 0..600 {
        current = smooth_damp_vec2(current, target, &mut velocity, 0.15, 1.0 / 60.0);
    }

    assert!(current.distance(target) < 0.02, "current = {current}");
}

#[test]
fn test_smooth_damp_degenerate_smooth_time() {
    // A zero smooth time is clamped rather than dividing by zero.
    let mut velocity = 0.0;
    let out = smooth_damp(0.0, 1.0, &mut velocity, 0.0, 1.0 / 60.0);
    assert!(out.is_finite());
}
