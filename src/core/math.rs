//! Core domain: critically damped smoothing shared by the dash drive,
//! companion follow, and camera.

use bevy::prelude::*;

/// Smooths `current` toward `target` with a critically damped spring.
/// `velocity` is the accumulator carried between calls; `smooth_time` is
/// roughly the time to cover most of the remaining distance. Never
/// overshoots the target.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let smooth_time = smooth_time.max(0.0001);
    let omega = 2.0 / smooth_time;

    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;

    let mut output = target + (change + temp) * exp;

    // Clamp at the target when the step would carry past it.
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = (output - target) / dt;
    }

    output
}

/// Componentwise [`smooth_damp`] over a Vec2.
pub fn smooth_damp_vec2(
    current: Vec2,
    target: Vec2,
    velocity: &mut Vec2,
    smooth_time: f32,
    dt: f32,
) -> Vec2 {
    Vec2::new(
        smooth_damp(current.x, target.x, &mut velocity.x, smooth_time, dt),
        smooth_damp(current.y, target.y, &mut velocity.y, smooth_time, dt),
    )
}
