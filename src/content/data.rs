//! Content domain: serde definitions for the tuning file.

use bevy::prelude::*;
use serde::Deserialize;

use crate::abilities::AbilityTuning;
use crate::character::CharacterTuning;
use crate::selector::SelectorTuning;

/// Top-level layout of `assets/data/tuning.ron`. Every section is optional;
/// omitted ones take the built-in defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TuningFile {
    pub movement: MovementDef,
    pub jump: JumpDef,
    pub ground_sensor: GroundSensorDef,
    pub abilities: AbilitiesDef,
    pub selector: SelectorDef,
    pub progression_ceiling: i64,
    pub hud: HudConfig,
}

impl Default for TuningFile {
    fn default() -> Self {
        Self {
            movement: MovementDef::default(),
            jump: JumpDef::default(),
            ground_sensor: GroundSensorDef::default(),
            abilities: AbilitiesDef::default(),
            selector: SelectorDef::default(),
            // Everything unlocked in the demo build.
            progression_ceiling: 7,
            hud: HudConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MovementDef {
    pub ground_max_vel: f32,
    pub ground_accel_rate: f32,
    pub air_max_vel: f32,
    pub air_accel_rate: f32,
    pub ground_linear_damping: f32,
    pub air_linear_damping: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JumpDef {
    pub initial_jump_force: f32,
    pub held_jump_force: f32,
    pub max_jump_held_time: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GroundSensorDef {
    pub collider_size: [f32; 2],
    pub box_size: [f32; 2],
    pub cast_offset: [f32; 2],
    pub cast_distance: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AbilitiesDef {
    pub charge_max: u32,
    pub roundabout_force: [f32; 2],
    pub roundabout_active_duration: f32,
    pub roundabout_smooth_time: f32,
    pub roundabout_tail_smooth_time: f32,
    pub roundabout_probe_size: [f32; 2],
    pub roundabout_probe_distance: f32,
    pub spiral_gravity_scale: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorDef {
    pub slow_factor: f32,
    pub not_selected_brightness: f32,
    pub disabled_brightness: f32,
}

/// HUD wiring. The voltage meter demands exactly its capacity in icons;
/// validation rejects anything else before setup continues.
#[derive(Debug, Clone, Resource, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub volt_icon_count: u32,
}

impl Default for MovementDef {
    fn default() -> Self {
        let tuning = CharacterTuning::default();
        Self {
            ground_max_vel: tuning.ground_max_vel,
            ground_accel_rate: tuning.ground_accel_rate,
            air_max_vel: tuning.air_max_vel,
            air_accel_rate: tuning.air_accel_rate,
            ground_linear_damping: tuning.ground_linear_damping,
            air_linear_damping: tuning.air_linear_damping,
        }
    }
}

impl Default for JumpDef {
    fn default() -> Self {
        let tuning = CharacterTuning::default();
        Self {
            initial_jump_force: tuning.initial_jump_force,
            held_jump_force: tuning.held_jump_force,
            max_jump_held_time: tuning.max_jump_held_time,
        }
    }
}

impl Default for GroundSensorDef {
    fn default() -> Self {
        let tuning = CharacterTuning::default();
        Self {
            collider_size: tuning.collider_size.into(),
            box_size: tuning.ground_box_size.into(),
            cast_offset: tuning.ground_cast_offset.into(),
            cast_distance: tuning.ground_cast_distance,
        }
    }
}

impl Default for AbilitiesDef {
    fn default() -> Self {
        let tuning = AbilityTuning::default();
        Self {
            charge_max: tuning.charge_max,
            roundabout_force: tuning.roundabout_force.into(),
            roundabout_active_duration: tuning.roundabout_active_duration,
            roundabout_smooth_time: tuning.roundabout_smooth_time,
            roundabout_tail_smooth_time: tuning.roundabout_tail_smooth_time,
            roundabout_probe_size: tuning.roundabout_probe_size.into(),
            roundabout_probe_distance: tuning.roundabout_probe_distance,
            spiral_gravity_scale: tuning.spiral_gravity_scale,
        }
    }
}

impl Default for SelectorDef {
    fn default() -> Self {
        let tuning = SelectorTuning::default();
        Self {
            slow_factor: tuning.slow_factor,
            not_selected_brightness: tuning.not_selected_brightness,
            disabled_brightness: tuning.disabled_brightness,
        }
    }
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            volt_icon_count: crate::ui::VOLT_METER_CAPACITY,
        }
    }
}

impl TuningFile {
    pub fn character_tuning(&self) -> CharacterTuning {
        CharacterTuning {
            ground_max_vel: self.movement.ground_max_vel,
            ground_accel_rate: self.movement.ground_accel_rate,
            air_max_vel: self.movement.air_max_vel,
            air_accel_rate: self.movement.air_accel_rate,
            ground_linear_damping: self.movement.ground_linear_damping,
            air_linear_damping: self.movement.air_linear_damping,
            initial_jump_force: self.jump.initial_jump_force,
            held_jump_force: self.jump.held_jump_force,
            max_jump_held_time: self.jump.max_jump_held_time,
            collider_size: Vec2::from(self.ground_sensor.collider_size),
            ground_box_size: Vec2::from(self.ground_sensor.box_size),
            ground_cast_offset: Vec2::from(self.ground_sensor.cast_offset),
            ground_cast_distance: self.ground_sensor.cast_distance,
        }
    }

    pub fn ability_tuning(&self) -> AbilityTuning {
        AbilityTuning {
            charge_max: self.abilities.charge_max,
            roundabout_force: Vec2::from(self.abilities.roundabout_force),
            roundabout_active_duration: self.abilities.roundabout_active_duration,
            roundabout_smooth_time: self.abilities.roundabout_smooth_time,
            roundabout_tail_smooth_time: self.abilities.roundabout_tail_smooth_time,
            roundabout_probe_size: Vec2::from(self.abilities.roundabout_probe_size),
            roundabout_probe_distance: self.abilities.roundabout_probe_distance,
            spiral_gravity_scale: self.abilities.spiral_gravity_scale,
        }
    }

    pub fn selector_tuning(&self) -> SelectorTuning {
        SelectorTuning {
            slow_factor: self.selector.slow_factor,
            not_selected_brightness: self.selector.not_selected_brightness,
            disabled_brightness: self.selector.disabled_brightness,
        }
    }
}
