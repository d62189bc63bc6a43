//! Level domain: markers for static geometry and trigger volumes.

use bevy::prelude::*;

/// Marker for ground colliders.
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders.
#[derive(Component, Debug)]
pub struct Wall;

/// Destructible block, consumed by the dash probe.
#[derive(Component, Debug)]
pub struct CrackedBlock;

/// Kill volume. Contact emits the death signal.
#[derive(Component, Debug)]
pub struct Pit;

/// Directional force field. Pushes the body only while it is dashing.
#[derive(Component, Debug)]
pub struct WindZone {
    pub direction: Vec2,
    pub boost_factor: f32,
    /// Entry edge tracking; the nudge fires once per entry.
    pub was_inside: bool,
}

impl WindZone {
    pub fn new(direction: Vec2, boost_factor: f32) -> Self {
        Self {
            direction,
            boost_factor,
            was_inside: false,
        }
    }

    pub fn impulse(&self) -> Vec2 {
        self.direction * self.boost_factor
    }
}

/// Checkpoint volume. Entering moves the respawn point here.
#[derive(Component, Debug)]
pub struct CheckpointZone;
