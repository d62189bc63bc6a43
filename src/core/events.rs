//! Core domain: cross-domain messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// The character died (pit contact, hazard). Observed by the respawn
/// manager; the controller does not reposition itself.
#[derive(Debug)]
pub struct PlayerDied;

impl Message for PlayerDied {}

/// A script put the character into dialogue. Sets the sticky Dialogue state.
#[derive(Debug)]
pub struct DialogueStarted;

impl Message for DialogueStarted {}

/// Dialogue finished; the sticky Dialogue state is released.
#[derive(Debug)]
pub struct DialogueEnded;

impl Message for DialogueEnded {}

/// Additive impulse requested by a level volume (wind fields). Applied to
/// the body only while the published state is RoundAbout.
#[derive(Debug)]
pub struct BodyNudge {
    pub impulse: Vec2,
}

impl Message for BodyNudge {}

/// Named one-shot triggers for the animation sink. Consumers are optional;
/// firing with nobody listening is a no-op by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationTrigger {
    JumpStart,
    AbilityUsed,
    AbilityReset,
    ToggleUsed,
}

impl Message for AnimationTrigger {}
