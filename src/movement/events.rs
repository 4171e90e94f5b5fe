//! Movement domain: locomotion command messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Command: move horizontally. `axis` is -1..1; `run` asks for run speed and
/// is honored only when the entity has the run ability.
#[derive(Debug, Clone, Copy)]
pub struct RequestMove {
    pub entity: Entity,
    pub axis: f32,
    pub run: bool,
}

impl Message for RequestMove {}

/// Command: jump. Honored on the ground (with coyote grace) or, with the
/// double-jump ability, once per airtime.
#[derive(Debug, Clone, Copy)]
pub struct RequestJump {
    pub entity: Entity,
}

impl Message for RequestJump {}

/// Command: dash in the facing (or currently held) direction. Requires the
/// dash ability and an elapsed dash cooldown.
#[derive(Debug, Clone, Copy)]
pub struct RequestDash {
    pub entity: Entity,
}

impl Message for RequestDash {}
