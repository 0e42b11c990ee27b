//! Mutable visual state for the gesture-driven models.
//!
//! One instance lives inside the session context and is mutated only by the
//! frame loop. Visibility recorded here is the truth; the renderer mirrors it.

use crate::services::{BodyHandle, MixerHandle, NodeHandle};

/// A loaded model the frame loop toggles and moves.
#[derive(Clone, Copy, Debug)]
pub struct ModelEntry {
    pub node: NodeHandle,
    pub mixer: Option<MixerHandle>,
    /// Physics counterpart moved in lockstep with the visual, when present.
    pub body: Option<BodyHandle>,
    pub visible: bool,
    pub yaw: f32,
}

impl ModelEntry {
    pub fn new(node: NodeHandle, mixer: Option<MixerHandle>) -> Self {
        Self {
            node,
            mixer,
            body: None,
            visible: false,
            yaw: 0.0,
        }
    }
}

/// Session-wide scene state.
pub struct SceneState {
    pub model: ModelEntry,
    pub pentacle: ModelEntry,
    /// Per-session random yaw step applied while the model is visible.
    pub spin_direction: f32,
    /// Continuously advancing input to the yaw noise.
    pub noise_offset: f32,
}

impl SceneState {
    pub fn new(model: ModelEntry, pentacle: ModelEntry) -> Self {
        Self {
            model,
            pentacle,
            spin_direction: 0.0,
            noise_offset: 0.0,
        }
    }
}
