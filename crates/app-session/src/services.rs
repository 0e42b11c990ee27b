//! Contracts for the external collaborators: physics, rendering, assets and
//! particles.
//!
//! The session drives all four through trait objects and never looks behind
//! them; the real engines (and the test mocks, and the headless demo
//! backends) live on the other side of these seams.

use glam::{Quat, Vec3};
use thiserror::Error;

/// A subtree of the external scene graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub u32);

/// A rigid body owned by the external physics world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub u32);

/// A running animation mixer owned by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MixerHandle(pub u32);

/// A loaded environment/background texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EnvHandle(pub u32);

/// Collision volume for a new physics body.
#[derive(Clone, Copy, Debug)]
pub enum CollisionShape {
    Sphere { radius: f32 },
    Box { half_extents: Vec3 },
}

/// Everything the physics engine needs to create a body.
#[derive(Clone, Copy, Debug)]
pub struct BodyDef {
    pub mass: f32,
    pub position: Vec3,
    pub velocity: Vec3,
    pub shape: CollisionShape,
}

/// Rigid-body world advancing all bodies by elapsed time on each step.
pub trait PhysicsWorld {
    fn set_gravity(&mut self, gravity: Vec3);
    fn add_body(&mut self, def: BodyDef) -> BodyHandle;
    fn step(&mut self, dt: f32);
    /// Apply an instantaneous force at a world-space point.
    fn apply_force(&mut self, body: BodyHandle, force: Vec3, point: Vec3);
    fn transform(&self, body: BodyHandle) -> (Vec3, Quat);
    fn set_position(&mut self, body: BodyHandle, position: Vec3);
}

/// Scene graph, camera and post-processing pipeline.
pub trait Renderer {
    /// Produce the composed frame for the current scene state.
    fn render(&mut self);
    fn set_visible(&mut self, node: NodeHandle, visible: bool);
    fn set_position(&mut self, node: NodeHandle, position: Vec3);
    fn set_yaw(&mut self, node: NodeHandle, yaw: f32);
    fn set_transform(&mut self, node: NodeHandle, position: Vec3, rotation: Quat);
    fn set_uniform_scale(&mut self, node: NodeHandle, scale: f32);
    /// Advance a skeletal/clip mixer by elapsed seconds.
    fn advance_mixer(&mut self, mixer: MixerHandle, dt: f32);
    fn set_environment(&mut self, environment: EnvHandle);
}

/// A model subtree attached to the scene, plus its running mixer when the
/// asset carried animation clips (the loader starts every clip).
#[derive(Clone, Copy, Debug)]
pub struct LoadedModel {
    pub node: NodeHandle,
    pub mixer: Option<MixerHandle>,
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load model {path}: {reason}")]
    Model { path: String, reason: String },
    #[error("failed to load environment map {path}: {reason}")]
    Environment { path: String, reason: String },
}

/// One-shot blocking asset source. Loads happen once per entity, before it
/// becomes usable; there is no retry and no fallback asset.
pub trait AssetLoader {
    fn load_model(&mut self, path: &str) -> Result<LoadedModel, AssetError>;
    fn load_environment(&mut self, path: &str) -> Result<EnvHandle, AssetError>;
}

/// The particle system attached to the primary model.
pub trait ParticleEmitter {
    fn start(&mut self);
    fn stop(&mut self);
    fn set_position(&mut self, position: Vec3);
    fn update(&mut self, dt: f32);
}
