//! Stand-in backends for the four service contracts.
//!
//! Enough behavior to drive the real frame loop from a terminal: a
//! point-mass integrator, a bookkeeping renderer, an always-succeeding
//! loader and a counting particle emitter. None of this pretends to be an
//! engine.

use app_session::{
    AssetError, AssetLoader, BodyDef, BodyHandle, EnvHandle, LoadedModel, MixerHandle, NodeHandle,
    ParticleEmitter, PhysicsWorld, Renderer,
};
use fnv::FnvHashMap;
use glam::{Quat, Vec3};

// ---------------- physics ----------------

struct PointMass {
    position: Vec3,
    velocity: Vec3,
    rotation: Quat,
    inv_mass: f32,
    force: Vec3,
}

/// Semi-implicit Euler over point masses; no collision, no torque.
#[derive(Default)]
pub struct PointMassWorld {
    gravity: Vec3,
    bodies: Vec<PointMass>,
}

impl PointMassWorld {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PhysicsWorld for PointMassWorld {
    fn set_gravity(&mut self, gravity: Vec3) {
        self.gravity = gravity;
    }

    fn add_body(&mut self, def: BodyDef) -> BodyHandle {
        let inv_mass = if def.mass > 0.0 { 1.0 / def.mass } else { 0.0 };
        self.bodies.push(PointMass {
            position: def.position,
            velocity: def.velocity,
            rotation: Quat::IDENTITY,
            inv_mass,
            force: Vec3::ZERO,
        });
        BodyHandle(self.bodies.len() as u32 - 1)
    }

    fn step(&mut self, dt: f32) {
        for body in &mut self.bodies {
            if body.inv_mass == 0.0 {
                continue;
            }
            body.velocity += (self.gravity + body.force * body.inv_mass) * dt;
            body.position += body.velocity * dt;
            body.force = Vec3::ZERO;
        }
    }

    fn apply_force(&mut self, body: BodyHandle, force: Vec3, _point: Vec3) {
        if let Some(body) = self.bodies.get_mut(body.0 as usize) {
            body.force += force;
        }
    }

    fn transform(&self, body: BodyHandle) -> (Vec3, Quat) {
        self.bodies
            .get(body.0 as usize)
            .map(|body| (body.position, body.rotation))
            .unwrap_or((Vec3::ZERO, Quat::IDENTITY))
    }

    fn set_position(&mut self, body: BodyHandle, position: Vec3) {
        if let Some(body) = self.bodies.get_mut(body.0 as usize) {
            body.position = position;
        }
    }
}

// ---------------- renderer ----------------

#[derive(Clone, Copy)]
struct NodeState {
    visible: bool,
    position: Vec3,
    yaw: f32,
    rotation: Quat,
    scale: f32,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            visible: false,
            position: Vec3::ZERO,
            yaw: 0.0,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

/// Keeps scene-graph bookkeeping and counts frames instead of drawing.
#[derive(Default)]
pub struct HeadlessRenderer {
    nodes: FnvHashMap<u32, NodeState>,
    mixers: FnvHashMap<u32, f32>,
    frames: u64,
}

impl HeadlessRenderer {
    fn node_mut(&mut self, node: NodeHandle) -> &mut NodeState {
        self.nodes.entry(node.0).or_default()
    }
}

impl Renderer for HeadlessRenderer {
    fn render(&mut self) {
        self.frames += 1;
        if self.frames % 300 == 0 {
            let visible = self.nodes.values().filter(|n| n.visible).count();
            log::debug!(
                "[render] frame {}: {} of {} nodes visible",
                self.frames,
                visible,
                self.nodes.len()
            );
        }
    }

    fn set_visible(&mut self, node: NodeHandle, visible: bool) {
        self.node_mut(node).visible = visible;
    }

    fn set_position(&mut self, node: NodeHandle, position: Vec3) {
        self.node_mut(node).position = position;
    }

    fn set_yaw(&mut self, node: NodeHandle, yaw: f32) {
        self.node_mut(node).yaw = yaw;
    }

    fn set_transform(&mut self, node: NodeHandle, position: Vec3, rotation: Quat) {
        let state = self.node_mut(node);
        state.position = position;
        state.rotation = rotation;
    }

    fn set_uniform_scale(&mut self, node: NodeHandle, scale: f32) {
        self.node_mut(node).scale = scale;
    }

    fn advance_mixer(&mut self, mixer: MixerHandle, dt: f32) {
        *self.mixers.entry(mixer.0).or_default() += dt;
    }

    fn set_environment(&mut self, environment: EnvHandle) {
        log::info!("[render] environment {} applied as background", environment.0);
    }
}

// ---------------- assets ----------------

/// Hands out fresh handles for every path; every model carries one clip.
#[derive(Default)]
pub struct StubAssets {
    next_node: u32,
    next_mixer: u32,
    next_env: u32,
}

impl AssetLoader for StubAssets {
    fn load_model(&mut self, path: &str) -> Result<LoadedModel, AssetError> {
        let node = NodeHandle(self.next_node);
        self.next_node += 1;
        let mixer = MixerHandle(self.next_mixer);
        self.next_mixer += 1;
        log::info!("[assets] loaded {path}");
        Ok(LoadedModel {
            node,
            mixer: Some(mixer),
        })
    }

    fn load_environment(&mut self, path: &str) -> Result<EnvHandle, AssetError> {
        let env = EnvHandle(self.next_env);
        self.next_env += 1;
        log::info!("[assets] loaded {path}");
        Ok(env)
    }
}

// ---------------- particles ----------------

/// Counts emitted particles instead of simulating them.
#[derive(Default)]
pub struct TallyParticles {
    rate: f32,
    texture: String,
    running: bool,
    position: Vec3,
    emitted: f32,
}

impl TallyParticles {
    pub fn new(rate: f32, texture: &str) -> Self {
        Self {
            rate,
            texture: texture.to_owned(),
            ..Self::default()
        }
    }
}

impl ParticleEmitter for TallyParticles {
    fn start(&mut self) {
        if !self.running {
            log::info!("[particles] start ({} at {}/s)", self.texture, self.rate);
        }
        self.running = true;
    }

    fn stop(&mut self) {
        if self.running {
            log::info!(
                "[particles] stop after ~{} emitted at ({:.2}, {:.2}, {:.2})",
                self.emitted as u64,
                self.position.x,
                self.position.y,
                self.position.z
            );
        }
        self.running = false;
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn update(&mut self, dt: f32) {
        if self.running {
            self.emitted += self.rate * dt;
        }
    }
}
