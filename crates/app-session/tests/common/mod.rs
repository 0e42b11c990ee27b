// Shared mock services and landmark fixtures for the session tests.
// Each mock keeps its state behind an Rc so the test can still read it after
// the session has taken ownership of the boxed clone.

#![allow(dead_code)]

use app_core::landmarks as lm;
use app_core::LandmarkSet;
use app_session::{
    AssetError, AssetLoader, BodyDef, BodyHandle, EnvHandle, LandmarkFeed, LoadedModel,
    MixerHandle, NodeHandle, ParticleEmitter, PhysicsWorld, Renderer, Services, SessionConfig,
    SessionContext,
};
use glam::{Quat, Vec3};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub type EventLog = Rc<RefCell<Vec<&'static str>>>;

// ---------------- physics mock ----------------

pub struct MockBody {
    pub position: Vec3,
    pub velocity: Vec3,
    pub rotation: Quat,
    pub mass: f32,
}

#[derive(Default)]
pub struct PhysicsInner {
    pub gravity: Vec3,
    pub bodies: Vec<MockBody>,
    pub defs: Vec<BodyDef>,
    pub steps: Vec<f32>,
    pub forces: Vec<(BodyHandle, Vec3, Vec3)>,
    pub moved: Vec<(BodyHandle, Vec3)>,
}

#[derive(Clone, Default)]
pub struct MockPhysics {
    pub inner: Rc<RefCell<PhysicsInner>>,
    pub log: EventLog,
}

impl MockPhysics {
    pub fn with_log(log: EventLog) -> Self {
        Self {
            inner: Rc::default(),
            log,
        }
    }
}

impl PhysicsWorld for MockPhysics {
    fn set_gravity(&mut self, gravity: Vec3) {
        self.inner.borrow_mut().gravity = gravity;
    }

    fn add_body(&mut self, def: BodyDef) -> BodyHandle {
        let mut inner = self.inner.borrow_mut();
        let index = inner.bodies.len() as u32;
        // distinct non-identity rotations so transform copies are observable
        inner.bodies.push(MockBody {
            position: def.position,
            velocity: def.velocity,
            rotation: Quat::from_rotation_y(0.37 * (index as f32 + 1.0)),
            mass: def.mass,
        });
        inner.defs.push(def);
        BodyHandle(index)
    }

    fn step(&mut self, dt: f32) {
        self.log.borrow_mut().push("physics.step");
        let mut inner = self.inner.borrow_mut();
        let gravity = inner.gravity;
        inner.steps.push(dt);
        for body in &mut inner.bodies {
            if body.mass > 0.0 {
                body.velocity += gravity * dt;
                body.position += body.velocity * dt;
            }
        }
    }

    fn apply_force(&mut self, body: BodyHandle, force: Vec3, point: Vec3) {
        self.inner.borrow_mut().forces.push((body, force, point));
    }

    fn transform(&self, body: BodyHandle) -> (Vec3, Quat) {
        let inner = self.inner.borrow();
        inner
            .bodies
            .get(body.0 as usize)
            .map(|body| (body.position, body.rotation))
            .unwrap_or((Vec3::ZERO, Quat::IDENTITY))
    }

    fn set_position(&mut self, body: BodyHandle, position: Vec3) {
        let mut inner = self.inner.borrow_mut();
        if let Some(body_state) = inner.bodies.get_mut(body.0 as usize) {
            body_state.position = position;
        }
        inner.moved.push((body, position));
    }
}

// ---------------- renderer mock ----------------

#[derive(Clone, Copy)]
pub struct NodeState {
    pub visible: bool,
    pub position: Vec3,
    pub yaw: f32,
    pub rotation: Quat,
    pub scale: f32,
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

#[derive(Default)]
pub struct RendererInner {
    pub nodes: HashMap<u32, NodeState>,
    pub mixers: HashMap<u32, f32>,
    pub environment: Option<EnvHandle>,
    pub renders: u32,
}

#[derive(Clone, Default)]
pub struct MockRenderer {
    pub inner: Rc<RefCell<RendererInner>>,
    pub log: EventLog,
}

impl MockRenderer {
    pub fn with_log(log: EventLog) -> Self {
        Self {
            inner: Rc::default(),
            log,
        }
    }

    pub fn node(&self, node: NodeHandle) -> NodeState {
        self.inner
            .borrow()
            .nodes
            .get(&node.0)
            .copied()
            .unwrap_or_default()
    }

    pub fn mixer_time(&self, mixer: MixerHandle) -> f32 {
        self.inner
            .borrow()
            .mixers
            .get(&mixer.0)
            .copied()
            .unwrap_or(0.0)
    }
}

impl Renderer for MockRenderer {
    fn render(&mut self) {
        self.log.borrow_mut().push("render");
        self.inner.borrow_mut().renders += 1;
    }

    fn set_visible(&mut self, node: NodeHandle, visible: bool) {
        self.log.borrow_mut().push("set_visible");
        self.inner
            .borrow_mut()
            .nodes
            .entry(node.0)
            .or_default()
            .visible = visible;
    }

    fn set_position(&mut self, node: NodeHandle, position: Vec3) {
        self.inner
            .borrow_mut()
            .nodes
            .entry(node.0)
            .or_default()
            .position = position;
    }

    fn set_yaw(&mut self, node: NodeHandle, yaw: f32) {
        self.inner.borrow_mut().nodes.entry(node.0).or_default().yaw = yaw;
    }

    fn set_transform(&mut self, node: NodeHandle, position: Vec3, rotation: Quat) {
        let mut inner = self.inner.borrow_mut();
        let state = inner.nodes.entry(node.0).or_default();
        state.position = position;
        state.rotation = rotation;
    }

    fn set_uniform_scale(&mut self, node: NodeHandle, scale: f32) {
        self.inner
            .borrow_mut()
            .nodes
            .entry(node.0)
            .or_default()
            .scale = scale;
    }

    fn advance_mixer(&mut self, mixer: MixerHandle, dt: f32) {
        *self.inner.borrow_mut().mixers.entry(mixer.0).or_insert(0.0) += dt;
    }

    fn set_environment(&mut self, environment: EnvHandle) {
        self.inner.borrow_mut().environment = Some(environment);
    }
}

// ---------------- asset mock ----------------

#[derive(Default)]
pub struct AssetsInner {
    pub next_node: u32,
    pub next_mixer: u32,
    pub next_env: u32,
    pub loads: Vec<String>,
    pub fail_substring: Option<String>,
}

#[derive(Clone, Default)]
pub struct MockAssets {
    pub inner: Rc<RefCell<AssetsInner>>,
}

impl MockAssets {
    /// Fails any load whose path contains `substring`.
    pub fn failing(substring: &str) -> Self {
        let assets = Self::default();
        assets.inner.borrow_mut().fail_substring = Some(substring.to_owned());
        assets
    }

    pub fn loads_of(&self, path: &str) -> usize {
        self.inner
            .borrow()
            .loads
            .iter()
            .filter(|loaded| loaded.as_str() == path)
            .count()
    }
}

impl AssetLoader for MockAssets {
    fn load_model(&mut self, path: &str) -> Result<LoadedModel, AssetError> {
        let mut inner = self.inner.borrow_mut();
        if let Some(fail) = &inner.fail_substring {
            if path.contains(fail.as_str()) {
                return Err(AssetError::Model {
                    path: path.to_owned(),
                    reason: "mock failure".to_owned(),
                });
            }
        }
        inner.loads.push(path.to_owned());
        let node = NodeHandle(inner.next_node);
        inner.next_node += 1;
        let mixer = MixerHandle(inner.next_mixer);
        inner.next_mixer += 1;
        Ok(LoadedModel {
            node,
            mixer: Some(mixer),
        })
    }

    fn load_environment(&mut self, path: &str) -> Result<EnvHandle, AssetError> {
        let mut inner = self.inner.borrow_mut();
        if let Some(fail) = &inner.fail_substring {
            if path.contains(fail.as_str()) {
                return Err(AssetError::Environment {
                    path: path.to_owned(),
                    reason: "mock failure".to_owned(),
                });
            }
        }
        inner.loads.push(path.to_owned());
        let env = EnvHandle(inner.next_env);
        inner.next_env += 1;
        Ok(env)
    }
}

// ---------------- particle mock ----------------

#[derive(Default)]
pub struct ParticlesInner {
    pub running: bool,
    pub starts: u32,
    pub stops: u32,
    pub positions: Vec<Vec3>,
    pub advanced: f32,
}

#[derive(Clone, Default)]
pub struct MockParticles {
    pub inner: Rc<RefCell<ParticlesInner>>,
}

impl ParticleEmitter for MockParticles {
    fn start(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.running = true;
        inner.starts += 1;
    }

    fn stop(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.running = false;
        inner.stops += 1;
    }

    fn set_position(&mut self, position: Vec3) {
        self.inner.borrow_mut().positions.push(position);
    }

    fn update(&mut self, dt: f32) {
        self.inner.borrow_mut().advanced += dt;
    }
}

// ---------------- session rig ----------------

pub struct TestRig {
    pub physics: MockPhysics,
    pub renderer: MockRenderer,
    pub assets: MockAssets,
    pub particles: MockParticles,
    pub feed: LandmarkFeed,
    pub log: EventLog,
}

pub fn rig() -> TestRig {
    let log: EventLog = Rc::default();
    TestRig {
        physics: MockPhysics::with_log(log.clone()),
        renderer: MockRenderer::with_log(log.clone()),
        assets: MockAssets::default(),
        particles: MockParticles::default(),
        feed: LandmarkFeed::new(),
        log,
    }
}

impl TestRig {
    pub fn session(&self, config: SessionConfig) -> SessionContext {
        let services = Services {
            physics: Box::new(self.physics.clone()),
            renderer: Box::new(self.renderer.clone()),
            assets: Box::new(self.assets.clone()),
            particles: Box::new(self.particles.clone()),
        };
        let session = SessionContext::new(services, config, self.feed.clone())
            .expect("session construction should succeed with mock services");
        self.log.borrow_mut().clear();
        session
    }
}

// ---------------- landmark fixtures ----------------

pub fn neutral_hand(x: f32) -> LandmarkSet {
    vec![Vec3::new(x, 0.5, 0.0); lm::LANDMARK_COUNT]
}

/// Index + middle raised, thumb/ring/pinky curled.
pub fn pointing_hand(x: f32) -> LandmarkSet {
    let mut hand = neutral_hand(x);
    hand[lm::INDEX_TIP].y = 0.3;
    hand[lm::MIDDLE_TIP].y = 0.3;
    hand[lm::THUMB_TIP].y = 0.65;
    hand[lm::RING_TIP].y = 0.65;
    hand[lm::PINKY_TIP].y = 0.65;
    hand
}

/// Four fingers raised, thumb tucked.
pub fn summon_hand(x: f32) -> LandmarkSet {
    let mut hand = neutral_hand(x);
    for tip in [lm::INDEX_TIP, lm::MIDDLE_TIP, lm::RING_TIP, lm::PINKY_TIP] {
        hand[tip].y = 0.3;
    }
    hand[lm::THUMB_TIP].y = 0.7;
    hand
}

/// Index + pinky raised past the margin, thumb/middle/ring curled.
pub fn spawn_hand(x: f32) -> LandmarkSet {
    let mut hand = neutral_hand(x);
    hand[lm::INDEX_TIP].y = 0.35;
    hand[lm::PINKY_TIP].y = 0.35;
    hand[lm::THUMB_TIP].y = 0.6;
    hand[lm::MIDDLE_TIP].y = 0.6;
    hand[lm::RING_TIP].y = 0.6;
    hand
}
