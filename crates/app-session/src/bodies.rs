//! The orbiting body pool: physics-backed models continuously pulled toward
//! the scene origin so they trace approximate orbits.

use crate::services::{
    AssetError, AssetLoader, BodyDef, BodyHandle, CollisionShape, NodeHandle, PhysicsWorld,
    Renderer,
};
use app_core::{BODY_MASS_PER_RADIUS, BODY_MIN_RADIUS, BODY_RADIUS_SPREAD, BODY_SPAWN_RANGE};
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Per-frame capability invoked by the pool in a fixed order.
pub trait Updatable {
    fn update(&mut self, world: &mut dyn PhysicsWorld, renderer: &mut dyn Renderer);
}

/// One physics-backed visual. Created once, never destroyed; only its
/// visibility changes afterwards.
pub struct OrbitingBody {
    node: NodeHandle,
    body: BodyHandle,
    orbit_speed: f32,
}

impl OrbitingBody {
    pub fn node(&self) -> NodeHandle {
        self.node
    }

    pub fn body(&self) -> BodyHandle {
        self.body
    }
}

impl Updatable for OrbitingBody {
    /// Pull the body toward the origin and mirror the physics transform onto
    /// the visual, exactly.
    fn update(&mut self, world: &mut dyn PhysicsWorld, renderer: &mut dyn Renderer) {
        let (position, rotation) = world.transform(self.body);
        let dir = position.normalize_or_zero();
        world.apply_force(self.body, dir * -self.orbit_speed, position);
        renderer.set_transform(self.node, position, rotation);
    }
}

/// Lazily populated, fixed-size set of orbiting bodies.
pub struct BodyPool {
    members: Vec<OrbitingBody>,
    size: usize,
    orbit_speed: f32,
    model_path: String,
    visible: bool,
    rng: StdRng,
}

impl BodyPool {
    pub fn new(size: usize, orbit_speed: f32, model_path: &str, seed: u64) -> Self {
        Self {
            members: Vec::new(),
            size,
            orbit_speed,
            model_path: model_path.to_owned(),
            visible: false,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn is_populated(&self) -> bool {
        !self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn members(&self) -> &[OrbitingBody] {
        &self.members
    }

    /// One-time population; a pool that already has members is left untouched.
    ///
    /// Each slot gets a random radius, a mass proportional to it, a random
    /// position inside the centered spawn cube and a velocity tangential to a
    /// circle around the origin, so the per-frame pull turns into an orbit.
    /// Members start hidden.
    pub fn populate(
        &mut self,
        world: &mut dyn PhysicsWorld,
        renderer: &mut dyn Renderer,
        assets: &mut dyn AssetLoader,
    ) -> Result<(), AssetError> {
        if self.is_populated() {
            return Ok(());
        }
        log::info!("[pool] populating {} orbiting bodies", self.size);
        let half = BODY_SPAWN_RANGE * 0.5;
        for _ in 0..self.size {
            let radius = BODY_MIN_RADIUS + self.rng.gen::<f32>() * BODY_RADIUS_SPREAD;
            let angle = self.rng.gen::<f32>() * TAU;
            let position = Vec3::new(
                self.rng.gen::<f32>() * BODY_SPAWN_RANGE - half,
                self.rng.gen::<f32>() * BODY_SPAWN_RANGE - half,
                self.rng.gen::<f32>() * BODY_SPAWN_RANGE - half,
            );
            let body = world.add_body(BodyDef {
                mass: radius * BODY_MASS_PER_RADIUS,
                position,
                velocity: Vec3::new(-angle.sin(), 0.0, angle.cos()),
                shape: CollisionShape::Sphere { radius },
            });
            let model = assets.load_model(&self.model_path)?;
            renderer.set_visible(model.node, false);
            self.members.push(OrbitingBody {
                node: model.node,
                body,
                orbit_speed: self.orbit_speed,
            });
        }
        Ok(())
    }

    /// Flip every member's visibility at once.
    pub fn set_visible(&mut self, renderer: &mut dyn Renderer, visible: bool) {
        self.visible = visible;
        for member in &self.members {
            renderer.set_visible(member.node, visible);
        }
    }

    /// Self-update every member in insertion order.
    pub fn update_all(&mut self, world: &mut dyn PhysicsWorld, renderer: &mut dyn Renderer) {
        for member in &mut self.members {
            member.update(world, renderer);
        }
    }
}
