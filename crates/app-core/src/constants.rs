use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, TAU};

// Shared tuning constants for the gesture-driven scene.

// Primary model spin
pub const NOISE_SPEED: f32 = 0.01; // noise-offset advance per pointing frame
pub const NOISE_YAW_GAIN: f32 = 0.001; // how much sampled noise perturbs the yaw
pub const SPIN_MAGNITUDE: f32 = 0.01; // random spin drawn from (-0.5, 0.5) * this

// Primary model
pub const MODEL_SCALE: f32 = 0.4;
pub const MODEL_BODY_RADIUS: f32 = 0.5; // collision sphere of the optional counterpart

// Pentacle
pub const PENTACLE_SCALE: f32 = 0.45;
pub const PENTACLE_START_POSITION: Vec3 = Vec3::new(0.0, 0.6, 0.0);
pub const PENTACLE_START_YAW: f32 = -FRAC_PI_2;
pub const PENTACLE_YAW_RANGE: f32 = 2.0 * TAU; // wrist sweep maps to two full turns

// Orbiting body pool
pub const DEFAULT_POOL_SIZE: usize = 10;
pub const ORBIT_SPEED: f32 = 1.0; // centripetal pull strength
pub const BODY_MIN_RADIUS: f32 = 0.1;
pub const BODY_RADIUS_SPREAD: f32 = 0.15;
pub const BODY_SPAWN_RANGE: f32 = 2.0; // side of the centered spawn cube
pub const BODY_MASS_PER_RADIUS: f32 = 0.1;

// World
pub const GRAVITY: Vec3 = Vec3::new(0.0, -9.82, 0.0);

// Particles
pub const PARTICLE_RATE: f32 = 50.0;

// Asset paths
pub const SCENE_MODEL_PATH: &str = "static/models/scene.gltf";
pub const ENVIRONMENT_PATH: &str = "static/textures/kloppenheim_04_1k.hdr";
pub const MODEL_PATH: &str = "static/models/tobyPink.gltf";
pub const PENTACLE_MODEL_PATH: &str = "static/models/pentaclePink.gltf";
pub const BODY_MODEL_PATH: &str = "static/models/teddyHead.gltf";
pub const PARTICLE_TEXTURE_PATH: &str = "static/textures/star.png";
