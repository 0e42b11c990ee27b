//! The session context and its per-frame orchestration step.
//!
//! One context owns the service seams, the scene state, the body pool and
//! the landmark feed; construction runs the one-time load sequence and
//! `frame()` runs one display-refresh step. Within a step the order is
//! fixed: physics advances, the frame is rendered, then gestures are
//! evaluated against the latest landmark snapshot — so gesture reactions to
//! physics state land one frame late, which is fine for a visual scene.

use crate::bodies::BodyPool;
use crate::feed::LandmarkFeed;
use crate::scene::{ModelEntry, SceneState};
use crate::services::{
    AssetError, AssetLoader, BodyDef, CollisionShape, ParticleEmitter, PhysicsWorld, Renderer,
};
use app_core::landmarks as lm;
use app_core::{
    four_fingers_up_thumbs_down, index_and_pinky_up, middle_and_index_up, midpoint, mirror_x,
    yaw_from_wrist_x, GestureThresholds, Landmark, Noise1, BODY_MODEL_PATH, DEFAULT_POOL_SIZE,
    ENVIRONMENT_PATH, GRAVITY, MODEL_BODY_MAP, MODEL_BODY_RADIUS, MODEL_MAP, MODEL_PATH,
    MODEL_SCALE, NOISE_SPEED, NOISE_YAW_GAIN, ORBIT_SPEED, PENTACLE_MODEL_PATH, PENTACLE_SCALE,
    PENTACLE_START_POSITION, PENTACLE_START_YAW, SCENE_MODEL_PATH, SPIN_MAGNITUDE,
};
use glam::Vec3;
use instant::Instant;
use rand::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// Everything tunable about a session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub thresholds: GestureThresholds,
    pub pool_size: usize,
    pub orbit_speed: f32,
    /// Attach a physics counterpart to the primary model.
    pub model_body: bool,
    pub seed: u64,
    pub scene_path: String,
    pub environment_path: String,
    pub model_path: String,
    pub pentacle_path: String,
    pub body_model_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            thresholds: GestureThresholds::default(),
            pool_size: DEFAULT_POOL_SIZE,
            orbit_speed: ORBIT_SPEED,
            model_body: false,
            seed: 7,
            scene_path: SCENE_MODEL_PATH.to_owned(),
            environment_path: ENVIRONMENT_PATH.to_owned(),
            model_path: MODEL_PATH.to_owned(),
            pentacle_path: PENTACLE_MODEL_PATH.to_owned(),
            body_model_path: BODY_MODEL_PATH.to_owned(),
        }
    }
}

/// The external services a session drives, grouped so construction stays flat.
pub struct Services {
    pub physics: Box<dyn PhysicsWorld>,
    pub renderer: Box<dyn Renderer>,
    pub assets: Box<dyn AssetLoader>,
    pub particles: Box<dyn ParticleEmitter>,
}

/// Owns the whole interactive scene and advances it once per display frame.
pub struct SessionContext {
    services: Services,
    scene: SceneState,
    pool: BodyPool,
    feed: LandmarkFeed,
    thresholds: GestureThresholds,
    noise: Noise1,
    rng: StdRng,
    last_frame: Option<Instant>,
}

impl SessionContext {
    /// Run the one-time load sequence and wire the initial scene.
    ///
    /// Any asset miss aborts construction; there is no fallback asset and no
    /// retry, the caller decides what a dead session means.
    pub fn new(
        mut services: Services,
        config: SessionConfig,
        feed: LandmarkFeed,
    ) -> Result<Self, SessionError> {
        services.physics.set_gravity(GRAVITY);

        let environment = services.assets.load_environment(&config.environment_path)?;
        services.renderer.set_environment(environment);

        // Predefined set dressing and camera; nothing in it is toggled later.
        services.assets.load_model(&config.scene_path)?;

        let loaded = services.assets.load_model(&config.model_path)?;
        services.renderer.set_uniform_scale(loaded.node, MODEL_SCALE);
        services.renderer.set_visible(loaded.node, false);
        let mut model = ModelEntry::new(loaded.node, loaded.mixer);
        if config.model_body {
            model.body = Some(services.physics.add_body(BodyDef {
                mass: 0.0,
                position: Vec3::ZERO,
                velocity: Vec3::ZERO,
                shape: CollisionShape::Sphere {
                    radius: MODEL_BODY_RADIUS,
                },
            }));
        }

        let loaded = services.assets.load_model(&config.pentacle_path)?;
        services.renderer.set_uniform_scale(loaded.node, PENTACLE_SCALE);
        services.renderer.set_position(loaded.node, PENTACLE_START_POSITION);
        services.renderer.set_yaw(loaded.node, PENTACLE_START_YAW);
        services.renderer.set_visible(loaded.node, false);
        let mut pentacle = ModelEntry::new(loaded.node, loaded.mixer);
        pentacle.yaw = PENTACLE_START_YAW;

        // Subsystem seeds derive from the session seed so a session replays
        // identically from one number.
        let mix = |i: u64| config.seed ^ i.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let pool = BodyPool::new(
            config.pool_size,
            config.orbit_speed,
            &config.body_model_path,
            mix(1),
        );

        log::info!(
            "[session] ready: pool_size={} model_body={}",
            config.pool_size,
            config.model_body
        );

        Ok(Self {
            services,
            scene: SceneState::new(model, pentacle),
            pool,
            feed,
            thresholds: config.thresholds,
            noise: Noise1::new(mix(2)),
            rng: StdRng::seed_from_u64(config.seed),
            last_frame: None,
        })
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn pool(&self) -> &BodyPool {
        &self.pool
    }

    /// One display-refresh step; dt is measured from the previous call.
    pub fn frame(&mut self) -> Result<(), SessionError> {
        let now = Instant::now();
        let dt = match self.last_frame.replace(now) {
            Some(prev) => (now - prev).as_secs_f32(),
            None => 0.0,
        };
        self.step(dt)
    }

    /// Advance the whole scene by `dt` seconds.
    pub fn step(&mut self, dt: f32) -> Result<(), SessionError> {
        self.services.physics.step(dt);
        self.services.renderer.render();

        let predictions = self.feed.snapshot();
        match predictions.hand(0) {
            None => self.hide_all_interactive(),
            Some(hand1) => {
                let hand2 = predictions.hand(1);
                self.update_model(hand1);
                self.update_pentacle(hand1, hand2, dt);
                self.update_pool(hand1, hand2)?;
            }
        }

        // These run every frame once loading is done, gestures or not.
        self.services.particles.update(dt);
        if let Some(mixer) = self.scene.model.mixer {
            self.services.renderer.advance_mixer(mixer, dt);
        }
        Ok(())
    }

    /// No hands: every interactive element goes dark, whatever came before.
    fn hide_all_interactive(&mut self) {
        self.scene.model.visible = false;
        self.services.renderer.set_visible(self.scene.model.node, false);
        self.scene.pentacle.visible = false;
        self.services
            .renderer
            .set_visible(self.scene.pentacle.node, false);
        self.services.particles.stop();
        self.pool.set_visible(self.services.renderer.as_mut(), false);
    }

    fn update_model(&mut self, hand: &[Landmark]) {
        if middle_and_index_up(hand) {
            if !self.scene.model.visible {
                self.scene.spin_direction = random_spin(&mut self.rng);
                self.services.particles.start();
                log::debug!(
                    "[gesture] point: model shown, spin={:+.4}",
                    self.scene.spin_direction
                );
            }
            self.scene.model.visible = true;
            self.services.renderer.set_visible(self.scene.model.node, true);

            let index_tip = mirror_x(hand[lm::INDEX_TIP]);
            let middle_tip = mirror_x(hand[lm::MIDDLE_TIP]);
            let fingertip = midpoint(index_tip, middle_tip);

            let position = MODEL_MAP.apply(fingertip);
            self.services
                .renderer
                .set_position(self.scene.model.node, position);
            if let Some(body) = self.scene.model.body {
                self.services
                    .physics
                    .set_position(body, MODEL_BODY_MAP.apply(fingertip));
            }
            self.services.particles.set_position(position);

            self.scene.noise_offset += NOISE_SPEED;
            self.scene.model.yaw += self.scene.spin_direction
                + self.noise.sample(self.scene.noise_offset) * NOISE_YAW_GAIN;
            self.services
                .renderer
                .set_yaw(self.scene.model.node, self.scene.model.yaw);
        } else {
            self.scene.model.visible = false;
            self.services.renderer.set_visible(self.scene.model.node, false);
            self.services.particles.stop();
        }
    }

    fn update_pentacle(&mut self, hand1: &[Landmark], hand2: Option<&[Landmark]>, dt: f32) {
        let summoned = hand2
            .map_or(false, |hand2| {
                four_fingers_up_thumbs_down(hand1, hand2, &self.thresholds)
            });
        if summoned {
            self.scene.pentacle.visible = true;
            self.services
                .renderer
                .set_visible(self.scene.pentacle.node, true);
            if let Some(mixer) = self.scene.pentacle.mixer {
                self.services.renderer.advance_mixer(mixer, dt);
            }
            // hand 1's wrist steers the yaw
            self.scene.pentacle.yaw = yaw_from_wrist_x(hand1[lm::WRIST].x);
            self.services
                .renderer
                .set_yaw(self.scene.pentacle.node, self.scene.pentacle.yaw);
        } else {
            self.scene.pentacle.visible = false;
            self.services
                .renderer
                .set_visible(self.scene.pentacle.node, false);
        }
    }

    fn update_pool(
        &mut self,
        hand1: &[Landmark],
        hand2: Option<&[Landmark]>,
    ) -> Result<(), SessionError> {
        let spawning = hand2
            .map_or(false, |hand2| {
                index_and_pinky_up(hand1, hand2, &self.thresholds)
            });
        if spawning {
            if !self.pool.is_populated() {
                self.pool.populate(
                    self.services.physics.as_mut(),
                    self.services.renderer.as_mut(),
                    self.services.assets.as_mut(),
                )?;
            }
            self.pool.set_visible(self.services.renderer.as_mut(), true);
            self.pool
                .update_all(self.services.physics.as_mut(), self.services.renderer.as_mut());
        } else {
            self.pool.set_visible(self.services.renderer.as_mut(), false);
        }
        Ok(())
    }
}

/// Slow random yaw step, never exactly zero.
fn random_spin(rng: &mut StdRng) -> f32 {
    loop {
        let spin = (rng.gen::<f32>() - 0.5) * SPIN_MAGNITUDE;
        if spin != 0.0 {
            return spin;
        }
    }
}
