//! Headless demo: drives the real session through scripted hand poses.
//!
//! The scripted feed cycles idle → pointing → summoning → spawning → idle so
//! every gesture path in the frame loop runs at least once.

mod backend;
mod poses;

use app_session::{LandmarkFeed, Services, SessionConfig, SessionContext};
use std::thread;
use std::time::Duration;

const FPS: u64 = 60;
const RUN_SECONDS: u64 = 10;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let feed = LandmarkFeed::new();
    let services = Services {
        physics: Box::new(backend::PointMassWorld::new()),
        renderer: Box::new(backend::HeadlessRenderer::default()),
        assets: Box::new(backend::StubAssets::default()),
        particles: Box::new(backend::TallyParticles::new(
            app_core::PARTICLE_RATE,
            app_core::PARTICLE_TEXTURE_PATH,
        )),
    };
    let mut session = SessionContext::new(services, SessionConfig::default(), feed.clone())?;

    let frame_period = Duration::from_millis(1000 / FPS);
    for frame in 0..(RUN_SECONDS * FPS) {
        let second = frame / FPS;
        match second {
            0..=1 => feed.publish(poses::idle()),
            // drift the pointing hand so the model tracks across the frame
            2..=3 => feed.publish(poses::pointing(0.25 + frame as f32 * 0.001)),
            4..=5 => feed.publish(poses::summoning()),
            6..=8 => feed.publish(poses::spawning()),
            _ => feed.clear(),
        }
        session.frame()?;

        if frame % FPS == 0 {
            let scene = session.scene();
            log::info!(
                "[demo] t={}s model={} pentacle={} pool_len={} pool_visible={}",
                second,
                scene.model.visible,
                scene.pentacle.visible,
                session.pool().len(),
                session.pool().visible()
            );
        }
        thread::sleep(frame_period);
    }

    log::info!("[demo] done");
    Ok(())
}
