//! Canned landmark poses standing in for a live capture feed.
//!
//! Each pose is built the way the classifiers read hands: a neutral fist
//! with every landmark at mid-height, then the tips that matter moved above
//! or below their reference joints.

use app_core::landmarks as lm;
use app_core::{LandmarkSet, Predictions};
use glam::Vec3;

fn neutral_hand(x: f32) -> LandmarkSet {
    vec![Vec3::new(x, 0.5, 0.0); lm::LANDMARK_COUNT]
}

/// Nothing in frame.
pub fn idle() -> Predictions {
    Predictions::default()
}

/// One hand pointing with index and middle, the rest curled.
pub fn pointing(x: f32) -> Predictions {
    let mut hand = neutral_hand(x);
    hand[lm::INDEX_TIP].y = 0.3;
    hand[lm::MIDDLE_TIP].y = 0.3;
    hand[lm::THUMB_TIP].y = 0.65;
    hand[lm::RING_TIP].y = 0.65;
    hand[lm::PINKY_TIP].y = 0.65;
    Predictions::new([hand])
}

fn summon_hand(x: f32) -> LandmarkSet {
    let mut hand = neutral_hand(x);
    for tip in [lm::INDEX_TIP, lm::MIDDLE_TIP, lm::RING_TIP, lm::PINKY_TIP] {
        hand[tip].y = 0.3;
    }
    hand[lm::THUMB_TIP].y = 0.7;
    hand
}

/// Two hands close together, four fingers up and thumbs tucked.
pub fn summoning() -> Predictions {
    Predictions::new([summon_hand(0.48), summon_hand(0.52)])
}

fn spawn_hand(x: f32) -> LandmarkSet {
    let mut hand = neutral_hand(x);
    hand[lm::INDEX_TIP].y = 0.35;
    hand[lm::PINKY_TIP].y = 0.35;
    hand[lm::THUMB_TIP].y = 0.6;
    hand[lm::MIDDLE_TIP].y = 0.6;
    hand[lm::RING_TIP].y = 0.6;
    hand
}

/// Two hands flashing index and pinky with the tips nearly touching.
pub fn spawning() -> Predictions {
    Predictions::new([spawn_hand(0.495), spawn_hand(0.505)])
}
