//! Hand landmark model shared by the classifiers and the frame loop.
//!
//! Landmarks arrive in normalized camera coordinates: x and y in \[0, 1\]
//! with the origin at the top-left (smaller y = higher on screen), z is
//! depth with no fixed unit. Index positions are semantically fixed.

use glam::Vec3;
use smallvec::SmallVec;

/// A complete hand carries exactly this many landmarks.
pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// One anatomical feature point of a detected hand.
pub type Landmark = Vec3;

/// One detected hand: landmarks in semantic order, wrist first.
pub type LandmarkSet = Vec<Landmark>;

/// The detections of a single capture frame: at most two hands, extras
/// dropped at construction. Produced fresh each capture frame; nothing
/// beyond the latest set is retained anywhere.
#[derive(Clone, Debug, Default)]
pub struct Predictions {
    hands: SmallVec<[LandmarkSet; 2]>,
}

impl Predictions {
    /// Two-hand interactions are the ceiling; additional hands are ignored.
    pub const MAX_HANDS: usize = 2;

    pub fn new(hands: impl IntoIterator<Item = LandmarkSet>) -> Self {
        let mut kept: SmallVec<[LandmarkSet; 2]> = SmallVec::new();
        for hand in hands {
            if kept.len() == Self::MAX_HANDS {
                break;
            }
            kept.push(hand);
        }
        Self { hands: kept }
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    pub fn hand_count(&self) -> usize {
        self.hands.len()
    }

    pub fn hand(&self, index: usize) -> Option<&[Landmark]> {
        self.hands.get(index).map(|hand| hand.as_slice())
    }
}
