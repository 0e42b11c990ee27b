//! Per-frame gesture predicates over raw landmark sets.
//!
//! Every classifier is pure and frame-local: no smoothing, no memoization,
//! no history. A hand with fewer than 21 landmarks never matches anything.
//! "Above" means a strictly smaller y (the capture origin is top-left), and
//! every threshold comparison is exclusive: a value exactly at the boundary
//! fails.

use crate::landmarks::{self as lm, Landmark, LANDMARK_COUNT};

/// Distance and margin thresholds in normalized camera units.
///
/// The defaults are the values the gestures were tuned with; they are
/// configuration, not law.
#[derive(Clone, Copy, Debug)]
pub struct GestureThresholds {
    /// How far above its knuckle a fingertip must sit for the spawn gesture.
    pub finger_margin: f32,
    /// Ceiling for summed index-tip + thumb-tip distance in the summon gesture.
    pub summon_tip_distance: f32,
    /// Ceiling for summed index-tip + pinky-tip distance in the spawn gesture.
    pub spawn_tip_distance: f32,
    /// Overall inter-hand gate applied on top of `spawn_tip_distance`.
    pub spawn_hand_distance: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            finger_margin: 0.1,
            summon_tip_distance: 0.2,
            spawn_tip_distance: 0.05,
            spawn_hand_distance: 0.1,
        }
    }
}

#[inline]
fn complete(hand: &[Landmark]) -> bool {
    hand.len() >= LANDMARK_COUNT
}

/// 3-D distance between the same landmark on two hands.
#[inline]
fn tip_distance(a: &[Landmark], b: &[Landmark], tip: usize) -> f32 {
    a[tip].distance(b[tip])
}

/// Index and middle fingers raised, thumb, ring and pinky curled.
pub fn middle_and_index_up(hand: &[Landmark]) -> bool {
    if !complete(hand) {
        return false;
    }
    let index_up = hand[lm::INDEX_TIP].y < hand[lm::INDEX_MCP].y;
    let middle_up = hand[lm::MIDDLE_TIP].y < hand[lm::MIDDLE_MCP].y;
    let others_curled = [lm::THUMB_TIP, lm::RING_TIP, lm::PINKY_TIP]
        .iter()
        .all(|&tip| hand[tip].y > hand[tip - 3].y);
    index_up && middle_up && others_curled
}

/// Both hands held up with four fingers raised and thumbs tucked, fingertips
/// of the two hands close together.
pub fn four_fingers_up_thumbs_down(
    a: &[Landmark],
    b: &[Landmark],
    thresholds: &GestureThresholds,
) -> bool {
    if !complete(a) || !complete(b) {
        return false;
    }
    fn pose(hand: &[Landmark]) -> bool {
        let fingers_up = [lm::INDEX_TIP, lm::MIDDLE_TIP, lm::RING_TIP, lm::PINKY_TIP]
            .iter()
            .all(|&tip| hand[tip].y < hand[tip - 2].y);
        let thumb_down = hand[lm::THUMB_TIP].y > hand[lm::THUMB_TIP - 2].y;
        fingers_up && thumb_down
    }
    let tips = tip_distance(a, b, lm::INDEX_TIP) + tip_distance(a, b, lm::THUMB_TIP);
    pose(a) && pose(b) && tips < thresholds.summon_tip_distance
}

/// Both hands showing index and pinky only, with those fingertips almost
/// touching across hands.
pub fn index_and_pinky_up(
    a: &[Landmark],
    b: &[Landmark],
    thresholds: &GestureThresholds,
) -> bool {
    if !complete(a) || !complete(b) {
        return false;
    }
    let pose = |hand: &[Landmark]| -> bool {
        let index_up = hand[lm::INDEX_TIP].y < hand[lm::INDEX_MCP].y - thresholds.finger_margin;
        let pinky_up = hand[lm::PINKY_TIP].y < hand[lm::PINKY_MCP].y - thresholds.finger_margin;
        let others_curled = [lm::THUMB_TIP, lm::MIDDLE_TIP, lm::RING_TIP]
            .iter()
            .all(|&tip| hand[tip].y > hand[tip - 3].y);
        index_up && pinky_up && others_curled
    };
    let tips = tip_distance(a, b, lm::INDEX_TIP) + tip_distance(a, b, lm::PINKY_TIP);
    pose(a) && pose(b) && tips < thresholds.spawn_tip_distance && tips < thresholds.spawn_hand_distance
}
