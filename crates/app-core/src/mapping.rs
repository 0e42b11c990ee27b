//! Camera-space to world-space placement for gesture-driven entities.
//!
//! The capture feed is mirrored, so camera x is flipped before any mapping.

use crate::constants::PENTACLE_YAW_RANGE;
use glam::Vec3;

/// Per-axis affine map from normalized camera space into world space.
#[derive(Clone, Copy, Debug)]
pub struct AxisMap {
    pub scale: Vec3,
    pub offset: Vec3,
}

impl AxisMap {
    pub const fn new(scale: Vec3, offset: Vec3) -> Self {
        Self { scale, offset }
    }

    /// world = camera * scale + offset, componentwise.
    #[inline]
    pub fn apply(&self, camera: Vec3) -> Vec3 {
        camera * self.scale + self.offset
    }
}

/// Placement of the primary model from the averaged fingertip.
pub const MODEL_MAP: AxisMap = AxisMap::new(
    Vec3::new(9.0, -9.0, -20.0),
    Vec3::new(-4.0, 2.0, -5.0),
);

/// Placement of the primary model's physics counterpart.
pub const MODEL_BODY_MAP: AxisMap = AxisMap::new(
    Vec3::new(10.0, -10.0, -10.0),
    Vec3::new(-5.0, 5.0, 0.0),
);

/// Flip a camera-space point on the horizontal axis.
#[inline]
pub fn mirror_x(point: Vec3) -> Vec3 {
    Vec3::new(1.0 - point.x, point.y, point.z)
}

#[inline]
pub fn midpoint(a: Vec3, b: Vec3) -> Vec3 {
    (a + b) * 0.5
}

/// Pentacle yaw from the wrist's camera x: mirrored and swept over the full
/// rotation range, so moving the hand across the frame spins it twice.
#[inline]
pub fn yaw_from_wrist_x(x: f32) -> f32 {
    (1.0 - x) * PENTACLE_YAW_RANGE
}
