//! Seeded 1-D gradient noise driving the model's yaw jitter.

use rand::prelude::*;

const TABLE_SIZE: usize = 256;

/// Smooth pseudo-random noise over a 1-D line.
///
/// Deterministic for a given seed; output stays within \[-1, 1\] and nearby
/// inputs yield nearby outputs, so it reads as organic wobble rather than
/// white noise when fed a slowly advancing offset.
pub struct Noise1 {
    perm: [u8; TABLE_SIZE],
}

impl Noise1 {
    pub fn new(seed: u64) -> Self {
        let mut perm = [0u8; TABLE_SIZE];
        for (i, entry) in perm.iter_mut().enumerate() {
            *entry = i as u8;
        }
        let mut rng = StdRng::seed_from_u64(seed);
        perm.shuffle(&mut rng);
        Self { perm }
    }

    /// Unit gradient for a lattice cell.
    #[inline]
    fn grad(&self, cell: i32) -> f32 {
        let hash = self.perm[(cell & 0xff) as usize];
        if hash & 1 == 0 {
            1.0
        } else {
            -1.0
        }
    }

    /// Sample the noise line at `x`.
    pub fn sample(&self, x: f32) -> f32 {
        let cell = x.floor();
        let t = x - cell;
        let cell = cell as i32;
        // quintic fade keeps the first and second derivative continuous
        let fade = t * t * t * (t * (t * 6.0 - 15.0) + 10.0);
        let lo = self.grad(cell) * t;
        let hi = self.grad(cell + 1) * (t - 1.0);
        lo + fade * (hi - lo)
    }
}
