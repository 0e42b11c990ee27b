//! Latest-value-wins handoff from the capture callback to the frame loop.

use app_core::Predictions;
use std::cell::RefCell;
use std::rc::Rc;

/// Single-slot snapshot of the most recent hand predictions.
///
/// The capture side calls [`publish`](Self::publish) at its own cadence; the
/// frame loop calls [`snapshot`](Self::snapshot) once per frame. The newest
/// value wins and there is no backpressure: a read that is stale by one
/// capture frame is tolerable for a visual application. Producer and
/// consumer share one cooperative thread, hence the plain `Rc<RefCell<_>>`.
#[derive(Clone, Default)]
pub struct LandmarkFeed {
    slot: Rc<RefCell<Predictions>>,
}

impl LandmarkFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot with this capture frame's detections.
    pub fn publish(&self, predictions: Predictions) {
        *self.slot.borrow_mut() = predictions;
    }

    /// Empty the slot, as the provider does when no hand is visible.
    pub fn clear(&self) {
        *self.slot.borrow_mut() = Predictions::default();
    }

    pub fn snapshot(&self) -> Predictions {
        self.slot.borrow().clone()
    }
}
