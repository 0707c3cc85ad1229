// src/animation/state.rs
//
// Per-node animation state machine. A node rests at scale 0 or 1; each
// accepted start drives the scale fully to the other rest point, where it
// snaps and settles back to idle.

use super::scale::update_delta;

/// Outcome of one animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Continue,
    Settled,
}

#[derive(Debug, Clone)]
pub struct NodeState {
    scale: f32,
    dir: f32,
    prev_scale: f32,
}

impl Default for NodeState {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeState {
    pub fn new() -> Self {
        Self {
            scale: 0.0,
            dir: 0.0,
            prev_scale: 0.0,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Idle ⟺ dir == 0; the node sits at a rest point.
    pub fn is_idle(&self) -> bool {
        self.dir == 0.0
    }

    /// Arms a transition toward the opposite rest point. Returns true when
    /// accepted; a node already animating ignores the call.
    pub fn start(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        // +1 from rest point 0, -1 from rest point 1
        self.dir = 1.0 - 2.0 * self.prev_scale;
        true
    }

    /// Advances the scale by one tick. Once the scale has moved a full unit
    /// away from the previous rest point it snaps to the new rest point and
    /// the node settles back to idle.
    pub fn update(&mut self, ring_count: usize) -> StepStatus {
        if self.is_idle() {
            return StepStatus::Continue;
        }
        self.scale += update_delta(self.scale, self.dir, 1.0, ring_count as f32);
        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + self.dir;
            self.dir = 0.0;
            self.prev_scale = self.scale;
            return StepStatus::Settled;
        }
        StepStatus::Continue
    }
}
