// src/animation/chain.rs
//
// The node chain: a fixed-length arena of node states with a current index
// and a bounce direction. Activation passes to the neighbor in the current
// direction after each settlement; the direction flips at either end and the
// active node stays put for that cycle.

use super::state::{NodeState, StepStatus};

pub struct Chain {
    nodes: Vec<NodeState>,
    current: usize,
    dir: i32,
}

impl Chain {
    pub fn new(node_count: usize) -> Self {
        assert!(node_count > 0, "chain needs at least one node");
        Self {
            nodes: vec![NodeState::new(); node_count],
            current: 0,
            dir: 1,
        }
    }

    pub fn nodes(&self) -> &[NodeState] {
        &self.nodes
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> i32 {
        self.dir
    }

    /// Arms the active node. Returns true when the transition was accepted.
    pub fn start(&mut self) -> bool {
        self.nodes[self.current].start()
    }

    /// Ticks the active node; on settlement, hands activation to its
    /// neighbor before reporting the status to the caller.
    pub fn update(&mut self, ring_count: usize) -> StepStatus {
        let status = self.nodes[self.current].update(ring_count);
        if status == StepStatus::Settled {
            self.advance();
        }
        status
    }

    fn advance(&mut self) {
        let next = self.current as i32 + self.dir;
        if next < 0 || next >= self.nodes.len() as i32 {
            // chain boundary: flip the traversal direction, stay put
            self.dir = -self.dir;
        } else {
            self.current = next as usize;
        }
    }
}
