//! The chain of nodes walked back and forth by the animation.

use tracing::debug;

use crate::state::State;

/// One animated box, identified by its position (and palette color).
#[derive(Debug, Clone)]
pub struct Node {
    /// Position in the chain.
    pub index: usize,
    /// Scale state of this node.
    pub state: State,
}

impl Node {
    fn new(index: usize) -> Self {
        Self {
            index,
            state: State::new(),
        }
    }
}

/// A fixed row of nodes with a cursor that moves one node per completed step.
///
/// Nodes are stored in order, so the neighbors of node `i` are `i - 1` and
/// `i + 1`. When the cursor runs off either end it stays put and reverses.
#[derive(Debug, Clone)]
pub struct LineInABox {
    nodes: Vec<Node>,
    curr: usize,
    dir: i8,
}

impl LineInABox {
    /// Build a chain of `count` nodes (at least one).
    pub fn new(count: usize) -> Self {
        Self {
            nodes: (0..count.max(1)).map(Node::new).collect(),
            curr: 0,
            dir: 1,
        }
    }

    /// Neighbor of node `index` in direction `dir` (1 forward, otherwise back).
    pub fn next_index(&self, index: usize, dir: i8) -> Option<usize> {
        if dir == 1 {
            let next = index + 1;
            (next < self.nodes.len()).then_some(next)
        } else {
            index.checked_sub(1)
        }
    }

    /// The node currently being animated.
    pub fn current(&self) -> &Node {
        &self.nodes[self.curr]
    }

    /// Direction the cursor moves on completion.
    pub fn dir(&self) -> i8 {
        self.dir
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Advance the current node by one tick. Returns `true` when its step
    /// completed and the cursor has moved on (or turned around).
    pub fn update(&mut self, gap: f32) -> bool {
        if !self.nodes[self.curr].state.update(gap) {
            return false;
        }
        match self.next_index(self.curr, self.dir) {
            Some(next) => {
                debug!(from = self.curr, to = next, "advancing to next node");
                self.curr = next;
            }
            None => {
                self.dir = -self.dir;
                debug!(node = self.curr, dir = self.dir, "reached end of chain, reversing");
            }
        }
        true
    }

    /// Start the current node moving. Returns whether it started.
    pub fn start_updating(&mut self) -> bool {
        self.nodes[self.curr].state.start_updating()
    }
}
