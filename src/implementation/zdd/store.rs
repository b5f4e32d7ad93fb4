// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the arena in which canonical ZDD nodes are
//! allocated: a growing vector of `(level, lo, hi)` triples along with a
//! unique table which enforces the two reduction rules at node-creation
//! time. Everything which assembles a reduced diagram (construction,
//! family-algebra operations, optimization) funnels through `make_node`.

use fxhash::FxHashMap;

use crate::{Error, NodeId};

/// An effective node of a decision diagram: the level it decides on and its
/// two children (`lo` when the item is omitted, `hi` when it is taken). The
/// two first slots of every arena hold terminal sentinels with level 0.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) struct Node {
    pub level: u32,
    pub lo: NodeId,
    pub hi: NodeId,
}

/// The two terminal sentinels seeding every arena.
pub(crate) fn terminals() -> Vec<Node> {
    vec![
        Node { level: 0, lo: NodeId::BOT, hi: NodeId::BOT },
        Node { level: 0, lo: NodeId::BOT, hi: NodeId::BOT },
    ]
}

/// An arena of canonical nodes under construction. The unique table maps a
/// `(level, lo, hi)` triple to the identifier of the one node carrying it.
pub(crate) struct NodeStore {
    nodes: Vec<Node>,
    utable: FxHashMap<(u32, NodeId, NodeId), NodeId>,
}

impl NodeStore {
    pub fn new() -> Self {
        NodeStore { nodes: terminals(), utable: FxHashMap::default() }
    }

    /// The total number of allocated slots, terminals included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the canonical node `(level, lo, hi)`: when `hi` is `⊥` the
    /// node is zero-suppressed into `lo`, and when an identical node already
    /// exists it is shared. Children must already live in this arena, at a
    /// strictly smaller level.
    pub fn make_node(&mut self, level: u32, lo: NodeId, hi: NodeId) -> NodeId {
        if hi == NodeId::BOT {
            return lo;
        }
        debug_assert!(self.nodes[lo.index()].level < level);
        debug_assert!(self.nodes[hi.index()].level < level);

        if let Some(&id) = self.utable.get(&(level, lo, hi)) {
            return id;
        }
        assert!(self.nodes.len() < u32::MAX as usize, "node arena overflow");
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node { level, lo, hi });
        self.utable.insert((level, lo, hi), id);
        id
    }

    /// Capacity-checked variant of `make_node`, used by the construction
    /// engine to honour the configured node cap.
    pub fn try_make_node(
        &mut self,
        level: u32,
        lo: NodeId,
        hi: NodeId,
        capacity: usize,
    ) -> Result<NodeId, Error> {
        if hi != NodeId::BOT
            && !self.utable.contains_key(&(level, lo, hi))
            && self.nodes.len() >= capacity
        {
            return Err(Error::CapacityExceeded { capacity });
        }
        Ok(self.make_node(level, lo, hi))
    }

    /// Consumes the arena into a finished diagram rooted at `root`.
    pub fn into_zdd(self, root: NodeId) -> super::Zdd {
        super::Zdd { nodes: self.nodes, root }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_store {
    use super::*;

    #[test]
    fn zero_suppression() {
        let mut store = NodeStore::new();
        assert_eq!(NodeId::TOP, store.make_node(1, NodeId::TOP, NodeId::BOT));
        assert_eq!(NodeId::BOT, store.make_node(3, NodeId::BOT, NodeId::BOT));
        assert_eq!(2, store.len());
    }

    #[test]
    fn merging() {
        let mut store = NodeStore::new();
        let a = store.make_node(1, NodeId::BOT, NodeId::TOP);
        let b = store.make_node(1, NodeId::BOT, NodeId::TOP);
        assert_eq!(a, b);
        assert_eq!(3, store.len());

        let c = store.make_node(2, a, NodeId::TOP);
        assert_ne!(a, c);
        assert_eq!(4, store.len());
    }

    #[test]
    fn capacity_is_enforced() {
        let mut store = NodeStore::new();
        let a = store.try_make_node(1, NodeId::BOT, NodeId::TOP, 3).unwrap();
        // sharing does not allocate, so this succeeds even at the cap
        assert_eq!(a, store.try_make_node(1, NodeId::BOT, NodeId::TOP, 3).unwrap());
        // a fresh node would overflow the cap
        assert!(store.try_make_node(2, a, NodeId::TOP, 3).is_err());
    }
}
