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

//! This module provides the ZDD data structure itself along with its
//! construction engine (top-down, driven by a `FrontierSpec`), its reduction
//! into canonical form, the basic family-algebra operations and the
//! evaluation routines (counting, unfolding, linear optimization).

mod store;
mod build;
mod ops;
mod eval;
mod optimize;

pub use optimize::*;

use fxhash::FxHashSet;

use crate::NodeId;

pub(crate) use store::{Node, NodeStore};

/// A reduced, canonical zero-suppressed decision diagram standing for a
/// family of subsets of `{0, .., n_vars - 1}`.
///
/// The diagram is self contained: it owns an arena of nodes referenced by
/// [`NodeId`]s, with the two terminals at the two first positions. The arena
/// is topologically ordered (the children of a node always sit at smaller
/// positions), which lets every evaluation routine run as a single pass over
/// the vector. After its construction call returns, a `Zdd` is immutable;
/// the operations of the family algebra all produce fresh diagrams.
///
/// Canonical form guarantees that (1) no internal node has `⊥` as its
/// 1-child, (2) no two internal nodes carry the same `(level, lo, hi)`
/// triple, and (3) levels strictly decrease along every edge.
#[derive(Debug, Clone)]
pub struct Zdd {
    /// All the nodes composing this decision diagram, terminals included.
    pub(crate) nodes: Vec<Node>,
    /// The identifier of the root node.
    pub(crate) root: NodeId,
}

impl Zdd {
    /// The empty family `⊥` (not even the empty set belongs to it).
    pub fn bot() -> Zdd {
        Zdd { nodes: store::terminals(), root: NodeId::BOT }
    }

    /// The family `⊤` that only comprises the empty set.
    pub fn top() -> Zdd {
        Zdd { nodes: store::terminals(), root: NodeId::TOP }
    }

    /// The identifier of the root node of this diagram.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The level of the root node; `0` when the diagram is a bare terminal.
    pub fn top_level(&self) -> usize {
        self.level_of(self.root) as usize
    }

    /// Tells whether this diagram denotes the empty family.
    pub fn is_empty(&self) -> bool {
        self.root == NodeId::BOT
    }

    /// The number of internal nodes of the diagram.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 2
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> Node {
        self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn level_of(&self, id: NodeId) -> u32 {
        self.nodes[id.index()].level
    }

    fn eq_rec(
        &self,
        f: NodeId,
        other: &Zdd,
        g: NodeId,
        seen: &mut FxHashSet<(NodeId, NodeId)>,
    ) -> bool {
        if f.is_terminal() || g.is_terminal() {
            return f == g;
        }
        if !seen.insert((f, g)) {
            return true;
        }
        let fnode = self.node(f);
        let gnode = other.node(g);
        fnode.level == gnode.level
            && self.eq_rec(fnode.lo, other, gnode.lo, seen)
            && self.eq_rec(fnode.hi, other, gnode.hi, seen)
    }
}

/// Two canonical diagrams denote the same family iff they are structurally
/// isomorphic; this comparison therefore runs a paired descent memoised on
/// the visited node pairs.
impl PartialEq for Zdd {
    fn eq(&self, other: &Self) -> bool {
        let mut seen = FxHashSet::default();
        self.eq_rec(self.root, other, other.root, &mut seen)
    }
}
impl Eq for Zdd {}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_zdd {
    use super::*;

    #[test]
    fn terminals() {
        assert!(Zdd::bot().is_empty());
        assert!(!Zdd::top().is_empty());
        assert_eq!(0, Zdd::bot().top_level());
        assert_eq!(0, Zdd::top().top_level());
        assert_eq!(0, Zdd::bot().node_count());
    }

    #[test]
    fn terminal_equality() {
        assert_eq!(Zdd::bot(), Zdd::bot());
        assert_eq!(Zdd::top(), Zdd::top());
        assert_ne!(Zdd::bot(), Zdd::top());
    }
}
