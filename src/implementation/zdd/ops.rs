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

//! This module provides the basic operations of the ZDD family algebra:
//! `change` (toggle one item in every set), `union` and `intersect`. Each
//! operation is a standard recursive apply, memoised on the operand node
//! pair(s), and assembles its result through a fresh canonical node store so
//! that the outcome is reduced by construction.

use fxhash::FxHashMap;

use crate::{NodeId, Zdd};

use super::NodeStore;

/// Copies the sub-diagram of `src` rooted at `id` into `store`, reusing
/// already copied nodes through `memo`.
fn copy_into(
    src: &Zdd,
    id: NodeId,
    store: &mut NodeStore,
    memo: &mut FxHashMap<NodeId, NodeId>,
) -> NodeId {
    if id.is_terminal() {
        return id;
    }
    if let Some(&done) = memo.get(&id) {
        return done;
    }
    let node = src.node(id);
    let lo = copy_into(src, node.lo, store, memo);
    let hi = copy_into(src, node.hi, store, memo);
    let done = store.make_node(node.level, lo, hi);
    memo.insert(id, done);
    done
}

struct Apply<'a> {
    f: &'a Zdd,
    g: &'a Zdd,
    store: NodeStore,
    memo: FxHashMap<(NodeId, NodeId), NodeId>,
    copied_f: FxHashMap<NodeId, NodeId>,
    copied_g: FxHashMap<NodeId, NodeId>,
}

impl<'a> Apply<'a> {
    fn new(f: &'a Zdd, g: &'a Zdd) -> Self {
        Apply {
            f,
            g,
            store: NodeStore::new(),
            memo: FxHashMap::default(),
            copied_f: FxHashMap::default(),
            copied_g: FxHashMap::default(),
        }
    }

    fn union(&mut self, a: NodeId, b: NodeId) -> NodeId {
        if a == NodeId::BOT {
            return copy_into(self.g, b, &mut self.store, &mut self.copied_g);
        }
        if b == NodeId::BOT {
            return copy_into(self.f, a, &mut self.store, &mut self.copied_f);
        }
        if a == NodeId::TOP && b == NodeId::TOP {
            return NodeId::TOP;
        }
        if let Some(&done) = self.memo.get(&(a, b)) {
            return done;
        }
        let la = self.f.level_of(a);
        let lb = self.g.level_of(b);
        let done = match la.cmp(&lb) {
            std::cmp::Ordering::Greater => {
                let node = self.f.node(a);
                let lo = self.union(node.lo, b);
                let hi = copy_into(self.f, node.hi, &mut self.store, &mut self.copied_f);
                self.store.make_node(la, lo, hi)
            }
            std::cmp::Ordering::Less => {
                let node = self.g.node(b);
                let lo = self.union(a, node.lo);
                let hi = copy_into(self.g, node.hi, &mut self.store, &mut self.copied_g);
                self.store.make_node(lb, lo, hi)
            }
            std::cmp::Ordering::Equal => {
                let fa = self.f.node(a);
                let gb = self.g.node(b);
                let lo = self.union(fa.lo, gb.lo);
                let hi = self.union(fa.hi, gb.hi);
                self.store.make_node(la, lo, hi)
            }
        };
        self.memo.insert((a, b), done);
        done
    }

    fn intersect(&mut self, a: NodeId, b: NodeId) -> NodeId {
        if a == NodeId::BOT || b == NodeId::BOT {
            return NodeId::BOT;
        }
        if a == NodeId::TOP && b == NodeId::TOP {
            return NodeId::TOP;
        }
        if let Some(&done) = self.memo.get(&(a, b)) {
            return done;
        }
        let la = self.f.level_of(a);
        let lb = self.g.level_of(b);
        let done = match la.cmp(&lb) {
            // an item present only in one operand's support can never be
            // taken by a common set
            std::cmp::Ordering::Greater => self.intersect(self.f.node(a).lo, b),
            std::cmp::Ordering::Less => self.intersect(a, self.g.node(b).lo),
            std::cmp::Ordering::Equal => {
                let fa = self.f.node(a);
                let gb = self.g.node(b);
                let lo = self.intersect(fa.lo, gb.lo);
                let hi = self.intersect(fa.hi, gb.hi);
                self.store.make_node(la, lo, hi)
            }
        };
        self.memo.insert((a, b), done);
        done
    }
}

struct Change<'a> {
    f: &'a Zdd,
    level: u32,
    store: NodeStore,
    memo: FxHashMap<NodeId, NodeId>,
    copied: FxHashMap<NodeId, NodeId>,
}

impl<'a> Change<'a> {
    fn run(&mut self, id: NodeId) -> NodeId {
        if id == NodeId::BOT {
            return NodeId::BOT;
        }
        let lv = self.f.level_of(id);
        if lv < self.level {
            // every set below gains the item
            let sub = copy_into(self.f, id, &mut self.store, &mut self.copied);
            return self.store.make_node(self.level, NodeId::BOT, sub);
        }
        if let Some(&done) = self.memo.get(&id) {
            return done;
        }
        let node = self.f.node(id);
        let done = if lv == self.level {
            // swap the two cofactors: sets that had the item lose it and
            // conversely
            let lo = copy_into(self.f, node.hi, &mut self.store, &mut self.copied);
            let hi = copy_into(self.f, node.lo, &mut self.store, &mut self.copied);
            self.store.make_node(self.level, lo, hi)
        } else {
            let lo = self.run(node.lo);
            let hi = self.run(node.hi);
            self.store.make_node(lv, lo, hi)
        };
        self.memo.insert(id, done);
        done
    }
}

impl Zdd {
    /// Toggles the presence of the item at `level` in every set of the
    /// family: `change(f, l) = {S Δ {l} : S ∈ f}`. Applying it twice is the
    /// identity.
    pub fn change(&self, level: usize) -> Zdd {
        assert!(level >= 1, "level 0 is reserved for the terminals");
        let mut op = Change {
            f: self,
            level: level as u32,
            store: NodeStore::new(),
            memo: FxHashMap::default(),
            copied: FxHashMap::default(),
        };
        let root = op.run(self.root);
        op.store.into_zdd(root)
    }

    /// The family comprising the sets of `self`, of `other`, or of both.
    pub fn union(&self, other: &Zdd) -> Zdd {
        let mut op = Apply::new(self, other);
        let root = op.union(self.root, other.root);
        op.store.into_zdd(root)
    }

    /// The family comprising the sets belonging to both `self` and `other`.
    pub fn intersect(&self, other: &Zdd) -> Zdd {
        let mut op = Apply::new(self, other);
        let root = op.intersect(self.root, other.root);
        op.store.into_zdd(root)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
