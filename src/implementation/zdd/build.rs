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

//! This module provides the top-down construction engine: it unrolls the
//! state machine of a `FrontierSpec` level by level, memoising the nodes of
//! each level on the raw cells of the spec state, and then reduces the
//! resulting table bottom-up into a canonical diagram.

use fxhash::FxHashMap;

use crate::{BuildConfig, Error, FrontierSpec, NodeId, SpecNext, Zdd};

use super::NodeStore;

/// A node of the unreduced table built during the top-down sweep. Children
/// are raw indices in the same table, with 0 and 1 denoting the terminals.
#[derive(Debug, Clone, Copy)]
struct RawNode {
    lo: u32,
    hi: u32,
}

const RAW_BOT: u32 = 0;
const RAW_TOP: u32 = 1;

/// The nodes of one level which are pending expansion. The map keys nodes on
/// the spec state so that two transitions reaching the same sub-problem
/// share a node; the entries vector keeps them in insertion order so the
/// construction is deterministic.
#[derive(Default)]
struct Layer {
    entries: Vec<(Box<[i64]>, u32)>,
    index: FxHashMap<Box<[i64]>, u32>,
}

impl Zdd {
    /// Runs the top-down construction driven by `spec` and returns the
    /// reduced diagram of the accepted family, with an unbounded node table.
    /// An infeasible spec yields the empty diagram, not an error.
    pub fn build<S: FrontierSpec>(spec: &S) -> Result<Zdd, Error> {
        Self::build_with(spec, &BuildConfig::default())
    }

    /// Same as [`Zdd::build`], honouring the given configuration. When the
    /// node tables outgrow `config.node_capacity` the construction aborts
    /// with [`Error::CapacityExceeded`] -- it never returns a partial
    /// diagram.
    pub fn build_with<S: FrontierSpec>(spec: &S, config: &BuildConfig) -> Result<Zdd, Error> {
        let width = spec.array_width();
        let capacity = config.node_capacity;

        let mut root_state = vec![0i64; width].into_boxed_slice();
        let n = match spec.get_root(&mut root_state) {
            SpecNext::Reject => return Ok(Zdd::bot()),
            SpecNext::Accept => return Ok(Zdd::top()),
            SpecNext::Level(n) => n,
        };
        assert!(n >= 1, "root level must be at least 1");
        tracing::debug!(levels = n, state_width = width, "starting top-down construction");

        let mut raw: Vec<RawNode> = vec![RawNode { lo: RAW_BOT, hi: RAW_BOT }; 2];
        let mut by_level: Vec<Vec<u32>> = vec![Vec::new(); n + 1];
        let mut layers: Vec<Layer> = Vec::with_capacity(n + 1);
        layers.resize_with(n + 1, Layer::default);

        let root_id = alloc_raw(&mut raw, capacity)?;
        by_level[n].push(root_id);
        layers[n].index.insert(root_state.clone(), root_id);
        layers[n].entries.push((root_state, root_id));

        for level in (1..=n).rev() {
            for k in 0..layers[level].entries.len() {
                let (state, id) = layers[level].entries[k].clone();
                for take in [false, true] {
                    let mut next = state.clone();
                    let child = match spec.get_child(&mut next, level, take) {
                        SpecNext::Reject => RAW_BOT,
                        SpecNext::Accept => RAW_TOP,
                        SpecNext::Level(nl) => {
                            debug_assert!(
                                (1..level).contains(&nl),
                                "child level {nl} out of range at level {level}"
                            );
                            let layer = &mut layers[nl];
                            if let Some(&cid) = layer.index.get(&next) {
                                cid
                            } else {
                                let cid = alloc_raw(&mut raw, capacity)?;
                                by_level[nl].push(cid);
                                layer.index.insert(next.clone(), cid);
                                layer.entries.push((next, cid));
                                cid
                            }
                        }
                    };
                    if take {
                        raw[id as usize].hi = child;
                    } else {
                        raw[id as usize].lo = child;
                    }
                }
            }
            tracing::trace!(level, width = layers[level].entries.len(), "layer expanded");
            // the frontier states of an expanded layer are no longer needed
            layers[level] = Layer::default();
        }

        reduce(&raw, &by_level, root_id, capacity)
    }
}

fn alloc_raw(raw: &mut Vec<RawNode>, capacity: usize) -> Result<u32, Error> {
    if raw.len() >= capacity {
        return Err(Error::CapacityExceeded { capacity });
    }
    assert!(raw.len() < u32::MAX as usize, "node table overflow");
    let id = raw.len() as u32;
    raw.push(RawNode { lo: RAW_BOT, hi: RAW_BOT });
    Ok(id)
}

/// Applies the two reduction rules exhaustively, level by level from the
/// lowest one up, rebuilding the table through the canonical node store.
fn reduce(
    raw: &[RawNode],
    by_level: &[Vec<u32>],
    root: u32,
    capacity: usize,
) -> Result<Zdd, Error> {
    let mut store = NodeStore::new();
    let mut remap: Vec<NodeId> = vec![NodeId::BOT; raw.len()];
    remap[RAW_TOP as usize] = NodeId::TOP;

    for (level, ids) in by_level.iter().enumerate().skip(1) {
        for &id in ids {
            let RawNode { lo, hi } = raw[id as usize];
            let lo = remap[lo as usize];
            let hi = remap[hi as usize];
            remap[id as usize] = store.try_make_node(level as u32, lo, hi, capacity)?;
        }
    }

    tracing::debug!(
        unreduced = raw.len() - 2,
        reduced = store.len() - 2,
        "construction complete"
    );
    let root = remap[root as usize];
    Ok(store.into_zdd(root))
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
