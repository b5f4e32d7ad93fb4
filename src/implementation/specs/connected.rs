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

//! This module provides the spec enumerating the connected subgraphs of a
//! graph: the classical frontier construction in which every live vertex
//! carries a small component label (its *mate*), merged as taken edges tie
//! partial components together.

use crate::{FrontierSpec, Graph, Item, SpecNext};

/// The label of an unoccupied frontier slot.
const INIT: i64 = -1;

/// The spec driving the construction of the ZDD of all non-empty connected
/// subgraphs of a graph -- the acyclic ones only (i.e. trees) when
/// `non_cyclic` is set.
///
/// The frontier state assigns each live vertex a component label; two slots
/// share a label iff the corresponding vertices are already connected by
/// taken edges. Labels are renumbered densely after every merge so that
/// label-isomorphic states collapse in the memoisation table. The diagram
/// accepts as soon as a component loses its last frontier vertex while
/// nothing else is live: the remaining items are thereby pinned out, which
/// is exactly what connectivity demands.
///
/// When `with_vertex` is set, the subsets also carry the finalisation
/// marker of every vertex touched by a taken edge, so that the enumerated
/// subgraphs are vertex-labelled.
#[derive(Debug, Clone)]
pub struct ConnectedSpec<'a> {
    g: &'a Graph,
    f: usize,
    non_cyclic: bool,
    with_vertex: bool,
}

impl<'a> ConnectedSpec<'a> {
    pub fn new(g: &'a Graph, non_cyclic: bool, with_vertex: bool) -> Self {
        ConnectedSpec { g, f: g.max_frontier_size(), non_cyclic, with_vertex }
    }

    /// Makes sure `v` carries a label (a fresh one if it was not live yet)
    /// and returns its frontier slot.
    fn entry(&self, mate: &mut [i64], v: usize) -> usize {
        let i = self.g.frontier_index(v);
        if mate[i] == INIT {
            mate[i] = mate.iter().copied().max().unwrap_or(INIT) + 1;
        }
        i
    }

    /// Renames the live labels to a dense `0..k` range, in slot order.
    fn translate(&self, mate: &mut [i64]) {
        let mut next = 0;
        let mut trans = vec![INIT; self.f + 1];
        for cell in mate.iter_mut() {
            if *cell == INIT {
                continue;
            }
            let label = *cell as usize;
            if trans[label] == INIT {
                trans[label] = next;
                next += 1;
            }
            *cell = trans[label];
        }
    }

    /// Merges the components of the two slots and renumbers densely.
    fn connect(&self, mate: &mut [i64], ui: usize, vi: usize) {
        let a = mate[ui];
        let b = mate[vi];
        for cell in mate.iter_mut() {
            if *cell == a {
                *cell = b;
            }
        }
        self.translate(mate);
    }

    /// Is slot `i` the last live vertex of its component ?
    fn is_independent(&self, mate: &[i64], i: usize) -> bool {
        mate[i] != INIT
            && mate
                .iter()
                .enumerate()
                .all(|(j, &label)| j == i || label != mate[i])
    }

    /// Is any other component than `c` still live on the frontier ?
    fn has_other_component(&self, mate: &[i64], c: i64) -> bool {
        mate.iter().any(|&label| label != INIT && label != c)
    }
}

impl FrontierSpec for ConnectedSpec<'_> {
    fn array_width(&self) -> usize {
        self.f
    }

    fn get_root(&self, state: &mut [i64]) -> SpecNext {
        state.fill(INIT);
        SpecNext::Level(self.g.n_items())
    }

    fn get_child(&self, mate: &mut [i64], level: usize, take: bool) -> SpecNext {
        let i = self.g.n_items() - level;

        match *self.g.item(i) {
            Item::Vertex(v) => {
                if take && !self.with_vertex {
                    return SpecNext::Reject;
                }
                let vi = self.g.frontier_index(v);
                if self.with_vertex {
                    // the marker of a vertex must be part of the subset iff
                    // the vertex is part of the subgraph
                    if take != (mate[vi] != INIT) {
                        return SpecNext::Reject;
                    }
                }
                if self.is_independent(mate, vi) {
                    // the component of v is complete; it is the whole
                    // subgraph or a violation of connectivity
                    if self.has_other_component(mate, mate[vi]) {
                        return SpecNext::Reject;
                    }
                    return SpecNext::Accept;
                }
                mate[vi] = INIT;
            }
            Item::Edge { u, v, .. } => {
                if take {
                    let ui = self.entry(mate, u);
                    let vi = self.entry(mate, v);
                    if self.non_cyclic && mate[ui] == mate[vi] {
                        return SpecNext::Reject;
                    }
                    self.connect(mate, ui, vi);
                }
            }
        }

        if level > 1 {
            SpecNext::Level(level - 1)
        } else {
            // the walk ran out of items without completing a component,
            // which also rules out the empty subgraph
            SpecNext::Reject
        }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_connected {
    use num_bigint::BigUint;

    use crate::*;

    fn triangle() -> Graph {
        let mut g = Graph::new();
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        g.add_edge(1, 2);
        g.setup();
        g
    }

    #[test]
    fn triangle_connected_subgraphs() {
        let g = triangle();
        let dd = Zdd::build(&ConnectedSpec::new(&g, false, false)).unwrap();
        // 3 single edges + 3 two-edge paths + the full triangle
        assert_eq!(BigUint::from(7u32), dd.cardinality());
    }

    #[test]
    fn triangle_trees() {
        let g = triangle();
        let dd = Zdd::build(&ConnectedSpec::new(&g, true, false)).unwrap();
        // the triangle itself is cyclic and drops out
        assert_eq!(BigUint::from(6u32), dd.cardinality());
    }

    #[test]
    fn single_edges_are_enumerated() {
        let g = triangle();
        let dd = Zdd::build(&ConnectedSpec::new(&g, true, false)).unwrap();
        let family = dd.unfold(g.n_items(), true);
        // the subset {item of edge 0} is a valid connected subgraph
        assert!(family.contains(&vec![g.var_of_edge(0)]));
        // the empty subgraph is not
        assert!(!family.contains(&vec![]));
    }

    #[test]
    fn disconnected_pairs_are_rejected() {
        // a path 0-1-2-3: taking the two end edges leaves the middle out
        let mut g = Graph::new();
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        g.setup();

        let dd = Zdd::build(&ConnectedSpec::new(&g, false, false)).unwrap();
        let family = dd.unfold(g.n_items(), true);
        let bad = vec![g.var_of_edge(0), g.var_of_edge(2)];
        assert!(!family.contains(&bad));
        // 3 single edges + 2 sub-paths + the full path
        assert_eq!(BigUint::from(6u32), dd.cardinality());
    }

    #[test]
    fn vertex_labelled_subgraphs_carry_their_markers() {
        let g = triangle();
        let dd = Zdd::build(&ConnectedSpec::new(&g, false, true)).unwrap();
        // same count: each subgraph has exactly one valid labelling
        assert_eq!(BigUint::from(7u32), dd.cardinality());

        let family = dd.unfold(g.n_items(), true);
        let mut expected = vec![g.var_of_edge(0), g.var_of_vertex(0), g.var_of_vertex(1)];
        expected.sort_unstable();
        assert!(family.contains(&expected));
    }
}
