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

//! This module provides the spec requiring a set of *terminal* vertices to
//! be covered by the enumerated subgraphs. Combined with the connectivity
//! spec (in its acyclic flavour) it yields the Steiner trees of the graph.

use std::collections::BTreeSet;

use crate::{FrontierSpec, Graph, Item, SpecNext};

/// The spec driving the construction of the ZDD of all subgraphs touching
/// every vertex of a given terminal set `T`. The frontier state is one flag
/// per slot, raised by the first taken incident edge; a terminal whose flag
/// is still down when it leaves the frontier rejects the partial subgraph.
#[derive(Debug, Clone)]
pub struct SteinerSpec<'a> {
    g: &'a Graph,
    f: usize,
    terminals: BTreeSet<usize>,
    with_vertex: bool,
}

impl<'a> SteinerSpec<'a> {
    pub fn new(g: &'a Graph, terminals: BTreeSet<usize>, with_vertex: bool) -> Self {
        SteinerSpec { g, f: g.max_frontier_size(), terminals, with_vertex }
    }
}

impl FrontierSpec for SteinerSpec<'_> {
    fn array_width(&self) -> usize {
        self.f
    }

    fn get_root(&self, state: &mut [i64]) -> SpecNext {
        state.fill(0);
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
                if self.with_vertex && take != (mate[vi] > 0) {
                    return SpecNext::Reject;
                }
                if mate[vi] == 0 && self.terminals.contains(&v) {
                    return SpecNext::Reject;
                }
                mate[vi] = 0;
            }
            Item::Edge { u, v, .. } => {
                if take {
                    mate[self.g.frontier_index(u)] = 1;
                    mate[self.g.frontier_index(v)] = 1;
                }
            }
        }

        if level > 1 {
            SpecNext::Level(level - 1)
        } else {
            SpecNext::Accept
        }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
