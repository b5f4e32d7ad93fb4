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

//! This module provides the two specs constraining the degree of every
//! vertex in the enumerated subgraphs: `RangeDegreeSpec` accepts a final
//! degree within a per-vertex interval, `SetDegreeSpec` within an explicit
//! per-vertex set of admissible values.

use std::collections::BTreeSet;

use crate::{FrontierSpec, Graph, Item, SpecNext};

/// Bit 30 of a slot cell records that an incident edge has been taken, so
/// that the finalisation marker of the vertex can be matched against it in
/// `with_vertex` mode.
const TAKE_FLAG: i64 = 1 << 30;
/// The low 20 bits of a slot cell hold the running degree; saturating them
/// marks the vertex *complete*: its degree is certified to land within the
/// bounds whatever happens to the remaining items.
const COMPLETE: i64 = (1 << 20) - 1;

/// The spec driving the construction of the ZDD of all subgraphs in which
/// every vertex `v` ends up with a degree within `lb[v] ..= ub[v]`.
///
/// Both bound vectors are indexed by vertex id and must span
/// `max_vertex_number() + 1` entries, so that sparse id sets are
/// accommodated; the entries of ids occurring on no edge are ignored.
///
/// The spec prunes with the *remaining degree*: the adjacency of each
/// vertex is pre-sorted by item position, so one binary search tells how
/// many incident edges are still undecided. A partial degree that can no
/// longer reach `lb[v]`, or that already exceeds `ub[v]`, rejects at once;
/// a degree certified to land in range saturates its counter and is never
/// looked at again.
#[derive(Debug, Clone)]
pub struct RangeDegreeSpec<'a> {
    g: &'a Graph,
    f: usize,
    lb: Vec<i64>,
    ub: Vec<i64>,
    with_vertex: bool,
    /// per vertex, the (sorted) item positions of its incident edges
    adj: Vec<Vec<usize>>,
}

impl<'a> RangeDegreeSpec<'a> {
    pub fn new(g: &'a Graph, lb: &[usize], ub: &[usize], with_vertex: bool) -> Self {
        let n = g.max_vertex_number() + 1;
        assert_eq!(n, lb.len(), "one lower bound per vertex id");
        assert_eq!(n, ub.len(), "one upper bound per vertex id");
        for v in 0..n {
            assert!(lb[v] <= ub[v], "lb[{v}] > ub[{v}]");
        }

        let mut adj = vec![Vec::new(); n];
        for e in 0..g.n_edges() {
            let i = g.var_of_edge(e);
            let (u, v) = g.edge(e);
            adj[u].push(i);
            adj[v].push(i);
        }

        RangeDegreeSpec {
            g,
            f: g.max_frontier_size(),
            lb: lb.iter().map(|&x| x as i64).collect(),
            ub: ub.iter().map(|&x| x as i64).collect(),
            with_vertex,
            adj,
        }
    }

    fn add_degree(cell: &mut i64) {
        if (*cell & COMPLETE) != COMPLETE {
            *cell += 1;
        }
        *cell |= TAKE_FLAG;
    }

    /// Checks vertex `v` (slot `vi`) after the decision on item `i`, and
    /// saturates its counter when its degree can no longer leave the range.
    fn check(&self, mate: &mut [i64], i: usize, vi: usize, v: usize) -> bool {
        let deg = mate[vi] & COMPLETE;
        if deg == COMPLETE {
            return true;
        }
        if deg > self.ub[v] {
            return false;
        }
        let undecided = self.adj[v].len() - self.adj[v].partition_point(|&j| j <= i);
        let max_deg = deg + undecided as i64;
        if max_deg < self.lb[v] {
            return false;
        }
        if self.lb[v] <= deg && max_deg <= self.ub[v] {
            mate[vi] |= COMPLETE;
        }
        true
    }
}

impl FrontierSpec for RangeDegreeSpec<'_> {
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
                if self.with_vertex {
                    let touched = (mate[vi] & TAKE_FLAG) != 0;
                    if take != touched {
                        return SpecNext::Reject;
                    }
                }
                mate[vi] = 0;
            }
            Item::Edge { u, v, .. } => {
                let ui = self.g.frontier_index(u);
                let vi = self.g.frontier_index(v);
                if take {
                    Self::add_degree(&mut mate[ui]);
                    Self::add_degree(&mut mate[vi]);
                }
                if !self.check(mate, i, ui, u) {
                    return SpecNext::Reject;
                }
                if !self.check(mate, i, vi, v) {
                    return SpecNext::Reject;
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

/// The spec driving the construction of the ZDD of all subgraphs in which
/// every vertex `v` ends up with a degree belonging to `candidates[v]`.
/// This is the natural way to express parity-style constraints -- e.g.
/// `{0, 2}` everywhere combined with `ConnectedSpec` yields the single
/// cycles of the graph.
///
/// The candidate vector is indexed by vertex id (size
/// `max_vertex_number() + 1`); a vertex occurring on some edge must have a
/// non-empty candidate set, otherwise the family is empty.
#[derive(Debug, Clone)]
pub struct SetDegreeSpec<'a> {
    g: &'a Graph,
    f: usize,
    candidates: Vec<BTreeSet<usize>>,
    with_vertex: bool,
}

impl<'a> SetDegreeSpec<'a> {
    pub fn new(g: &'a Graph, candidates: Vec<BTreeSet<usize>>, with_vertex: bool) -> Self {
        let n = g.max_vertex_number() + 1;
        assert_eq!(n, candidates.len(), "one candidate set per vertex id");
        SetDegreeSpec { g, f: g.max_frontier_size(), candidates, with_vertex }
    }

    fn max_candidate(&self, v: usize) -> i64 {
        self.candidates[v].last().map_or(0, |&d| d as i64)
    }
}

impl FrontierSpec for SetDegreeSpec<'_> {
    fn array_width(&self) -> usize {
        self.f
    }

    fn get_root(&self, state: &mut [i64]) -> SpecNext {
        state.fill(0);
        for v in self.g.vertices() {
            if self.g.has_incident_edges(v) && self.candidates[v].is_empty() {
                return SpecNext::Reject;
            }
        }
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
                if !self.candidates[v].contains(&(mate[vi] as usize)) {
                    return SpecNext::Reject;
                }
                mate[vi] = 0;
            }
            Item::Edge { u, v, .. } => {
                if take {
                    let ui = self.g.frontier_index(u);
                    let vi = self.g.frontier_index(v);
                    mate[ui] += 1;
                    mate[vi] += 1;
                    if self.max_candidate(u) < mate[ui] {
                        return SpecNext::Reject;
                    }
                    if self.max_candidate(v) < mate[vi] {
                        return SpecNext::Reject;
                    }
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
