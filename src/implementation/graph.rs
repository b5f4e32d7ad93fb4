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

//! This module provides the graph model on which all the frontier-based
//! subgraph specs operate: a multigraph with sparse non-negative vertex ids,
//! which `setup()` turns into an *item sequence* (edges interleaved with
//! vertex-finalisation markers) together with a frontier-slot assignment.

use std::collections::BTreeSet;

use binary_heap_plus::BinaryHeap;
use fxhash::FxHashMap;

/// One element of the item sequence derived from a graph. The sequence
/// contains one `Edge` item per edge (in insertion order) and, immediately
/// after the last edge incident to a vertex, one `Vertex` item marking the
/// moment that vertex leaves the frontier.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Item {
    /// An edge `u`-`v`, along with the cumulative multiplicity of the `(u,v)`
    /// pair among the items up to this one, and the original edge index.
    Edge {
        u: usize,
        v: usize,
        multiplicity: usize,
        edge: usize,
    },
    /// The finalisation marker of a vertex: every edge incident to it has
    /// been seen, so its frontier slot can be released.
    Vertex(usize),
}

/// A multigraph over non-negative vertex ids which do not have to be dense
/// nor 0-based. Edges are directed pairs `(u, v)` with `u != v`; for
/// undirected use, callers are expected to register every edge with `u < v`
/// so that parallel edges accumulate a single multiplicity counter.
///
/// Before any of the enumeration-oriented accessors can be used, `setup()`
/// must be called to derive the item sequence and the frontier layout. Using
/// them beforehand is a programming error and panics.
///
/// # Example
/// ```
/// # use zeddo::Graph;
/// let mut g = Graph::new();
/// g.add_edge(0, 1);
/// g.add_edge(0, 2);
/// g.add_edge(1, 2);
/// g.setup();
///
/// assert_eq!(3, g.n_vertices());
/// assert_eq!(3, g.n_edges());
/// // 3 edge items + 3 vertex-finalisation items
/// assert_eq!(6, g.n_items());
/// assert_eq!(3, g.max_frontier_size());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// The set of vertices, kept sorted because vertex ids may be sparse.
    vertex: BTreeSet<usize>,
    /// The edges, in insertion order.
    edge: Vec<(usize, usize)>,

    /// The item sequence (empty until `setup()` has been called).
    item: Vec<Item>,
    /// Maps a vertex to the position of its finalisation item.
    v_to_item: Vec<Option<usize>>,
    /// Maps an edge index to the position of its edge item.
    e_to_item: Vec<usize>,
    /// The frontier slot assigned to each vertex.
    f_index: Vec<usize>,
    /// The maximum frontier size. A value of zero means `setup()` has not
    /// been run since the last mutation.
    max_f_size: usize,
}

impl Graph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a vertex. This is only ever required for vertices which
    /// might be isolated: `add_edge` registers its two endpoints on its own.
    pub fn add_vertex(&mut self, v: usize) {
        self.vertex.insert(v);
        self.max_f_size = 0;
    }

    /// Adds an edge `u`-`v` to the graph. Loops are not representable.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        assert!(u != v, "self loop {u}-{u}");
        self.vertex.insert(u);
        self.vertex.insert(v);
        self.edge.push((u, v));
        self.max_f_size = 0;
    }

    /// The largest vertex id occurring in the graph.
    pub fn max_vertex_number(&self) -> usize {
        *self.vertex.iter().next_back().expect("empty graph")
    }

    /// The number of (distinct) vertices.
    pub fn n_vertices(&self) -> usize {
        self.vertex.len()
    }

    /// The number of edges, parallel edges counted separately.
    pub fn n_edges(&self) -> usize {
        self.edge.len()
    }

    /// An iterator over the vertex ids, in increasing order.
    pub fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertex.iter().copied()
    }

    /// The endpoints of the `e`'th edge, in insertion order.
    pub fn edge(&self, e: usize) -> (usize, usize) {
        self.edge[e]
    }

    /// Derives the item sequence and the frontier layout. The frontier slot
    /// of a vertex is popped from a min-heap of free slot indices when the
    /// vertex first occurs on an edge, and pushed back when its finalisation
    /// marker is emitted, so a slot is only ever reused once its previous
    /// owner has left the frontier. Takes `O(|E| log |V|)`.
    pub fn setup(&mut self) {
        assert!(!self.edge.is_empty(), "setup on a graph without edges");

        let n = self.max_vertex_number() + 1;
        let m = self.n_edges();

        self.item.clear();
        self.v_to_item = vec![None; n];
        self.e_to_item = vec![0; m];
        self.f_index = vec![usize::MAX; n];
        self.max_f_size = 0;

        let mut edge_count = vec![0usize; n];
        let mut multiplicity: FxHashMap<(usize, usize), usize> = FxHashMap::default();
        for &(u, v) in self.edge.iter() {
            edge_count[u] += 1;
            edge_count[v] += 1;
            multiplicity.insert((u, v), 0);
        }

        let mut visited = vec![false; n];
        let mut free = BinaryHeap::new_min();
        for slot in 0..n {
            free.push(slot);
        }

        for e in 0..m {
            let (u, v) = self.edge[e];
            edge_count[u] -= 1;
            edge_count[v] -= 1;
            let mult = multiplicity.get_mut(&(u, v)).expect("edge was counted");
            *mult += 1;

            self.e_to_item[e] = self.item.len();
            self.item.push(Item::Edge { u, v, multiplicity: *mult, edge: e });

            for w in [u, v] {
                if !visited[w] {
                    visited[w] = true;
                    let slot = free.pop().expect("at most |V| vertices are live");
                    self.f_index[w] = slot;
                    self.max_f_size = self.max_f_size.max(slot + 1);
                }
            }
            for w in [u, v] {
                if edge_count[w] == 0 {
                    self.v_to_item[w] = Some(self.item.len());
                    self.item.push(Item::Vertex(w));
                    free.push(self.f_index[w]);
                }
            }
        }

        tracing::debug!(
            n_vertices = self.n_vertices(),
            n_edges = m,
            n_items = self.item.len(),
            max_frontier_size = self.max_f_size,
            "graph setup complete"
        );
    }

    #[inline]
    fn assert_setup(&self) {
        assert!(self.max_f_size > 0, "graph used before setup()");
    }

    /// The number of items (edges and vertex markers) of the sequence.
    pub fn n_items(&self) -> usize {
        self.assert_setup();
        self.item.len()
    }

    /// Tells whether the `i`'th item is a vertex-finalisation marker.
    pub fn is_vertex(&self, i: usize) -> bool {
        matches!(self.item(i), Item::Vertex(_))
    }

    /// The `i`'th item of the sequence.
    pub fn item(&self, i: usize) -> &Item {
        self.assert_setup();
        &self.item[i]
    }

    /// The maximum number of vertices simultaneously on the frontier.
    pub fn max_frontier_size(&self) -> usize {
        self.assert_setup();
        self.max_f_size
    }

    /// Tells whether vertex `v` occurs on at least one edge (an isolated
    /// vertex has no frontier slot and no finalisation item).
    pub fn has_incident_edges(&self, v: usize) -> bool {
        self.assert_setup();
        v < self.f_index.len() && self.f_index[v] != usize::MAX
    }

    /// The frontier slot of vertex `v`. The slot is stable for the whole
    /// time `v` spends on the frontier.
    pub fn frontier_index(&self, v: usize) -> usize {
        self.assert_setup();
        let slot = self.f_index[v];
        assert!(slot != usize::MAX, "vertex {v} occurs on no edge");
        slot
    }

    /// The item position of the finalisation marker of vertex `v`.
    pub fn var_of_vertex(&self, v: usize) -> usize {
        self.assert_setup();
        self.v_to_item[v].expect("vertex occurs on no edge")
    }

    /// The item position of the `e`'th edge.
    pub fn var_of_edge(&self, e: usize) -> usize {
        self.assert_setup();
        self.e_to_item[e]
    }

    /// The vertex whose finalisation marker sits at item position `i`.
    pub fn vertex_of_var(&self, i: usize) -> usize {
        match *self.item(i) {
            Item::Vertex(v) => v,
            Item::Edge { .. } => panic!("item {i} is an edge"),
        }
    }

    /// The edge index whose item sits at position `i`.
    pub fn edge_of_var(&self, i: usize) -> usize {
        match *self.item(i) {
            Item::Edge { edge, .. } => edge,
            Item::Vertex(_) => panic!("item {i} is a vertex marker"),
        }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
