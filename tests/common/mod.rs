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

//! Brute-force oracles shared by the integration tests: every family the
//! library builds as a ZDD is re-derived here by exhaustive enumeration of
//! the edge (resp. variable) subsets, so the tests can assert that both
//! constructions agree on small instances.

// each integration test binary only exercises a slice of these helpers
#![allow(dead_code)]

use zeddo::{Graph, Sign};

/// The exact count of a diagram, for instances small enough to fit u64.
pub fn count(dd: &zeddo::Zdd) -> u64 {
    u64::try_from(dd.cardinality()).expect("test instance overflows u64")
}

/// Enumerates the 0/1 solutions of `a x sign b` by brute force, as sorted
/// subsets of variable indices.
pub fn naive_linear(a: &[Vec<i64>], sign: &[Sign], b: &[i64]) -> Vec<Vec<usize>> {
    let n = a[0].len();
    let mut family = Vec::new();
    for mask in 0u32..(1 << n) {
        let ok = a.iter().zip(sign).zip(b).all(|((row, sign), b)| {
            let sum: i64 = (0..n).filter(|i| mask >> i & 1 == 1).map(|i| row[i]).sum();
            match sign {
                Sign::Le => sum <= *b,
                Sign::Eq => sum == *b,
                Sign::Ge => sum >= *b,
            }
        });
        if ok {
            family.push((0..n).filter(|i| mask >> i & 1 == 1).collect());
        }
    }
    family.sort();
    family
}

/// A description of one edge subset of a graph, with the quantities the
/// subgraph predicates need.
pub struct Subgraph {
    /// indices of the taken edges
    pub edges: Vec<usize>,
    /// the vertices touched by at least one taken edge
    pub touched: Vec<usize>,
    /// `degree[v]` over vertex ids
    pub degree: Vec<usize>,
    /// number of connected components among the touched vertices
    pub components: usize,
}

impl Subgraph {
    fn new(g: &Graph, mask: u32) -> Self {
        let n = g.max_vertex_number() + 1;
        let edges: Vec<usize> = (0..g.n_edges()).filter(|e| mask >> e & 1 == 1).collect();
        let mut degree = vec![0usize; n];
        let mut uf: Vec<usize> = (0..n).collect();
        fn find(uf: &mut Vec<usize>, v: usize) -> usize {
            if uf[v] != v {
                uf[v] = find(uf, uf[v]);
            }
            uf[v]
        }
        for &e in edges.iter() {
            let (u, v) = g.edge(e);
            degree[u] += 1;
            degree[v] += 1;
            let (ru, rv) = (find(&mut uf, u), find(&mut uf, v));
            uf[ru] = rv;
        }
        let touched: Vec<usize> = (0..n).filter(|&v| degree[v] > 0).collect();
        let mut roots: Vec<usize> = touched.iter().map(|&v| find(&mut uf, v)).collect();
        roots.sort_unstable();
        roots.dedup();
        Subgraph { edges, touched, degree, components: roots.len() }
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
    pub fn is_connected(&self) -> bool {
        self.components == 1
    }
    pub fn is_forest(&self) -> bool {
        self.edges.len() + self.components == self.touched.len()
    }
    pub fn is_tree(&self) -> bool {
        !self.is_empty() && self.is_connected() && self.is_forest()
    }
}

/// Enumerates, by brute force over the `2^|E|` edge subsets, the subgraphs
/// of `g` satisfying `predicate` -- rendered as sorted subsets of *item*
/// positions, vertex markers included when `with_vertex` is set. This is the
/// family a frontier spec is expected to produce.
pub fn naive_subgraphs(
    g: &Graph,
    with_vertex: bool,
    predicate: impl Fn(&Subgraph) -> bool,
) -> Vec<Vec<usize>> {
    assert!(g.n_edges() < 32, "oracle only meant for small graphs");
    let mut family = Vec::new();
    for mask in 0u32..(1 << g.n_edges()) {
        let sub = Subgraph::new(g, mask);
        if !predicate(&sub) {
            continue;
        }
        let mut items: Vec<usize> = sub.edges.iter().map(|&e| g.var_of_edge(e)).collect();
        if with_vertex {
            items.extend(sub.touched.iter().map(|&v| g.var_of_vertex(v)));
        }
        items.sort_unstable();
        family.push(items);
    }
    family.sort();
    family
}

/// A complete graph on `n` vertices.
pub fn complete(n: usize) -> Graph {
    let mut g = Graph::new();
    for u in 0..n {
        for v in (u + 1)..n {
            g.add_edge(u, v);
        }
    }
    g.setup();
    g
}

/// A `rows x cols` grid graph, vertices numbered row-major.
pub fn grid(rows: usize, cols: usize) -> Graph {
    let mut g = Graph::new();
    for r in 0..rows {
        for c in 0..cols {
            let v = r * cols + c;
            if c + 1 < cols {
                g.add_edge(v, v + 1);
            }
            if r + 1 < rows {
                g.add_edge(v, v + cols);
            }
        }
    }
    g.setup();
    g
}
