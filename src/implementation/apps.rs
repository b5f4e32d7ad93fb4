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

//! This module provides one ready-made constructor per family of interest.
//! Each of them wires the relevant spec(s) -- conjoined when needed -- and
//! hands them to the construction engine, returning a reduced diagram.
//!
//! The graph-based constructors expect a graph on which `setup()` has
//! already been called; the families they produce live over the *item*
//! positions of that graph (query `var_of_edge`/`var_of_vertex` to relate
//! unfolded subsets back to edges and vertices).

use std::collections::BTreeSet;

use crate::{
    ConnectedSpec, Error, Graph, Intersection, LinearIneqSpec, RangeDegreeSpec, SetDegreeSpec,
    Sign, SteinerSpec, Zdd,
};

use super::zdd::NodeStore;

/// The ZDD of all 0/1 assignments satisfying the system `a x sign b`
/// (variable `i` at level `n_vars - i`).
pub fn linear_inequalities(
    a: Vec<Vec<i64>>,
    sign: Vec<Sign>,
    b: Vec<i64>,
) -> Result<Zdd, Error> {
    Zdd::build(&LinearIneqSpec::new(a, sign, b))
}

/// The ZDD of all subgraphs of `g` in which every vertex `v` keeps a degree
/// within `lb[v] ..= ub[v]` (both vectors indexed by vertex id up to
/// `max_vertex_number()`).
pub fn degree_constraints(
    g: &Graph,
    lb: &[usize],
    ub: &[usize],
    with_vertex: bool,
) -> Result<Zdd, Error> {
    Zdd::build(&RangeDegreeSpec::new(g, lb, ub, with_vertex))
}

/// The ZDD of all non-empty connected subgraphs of `g`.
pub fn connected_components(g: &Graph, with_vertex: bool) -> Result<Zdd, Error> {
    Zdd::build(&ConnectedSpec::new(g, false, with_vertex))
}

/// The ZDD of all (non-empty) trees of `g`, i.e. its connected acyclic
/// subgraphs.
pub fn trees(g: &Graph, with_vertex: bool) -> Result<Zdd, Error> {
    Zdd::build(&ConnectedSpec::new(g, true, with_vertex))
}

/// The ZDD of all spanning trees of `g`: the trees touching every vertex.
/// An edgeless graph admits the empty spanning tree when it has at most one
/// vertex, and none otherwise; the same goes for a graph with an isolated
/// vertex that no tree can reach.
pub fn spanning_trees(g: &Graph, with_vertex: bool) -> Result<Zdd, Error> {
    if g.n_edges() == 0 {
        return Ok(if g.n_vertices() <= 1 { Zdd::top() } else { Zdd::bot() });
    }
    if g.vertices().any(|v| !g.has_incident_edges(v)) {
        return Ok(Zdd::bot());
    }
    let n = g.max_vertex_number() + 1;
    let spec = Intersection::new(
        ConnectedSpec::new(g, true, with_vertex),
        RangeDegreeSpec::new(g, &vec![1; n], &vec![g.n_edges(); n], with_vertex),
    );
    Zdd::build(&spec)
}

/// The ZDD of all simple paths of `g` joining `s` to `t`: the connected
/// acyclic subgraphs in which `s` and `t` have degree one and every other
/// vertex degree zero or two.
pub fn st_paths(g: &Graph, s: usize, t: usize, with_vertex: bool) -> Result<Zdd, Error> {
    assert!(s != t, "the endpoints of a path must differ");
    assert!(g.has_incident_edges(s), "vertex {s} occurs on no edge");
    assert!(g.has_incident_edges(t), "vertex {t} occurs on no edge");

    let n = g.max_vertex_number() + 1;
    let candidates = (0..n)
        .map(|v| {
            if v == s || v == t {
                BTreeSet::from([1])
            } else {
                BTreeSet::from([0, 2])
            }
        })
        .collect();
    let spec = Intersection::new(
        ConnectedSpec::new(g, true, with_vertex),
        SetDegreeSpec::new(g, candidates, with_vertex),
    );
    Zdd::build(&spec)
}

/// The ZDD of all (simple) cycles of `g`: the connected subgraphs in which
/// every vertex has degree zero or two.
pub fn cycles(g: &Graph, with_vertex: bool) -> Result<Zdd, Error> {
    let n = g.max_vertex_number() + 1;
    let candidates = (0..n).map(|_| BTreeSet::from([0, 2])).collect();
    let spec = Intersection::new(
        ConnectedSpec::new(g, false, with_vertex),
        SetDegreeSpec::new(g, candidates, with_vertex),
    );
    Zdd::build(&spec)
}

/// The ZDD of all Steiner trees of `g` for the terminal set `terminals`:
/// the trees touching every terminal (and possibly more vertices).
pub fn steiner_trees(
    g: &Graph,
    terminals: BTreeSet<usize>,
    with_vertex: bool,
) -> Result<Zdd, Error> {
    for &t in terminals.iter() {
        assert!(g.has_incident_edges(t), "terminal {t} occurs on no edge");
    }
    let spec = Intersection::new(
        ConnectedSpec::new(g, true, with_vertex),
        SteinerSpec::new(g, terminals, with_vertex),
    );
    Zdd::build(&spec)
}

/// The ZDD of the power set of `{0, .., n_vars - 1}`: a chain of one node
/// per level whose both children agree.
pub fn power_set(n_vars: usize) -> Zdd {
    let mut store = NodeStore::new();
    let mut f = crate::NodeId::TOP;
    for level in 1..=n_vars {
        f = store.make_node(level as u32, f, f);
    }
    store.into_zdd(f)
}

/// The ZDD holding the single subset `items` of `{0, .., n_vars - 1}`.
pub fn single_subset(n_vars: usize, items: &[usize]) -> Zdd {
    let mut levels: Vec<usize> = items
        .iter()
        .map(|&i| {
            assert!(i < n_vars, "item {i} out of range");
            n_vars - i
        })
        .collect();
    levels.sort_unstable();
    levels.windows(2).for_each(|w| assert!(w[0] != w[1], "duplicate item"));

    let mut store = NodeStore::new();
    let mut f = crate::NodeId::TOP;
    for &level in levels.iter() {
        f = store.make_node(level as u32, crate::NodeId::BOT, f);
    }
    store.into_zdd(f)
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_apps {
    use num_bigint::BigUint;

    use super::*;

    fn k4() -> Graph {
        let mut g = Graph::new();
        for u in 0..4 {
            for v in (u + 1)..4 {
                g.add_edge(u, v);
            }
        }
        g.setup();
        g
    }

    #[test]
    fn cayley_count_on_k4() {
        // 4^(4-2) spanning trees
        let dd = spanning_trees(&k4(), false).unwrap();
        assert_eq!(BigUint::from(16u32), dd.cardinality());
    }

    #[test]
    fn k4_st_paths() {
        // 0-3, 0-1-3, 0-2-3, 0-1-2-3, 0-2-1-3
        let dd = st_paths(&k4(), 0, 3, false).unwrap();
        assert_eq!(BigUint::from(5u32), dd.cardinality());
    }

    #[test]
    fn k4_cycles() {
        // four triangles and three quadrilaterals
        let dd = cycles(&k4(), false).unwrap();
        assert_eq!(BigUint::from(7u32), dd.cardinality());
    }

    #[test]
    fn k4_perfect_matchings() {
        let dd = degree_constraints(&k4(), &[1; 4], &[1; 4], false).unwrap();
        assert_eq!(BigUint::from(3u32), dd.cardinality());
    }

    #[test]
    fn k4_steiner_trees() {
        // trees covering {0, 1, 2}: the 3 spanning trees of the triangle
        // {0,1,2} plus the 16 spanning trees of K4
        let dd = steiner_trees(&k4(), BTreeSet::from([0, 1, 2]), false).unwrap();
        assert_eq!(BigUint::from(19u32), dd.cardinality());
    }

    #[test]
    fn edgeless_spanning_trees() {
        let g = Graph::new();
        assert_eq!(Zdd::top(), spanning_trees(&g, false).unwrap());

        let mut g = Graph::new();
        g.add_vertex(3);
        assert_eq!(Zdd::top(), spanning_trees(&g, false).unwrap());

        let mut g = Graph::new();
        g.add_vertex(0);
        g.add_vertex(1);
        assert_eq!(Zdd::bot(), spanning_trees(&g, false).unwrap());
    }

    #[test]
    fn isolated_vertices_cannot_be_spanned() {
        let mut g = Graph::new();
        g.add_edge(0, 1);
        g.add_vertex(7);
        g.setup();
        assert_eq!(Zdd::bot(), spanning_trees(&g, false).unwrap());
    }

    #[test]
    fn power_set_families() {
        let f = power_set(3);
        assert_eq!(BigUint::from(8u32), f.cardinality());
        assert_eq!(
            vec![
                vec![],
                vec![0],
                vec![0, 1],
                vec![0, 1, 2],
                vec![0, 2],
                vec![1],
                vec![1, 2],
                vec![2],
            ],
            f.unfold(3, true)
        );
        assert_eq!(Zdd::top(), power_set(0));
    }

    #[test]
    fn single_subsets() {
        let f = single_subset(4, &[2, 0]);
        assert_eq!(BigUint::from(1u32), f.cardinality());
        assert_eq!(vec![vec![0, 2]], f.unfold(4, true));
        assert_eq!(Zdd::top(), single_subset(4, &[]));
    }

    #[test]
    fn power_set_matches_the_change_fold() {
        // the defining fold: f = ⊤ then f ∪ f.change(l) for every level
        let mut f = Zdd::top();
        for level in 1..=4 {
            f = f.union(&f.change(level));
        }
        assert_eq!(power_set(4), f);
    }
}
