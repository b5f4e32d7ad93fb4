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

//! This module is meant to test the correctness of every graph-family
//! constructor: once against the literal counts of well-studied graphs, and
//! once against brute-force enumeration over all edge subsets.

use std::collections::BTreeSet;

use zeddo::*;

mod common;
use common::{complete, count, grid, naive_subgraphs, Subgraph};

/// The small graphs every constructor is checked against.
fn zoo() -> Vec<(&'static str, Graph)> {
    let mut path = Graph::new();
    path.add_edge(0, 1);
    path.add_edge(1, 2);
    path.add_edge(2, 3);
    path.setup();

    let mut multi = Graph::new();
    multi.add_edge(0, 1);
    multi.add_edge(0, 1);
    multi.add_edge(1, 2);
    multi.add_edge(0, 2);
    multi.setup();

    let mut sparse = Graph::new();
    sparse.add_edge(2, 9);
    sparse.add_edge(9, 5);
    sparse.add_edge(2, 5);
    sparse.add_edge(5, 12);
    sparse.setup();

    vec![
        ("path", path),
        ("k4", complete(4)),
        ("multi", multi),
        ("sparse", sparse),
        ("grid2x3", grid(2, 3)),
    ]
}

#[test]
fn k4_literal_counts() {
    let g = complete(4);
    assert_eq!(16, count(&spanning_trees(&g, false).unwrap()));
    assert_eq!(5, count(&st_paths(&g, 0, 3, false).unwrap()));
    assert_eq!(7, count(&cycles(&g, false).unwrap()));
    assert_eq!(3, count(&degree_constraints(&g, &[1; 4], &[1; 4], false).unwrap()));
    assert_eq!(
        19,
        count(&steiner_trees(&g, BTreeSet::from([0, 1, 2]), false).unwrap())
    );
}

#[test]
fn grid_3x3_literal_counts() {
    let g = grid(3, 3);
    // Kirchhoff's theorem gives 192 spanning trees for the 3x3 grid
    assert_eq!(192, count(&spanning_trees(&g, false).unwrap()));
    // corner-to-corner simple paths
    assert_eq!(12, count(&st_paths(&g, 0, 8, false).unwrap()));
}

#[test]
fn connected_components_match_brute_force() {
    for (name, g) in zoo() {
        for with_vertex in [false, true] {
            let dd = connected_components(&g, with_vertex).unwrap();
            let naive = naive_subgraphs(&g, with_vertex, |s| s.is_connected() && !s.is_empty());
            assert_eq!(naive, dd.unfold(g.n_items(), true), "{name}/{with_vertex}");
        }
    }
}

#[test]
fn trees_match_brute_force() {
    for (name, g) in zoo() {
        for with_vertex in [false, true] {
            let dd = trees(&g, with_vertex).unwrap();
            let naive = naive_subgraphs(&g, with_vertex, |s| s.is_tree());
            assert_eq!(naive, dd.unfold(g.n_items(), true), "{name}/{with_vertex}");
        }
    }
}

#[test]
fn spanning_trees_match_brute_force() {
    for (name, g) in zoo() {
        let n_vertices = g.n_vertices();
        let dd = spanning_trees(&g, false).unwrap();
        let naive =
            naive_subgraphs(&g, false, |s| s.is_tree() && s.touched.len() == n_vertices);
        assert_eq!(naive, dd.unfold(g.n_items(), true), "{name}");
    }
}

#[test]
fn st_paths_match_brute_force() {
    let is_path = |s: &Subgraph, from: usize, to: usize| {
        s.is_connected()
            && s.touched.iter().all(|&v| {
                if v == from || v == to {
                    s.degree[v] == 1
                } else {
                    s.degree[v] == 2
                }
            })
            && s.degree[from] == 1
            && s.degree[to] == 1
    };
    for (name, g) in zoo() {
        let (from, to) = (g.vertices().next().unwrap(), g.vertices().last().unwrap());
        for with_vertex in [false, true] {
            let dd = st_paths(&g, from, to, with_vertex).unwrap();
            let naive = naive_subgraphs(&g, with_vertex, |s| is_path(s, from, to));
            assert_eq!(naive, dd.unfold(g.n_items(), true), "{name}/{with_vertex}");
        }
    }
}

#[test]
fn cycles_match_brute_force() {
    for (name, g) in zoo() {
        for with_vertex in [false, true] {
            let dd = cycles(&g, with_vertex).unwrap();
            let naive = naive_subgraphs(&g, with_vertex, |s| {
                !s.is_empty()
                    && s.is_connected()
                    && s.touched.iter().all(|&v| s.degree[v] == 2)
            });
            assert_eq!(naive, dd.unfold(g.n_items(), true), "{name}/{with_vertex}");
        }
    }
}

#[test]
fn steiner_trees_match_brute_force() {
    for (name, g) in zoo() {
        let mut terminals = BTreeSet::new();
        terminals.insert(g.vertices().next().unwrap());
        terminals.insert(g.vertices().last().unwrap());

        let dd = steiner_trees(&g, terminals.clone(), false).unwrap();
        let naive = naive_subgraphs(&g, false, |s| {
            s.is_tree() && terminals.iter().all(|t| s.touched.contains(t))
        });
        assert_eq!(naive, dd.unfold(g.n_items(), true), "{name}");
    }
}

#[test]
fn degree_constraints_match_brute_force() {
    for (name, g) in zoo() {
        let n = g.max_vertex_number() + 1;
        let bounds = [(vec![0; n], vec![1; n]), (vec![0; n], vec![2; n]), (vec![1; n], vec![3; n])];
        for (lb, ub) in bounds {
            let dd = degree_constraints(&g, &lb, &ub, false).unwrap();
            let naive = naive_subgraphs(&g, false, |s| {
                (0..n).filter(|&v| g.has_incident_edges(v)).all(|v| {
                    lb[v] <= s.degree[v] && s.degree[v] <= ub[v]
                })
            });
            assert_eq!(naive, dd.unfold(g.n_items(), true), "{name}");
        }
    }
}

#[test]
fn conjunction_of_graph_specs_is_family_intersection() {
    for (name, g) in zoo() {
        let n = g.max_vertex_number() + 1;
        let connected = Zdd::build(&ConnectedSpec::new(&g, false, false)).unwrap();
        let bounded =
            Zdd::build(&RangeDegreeSpec::new(&g, &vec![0; n], &vec![2; n], false)).unwrap();
        let both = Zdd::build(&Intersection::new(
            ConnectedSpec::new(&g, false, false),
            RangeDegreeSpec::new(&g, &vec![0; n], &vec![2; n], false),
        ))
        .unwrap();

        assert_eq!(connected.intersect(&bounded), both, "{name}");
    }
}

#[test]
fn unfold_round_trips_through_naive_reencoding() {
    let g = complete(4);
    let n = g.n_items();
    for dd in [
        trees(&g, false).unwrap(),
        cycles(&g, true).unwrap(),
        st_paths(&g, 0, 3, false).unwrap(),
    ] {
        let rebuilt = dd
            .unfold(n, true)
            .iter()
            .fold(Zdd::bot(), |acc, s| acc.union(&single_subset(n, s)));
        assert_eq!(dd, rebuilt);
    }
}

#[test]
fn cardinality_always_matches_unfold() {
    for (name, g) in zoo() {
        let dd = connected_components(&g, false).unwrap();
        assert_eq!(
            dd.unfold(g.n_items(), false).len() as u64,
            count(&dd),
            "{name}"
        );
    }
}
