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

//! # ZEDDO
//! Zeddo is a library to enumerate -- and compactly represent -- the subsets
//! of a finite ground set that satisfy combinatorial constraints, as
//! zero-suppressed decision diagrams (ZDDs). The diagrams are built top-down
//! by a *frontier-based* engine: a constraint is a small state machine (a
//! [`FrontierSpec`]) telling, for each item in turn, what taking or omitting
//! it does to the partial solution; the engine memoises these states per
//! level, so isomorphic sub-problems share a single node.
//!
//! Out of the box, the library enumerates the subgraphs of a graph that form
//! connected components, trees, spanning trees, Steiner trees, cycles or
//! simple s-t paths, the subgraphs honouring per-vertex degree constraints,
//! and the 0/1 solutions of systems of linear inequalities. Any two specs
//! can be conjoined with [`Intersection`] without materialising the operand
//! families.
//!
//! A constructed [`Zdd`] can be counted exactly ([`Zdd::cardinality`]),
//! unfolded into the explicit list of subsets ([`Zdd::unfold`]), combined
//! with another diagram ([`Zdd::union`], [`Zdd::intersect`],
//! [`Zdd::change`]), or optimized over ([`LinearOptimization`]).
//!
//! ## Quick Example
//! The following counts and inspects the spanning trees of the complete
//! graph on four vertices (Cayley's formula says there are `4^2 = 16`).
//!
//! ```
//! use zeddo::*;
//!
//! // 1. Describe the graph and derive its item sequence
//! let mut g = Graph::new();
//! for u in 0..4 {
//!     for v in (u + 1)..4 {
//!         g.add_edge(u, v);
//!     }
//! }
//! g.setup();
//!
//! // 2. Build the ZDD of all spanning trees
//! let dd = spanning_trees(&g, false).unwrap();
//! assert_eq!(16u32, u32::try_from(dd.cardinality()).unwrap());
//!
//! // 3. Pick the lightest one for some edge costs (one per item)
//! let mut cost = vec![0i64; g.n_items()];
//! for e in 0..g.n_edges() {
//!     cost[g.var_of_edge(e)] = 1 + (e as i64 % 3);
//! }
//! let lp = LinearOptimization::new(cost, Direction::Minimize);
//! let best = lp.optimize(&dd).unwrap();
//! assert_eq!(4, best.value);
//! ```
//!
//! ## Writing your own constraint
//! Implement [`FrontierSpec`]: give the width of your state array, fill the
//! root state, and transition it under omit/take decisions. Return
//! [`SpecNext::Reject`] to prune, [`SpecNext::Accept`] when the partial set
//! (completed with zeroes) belongs to the family, and the next level
//! otherwise. See `LinearIneqSpec` for a compact example.

mod common;
mod abstraction;
mod implementation;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
