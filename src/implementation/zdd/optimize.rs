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

//! This module provides the linear optimization over the family encoded in a
//! ZDD: a single bottom-up sweep of the arena computes, for each node, the
//! best achievable cost of the sub-family it denotes, and assembles -- in
//! the same sweep -- the ZDD of the subsets attaining it.

use num_traits::PrimInt;

use crate::{Direction, NodeId, Zdd};

use super::NodeStore;

/// The outcome of a linear optimization: the best value, and the diagram of
/// all the subsets of the input family which attain it.
#[derive(Debug, Clone)]
pub struct Optimum<T> {
    /// the optimal value of the linear objective over the family
    pub value: T,
    /// the sub-family of optimizing subsets (never empty)
    pub solutions: Zdd,
}

/// Optimizes a linear objective `sum of cost[i] * x[i]` over the sets of a
/// family. The value type is any primitive integer wide enough to hold the
/// sum of the absolute costs; pick `i64` unless you have a reason not to.
///
/// # Example
/// ```
/// # use zeddo::*;
/// let family = power_set(3);
/// let lp = LinearOptimization::new(vec![5, -2, 4], Direction::Maximize);
/// let best = lp.optimize(&family).unwrap();
/// assert_eq!(9, best.value);
/// // a single optimizer: {0, 2}
/// assert_eq!(vec![vec![0, 2]], best.solutions.unfold(3, true));
/// ```
#[derive(Debug, Clone)]
pub struct LinearOptimization<T> {
    cost: Vec<T>,
    direction: Direction,
}

impl<T: PrimInt> LinearOptimization<T> {
    /// Creates the optimization problem for the given cost vector (one entry
    /// per variable, item `i` costing `cost[i]`) and direction.
    pub fn new(cost: Vec<T>, direction: Direction) -> Self {
        LinearOptimization { cost, direction }
    }

    #[inline]
    fn improves(&self, candidate: T, incumbent: T) -> bool {
        match self.direction {
            Direction::Maximize => candidate > incumbent,
            Direction::Minimize => candidate < incumbent,
        }
    }

    /// Runs the bottom-up dynamic program over `dd` and returns the best
    /// value along with the diagram of optimizing subsets, or `None` when
    /// the family is empty.
    pub fn optimize(&self, dd: &Zdd) -> Option<Optimum<T>> {
        let n_vars = self.cost.len();
        assert!(
            dd.top_level() <= n_vars,
            "diagram spans {} levels but the cost vector has {n_vars} entries",
            dd.top_level()
        );
        if dd.is_empty() {
            return None;
        }

        let mut store = NodeStore::new();
        // per arena slot: best objective over the denoted sub-family, and
        // the diagram of the subsets attaining it (⊥ slots are never read)
        let mut best: Vec<T> = vec![T::zero(); dd.nodes.len()];
        let mut opt: Vec<NodeId> = vec![NodeId::BOT; dd.nodes.len()];
        opt[NodeId::TOP.index()] = NodeId::TOP;

        for (index, node) in dd.nodes.iter().enumerate().skip(2) {
            let cost = self.cost[n_vars - node.level as usize];
            // the 1-child is never ⊥ in a canonical diagram
            let taken = best[node.hi.index()] + cost;

            let mut value = taken;
            let mut keep_lo = false;
            if node.lo != NodeId::BOT {
                let skipped = best[node.lo.index()];
                if skipped == value {
                    keep_lo = true;
                } else if self.improves(skipped, value) {
                    value = skipped;
                    keep_lo = true;
                }
            }
            let keep_hi = taken == value;

            let lo = if keep_lo { opt[node.lo.index()] } else { NodeId::BOT };
            let hi = if keep_hi { opt[node.hi.index()] } else { NodeId::BOT };
            best[index] = value;
            opt[index] = store.make_node(node.level, lo, hi);
        }

        let value = best[dd.root.index()];
        let solutions = store.into_zdd(opt[dd.root.index()]);
        tracing::debug!(
            nodes = dd.node_count(),
            solution_nodes = solutions.node_count(),
            "optimization sweep complete"
        );
        Some(Optimum { value, solutions })
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_optimize {
    use crate::*;

    #[test]
    fn empty_family_has_no_optimum() {
        let lp = LinearOptimization::new(vec![1i64, 2, 3], Direction::Maximize);
        assert!(lp.optimize(&Zdd::bot()).is_none());
    }

    #[test]
    fn the_empty_set_is_an_optimum() {
        let lp = LinearOptimization::new(vec![1i64, 2, 3], Direction::Maximize);
        let best = lp.optimize(&Zdd::top()).unwrap();
        assert_eq!(0, best.value);
        assert_eq!(Zdd::top(), best.solutions);
    }

    #[test]
    fn maximize_over_a_power_set_takes_the_positives() {
        let family = power_set(4);
        let lp = LinearOptimization::new(vec![3i64, -1, 0, 2], Direction::Maximize);
        let best = lp.optimize(&family).unwrap();
        assert_eq!(5, best.value);
        // item 2 costs nothing: with or without it, the value is the same
        assert_eq!(
            vec![vec![0, 2, 3], vec![0, 3]],
            best.solutions.unfold(4, true)
        );
    }

    #[test]
    fn minimize_over_a_power_set_takes_the_negatives() {
        let family = power_set(3);
        let lp = LinearOptimization::new(vec![3i64, -1, -4], Direction::Minimize);
        let best = lp.optimize(&family).unwrap();
        assert_eq!(-5, best.value);
        assert_eq!(vec![vec![1, 2]], best.solutions.unfold(3, true));
    }

    #[test]
    fn ties_keep_every_optimizer() {
        // every subset costs 0, so every subset is an optimizer
        let family = power_set(2);
        let lp = LinearOptimization::new(vec![0i64, 0], Direction::Maximize);
        let best = lp.optimize(&family).unwrap();
        assert_eq!(0, best.value);
        assert_eq!(family, best.solutions);

        let lp = LinearOptimization::new(vec![7i64, -7], Direction::Maximize);
        let best = lp.optimize(&family).unwrap();
        assert_eq!(7, best.value);
        assert_eq!(vec![vec![0]], best.solutions.unfold(2, true));
    }
}
