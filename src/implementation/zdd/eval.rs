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

//! This module provides the evaluation routines of a constructed diagram:
//! counting the accepting paths (hence the sets of the family) with
//! arbitrary precision, and unfolding the family into an explicit list of
//! subsets.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::{NodeId, Zdd};

impl Zdd {
    /// The number of sets in the family, i.e. the number of paths from the
    /// root to the `⊤` terminal. Counts are exact: the arena is swept once,
    /// bottom-up, accumulating big integers.
    pub fn cardinality(&self) -> BigUint {
        let mut count: Vec<BigUint> = Vec::with_capacity(self.nodes.len());
        count.push(BigUint::zero());
        count.push(BigUint::one());
        for node in self.nodes.iter().skip(2) {
            let sum = &count[node.lo.index()] + &count[node.hi.index()];
            count.push(sum);
        }
        count[self.root.index()].clone()
    }

    /// Unfolds the family into explicit subsets of `{0, .., n_vars - 1}`,
    /// mapping the node at level `l` to the item `n_vars - l`. Within a
    /// subset, items are listed in increasing order; when `sorted` is true
    /// the subsets themselves are returned in lexicographic order.
    ///
    /// The walk is depth-first with an explicit stack of (node, phase)
    /// frames, so arbitrarily deep diagrams cannot overflow the call stack.
    pub fn unfold(&self, n_vars: usize, sorted: bool) -> Vec<Vec<usize>> {
        assert!(
            self.top_level() <= n_vars,
            "diagram spans {} levels but only {n_vars} variables were declared",
            self.top_level()
        );

        const ENTER: u8 = 0;
        const TAKE: u8 = 1;
        const LEAVE: u8 = 2;

        let mut family = Vec::new();
        let mut prefix: Vec<usize> = Vec::new();
        let mut stack: Vec<(NodeId, u8)> = vec![(self.root, ENTER)];

        while let Some((id, phase)) = stack.pop() {
            match phase {
                ENTER => {
                    if id == NodeId::BOT {
                        continue;
                    }
                    if id == NodeId::TOP {
                        family.push(prefix.clone());
                        continue;
                    }
                    stack.push((id, TAKE));
                    stack.push((self.node(id).lo, ENTER));
                }
                TAKE => {
                    prefix.push(n_vars - self.level_of(id) as usize);
                    stack.push((id, LEAVE));
                    stack.push((self.node(id).hi, ENTER));
                }
                _ => {
                    prefix.pop();
                }
            }
        }

        if sorted {
            family.sort();
        }
        family
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_eval {
    use num_bigint::BigUint;

    use crate::*;

    #[test]
    fn terminal_counts() {
        assert_eq!(BigUint::from(0u32), Zdd::bot().cardinality());
        assert_eq!(BigUint::from(1u32), Zdd::top().cardinality());
    }

    #[test]
    fn terminal_unfolds() {
        assert!(Zdd::bot().unfold(4, true).is_empty());
        assert_eq!(vec![Vec::<usize>::new()], Zdd::top().unfold(4, true));
    }

    #[test]
    fn cardinality_matches_unfold_length() {
        let f = power_set(4).union(&Zdd::top());
        let unfolded = f.unfold(4, false);
        assert_eq!(BigUint::from(unfolded.len()), f.cardinality());
    }

    #[test]
    fn unfold_maps_levels_to_items() {
        // {{2}} over 3 variables: level 2 is item 3 - 2 = 1
        let f = Zdd::top().change(2);
        assert_eq!(vec![vec![1]], f.unfold(3, true));
    }

    #[test]
    #[should_panic]
    fn unfold_rejects_too_few_variables() {
        Zdd::top().change(5).unfold(3, false);
    }
}
