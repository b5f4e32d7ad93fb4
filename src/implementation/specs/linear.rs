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

//! This module provides the spec enumerating the 0/1 solutions of a system
//! of linear constraints `A x ⟂ b` where every row carries its own sense
//! among `<=`, `=` and `>=`.

use crate::{FrontierSpec, Sign, SpecNext};

/// The spec driving the construction of the ZDD of all 0/1 assignments
/// satisfying `A x ⟂ b`. Variable `i` is decided at level `n_vars - i`, so
/// the first variable sits at the top of the diagram.
///
/// The frontier state holds one running sum per row. Infeasible partial
/// assignments are pruned early thanks to precomputed suffix bounds: for
/// each row and each variable index, the spec knows the best and worst
/// contribution the remaining variables can still make.
///
/// # Example
/// ```
/// # use zeddo::*;
/// // x0 + x1 >= 1 over two variables: three of the four assignments
/// let spec = LinearIneqSpec::new(vec![vec![1, 1]], vec![Sign::Ge], vec![1]);
/// let dd = Zdd::build(&spec).unwrap();
/// assert_eq!(vec![vec![0], vec![0, 1], vec![1]], dd.unfold(2, true));
/// ```
#[derive(Debug, Clone)]
pub struct LinearIneqSpec {
    n_vars: usize,
    a: Vec<Vec<i64>>,
    sign: Vec<Sign>,
    b: Vec<i64>,
    /// `pos_suffix[r][i]` is the largest sum variables `i..` can still add
    /// to row `r`; `neg_suffix[r][i]` the smallest (most negative) one.
    pos_suffix: Vec<Vec<i64>>,
    neg_suffix: Vec<Vec<i64>>,
}

impl LinearIneqSpec {
    /// Creates the spec for the system `a x sign b`. The matrix must be
    /// non-empty and rectangular, and `sign` and `b` must have one entry per
    /// row; anything else is a programming error.
    pub fn new(a: Vec<Vec<i64>>, sign: Vec<Sign>, b: Vec<i64>) -> Self {
        assert!(!a.is_empty(), "empty constraint matrix");
        let n_vars = a[0].len();
        assert!(n_vars > 0, "constraint matrix without variables");
        assert!(a.iter().all(|row| row.len() == n_vars), "ragged constraint matrix");
        assert_eq!(a.len(), sign.len(), "one sign per row");
        assert_eq!(a.len(), b.len(), "one bound per row");

        let mut pos_suffix = Vec::with_capacity(a.len());
        let mut neg_suffix = Vec::with_capacity(a.len());
        for row in a.iter() {
            let mut pos = vec![0i64; n_vars + 1];
            let mut neg = vec![0i64; n_vars + 1];
            for i in (0..n_vars).rev() {
                pos[i] = pos[i + 1] + row[i].max(0);
                neg[i] = neg[i + 1] + row[i].min(0);
            }
            pos_suffix.push(pos);
            neg_suffix.push(neg);
        }

        LinearIneqSpec { n_vars, a, sign, b, pos_suffix, neg_suffix }
    }

    /// Can the partial sums still be completed into a feasible assignment
    /// using variables `i..` ?
    fn feasible(&self, state: &[i64], i: usize) -> bool {
        for (r, &sum) in state.iter().enumerate() {
            let lowest = sum + self.neg_suffix[r][i];
            let highest = sum + self.pos_suffix[r][i];
            if self.sign[r].bounds_above() && lowest > self.b[r] {
                return false;
            }
            if self.sign[r].bounds_below() && highest < self.b[r] {
                return false;
            }
        }
        true
    }
}

impl FrontierSpec for LinearIneqSpec {
    fn array_width(&self) -> usize {
        self.a.len()
    }

    fn get_root(&self, state: &mut [i64]) -> SpecNext {
        state.fill(0);
        if !self.feasible(state, 0) {
            return SpecNext::Reject;
        }
        SpecNext::Level(self.n_vars)
    }

    fn get_child(&self, state: &mut [i64], level: usize, take: bool) -> SpecNext {
        let i = self.n_vars - level;
        if take {
            for (r, sum) in state.iter_mut().enumerate() {
                *sum += self.a[r][i];
            }
        }
        if !self.feasible(state, i + 1) {
            return SpecNext::Reject;
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

#[cfg(test)]
mod test_linear_spec {
    use num_bigint::BigUint;

    use crate::*;

    #[test]
    fn one_variable_below_zero_keeps_only_the_empty_set() {
        let spec = LinearIneqSpec::new(vec![vec![1]], vec![Sign::Le], vec![0]);
        let dd = Zdd::build(&spec).unwrap();
        assert_eq!(BigUint::from(1u32), dd.cardinality());
        assert_eq!(vec![Vec::<usize>::new()], dd.unfold(1, true));
    }

    #[test]
    fn one_variable_unreachable_bound_is_infeasible() {
        let spec = LinearIneqSpec::new(vec![vec![1]], vec![Sign::Ge], vec![2]);
        let dd = Zdd::build(&spec).unwrap();
        assert!(dd.is_empty());
        assert_eq!(BigUint::from(0u32), dd.cardinality());
    }

    #[test]
    fn equality_pins_the_assignment() {
        // x0 + x1 + x2 = 3 forces all three variables to one
        let spec = LinearIneqSpec::new(vec![vec![1, 1, 1]], vec![Sign::Eq], vec![3]);
        let dd = Zdd::build(&spec).unwrap();
        assert_eq!(vec![vec![0, 1, 2]], dd.unfold(3, true));
    }

    #[test]
    fn negative_coefficients() {
        // x0 - x1 >= 0: everything but {1}
        let spec = LinearIneqSpec::new(vec![vec![1, -1]], vec![Sign::Ge], vec![0]);
        let dd = Zdd::build(&spec).unwrap();
        assert_eq!(
            vec![vec![], vec![0], vec![0, 1]],
            dd.unfold(2, true)
        );
    }

    #[test]
    fn several_rows_conjoin() {
        // x0 + x1 <= 1 and x0 + x1 >= 1: exactly one of the two
        let spec = LinearIneqSpec::new(
            vec![vec![1, 1], vec![1, 1]],
            vec![Sign::Le, Sign::Ge],
            vec![1, 1],
        );
        let dd = Zdd::build(&spec).unwrap();
        assert_eq!(vec![vec![0], vec![1]], dd.unfold(2, true));
    }

    #[test]
    #[should_panic]
    fn empty_matrix_is_a_contract_violation() {
        LinearIneqSpec::new(vec![], vec![], vec![]);
    }
}
