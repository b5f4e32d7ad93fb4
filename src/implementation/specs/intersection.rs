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

//! This module provides the conjunction of two specs: the composite family
//! is the intersection of the two operand families, built in one top-down
//! sweep without ever materialising the operand diagrams.

use crate::{FrontierSpec, SpecNext};

/// The status of a side whose family already accepted the partial set.
const ACCEPTED: i64 = -1;

/// The conjunction `A ∧ B` of two specs, itself a spec: its frontier state
/// is the concatenation of the operand states (prefixed by one bookkeeping
/// cell per side), and every transition forwards the decision to both
/// sides.
///
/// The bookkeeping cell of a side records the level of its next decision --
/// or that the side has accepted. An accepted side is *frozen*: in a
/// zero-suppressed diagram an accept edge pins every remaining item out of
/// the set, so the frozen side keeps accepting on omissions but vetoes any
/// further take. This is what makes the composite family exactly the
/// intersection of the operand families (see the `unfold` property tests).
///
/// # Example
/// ```
/// # use zeddo::*;
/// // subsets of weight <= 2 which contain at least one item
/// let light = LinearIneqSpec::new(vec![vec![1, 1, 1]], vec![Sign::Le], vec![2]);
/// let loaded = LinearIneqSpec::new(vec![vec![1, 1, 1]], vec![Sign::Ge], vec![1]);
/// let dd = Zdd::build(&Intersection::new(light, loaded)).unwrap();
/// assert_eq!(6u32, u32::try_from(dd.cardinality()).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Intersection<A, B> {
    a: A,
    b: B,
}

impl<A: FrontierSpec, B: FrontierSpec> Intersection<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Intersection { a, b }
    }

    /// Splits the composite state into the two status cells and the two
    /// operand state slices.
    fn split<'s>(&self, state: &'s mut [i64]) -> (&'s mut [i64], &'s mut [i64], &'s mut [i64]) {
        let (status, cells) = state.split_at_mut(2);
        let (a_cells, b_cells) = cells.split_at_mut(self.a.array_width());
        (status, a_cells, b_cells)
    }

    /// Records the outcome of one side into its status cell (zeroing the
    /// operand state on accept, so that equivalent composites hash equal)
    /// and reports it, or signals the rejection of the whole composite.
    fn settle(status: &mut i64, cells: &mut [i64], outcome: SpecNext) -> Option<SpecNext> {
        match outcome {
            SpecNext::Reject => None,
            SpecNext::Accept => {
                *status = ACCEPTED;
                cells.fill(0);
                Some(SpecNext::Accept)
            }
            SpecNext::Level(l) => {
                *status = l as i64;
                Some(SpecNext::Level(l))
            }
        }
    }

    /// One side's view of the decision taken at `level`.
    fn step<S: FrontierSpec>(
        side: &S,
        status: &mut i64,
        cells: &mut [i64],
        level: usize,
        take: bool,
    ) -> Option<SpecNext> {
        if *status == ACCEPTED {
            // frozen: the accept edge pinned all remaining items out
            return if take { None } else { Some(SpecNext::Accept) };
        }
        let expected = *status as usize;
        debug_assert!(expected >= 1 && expected <= level);
        if expected < level {
            // this side skipped the current level: the item is outside its
            // support, hence cannot be taken
            return if take { None } else { Some(SpecNext::Level(expected)) };
        }
        let child = side.get_child(cells, level, take);
        Self::settle(status, cells, child)
    }

    /// Combines the two sides' outcomes into the composite one.
    fn combine(a: SpecNext, b: SpecNext) -> SpecNext {
        match (a, b) {
            (SpecNext::Accept, SpecNext::Accept) => SpecNext::Accept,
            (SpecNext::Accept, next) | (next, SpecNext::Accept) => next,
            (SpecNext::Level(la), SpecNext::Level(lb)) => SpecNext::Level(la.max(lb)),
            _ => unreachable!("rejections are handled before combining"),
        }
    }
}

impl<A: FrontierSpec, B: FrontierSpec> FrontierSpec for Intersection<A, B> {
    fn array_width(&self) -> usize {
        2 + self.a.array_width() + self.b.array_width()
    }

    fn get_root(&self, state: &mut [i64]) -> SpecNext {
        let (status, a_cells, b_cells) = self.split(state);
        let ra = self.a.get_root(a_cells);
        let rb = self.b.get_root(b_cells);
        let (sa, sb) = status.split_at_mut(1);
        let Some(ra) = Self::settle(&mut sa[0], a_cells, ra) else {
            return SpecNext::Reject;
        };
        let Some(rb) = Self::settle(&mut sb[0], b_cells, rb) else {
            return SpecNext::Reject;
        };
        Self::combine(ra, rb)
    }

    fn get_child(&self, state: &mut [i64], level: usize, take: bool) -> SpecNext {
        let (status, a_cells, b_cells) = self.split(state);
        let (sa, sb) = status.split_at_mut(1);
        let Some(ra) = Self::step(&self.a, &mut sa[0], a_cells, level, take) else {
            return SpecNext::Reject;
        };
        let Some(rb) = Self::step(&self.b, &mut sb[0], b_cells, level, take) else {
            return SpecNext::Reject;
        };
        Self::combine(ra, rb)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
