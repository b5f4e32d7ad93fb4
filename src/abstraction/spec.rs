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

//! This module defines the "contract" of what defines a constraint that can
//! drive the top-down construction of a ZDD. An implementation of this trait
//! is a state machine over partial 0/1 assignments: the engine walks the
//! levels from the top one down to level 1, and at each level asks the spec
//! what happens when the current item is omitted or taken.

/// The outcome of a spec transition (or of the root initialisation).
///
/// The engine maps `Reject` to an edge towards the `⊥` terminal, `Accept` to
/// an edge towards the `⊤` terminal, and `Level(l)` to an edge towards a node
/// at level `l`. Note that accepting at level `l` pins every remaining item
/// (the ones at levels below `l`) *out* of the set: in a zero-suppressed
/// diagram, a level which is absent from a path denotes an excluded item.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum SpecNext {
    /// The partial assignment can no longer be extended into an accepted set.
    Reject,
    /// The partial assignment -- extended with `0` for every remaining item --
    /// belongs to the family.
    Accept,
    /// The construction proceeds with the item at the given level, which must
    /// be strictly smaller than the current one (and at least 1).
    Level(usize),
}

/// This trait defines the "contract" of what defines a constraint usable for
/// top-down ZDD construction. The spec carries a fixed-width array of `i64`
/// cells as its *frontier state*; the engine is oblivious to the meaning of
/// the cells and only ever uses them as an opaque memoisation key. Two
/// consequences:
///
/// * transitions must mutate the state *in place*, and
/// * any cell which becomes meaningless after a transition must be reset to
///   a canonical value (typically `0`), lest equivalent sub-problems fail to
///   hash equal and the diagram blows up.
pub trait FrontierSpec {
    /// The number of `i64` cells of the frontier state of this spec.
    fn array_width(&self) -> usize;

    /// This method initialises the root state (the `state` slice is
    /// `array_width()` cells wide, zero-filled by the engine) and returns the
    /// level of the topmost decision -- or `Reject`/`Accept` when the family
    /// is trivially empty / trivially `{∅}`.
    fn get_root(&self, state: &mut [i64]) -> SpecNext;

    /// This method implements one transition of the state machine: it mutates
    /// `state` to account for the decision of omitting (`take == false`) or
    /// taking (`take == true`) the item at `level`, and tells the engine
    /// where the corresponding edge leads.
    fn get_child(&self, state: &mut [i64], level: usize, take: bool) -> SpecNext;
}
