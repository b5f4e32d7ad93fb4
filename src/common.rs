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

//! This module defines the most basic data types that are used throughout all
//! the code of our library: node identifiers, the sense of a linear
//! constraint, the direction of an optimization, the construction
//! configuration and the error type surfaced at the library boundary.

use std::fmt;
use std::str::FromStr;

use derive_builder::Builder;

// ----------------------------------------------------------------------------
// --- NODE ID ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The identifier of a node: it indicates the position of the referenced node
/// in the node arena of a `Zdd`. The two lowest identifiers are reserved for
/// the terminals: `NodeId::BOT` denotes the empty family and `NodeId::TOP`
/// the family containing only the empty set. Every reference between
/// components is one of these identifiers, never a pointer.
///
/// # Examples:
/// ```
/// # use zeddo::NodeId;
/// assert!(NodeId::BOT.is_terminal());
/// assert!(NodeId::TOP.is_terminal());
/// assert!(!NodeId(2).is_terminal());
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The terminal standing for the empty family (no accepting path).
    pub const BOT: NodeId = NodeId(0);
    /// The terminal standing for the family that only comprises the empty set.
    pub const TOP: NodeId = NodeId(1);

    /// This function returns the position of the node in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
    /// Tells whether this identifier denotes one of the two terminals.
    #[inline]
    pub fn is_terminal(self) -> bool {
        self.0 < 2
    }
}

// ----------------------------------------------------------------------------
// --- SIGN -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The sense of one row of a linear constraint system `A x ⟂ b`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Sign {
    /// The row reads `sum <= b`.
    Le,
    /// The row reads `sum == b`.
    Eq,
    /// The row reads `sum >= b`.
    Ge,
}

impl Sign {
    /// Does this sense impose an upper bound on the row sum ?
    #[inline]
    pub fn bounds_above(self) -> bool {
        matches!(self, Sign::Le | Sign::Eq)
    }
    /// Does this sense impose a lower bound on the row sum ?
    #[inline]
    pub fn bounds_below(self) -> bool {
        matches!(self, Sign::Ge | Sign::Eq)
    }
}

impl FromStr for Sign {
    type Err = ParseSignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<=" => Ok(Sign::Le),
            "="  => Ok(Sign::Eq),
            ">=" => Ok(Sign::Ge),
            _    => Err(ParseSignError(s.to_string())),
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Le => write!(f, "<="),
            Sign::Eq => write!(f, "="),
            Sign::Ge => write!(f, ">="),
        }
    }
}

/// The error which is returned when one tries to parse an inequality sense
/// from a string which is neither `<=`, `=` nor `>=`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("'{0}' is not a valid inequality sign (expected <=, = or >=)")]
pub struct ParseSignError(pub String);

// ----------------------------------------------------------------------------
// --- DIRECTION --------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The direction of a linear optimization over the family encoded in a ZDD.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Maximize,
    Minimize,
}

// ----------------------------------------------------------------------------
// --- BUILD CONFIG -----------------------------------------------------------
// ----------------------------------------------------------------------------
/// This is how you configure the top-down construction of a ZDD, e.g. if you
/// want to put a cap on the growth of the node table so that a pathological
/// instance fails fast instead of eating all the memory.
#[derive(Debug, Clone, Builder)]
pub struct BuildConfig {
    /// The maximum number of nodes the construction is allowed to allocate
    /// (counting both the intermediate and the reduced tables). When the cap
    /// is hit, the construction stops and returns
    /// [`Error::CapacityExceeded`](crate::Error) -- never a partial diagram.
    #[builder(default = "usize::MAX")]
    pub node_capacity: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig { node_capacity: usize::MAX }
    }
}

// ----------------------------------------------------------------------------
// --- ERRORS -----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The kind of recoverable failures a construction may surface to the caller.
/// Infeasibility is *not* an error: it yields the empty ZDD. Contract
/// violations (a graph used before setup, mismatched bound vectors, ...) are
/// programmer errors and panic instead.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The node table grew past the configured capacity.
    #[error("node table capacity exceeded ({capacity} nodes)")]
    CapacityExceeded {
        /// the configured cap which has been hit
        capacity: usize,
    },
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_common {
    use super::*;

    #[test]
    fn node_id_terminals() {
        assert_eq!(0, NodeId::BOT.index());
        assert_eq!(1, NodeId::TOP.index());
        assert!(NodeId::BOT.is_terminal());
        assert!(NodeId::TOP.is_terminal());
        assert!(!NodeId(2).is_terminal());
    }

    #[test]
    fn sign_parsing() {
        assert_eq!(Sign::Le, "<=".parse().unwrap());
        assert_eq!(Sign::Eq, "=".parse().unwrap());
        assert_eq!(Sign::Ge, ">=".parse().unwrap());
        assert!("<".parse::<Sign>().is_err());
    }

    #[test]
    fn sign_bounds() {
        assert!(Sign::Le.bounds_above() && !Sign::Le.bounds_below());
        assert!(Sign::Ge.bounds_below() && !Sign::Ge.bounds_above());
        assert!(Sign::Eq.bounds_above() && Sign::Eq.bounds_below());
    }

    #[test]
    fn config_builder_defaults_to_unbounded() {
        let config = BuildConfigBuilder::default().build().unwrap();
        assert_eq!(usize::MAX, config.node_capacity);

        let config = BuildConfigBuilder::default()
            .node_capacity(1000)
            .build()
            .unwrap();
        assert_eq!(1000, config.node_capacity);
    }
}
