// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Capability check: which document modes an operation accepts.

use std::fmt;

use hedit_graph::Mode;

use crate::{GraphView, QueryError};

/// Inclusive range of modes an operation is defined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeRequirement {
    /// Most restrictive accepted mode.
    pub min: Mode,
    /// Most general accepted mode.
    pub max: Mode,
}

impl ModeRequirement {
    /// Hypergraph flattening needs tree-edges, so anything from `T` up.
    pub const HYPERGRAPH: Self = Self {
        min: Mode::T,
        max: Mode::Graph,
    };

    /// The property-graph interpretation (node roles, records).
    pub const PROPERTY_GRAPH: Self = Self {
        min: Mode::PropertyGraph,
        max: Mode::EdgeColoredGraph,
    };

    /// Whether `mode` lies in the range.
    pub fn admits(self, mode: Mode) -> bool {
        (self.min..=self.max).contains(&mode)
    }
}

impl fmt::Display for ModeRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}..={}", self.min, self.max)
        }
    }
}

impl GraphView<'_> {
    /// Fails with [`QueryError::ModeMismatch`] unless the document's declared
    /// mode is admitted. Documents without a mode pass.
    pub fn require(
        &self,
        operation: &'static str,
        requirement: ModeRequirement,
    ) -> Result<(), QueryError> {
        match self.document().mode() {
            Some(declared) if !requirement.admits(declared) => Err(QueryError::ModeMismatch {
                operation,
                declared,
                requirement,
            }),
            _ => Ok(()),
        }
    }
}
