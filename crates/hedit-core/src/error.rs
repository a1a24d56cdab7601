// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Query errors.

use hedit_graph::{Mode, NodeId};
use thiserror::Error;

use crate::mode::ModeRequirement;

/// Errors raised by queries over a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A node id is not present in the document.
    #[error("no node with id {0} found")]
    NotFound(NodeId),
    /// No node carries the requested data.
    #[error("no node with data {0:?} found")]
    NoMatch(String),
    /// A lookup expected to be unique matched several nodes.
    #[error("ambiguous id retrieval for {data:?}: ids {ids:?}")]
    Ambiguous {
        /// The data that was searched for.
        data: String,
        /// Every matching id, in document order.
        ids: Vec<NodeId>,
    },
    /// The document's declared mode does not support the operation.
    #[error("{operation} is only defined for modes {requirement}, document declares {declared}")]
    ModeMismatch {
        /// Operation that was refused.
        operation: &'static str,
        /// Mode the document declares.
        declared: Mode,
        /// Modes the operation accepts.
        requirement: ModeRequirement,
    },
    /// The role partition broke its disjointness/coverage postcondition.
    #[error("node role partition is inconsistent: {0}")]
    MalformedPartition(String),
}
