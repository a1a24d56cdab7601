// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Immutable graph documents as saved by the H-Edit editor.
//! Pure data (nodes, content-addressed nested edges, declared mode) with
//! deterministic hashing of the canonical form.
#![forbid(unsafe_code)]

mod document;
mod edge;
mod mode;

pub use document::{DocumentError, GraphDocument, Hash32, Node};
pub use edge::{Edge, Endpoint};
pub use mode::{Mode, ParseModeError};

/// Node identifier as stored in the `data` array.
pub type NodeId = i64;
