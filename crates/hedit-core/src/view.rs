// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Read-only view over a [`GraphDocument`].
//!
//! Query methods live in the module for their concern (traversal, roles,
//! materialization, ...) as separate `impl` blocks on [`GraphView`].

use hedit_graph::{GraphDocument, Node, NodeId};

/// Read-only view over a document. `Copy`, so queries can hand it around
/// freely; the lifetime ties every borrowed result to the document.
#[derive(Debug, Clone, Copy)]
pub struct GraphView<'a> {
    doc: &'a GraphDocument,
}

impl<'a> GraphView<'a> {
    /// Creates a view over `doc`.
    pub fn new(doc: &'a GraphDocument) -> Self {
        Self { doc }
    }

    /// The underlying document.
    pub fn document(&self) -> &'a GraphDocument {
        self.doc
    }

    /// Node with the given id, if present.
    pub fn node(&self, id: NodeId) -> Option<&'a Node> {
        self.doc.node(id)
    }
}

impl<'a> From<&'a GraphDocument> for GraphView<'a> {
    fn from(doc: &'a GraphDocument) -> Self {
        Self::new(doc)
    }
}
