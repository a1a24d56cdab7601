// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `GraphDocument` builder for tests.

use hedit_graph::{DocumentError, Edge, Endpoint, GraphDocument, Mode, Node, NodeId};
use serde_json::Value;

/// Builder for [`GraphDocument`] instances in tests.
///
/// # Example
///
/// ```
/// use hedit_dry_tests::DocumentBuilder;
///
/// let doc = DocumentBuilder::new()
///     .node(1, "a")
///     .node(2, "b")
///     .edge(1, 2)
///     .build()
///     .unwrap();
///
/// assert_eq!(doc.nodes().len(), 2);
/// assert_eq!(doc.edges().len(), 1);
/// ```
#[derive(Default)]
pub struct DocumentBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    mode: Option<Mode>,
    name: Option<String>,
}

impl DocumentBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node.
    pub fn node(mut self, id: NodeId, data: &str) -> Self {
        self.nodes.push(Node::new(id, data));
        self
    }

    /// Add a node carrying one extra field.
    pub fn node_with(mut self, id: NodeId, data: &str, key: &str, value: Value) -> Self {
        let mut node = Node::new(id, data);
        node.extra.insert(key.to_owned(), value);
        self.nodes.push(node);
        self
    }

    /// Append an edge.
    pub fn edge(mut self, source: impl Into<Endpoint>, destination: impl Into<Endpoint>) -> Self {
        self.edges.push(Edge::new(source, destination));
        self
    }

    /// Append an edge from `tag` to an existing edge, appending that edge
    /// first when it is not in the list yet.
    pub fn tag(mut self, tag: NodeId, edge: Edge) -> Self {
        if !self.edges.contains(&edge) {
            self.edges.push(edge.clone());
        }
        self.edges.push(Edge::new(tag, edge));
        self
    }

    /// Declare a mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Name the document.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    /// Build the document.
    pub fn build(self) -> Result<GraphDocument, DocumentError> {
        let mut doc = GraphDocument::new(self.nodes, self.edges)?;
        if let Some(mode) = self.mode {
            doc = doc.with_mode(mode);
        }
        if let Some(name) = self.name {
            doc = doc.with_name(name);
        }
        Ok(doc)
    }
}
