// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The immutable document snapshot.

use std::collections::{BTreeMap, HashSet};

use ciborium::ser::into_writer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{Edge, Mode, NodeId};

/// Blake3 digest of a document's canonical form (32 bytes).
pub type Hash32 = [u8; 32];

/// Labelled node. Keys other than `id` and `data` are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Node identifier, unique within a document.
    pub id: NodeId,
    /// Opaque label.
    pub data: String,
    /// Any extra keys the editor stored on the node.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Node {
    /// Node without extra fields.
    pub fn new(id: NodeId, data: impl Into<String>) -> Self {
        Self {
            id,
            data: data.into(),
            extra: Map::new(),
        }
    }

    /// Looks up a field by name, covering `id` and `data` as well as extras.
    pub fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(Value::from(self.id)),
            "data" => Some(Value::from(self.data.as_str())),
            other => self.extra.get(other).cloned(),
        }
    }
}

/// Errors from building a document or encoding it canonically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// Two nodes share an id (construction).
    #[error("duplicate node id: {0}")]
    DuplicateNodeId(NodeId),
    /// An edge endpoint names an edge that is not in the edge list
    /// (construction).
    #[error("edge endpoint references an edge missing from the document: {0}")]
    DanglingEdge(Edge),
    /// Canonical encoding failed (`to_canonical_bytes`).
    #[error("canonical encoding failed: {0}")]
    Encode(String),
}

/// Immutable snapshot of one H-Edit document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphDocument {
    #[serde(rename = "data")]
    nodes: Vec<Node>,
    #[serde(rename = "conn")]
    edges: Vec<Edge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip)]
    index: BTreeMap<NodeId, usize>,
}

impl GraphDocument {
    /// Validates and freezes a node/edge list.
    ///
    /// Node ids must be unique and every nested edge endpoint must itself be
    /// an element of `edges`.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, DocumentError> {
        let mut index = BTreeMap::new();
        for (pos, node) in nodes.iter().enumerate() {
            if index.insert(node.id, pos).is_some() {
                return Err(DocumentError::DuplicateNodeId(node.id));
            }
        }

        let known: HashSet<&Edge> = edges.iter().collect();
        for edge in &edges {
            if let Some(missing) = edge.nested_edges().into_iter().find(|e| !known.contains(e)) {
                return Err(DocumentError::DanglingEdge(missing.clone()));
            }
        }

        Ok(Self {
            nodes,
            edges,
            mode: None,
            version: None,
            name: None,
            index,
        })
    }

    /// Sets the declared mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Sets the format version.
    pub fn with_version(mut self, version: i64) -> Self {
        self.version = Some(version);
        self
    }

    /// Sets the document name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// All nodes in document order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in document order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Declared mode, if any.
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    /// Declared format version, if any.
    pub fn version(&self) -> Option<i64> {
        self.version
    }

    /// Document name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Node with the given id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.index.get(&id).map(|&pos| &self.nodes[pos])
    }

    /// Node ids in document order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|n| n.id)
    }

    /// Canonical serialization for hashing/comparison.
    ///
    /// Nodes are sorted by id; edges keep document order because traversal
    /// results depend on it.
    pub fn to_canonical_bytes(&self) -> Result<Vec<u8>, DocumentError> {
        let mut doc = self.clone();
        doc.nodes.sort_by_key(|n| n.id);
        let mut bytes = Vec::new();
        into_writer(&doc, &mut bytes).map_err(|e| DocumentError::Encode(e.to_string()))?;
        Ok(bytes)
    }

    /// Blake3 hash of the canonical form.
    pub fn compute_hash(&self) -> Result<Hash32, DocumentError> {
        let bytes = self.to_canonical_bytes()?;
        Ok(blake3::hash(&bytes).into())
    }
}
