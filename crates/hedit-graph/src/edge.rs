// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Edges and their (possibly nested) endpoints.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::NodeId;

/// One side of an edge: a node, or another edge (tree-edge nesting).
///
/// Serializes untagged: a node is a bare integer, an edge is a
/// `[source, destination]` pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Endpoint {
    /// Reference to a node by id.
    Node(NodeId),
    /// Structural reference to another edge.
    Edge(Box<Edge>),
}

impl Endpoint {
    /// Returns the node id when this endpoint is a node.
    pub fn as_node(&self) -> Option<NodeId> {
        match self {
            Self::Node(id) => Some(*id),
            Self::Edge(_) => None,
        }
    }

    /// Returns the nested edge when this endpoint is an edge.
    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            Self::Node(_) => None,
            Self::Edge(edge) => Some(edge),
        }
    }

    /// True for node endpoints.
    pub fn is_node(&self) -> bool {
        matches!(self, Self::Node(_))
    }

    /// True for edge endpoints.
    pub fn is_edge(&self) -> bool {
        matches!(self, Self::Edge(_))
    }
}

impl From<NodeId> for Endpoint {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

impl From<Edge> for Endpoint {
    fn from(edge: Edge) -> Self {
        Self::Edge(Box::new(edge))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(id) => write!(f, "{id}"),
            Self::Edge(edge) => edge.fmt(f),
        }
    }
}

/// Directed connection between two endpoints.
///
/// Edges have no id of their own; equality, ordering and hashing are
/// structural, so an edge value doubles as its identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    source: Endpoint,
    destination: Endpoint,
}

impl Edge {
    /// Builds an edge from anything convertible into endpoints.
    pub fn new(source: impl Into<Endpoint>, destination: impl Into<Endpoint>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Source endpoint.
    pub fn source(&self) -> &Endpoint {
        &self.source
    }

    /// Destination endpoint.
    pub fn destination(&self) -> &Endpoint {
        &self.destination
    }

    /// Edges referenced by this edge's endpoints, at any nesting depth,
    /// outermost first.
    pub fn nested_edges(&self) -> Vec<&Edge> {
        let mut out = Vec::new();
        let mut stack = vec![&self.destination, &self.source];
        while let Some(endpoint) = stack.pop() {
            if let Endpoint::Edge(inner) = endpoint {
                out.push(inner.as_ref());
                stack.push(&inner.destination);
                stack.push(&inner.source);
            }
        }
        out
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.source, self.destination)
    }
}

impl Serialize for Edge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.source, &self.destination).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Edge {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (source, destination) = <(Endpoint, Endpoint)>::deserialize(deserializer)?;
        Ok(Self::new(source, destination))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn edges_compare_structurally() {
        let a = Edge::new(0, Edge::new(1, 2));
        let b = Edge::new(0, Edge::new(1, 2));
        assert_eq!(a, b);
        assert_ne!(a, Edge::new(0, Edge::new(2, 1)));
    }

    #[test]
    fn nested_edges_are_listed_outermost_first() {
        let inner = Edge::new(2, 3);
        let middle = Edge::new(1, inner.clone());
        let outer = Edge::new(middle.clone(), 4);
        assert_eq!(outer.nested_edges(), vec![&middle, &inner]);
        assert!(inner.nested_edges().is_empty());
    }

    #[test]
    fn display_uses_pair_notation() {
        let e = Edge::new(0, Edge::new(1, 2));
        assert_eq!(e.to_string(), "(0, (1, 2))");
    }

    #[test]
    fn json_pair_form() {
        let e = Edge::new(0, Edge::new(1, 2));
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, "[0,[1,2]]");
        let back: Edge = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
