// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! On-disk shape of an H-Edit file, before validation.

use hedit_graph::{Edge, Endpoint, Mode, Node, NodeId};
use serde::Deserialize;

/// Top-level object. Everything is optional so that missing keys can be
/// reported by name instead of as a serde error.
#[derive(Debug, Deserialize)]
pub(crate) struct RawDocument {
    pub data: Option<Vec<Node>>,
    pub conn: Option<Vec<RawEdge>>,
    pub mode: Option<Mode>,
    pub version: Option<i64>,
    pub name: Option<String>,
}

/// One edge in either encoding.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawEdge {
    /// `[source, destination]`
    Pair(RawEndpoint, RawEndpoint),
    /// `{"src": source, "dst": destination}`, written by older editors.
    Labeled { src: RawEndpoint, dst: RawEndpoint },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawEndpoint {
    Node(NodeId),
    Edge(Box<RawEdge>),
}

impl RawEdge {
    /// Whether the labeled encoding appears anywhere in this edge.
    pub fn is_labeled(&self) -> bool {
        match self {
            Self::Labeled { .. } => true,
            Self::Pair(src, dst) => src.is_labeled() || dst.is_labeled(),
        }
    }

    pub fn into_edge(self) -> Edge {
        let (src, dst) = match self {
            Self::Pair(src, dst) | Self::Labeled { src, dst } => (src, dst),
        };
        Edge::new(src.into_endpoint(), dst.into_endpoint())
    }
}

impl RawEndpoint {
    fn is_labeled(&self) -> bool {
        match self {
            Self::Node(_) => false,
            Self::Edge(edge) => edge.is_labeled(),
        }
    }

    fn into_endpoint(self) -> Endpoint {
        match self {
            Self::Node(id) => Endpoint::Node(id),
            Self::Edge(edge) => Endpoint::from(edge.into_edge()),
        }
    }
}
