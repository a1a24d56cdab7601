// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Declared structural strictness of a document.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Document mode, ordered from most restrictive (`H`) to most general
/// (`graph`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Hypergraph editing only.
    #[serde(rename = "H")]
    H,
    /// Tree-edges (edges pointing at edges).
    #[serde(rename = "T")]
    T,
    /// Digraph whose edges are tagged by nodes.
    #[serde(rename = "property_graph")]
    PropertyGraph,
    /// Digraph with colored edges.
    #[serde(rename = "edge_colored_graph")]
    EdgeColoredGraph,
    /// Unrestricted.
    #[serde(rename = "graph")]
    Graph,
}

impl Mode {
    /// Every mode in increasing order of generality.
    pub const ALL: [Mode; 5] = [
        Mode::H,
        Mode::T,
        Mode::PropertyGraph,
        Mode::EdgeColoredGraph,
        Mode::Graph,
    ];

    /// Name as written in the `mode` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::H => "H",
            Self::T => "T",
            Self::PropertyGraph => "property_graph",
            Self::EdgeColoredGraph => "edge_colored_graph",
            Self::Graph => "graph",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode {0:?} (expected one of H, T, property_graph, edge_colored_graph, graph)")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ParseModeError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn order_follows_generality() {
        assert!(Mode::H < Mode::T);
        assert!(Mode::T < Mode::PropertyGraph);
        assert!(Mode::PropertyGraph < Mode::EdgeColoredGraph);
        assert!(Mode::EdgeColoredGraph < Mode::Graph);
    }

    #[test]
    fn parses_wire_names() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>(), Ok(mode));
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{mode}\""));
        }
        assert!("hypergraph".parse::<Mode>().is_err());
    }
}
