// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Structural node roles under the property-graph interpretation.
//!
//! A property graph here is a digraph whose edges are tagged by nodes.
//! Three roles fall out of the shape alone:
//!
//! 1. tags: sources or sinks that only ever point at nodes;
//! 2. relations: nodes without incoming connections that only point at edges;
//! 3. items: everything else.

use std::collections::BTreeSet;

use hedit_graph::NodeId;
use serde::Serialize;
use tracing::{debug, error, instrument};

use crate::mode::ModeRequirement;
use crate::{Direction, GraphView, QueryError, Returns};

/// Role of a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    /// Label/category value (type 1).
    Tag,
    /// Field/relation name applied to edges (type 2).
    Relation,
    /// Principal entity (type 3).
    Item,
    /// No connections at all; only produced when disconnected nodes are
    /// excluded.
    Disconnected,
}

/// Partition of a document's node ids by role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodeTypes {
    /// Type 1 nodes.
    pub tags: BTreeSet<NodeId>,
    /// Type 2 nodes.
    pub relations: BTreeSet<NodeId>,
    /// Type 3 nodes.
    pub items: BTreeSet<NodeId>,
    /// Nodes excluded for having no connections.
    pub disconnected: BTreeSet<NodeId>,
}

impl NodeTypes {
    /// Role of `id`, if the id was classified.
    pub fn role_of(&self, id: NodeId) -> Option<NodeRole> {
        [
            (&self.tags, NodeRole::Tag),
            (&self.relations, NodeRole::Relation),
            (&self.items, NodeRole::Item),
            (&self.disconnected, NodeRole::Disconnected),
        ]
        .into_iter()
        .find_map(|(set, role)| set.contains(&id).then_some(role))
    }

    fn sets(&self) -> [(&'static str, &BTreeSet<NodeId>); 4] {
        [
            ("tags", &self.tags),
            ("relations", &self.relations),
            ("items", &self.items),
            ("disconnected", &self.disconnected),
        ]
    }

    /// Checks that the sets are pairwise disjoint and cover `all` exactly.
    fn check_partition(&self, all: &BTreeSet<NodeId>) -> Result<(), QueryError> {
        let sets = self.sets();
        for (i, (a_name, a)) in sets.iter().enumerate() {
            for (b_name, b) in &sets[i + 1..] {
                if let Some(id) = a.intersection(b).next() {
                    return Err(QueryError::MalformedPartition(format!(
                        "node {id} is in both {a_name} and {b_name}"
                    )));
                }
            }
        }
        let covered: BTreeSet<NodeId> = sets.iter().flat_map(|(_, s)| s.iter().copied()).collect();
        if let Some(id) = all.symmetric_difference(&covered).next() {
            return Err(QueryError::MalformedPartition(format!(
                "node {id} is not covered exactly once"
            )));
        }
        Ok(())
    }
}

impl GraphView<'_> {
    /// Splits the document's nodes into tags, relations and items.
    ///
    /// Nodes with no connections satisfy both the tag and the relation
    /// rule, so they are set aside first: into `disconnected` when
    /// `exclude_disconnected` is set, into `items` otherwise.
    #[instrument(skip(self))]
    pub fn node_types(&self, exclude_disconnected: bool) -> Result<NodeTypes, QueryError> {
        self.require("node_types", ModeRequirement::PROPERTY_GRAPH)?;

        let none = |id: NodeId, returns: Returns, direction: Direction| {
            self.connected(id, &[], returns, direction).next().is_none()
        };

        let all: BTreeSet<NodeId> = self.document().node_ids().collect();
        let mut no_incoming = BTreeSet::new();
        let mut no_outgoing = BTreeSet::new();
        let mut only_to_nodes = BTreeSet::new();
        let mut only_to_edges = BTreeSet::new();
        for &id in &all {
            if none(id, Returns::Both, Direction::Incoming) {
                no_incoming.insert(id);
            }
            if none(id, Returns::Both, Direction::Outgoing) {
                no_outgoing.insert(id);
            }
            if none(id, Returns::Edges, Direction::Outgoing) {
                only_to_nodes.insert(id);
            }
            if none(id, Returns::Nodes, Direction::Outgoing) {
                only_to_edges.insert(id);
            }
        }

        let isolated: BTreeSet<NodeId> = no_incoming.intersection(&no_outgoing).copied().collect();
        let connected: BTreeSet<NodeId> = all.difference(&isolated).copied().collect();

        let source_or_sink: BTreeSet<NodeId> = no_incoming.union(&no_outgoing).copied().collect();
        let tags: BTreeSet<NodeId> = source_or_sink
            .intersection(&only_to_nodes)
            .filter(|id| connected.contains(id))
            .copied()
            .collect();
        let relations: BTreeSet<NodeId> = no_incoming
            .intersection(&only_to_edges)
            .filter(|id| connected.contains(id))
            .copied()
            .collect();
        let items: BTreeSet<NodeId> = connected
            .iter()
            .filter(|id| !tags.contains(id) && !relations.contains(id))
            .copied()
            .collect();

        let types = if exclude_disconnected {
            NodeTypes {
                tags,
                relations,
                items,
                disconnected: isolated,
            }
        } else {
            NodeTypes {
                tags,
                relations,
                items: items.union(&isolated).copied().collect(),
                disconnected: BTreeSet::new(),
            }
        };

        if let Err(err) = types.check_partition(&all) {
            error!(%err, "role partition postcondition violated");
            return Err(err);
        }
        debug!(
            tags = types.tags.len(),
            relations = types.relations.len(),
            items = types.items.len(),
            disconnected = types.disconnected.len(),
            "classified nodes"
        );
        Ok(types)
    }
}
