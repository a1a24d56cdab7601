// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Node lookups by id, predicate, field values or data.

use std::collections::BTreeSet;

use hedit_graph::{Node, NodeId};
use serde_json::Value;

use crate::{GraphView, QueryError};

impl<'a> GraphView<'a> {
    /// Nodes satisfying `fits`, in document order.
    pub fn find_nodes<F>(&self, fits: F) -> impl Iterator<Item = &'a Node>
    where
        F: Fn(&Node) -> bool,
    {
        self.document().nodes().iter().filter(move |n| fits(n))
    }

    /// Nodes whose named fields (`id`, `data` or extra keys) equal every
    /// given value.
    pub fn find_nodes_by<'c>(
        &self,
        criteria: &'c [(&'c str, Value)],
    ) -> impl Iterator<Item = &'a Node> + 'c
    where
        'a: 'c,
    {
        self.find_nodes(move |n| {
            criteria
                .iter()
                .all(|(name, value)| n.field(name).as_ref() == Some(value))
        })
    }

    /// Resolves ids to nodes, failing on the first absent id.
    pub fn get_info(
        &self,
        ids: impl IntoIterator<Item = NodeId>,
    ) -> Result<Vec<&'a Node>, QueryError> {
        ids.into_iter()
            .map(|id| self.node(id).ok_or(QueryError::NotFound(id)))
            .collect()
    }

    /// The one node id whose data is `data`.
    ///
    /// Candidates are restricted to `allowed` (when given) minus
    /// `disallowed`. Several matches are reported with every matching id.
    pub fn node_id_of(
        &self,
        data: &str,
        allowed: Option<&BTreeSet<NodeId>>,
        disallowed: &BTreeSet<NodeId>,
    ) -> Result<NodeId, QueryError> {
        let ids: Vec<NodeId> = self
            .find_nodes(|n| {
                n.data == data
                    && allowed.is_none_or(|a| a.contains(&n.id))
                    && !disallowed.contains(&n.id)
            })
            .map(|n| n.id)
            .collect();
        match ids.as_slice() {
            [] => Err(QueryError::NoMatch(data.to_owned())),
            [id] => Ok(*id),
            _ => Err(QueryError::Ambiguous {
                data: data.to_owned(),
                ids,
            }),
        }
    }
}
