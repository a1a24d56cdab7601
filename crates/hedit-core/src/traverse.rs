// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filtered adjacency queries.
//!
//! There is no index: each [`GraphView::connected`] walk scans the edge list
//! once per direction, and every `via` filter costs one more scan per
//! candidate edge. Documents produced by the editor are small enough for
//! this to be fine.

use std::slice;

use hedit_graph::{Edge, Endpoint};
use serde::Serialize;

use crate::GraphView;

/// Which kind of neighbour a query yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Returns {
    /// Node endpoints only.
    Nodes,
    /// Edge endpoints only.
    Edges,
    /// Both kinds.
    #[default]
    Both,
}

/// Which way edges are followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Source to destination.
    #[default]
    Outgoing,
    /// Destination to source.
    Incoming,
    /// All incoming results, then all outgoing results.
    Either,
}

/// Lazy result of [`GraphView::connected`].
///
/// Cloning yields an independent cursor over the same immutable document, so
/// a result can be replayed as often as needed.
#[derive(Debug, Clone)]
pub struct Connected<'a> {
    view: GraphView<'a>,
    item: Endpoint,
    via: &'a [Endpoint],
    returns: Returns,
    incoming: bool,
    then_outgoing: bool,
    edges: slice::Iter<'a, Edge>,
}

impl<'a> Iterator for Connected<'a> {
    type Item = &'a Endpoint;

    fn next(&mut self) -> Option<&'a Endpoint> {
        let view = self.view;
        loop {
            let Some(edge) = self.edges.next() else {
                if !self.then_outgoing {
                    return None;
                }
                self.then_outgoing = false;
                self.incoming = false;
                self.edges = view.document().edges().iter();
                continue;
            };

            let (from, to) = if self.incoming {
                (edge.destination(), edge.source())
            } else {
                (edge.source(), edge.destination())
            };
            if *from != self.item {
                continue;
            }
            match (self.returns, to) {
                (Returns::Nodes, Endpoint::Edge(_)) | (Returns::Edges, Endpoint::Node(_)) => {
                    continue
                }
                _ => {}
            }
            if self.via.iter().all(|via| view.tags(via, edge)) {
                return Some(to);
            }
        }
    }
}

/// One row of [`GraphView::as_adjacency`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyEntry {
    /// Node or edge the row is about.
    pub item: Endpoint,
    /// Its neighbours in the requested direction, in edge order.
    pub neighbours: Vec<Endpoint>,
}

impl<'a> GraphView<'a> {
    /// Yields everything connected to `item` through edges that are tagged by
    /// every element of `via`.
    ///
    /// `item` may be a node id or an edge value and does not have to exist.
    /// An edge counts as tagged by `v` when it is an outgoing neighbour of
    /// `v`. With [`Direction::Either`] all incoming results come first, then
    /// all outgoing ones, without deduplication.
    pub fn connected<'q>(
        &self,
        item: impl Into<Endpoint>,
        via: &'q [Endpoint],
        returns: Returns,
        direction: Direction,
    ) -> Connected<'q>
    where
        'a: 'q,
    {
        let view: GraphView<'q> = *self;
        Connected {
            view,
            item: item.into(),
            via,
            returns,
            incoming: direction != Direction::Outgoing,
            then_outgoing: direction == Direction::Either,
            edges: view.document().edges().iter(),
        }
    }

    /// Unfiltered neighbours of `item` in `direction`.
    pub fn neighbours(&self, item: impl Into<Endpoint>, direction: Direction) -> Connected<'a> {
        self.connected(item, &[], Returns::Both, direction)
    }

    /// Whether `tag` has an outgoing connection to `edge`.
    pub fn tags(&self, tag: &Endpoint, edge: &Edge) -> bool {
        self.neighbours(tag.clone(), Direction::Outgoing)
            .any(|to| to.as_edge() == Some(edge))
    }

    /// Generalized adjacency list: every node (document order) then every
    /// edge (document order) with its neighbours in `direction`.
    ///
    /// Rows without neighbours are dropped when `omit_empty` is set.
    pub fn as_adjacency(&self, omit_empty: bool, direction: Direction) -> Vec<AdjacencyEntry> {
        let doc = self.document();
        doc.node_ids()
            .map(Endpoint::Node)
            .chain(doc.edges().iter().cloned().map(Endpoint::from))
            .filter_map(|item| {
                let neighbours: Vec<Endpoint> =
                    self.neighbours(item.clone(), direction).cloned().collect();
                if omit_empty && neighbours.is_empty() {
                    None
                } else {
                    Some(AdjacencyEntry { item, neighbours })
                }
            })
            .collect()
    }
}
