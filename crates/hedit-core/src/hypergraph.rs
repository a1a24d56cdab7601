// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Flattening nested tree-edges into n-ary hyperedges.

use hedit_graph::{Edge, Endpoint};
use serde::Serialize;

use crate::mode::ModeRequirement;
use crate::{Direction, GraphView, QueryError};

/// Which sides of a tree-edge are unfolded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flatten {
    /// Unfold nested sources.
    Incoming,
    /// Unfold nested destinations.
    #[default]
    Outgoing,
    /// Unfold both sides.
    Both,
}

impl Flatten {
    fn sources(self) -> bool {
        matches!(self, Self::Incoming | Self::Both)
    }

    fn destinations(self) -> bool {
        matches!(self, Self::Outgoing | Self::Both)
    }
}

/// Ordered participants of one flattened tree-edge.
///
/// Sides that were not unfolded stay as edge participants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Hyperedge {
    participants: Vec<Endpoint>,
}

impl Hyperedge {
    /// Participants in order.
    pub fn participants(&self) -> &[Endpoint] {
        &self.participants
    }

    /// Number of participants.
    pub fn arity(&self) -> usize {
        self.participants.len()
    }

    /// Whether `self` is a trailing run of `enclosing`.
    ///
    /// `(0, 1, 2)` subsumes `(1, 2)` and itself, but not `(0, 1)`.
    pub fn is_subsumed_by(&self, enclosing: &Hyperedge) -> bool {
        enclosing.participants.ends_with(&self.participants)
    }
}

/// Unfolds `edge` according to `flatten`.
///
/// `(0, (1, 2))` with [`Flatten::Outgoing`] becomes `[0, 1, 2]`.
pub fn hyperedge_of(edge: &Edge, flatten: Flatten) -> Hyperedge {
    let mut participants = Vec::new();
    unfold(edge, flatten, &mut participants);
    Hyperedge { participants }
}

fn unfold(edge: &Edge, flatten: Flatten, out: &mut Vec<Endpoint>) {
    push_side(edge.source(), flatten.sources(), flatten, out);
    push_side(edge.destination(), flatten.destinations(), flatten, out);
}

fn push_side(endpoint: &Endpoint, expand: bool, flatten: Flatten, out: &mut Vec<Endpoint>) {
    match endpoint {
        Endpoint::Edge(inner) if expand => unfold(inner, flatten, out),
        other => out.push(other.clone()),
    }
}

impl GraphView<'_> {
    /// Every edge as a hyperedge, unfolding destinations.
    ///
    /// With `remove_subsumed`, edges that are the destination of some other
    /// edge are left out: only maximal tree-edges surface.
    pub fn as_hypergraph(&self, remove_subsumed: bool) -> Result<Vec<Hyperedge>, QueryError> {
        self.as_hypergraph_with(remove_subsumed, Flatten::Outgoing)
    }

    /// [`GraphView::as_hypergraph`] with an explicit flattening choice.
    pub fn as_hypergraph_with(
        &self,
        remove_subsumed: bool,
        flatten: Flatten,
    ) -> Result<Vec<Hyperedge>, QueryError> {
        self.require("as_hypergraph", ModeRequirement::HYPERGRAPH)?;
        Ok(self
            .document()
            .edges()
            .iter()
            .filter(|edge| {
                !remove_subsumed
                    || self
                        .neighbours((*edge).clone(), Direction::Incoming)
                        .next()
                        .is_none()
            })
            .map(|edge| hyperedge_of(edge, flatten))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn ids(h: &Hyperedge) -> Vec<i64> {
        h.participants().iter().filter_map(Endpoint::as_node).collect()
    }

    #[test]
    fn outgoing_unfolds_destination_only() {
        let e = Edge::new(Edge::new(5, 6), Edge::new(1, Edge::new(2, 3)));
        let h = hyperedge_of(&e, Flatten::Outgoing);
        assert_eq!(h.arity(), 4);
        assert_eq!(h.participants()[0], Endpoint::from(Edge::new(5, 6)));
        assert_eq!(ids(&h), vec![1, 2, 3]);
    }

    #[test]
    fn incoming_and_both() {
        let e = Edge::new(Edge::new(Edge::new(1, 2), 3), Edge::new(4, 5));
        let inc = hyperedge_of(&e, Flatten::Incoming);
        assert_eq!(ids(&inc), vec![1, 2, 3]);
        assert_eq!(inc.participants()[3], Endpoint::from(Edge::new(4, 5)));
        assert_eq!(ids(&hyperedge_of(&e, Flatten::Both)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn subsumption_is_suffix_match() {
        let long = hyperedge_of(&Edge::new(0, Edge::new(1, 2)), Flatten::Outgoing);
        let short = hyperedge_of(&Edge::new(1, 2), Flatten::Outgoing);
        let other = hyperedge_of(&Edge::new(0, 1), Flatten::Outgoing);
        assert!(short.is_subsumed_by(&long));
        assert!(long.is_subsumed_by(&long));
        assert!(!other.is_subsumed_by(&long));
        assert!(!long.is_subsumed_by(&short));
    }
}
