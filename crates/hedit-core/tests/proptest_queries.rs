// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]
use std::collections::BTreeSet;

use hedit_core::predicates::{maybe_cycle_elem, maybe_duplicate, maybe_single};
use hedit_core::{Direction, Endpoint, GraphView, Position, Returns};
use hedit_dry_tests::arb_document;
use proptest::prelude::*;

proptest! {
    #[test]
    fn roles_partition_every_node(doc in arb_document(8, 16), exclude in any::<bool>()) {
        let types = GraphView::new(&doc).node_types(exclude).unwrap();
        let sets = [&types.tags, &types.relations, &types.items, &types.disconnected];
        let total: usize = sets.iter().map(|s| s.len()).sum();
        let union: BTreeSet<i64> = sets.iter().flat_map(|s| s.iter().copied()).collect();
        let all: BTreeSet<i64> = doc.node_ids().collect();
        prop_assert_eq!(total, all.len());
        prop_assert_eq!(union, all);
        if !exclude {
            prop_assert!(types.disconnected.is_empty());
        }
    }

    #[test]
    fn either_is_incoming_then_outgoing(doc in arb_document(6, 12), pick in any::<prop::sample::Index>()) {
        let view = GraphView::new(&doc);
        let mut items: Vec<Endpoint> = doc.node_ids().map(Endpoint::Node).collect();
        items.extend(doc.edges().iter().cloned().map(Endpoint::from));
        let item = pick.get(&items).clone();

        let either: Vec<_> = view.connected(item.clone(), &[], Returns::Both, Direction::Either).collect();
        let mut expected: Vec<_> = view.connected(item.clone(), &[], Returns::Both, Direction::Incoming).collect();
        expected.extend(view.connected(item, &[], Returns::Both, Direction::Outgoing));
        prop_assert_eq!(either, expected);
    }

    #[test]
    fn returns_filters_by_endpoint_kind(doc in arb_document(6, 12), id in 0i64..6) {
        let view = GraphView::new(&doc);
        prop_assert!(view.connected(id, &[], Returns::Nodes, Direction::Either).all(Endpoint::is_node));
        prop_assert!(view.connected(id, &[], Returns::Edges, Direction::Either).all(Endpoint::is_edge));
        let both = view.connected(id, &[], Returns::Both, Direction::Either).count();
        let split = view.connected(id, &[], Returns::Nodes, Direction::Either).count()
            + view.connected(id, &[], Returns::Edges, Direction::Either).count();
        prop_assert_eq!(both, split);
    }

    #[test]
    fn maximal_hyperedges_are_never_destinations(doc in arb_document(6, 12)) {
        let view = GraphView::new(&doc);
        let all = view.as_hypergraph(false).unwrap();
        let maximal = view.as_hypergraph(true).unwrap();
        prop_assert_eq!(all.len(), doc.edges().len());

        let destinations: Vec<_> = doc
            .edges()
            .iter()
            .filter_map(|e| e.destination().as_edge())
            .collect();
        let kept: Vec<_> = doc
            .edges()
            .iter()
            .filter(|e| !destinations.contains(e))
            .collect();
        prop_assert_eq!(maximal.len(), kept.len());
    }

    #[test]
    fn duplicate_iff_fewer_distinct(pairs in prop::collection::vec((0u8..6, 0u8..6), 0..12)) {
        for position in [Position::Source, Position::Destination] {
            let values: Vec<u8> = pairs
                .iter()
                .map(|&(s, d)| if position == Position::Source { s } else { d })
                .collect();
            let distinct: BTreeSet<u8> = values.iter().copied().collect();
            let dup = maybe_duplicate(pairs.iter().copied(), position);
            prop_assert_eq!(dup.is_some(), distinct.len() < values.len());
        }
    }

    #[test]
    fn single_iff_one_distinct(pairs in prop::collection::vec((0u8..3, 0u8..3), 0..6)) {
        let sources: BTreeSet<u8> = pairs.iter().map(|p| p.0).collect();
        let single = maybe_single(pairs.iter().copied(), Position::Source);
        prop_assert_eq!(single.is_some(), sources.len() == 1);
        if let Some(v) = single {
            prop_assert!(sources.contains(&v));
        }
    }

    #[test]
    fn forward_only_pairs_have_no_cycle(pairs in prop::collection::vec((0u8..10, 0u8..10), 0..20)) {
        // every pair points to a strictly larger value, so the graph is a DAG
        let dag: Vec<(u8, u8)> = pairs.into_iter().filter(|(s, d)| s < d).collect();
        prop_assert_eq!(maybe_cycle_elem(dag), None);
    }

    #[test]
    fn closing_a_chain_reports_the_closing_pair(len in 1u8..8) {
        let mut pairs: Vec<(u8, u8)> = (0..len).map(|i| (i, i + 1)).collect();
        pairs.push((len, 0));
        prop_assert_eq!(maybe_cycle_elem(pairs), Some((len, 0)));
    }
}
