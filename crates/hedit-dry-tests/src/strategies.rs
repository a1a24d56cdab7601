// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! proptest strategies for random documents.

use hedit_graph::{Edge, Endpoint, GraphDocument, Node};
use proptest::prelude::*;
use proptest::sample::Index;

#[derive(Debug, Clone)]
enum EndChoice {
    Node(i64),
    Edge(Index),
}

/// Random valid documents with up to `max_nodes` nodes and `max_edges`
/// edges. Roughly a quarter of the endpoints point at an earlier edge, so
/// tree-edges, self-loops and repeated edges all show up.
pub fn arb_document(max_nodes: i64, max_edges: usize) -> impl Strategy<Value = GraphDocument> {
    (1..=max_nodes).prop_flat_map(move |n| {
        let end = prop_oneof![
            3 => (0..n).prop_map(EndChoice::Node),
            1 => any::<Index>().prop_map(EndChoice::Edge),
        ];
        prop::collection::vec((end.clone(), end), 0..=max_edges)
            .prop_filter_map("valid document", move |choices| build(n, choices))
    })
}

fn build(n: i64, choices: Vec<(EndChoice, EndChoice)>) -> Option<GraphDocument> {
    let nodes = (0..n).map(|i| Node::new(i, format!("n{i}"))).collect();
    let mut edges: Vec<Edge> = Vec::with_capacity(choices.len());
    for (source, destination) in choices {
        let edge = Edge::new(resolve(source, &edges), resolve(destination, &edges));
        edges.push(edge);
    }
    GraphDocument::new(nodes, edges).ok()
}

fn resolve(choice: EndChoice, earlier: &[Edge]) -> Endpoint {
    match choice {
        EndChoice::Node(id) => Endpoint::Node(id),
        EndChoice::Edge(_) if earlier.is_empty() => Endpoint::Node(0),
        EndChoice::Edge(index) => Endpoint::from(index.get(earlier).clone()),
    }
}
