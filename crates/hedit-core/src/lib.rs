// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! hedit-core: queries and inference over H-Edit graph documents.
//!
//! Everything here is a pure function of an immutable [`GraphDocument`],
//! reached through the read-only [`GraphView`]:
//!
//! - [`GraphView::connected`]: direction/type/tag filtered adjacency;
//! - [`predicates`]: self-loop, duplicate, sole-value and cycle detection;
//! - [`GraphView::as_hypergraph`]: tree-edge flattening;
//! - [`GraphView::node_types`]: tag/relation/item classification;
//! - [`GraphView::schema`] and [`GraphView::objects`]: record materialization.
#![forbid(unsafe_code)]

mod error;
mod hypergraph;
mod lookup;
mod materialize;
mod mode;
pub mod predicates;
mod roles;
mod traverse;
mod view;

pub use error::QueryError;
pub use hypergraph::{hyperedge_of, Flatten, Hyperedge};
pub use materialize::{
    Cardinality, FieldDescriptor, FieldKind, FieldValue, Materialized, Record, RecordSchema,
    RelationBinding,
};
pub use mode::ModeRequirement;
pub use predicates::Position;
pub use roles::{NodeRole, NodeTypes};
pub use traverse::{AdjacencyEntry, Connected, Direction, Returns};
pub use view::GraphView;

pub use hedit_graph::{Edge, Endpoint, GraphDocument, Mode, Node, NodeId};
