// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Canned documents shared by the test suites.
//!
//! The people fixture is a small property graph:
//!
//! ```text
//! Person ──▶ alice, bob, carol          (category tag)
//! alice ──▶ red, bob ──▶ blue, carol ──▶ red   each tagged by "likes"
//! alice ──▶ bob                          tagged by "knows"
//! loner                                  no connections
//! ```

use hedit_graph::{Edge, Mode};

use crate::DocumentBuilder;

/// `Person` category tag.
pub const PERSON: i64 = 1;
/// Item.
pub const ALICE: i64 = 10;
/// Item.
pub const BOB: i64 = 11;
/// Item.
pub const CAROL: i64 = 12;
/// Value tag.
pub const RED: i64 = 20;
/// Value tag.
pub const BLUE: i64 = 21;
/// Relation from items to colour tags.
pub const LIKES: i64 = 30;
/// Relation between items.
pub const KNOWS: i64 = 31;
/// Node without any connection.
pub const LONER: i64 = 40;

/// Nodes `1:"a"`, `2:"b"`, `3:"c"` with edges `1 -> 2 -> 3`.
pub fn chain() -> DocumentBuilder {
    DocumentBuilder::new()
        .node(1, "a")
        .node(2, "b")
        .node(3, "c")
        .edge(1, 2)
        .edge(2, 3)
}

/// The tree-edge `(0, (1, 2))` together with the inner edge it points at.
pub fn tree_edge() -> DocumentBuilder {
    DocumentBuilder::new()
        .node(0, "x")
        .node(1, "y")
        .node(2, "z")
        .edge(1, 2)
        .edge(0, Edge::new(1, 2))
        .mode(Mode::T)
}

/// People property graph with single-valued `likes` and `knows`.
pub fn people() -> DocumentBuilder {
    DocumentBuilder::new()
        .node(PERSON, "Person")
        .node(ALICE, "alice")
        .node(BOB, "bob")
        .node(CAROL, "carol")
        .node(RED, "red")
        .node(BLUE, "blue")
        .node(LIKES, "likes")
        .node(KNOWS, "knows")
        .node(LONER, "loner")
        .edge(PERSON, ALICE)
        .edge(PERSON, BOB)
        .edge(PERSON, CAROL)
        .tag(LIKES, Edge::new(ALICE, RED))
        .tag(LIKES, Edge::new(BOB, BLUE))
        .tag(LIKES, Edge::new(CAROL, RED))
        .tag(KNOWS, Edge::new(ALICE, BOB))
        .mode(Mode::PropertyGraph)
        .name("Person")
}

/// [`people`] where alice also likes blue and knows carol, turning both
/// relations into lists.
pub fn people_multi() -> DocumentBuilder {
    people()
        .tag(LIKES, Edge::new(ALICE, BLUE))
        .tag(KNOWS, Edge::new(ALICE, CAROL))
}
