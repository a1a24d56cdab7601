// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]
use hedit_core::{Cardinality, Direction, FieldKind, FieldValue, GraphView, Record};
use hedit_dry_tests::fixtures::{self, ALICE, BOB, CAROL, LIKES};
use hedit_dry_tests::DocumentBuilder;

fn record(records: &[Record], id: i64) -> &Record {
    records.iter().find(|r| r.id == id).unwrap()
}

#[test]
fn schema_of_single_valued_people() {
    let doc = fixtures::people().build().unwrap();
    let m = GraphView::new(&doc).materialize(true).unwrap();

    assert_eq!(m.schema.name, "PersonItem");
    let names: Vec<_> = m.schema.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["id", "data", "likes", "knows"]);

    let likes = &m.schema.fields[2];
    assert_eq!(likes.kind, FieldKind::Tag);
    assert_eq!(likes.cardinality, Cardinality::Single);
    let binding = likes.binding.unwrap();
    assert_eq!(binding.relation, LIKES);
    assert_eq!(binding.value_direction, Direction::Outgoing);

    let knows = &m.schema.fields[3];
    assert_eq!(knows.kind, FieldKind::Item);
    assert_eq!(knows.cardinality, Cardinality::Single);
    assert_eq!(knows.binding.unwrap().value_direction, Direction::Either);
    assert_eq!(knows.type_label(&m.schema.name), "PersonItem");

    assert_eq!(
        m.schema.to_string(),
        "PersonItem\n  id: int\n  data: str\n  likes: str\n  knows: PersonItem\n"
    );
}

#[test]
fn records_of_single_valued_people() {
    let doc = fixtures::people().build().unwrap();
    let m = GraphView::new(&doc).materialize(true).unwrap();

    let ids: Vec<_> = m.records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![ALICE, BOB, CAROL]);

    let alice = record(&m.records, ALICE);
    assert_eq!(alice.data, "alice");
    assert_eq!(alice.field("likes"), Some(&FieldValue::Tag(Some("red".into()))));
    assert_eq!(alice.field("knows"), Some(&FieldValue::Item(Some(BOB))));

    let bob = record(&m.records, BOB);
    assert_eq!(bob.field("likes"), Some(&FieldValue::Tag(Some("blue".into()))));
    // knows links items both ways
    assert_eq!(bob.field("knows"), Some(&FieldValue::Item(Some(ALICE))));

    let carol = record(&m.records, CAROL);
    assert_eq!(carol.field("knows"), Some(&FieldValue::Item(None)));
}

#[test]
fn repeated_items_turn_fields_into_lists() {
    let doc = fixtures::people_multi().build().unwrap();
    let m = GraphView::new(&doc).materialize(true).unwrap();

    for field in m.schema.relation_fields().map(|(f, _)| f) {
        assert_eq!(field.cardinality, Cardinality::Many, "{}", field.name);
    }
    assert_eq!(m.schema.fields[2].type_label(&m.schema.name), "List[str]");

    let alice = record(&m.records, ALICE);
    assert_eq!(
        alice.field("likes"),
        Some(&FieldValue::Tags(vec!["red".into(), "blue".into()]))
    );
    assert_eq!(
        alice.field("knows"),
        Some(&FieldValue::Items(vec![BOB, CAROL]))
    );
    assert_eq!(
        record(&m.records, CAROL).field("knows"),
        Some(&FieldValue::Items(vec![ALICE]))
    );
}

#[test]
fn item_on_both_sides_of_a_relation_keeps_every_partner() {
    // knows: alice -> bob, carol -> alice; bob -> blue keeps bob an item
    let doc = DocumentBuilder::new()
        .node(1, "alice")
        .node(2, "bob")
        .node(3, "carol")
        .node(4, "knows")
        .node(5, "Person")
        .node(6, "blue")
        .edge(5, 1)
        .edge(5, 2)
        .edge(5, 3)
        .edge(2, 6)
        .tag(4, hedit_core::Edge::new(1, 2))
        .tag(4, hedit_core::Edge::new(3, 1))
        .name("Person")
        .build()
        .unwrap();
    let m = GraphView::new(&doc).materialize(true).unwrap();

    let knows = &m.schema.fields[2];
    assert_eq!(knows.kind, FieldKind::Item);
    assert_eq!(knows.cardinality, Cardinality::Many);

    // incoming partners first, then outgoing
    assert_eq!(
        record(&m.records, 1).field("knows"),
        Some(&FieldValue::Items(vec![3, 2]))
    );
    assert_eq!(
        record(&m.records, 2).field("knows"),
        Some(&FieldValue::Items(vec![1]))
    );
    assert_eq!(
        record(&m.records, 3).field("knows"),
        Some(&FieldValue::Items(vec![1]))
    );
}

#[test]
fn disconnected_items_get_empty_fields_when_included() {
    let doc = fixtures::people().build().unwrap();
    let m = GraphView::new(&doc).materialize(false).unwrap();
    let loner = record(&m.records, fixtures::LONER);
    assert_eq!(loner.field("likes"), Some(&FieldValue::Tag(None)));
    assert_eq!(loner.field("knows"), Some(&FieldValue::Item(None)));
}

#[test]
fn records_serialize_flat() {
    let doc = DocumentBuilder::new()
        .node_with(1, "alice", "age", serde_json::json!(30))
        .node(2, "red")
        .node(3, "likes")
        .node(4, "Person")
        .edge(4, 1)
        .tag(3, hedit_core::Edge::new(1, 2))
        .name("Person")
        .build()
        .unwrap();
    let m = GraphView::new(&doc).materialize(true).unwrap();
    let json = serde_json::to_value(&m.records).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{"id": 1, "data": "alice", "age": 30, "likes": "red"}])
    );
}

#[test]
fn schema_without_relations_has_builtins_only() {
    let doc = fixtures::chain().build().unwrap();
    let m = GraphView::new(&doc).materialize(true).unwrap();
    assert_eq!(m.schema.name, "Item");
    assert_eq!(m.schema.fields.len(), 2);
    assert_eq!(m.schema.relation_fields().count(), 0);
    assert!(m.records.iter().all(|r| r.fields.is_empty()));
}
