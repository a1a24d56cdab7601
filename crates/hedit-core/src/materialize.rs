// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Records derived from the node-role partition.
//!
//! Every relation node becomes a field. Whether the field holds item
//! references or tag strings, and whether it holds one value or a list, is
//! inferred from the edges the relation tags:
//!
//! - both ends of the tagged edges reach items: item references, otherwise
//!   tag strings;
//! - some item occurs twice on its side of the tagged edges (on either side
//!   for relations between items): a list, otherwise a single value.

use std::fmt;
use std::slice;

use hedit_graph::{Edge, Endpoint, Node, NodeId};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::mode::ModeRequirement;
use crate::predicates::{maybe_duplicate, maybe_shared, Position};
use crate::{Direction, GraphView, NodeTypes, QueryError, Returns};

/// What a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// The node id.
    Id,
    /// The node's own data string.
    Data,
    /// Reference(s) to other items.
    Item,
    /// Data string(s) of tag nodes.
    Tag,
}

/// One value or an ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// At most one value.
    Single,
    /// Ordered list of values.
    Many,
}

/// Where a relation field reads its values from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelationBinding {
    /// The relation (type 2) node.
    pub relation: NodeId,
    /// Direction from an item towards its values.
    pub value_direction: Direction,
}

/// Name, kind and cardinality of one record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Field name (the relation node's data for relation fields).
    pub name: String,
    /// Value kind.
    pub kind: FieldKind,
    /// Single value or list.
    pub cardinality: Cardinality,
    /// Set for relation fields, `None` for `id` and `data`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding: Option<RelationBinding>,
}

impl FieldDescriptor {
    fn builtin(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_owned(),
            kind,
            cardinality: Cardinality::Single,
            binding: None,
        }
    }

    /// Human readable type, e.g. `List[PersonItem]` or `str`.
    pub fn type_label(&self, record: &str) -> String {
        let scalar = match self.kind {
            FieldKind::Id => "int",
            FieldKind::Data | FieldKind::Tag => "str",
            FieldKind::Item => record,
        };
        match self.cardinality {
            Cardinality::Single => scalar.to_owned(),
            Cardinality::Many => format!("List[{scalar}]"),
        }
    }
}

/// Record type derived from a document: `id`, `data`, then one field per
/// relation in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSchema {
    /// Record type name, `<document name>Item`.
    pub name: String,
    /// Fields in order.
    pub fields: Vec<FieldDescriptor>,
}

impl RecordSchema {
    /// Relation fields only.
    pub fn relation_fields(&self) -> impl Iterator<Item = (&FieldDescriptor, RelationBinding)> {
        self.fields
            .iter()
            .filter_map(|f| f.binding.map(|binding| (f, binding)))
    }
}

impl fmt::Display for RecordSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for field in &self.fields {
            writeln!(f, "  {}: {}", field.name, field.type_label(&self.name))?;
        }
        Ok(())
    }
}

/// Value of one relation field on a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Single item reference.
    Item(Option<NodeId>),
    /// Ordered item references.
    Items(Vec<NodeId>),
    /// Single tag string.
    Tag(Option<String>),
    /// Ordered tag strings.
    Tags(Vec<String>),
}

/// A populated item.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Item node id.
    pub id: NodeId,
    /// Item node data.
    pub data: String,
    /// Extra keys stored on the item node.
    pub extra: Map<String, Value>,
    /// Relation fields in schema order.
    pub fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// Value of the first field called `name`.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find_map(|(n, v)| (n == name).then_some(v))
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2 + self.extra.len() + self.fields.len()))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("data", &self.data)?;
        for (k, v) in &self.extra {
            map.serialize_entry(k, v)?;
        }
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Schema plus every populated item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Materialized {
    /// Node roles the schema was derived from.
    pub types: NodeTypes,
    /// Derived record type.
    pub schema: RecordSchema,
    /// One record per item, in id order.
    pub records: Vec<Record>,
}

impl GraphView<'_> {
    /// Derives the record type for the given role partition. Relation fields
    /// follow document order.
    #[instrument(skip(self, types))]
    pub fn schema(&self, types: &NodeTypes) -> Result<RecordSchema, QueryError> {
        self.require("schema", ModeRequirement::PROPERTY_GRAPH)?;

        let mut fields = vec![
            FieldDescriptor::builtin("id", FieldKind::Id),
            FieldDescriptor::builtin("data", FieldKind::Data),
        ];
        for relation in self.find_nodes(|n| types.relations.contains(&n.id)) {
            fields.push(self.describe_relation(relation, types));
        }
        Ok(RecordSchema {
            name: format!("{}Item", self.document().name().unwrap_or_default()),
            fields,
        })
    }

    fn describe_relation(&self, relation: &Node, types: &NodeTypes) -> FieldDescriptor {
        let tagged: Vec<&Edge> = self
            .connected(relation.id, &[], Returns::Edges, Direction::Outgoing)
            .filter_map(Endpoint::as_edge)
            .collect();
        let holds_item = |e: &Endpoint| e.as_node().is_some_and(|id| types.items.contains(&id));
        let source_items = tagged.iter().any(|e| holds_item(e.source()));
        let destination_items = tagged.iter().any(|e| holds_item(e.destination()));
        let between_items = source_items && destination_items;

        // values are read from both sides between items, so repeats count
        // across sources and destinations together
        let pairs = tagged.iter().map(|e| (e.source(), e.destination()));
        let (repeated, value_direction) = if between_items {
            (maybe_shared(pairs), Direction::Either)
        } else if destination_items {
            (maybe_duplicate(pairs, Position::Destination), Direction::Incoming)
        } else {
            (maybe_duplicate(pairs, Position::Source), Direction::Outgoing)
        };
        let cardinality = match repeated {
            None => Cardinality::Single,
            Some(_) => Cardinality::Many,
        };
        let kind = if between_items {
            FieldKind::Item
        } else {
            FieldKind::Tag
        };
        debug!(
            relation = relation.id,
            name = %relation.data,
            ?kind,
            ?cardinality,
            edges = tagged.len(),
            "derived relation field"
        );

        FieldDescriptor {
            name: relation.data.clone(),
            kind,
            cardinality,
            binding: Some(RelationBinding {
                relation: relation.id,
                value_direction,
            }),
        }
    }

    /// Populates one record per id in `items` following `schema`.
    ///
    /// Single-valued fields take the first connected value; item values are
    /// referenced by id and tag values resolved to their data string.
    pub fn objects(
        &self,
        schema: &RecordSchema,
        items: impl IntoIterator<Item = NodeId>,
    ) -> Result<Vec<Record>, QueryError> {
        self.require("objects", ModeRequirement::PROPERTY_GRAPH)?;

        let mut records = Vec::new();
        for node in self.get_info(items)? {
            let mut fields = Vec::new();
            for (field, binding) in schema.relation_fields() {
                let via = Endpoint::Node(binding.relation);
                let values: Vec<NodeId> = self
                    .connected(
                        node.id,
                        slice::from_ref(&via),
                        Returns::Nodes,
                        binding.value_direction,
                    )
                    .filter_map(Endpoint::as_node)
                    .collect();
                if field.cardinality == Cardinality::Single && values.len() > 1 {
                    debug!(
                        item = node.id,
                        field = %field.name,
                        found = values.len(),
                        "single-valued field has several values, keeping the first"
                    );
                }
                fields.push((field.name.clone(), self.field_value(field, values)?));
            }
            records.push(Record {
                id: node.id,
                data: node.data.clone(),
                extra: node.extra.clone(),
                fields,
            });
        }
        Ok(records)
    }

    fn field_value(
        &self,
        field: &FieldDescriptor,
        values: Vec<NodeId>,
    ) -> Result<FieldValue, QueryError> {
        Ok(match (field.kind, field.cardinality) {
            (FieldKind::Item, Cardinality::Single) => FieldValue::Item(values.first().copied()),
            (FieldKind::Item, Cardinality::Many) => FieldValue::Items(values),
            (_, Cardinality::Single) => FieldValue::Tag(
                self.get_info(values.first().copied())?
                    .first()
                    .map(|n| n.data.clone()),
            ),
            (_, Cardinality::Many) => FieldValue::Tags(
                self.get_info(values)?
                    .into_iter()
                    .map(|n| n.data.clone())
                    .collect(),
            ),
        })
    }

    /// Classifies nodes, derives the schema and populates every item.
    pub fn materialize(&self, exclude_disconnected: bool) -> Result<Materialized, QueryError> {
        let types = self.node_types(exclude_disconnected)?;
        let schema = self.schema(&types)?;
        let records = self.objects(&schema, types.items.iter().copied())?;
        Ok(Materialized {
            types,
            schema,
            records,
        })
    }
}
