// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Subcommand implementations. Each returns what is printed on stdout.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use hedit_app_core::prefs::QueryPrefs;
use hedit_core::predicates::{maybe_cycle_elem, maybe_self_loop};
use hedit_core::{Direction, Endpoint, GraphDocument, GraphView, Returns};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::cli::{Command, Target};

/// What a command produced.
#[derive(Debug)]
pub enum Output {
    /// Printed as pretty JSON.
    Json(Value),
    /// Printed verbatim.
    Text(String),
}

fn to_json(value: &impl Serialize) -> Result<Output> {
    Ok(Output::Json(serde_json::to_value(value)?))
}

fn load(file: &Path, prefs: &QueryPrefs) -> Result<GraphDocument> {
    hedit_loader::load_from_path(file, prefs.required_mode)
        .with_context(|| format!("loading {}", file.display()))
}

/// Runs a document command. `Prefs` is handled by the caller.
pub fn run(command: &Command, prefs: &QueryPrefs) -> Result<Output> {
    match command {
        Command::Connected {
            input,
            item,
            via,
            returns,
            direction,
        } => {
            let doc = load(&input.file, prefs)?;
            let view = GraphView::new(&doc);
            let item = resolve(view, item)?;
            let via = via
                .iter()
                .map(|v| resolve(view, v))
                .collect::<Result<Vec<_>>>()?;
            let found: Vec<&Endpoint> = view
                .connected(item, &via, Returns::from(*returns), Direction::from(*direction))
                .collect();
            to_json(&found)
        }
        Command::Adjacency { input, direction } => {
            let doc = load(&input.file, prefs)?;
            let rows = GraphView::new(&doc).as_adjacency(prefs.omit_empty, (*direction).into());
            to_json(&rows)
        }
        Command::Hypergraph { input, flatten } => {
            let doc = load(&input.file, prefs)?;
            let edges =
                GraphView::new(&doc).as_hypergraph_with(prefs.remove_subsumed, (*flatten).into())?;
            to_json(&edges)
        }
        Command::Roles { input } => {
            let doc = load(&input.file, prefs)?;
            to_json(&GraphView::new(&doc).node_types(prefs.exclude_disconnected)?)
        }
        Command::Schema { input, text } => {
            let doc = load(&input.file, prefs)?;
            let view = GraphView::new(&doc);
            let schema = view.schema(&view.node_types(prefs.exclude_disconnected)?)?;
            if *text {
                Ok(Output::Text(schema.to_string()))
            } else {
                to_json(&schema)
            }
        }
        Command::Objects { input } => {
            let doc = load(&input.file, prefs)?;
            let materialized = GraphView::new(&doc).materialize(prefs.exclude_disconnected)?;
            info!(
                records = materialized.records.len(),
                record = %materialized.schema.name,
                "materialized items"
            );
            to_json(&materialized.records)
        }
        Command::Cycles { input } => {
            let doc = load(&input.file, prefs)?;
            let pairs = doc.edges().iter().map(|e| (e.source(), e.destination()));
            Ok(Output::Json(json!({
                "self_loop": maybe_self_loop(pairs.clone()),
                "cycle_closed_by": maybe_cycle_elem(pairs),
            })))
        }
        Command::Digest { input } => {
            let doc = load(&input.file, prefs)?;
            let hash = doc.compute_hash()?;
            Ok(Output::Text(format!("{}\n", hex::encode(hash))))
        }
        Command::Prefs { .. } => to_json(prefs),
    }
}

/// Endpoints pass through; data strings must name exactly one node.
fn resolve(view: GraphView<'_>, target: &Target) -> Result<Endpoint> {
    match target {
        Target::Endpoint(endpoint) => Ok(endpoint.clone()),
        Target::Data(data) => Ok(Endpoint::Node(view.node_id_of(
            data,
            None,
            &BTreeSet::new(),
        )?)),
    }
}
