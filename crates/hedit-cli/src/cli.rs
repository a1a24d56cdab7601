// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use hedit_app_core::prefs::QueryPrefs;
use hedit_core::{Direction, Endpoint, Flatten, Mode, Returns};

#[derive(Parser, Debug)]
#[command(author, version, about = "Query and materialize H-Edit graph documents")]
pub struct Cli {
    /// Mode the document is expected to satisfy [default: saved preference, else T]
    #[arg(long, global = true)]
    pub required_mode: Option<Mode>,
    /// Tracing filter, e.g. `debug` or `hedit_core=trace` [default: RUST_LOG, else warn]
    #[arg(long, global = true)]
    pub log: Option<String>,
    /// Directory holding saved preferences [default: platform config dir]
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
    #[command(flatten)]
    pub prefs: PrefFlags,
    #[command(subcommand)]
    pub command: Command,
}

/// Per-invocation overrides of saved [`QueryPrefs`].
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct PrefFlags {
    /// Leave tree-edges that other edges point at out of `hypergraph`
    #[arg(long, global = true)]
    pub remove_subsumed: Option<bool>,
    /// Set nodes without connections aside instead of treating them as items
    #[arg(long, global = true)]
    pub exclude_disconnected: Option<bool>,
    /// Drop adjacency rows without neighbours
    #[arg(long, global = true)]
    pub omit_empty: Option<bool>,
}

impl PrefFlags {
    /// `saved` with every given flag applied on top.
    pub fn apply(self, required_mode: Option<Mode>, saved: QueryPrefs) -> QueryPrefs {
        QueryPrefs {
            required_mode: required_mode.unwrap_or(saved.required_mode),
            remove_subsumed: self.remove_subsumed.unwrap_or(saved.remove_subsumed),
            exclude_disconnected: self
                .exclude_disconnected
                .unwrap_or(saved.exclude_disconnected),
            omit_empty: self.omit_empty.unwrap_or(saved.omit_empty),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Nodes and edges connected to an item
    Connected {
        #[command(flatten)]
        input: Input,
        /// Node id, edge as JSON (`[1,[2,3]]`) or node data
        item: Target,
        /// Only follow edges tagged by this node (repeatable)
        #[arg(long)]
        via: Vec<Target>,
        #[arg(long, value_enum, default_value_t)]
        returns: ReturnsArg,
        #[arg(long, value_enum, default_value_t)]
        direction: DirectionArg,
    },
    /// Neighbours of every node and edge
    Adjacency {
        #[command(flatten)]
        input: Input,
        #[arg(long, value_enum, default_value_t)]
        direction: DirectionArg,
    },
    /// Edges flattened into hyperedges
    Hypergraph {
        #[command(flatten)]
        input: Input,
        #[arg(long, value_enum, default_value_t)]
        flatten: FlattenArg,
    },
    /// Tag, relation and item partition of the nodes
    Roles {
        #[command(flatten)]
        input: Input,
    },
    /// Record type derived from the node roles
    Schema {
        #[command(flatten)]
        input: Input,
        /// Print a readable listing instead of JSON
        #[arg(long)]
        text: bool,
    },
    /// One record per item
    Objects {
        #[command(flatten)]
        input: Input,
    },
    /// First self-loop and first cycle-closing edge
    Cycles {
        #[command(flatten)]
        input: Input,
    },
    /// BLAKE3 digest of the canonical document encoding
    Digest {
        #[command(flatten)]
        input: Input,
    },
    /// Show the effective query preferences
    Prefs {
        /// Persist them as the new defaults
        #[arg(long)]
        save: bool,
    },
}

#[derive(Args, Debug)]
pub struct Input {
    /// H-Edit JSON file
    pub file: PathBuf,
}

/// A node or edge named on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Parsed as an id or an edge.
    Endpoint(Endpoint),
    /// Anything else, resolved by node data.
    Data(String),
}

impl std::str::FromStr for Target {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s).map_or_else(|_| Self::Data(s.to_owned()), Self::Endpoint))
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum ReturnsArg {
    Nodes,
    Edges,
    #[default]
    Both,
}

impl From<ReturnsArg> for Returns {
    fn from(arg: ReturnsArg) -> Self {
        match arg {
            ReturnsArg::Nodes => Self::Nodes,
            ReturnsArg::Edges => Self::Edges,
            ReturnsArg::Both => Self::Both,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum DirectionArg {
    #[default]
    Outgoing,
    Incoming,
    Either,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Outgoing => Self::Outgoing,
            DirectionArg::Incoming => Self::Incoming,
            DirectionArg::Either => Self::Either,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum FlattenArg {
    Incoming,
    #[default]
    Outgoing,
    Both,
}

impl From<FlattenArg> for Flatten {
    fn from(arg: FlattenArg) -> Self {
        match arg {
            FlattenArg::Incoming => Self::Incoming,
            FlattenArg::Outgoing => Self::Outgoing,
            FlattenArg::Both => Self::Both,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use clap::CommandFactory;
    use hedit_core::Edge;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn targets_parse_ids_edges_and_data() {
        assert_eq!(
            "3".parse::<Target>().unwrap(),
            Target::Endpoint(Endpoint::Node(3))
        );
        assert_eq!(
            "[1,[2,3]]".parse::<Target>().unwrap(),
            Target::Endpoint(Endpoint::from(Edge::new(1, Edge::new(2, 3))))
        );
        assert_eq!(
            "likes".parse::<Target>().unwrap(),
            Target::Data("likes".into())
        );
    }

    #[test]
    fn flags_override_saved_prefs() {
        let saved = QueryPrefs {
            omit_empty: false,
            ..QueryPrefs::default()
        };
        let flags = PrefFlags {
            exclude_disconnected: Some(false),
            ..PrefFlags::default()
        };
        let effective = flags.apply(Some(Mode::Graph), saved);
        assert_eq!(effective.required_mode, Mode::Graph);
        assert!(!effective.exclude_disconnected);
        assert!(!effective.omit_empty);
        assert!(effective.remove_subsumed);
    }
}
