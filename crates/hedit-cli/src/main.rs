// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! hedit CLI entrypoint.
//!
//! Loads an H-Edit JSON file and prints the result of one query as JSON.
//!
//! # Usage
//! ```text
//! hedit connected people.json alice --via likes
//! hedit objects people.json --required-mode property_graph
//! hedit prefs --omit-empty false --save
//! ```
//!
//! Defaults for the boolean query switches and the required mode come from
//! saved preferences; flags given on the command line win. Logs go to
//! stderr.

// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;
mod commands;

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use hedit_app_core::config::{ConfigError, ConfigService};
use hedit_app_core::prefs::QueryPrefs;
use hedit_config_fs::FsConfigStore;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::commands::Output;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match &cli.log {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = config_service(cli.config_dir.as_deref());
    let saved = match &config {
        Ok(service) => QueryPrefs::load(service).unwrap_or_else(|err| {
            warn!(%err, "ignoring unreadable query preferences");
            QueryPrefs::default()
        }),
        Err(err) => {
            warn!(%err, "no config directory, using default query preferences");
            QueryPrefs::default()
        }
    };
    let prefs = cli.prefs.apply(cli.required_mode, saved);
    debug!(?prefs, "effective query preferences");

    if let Command::Prefs { save: true } = cli.command {
        prefs.save(&config?)?;
    }

    match commands::run(&cli.command, &prefs)? {
        Output::Json(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Output::Text(text) => print!("{text}"),
    }
    Ok(())
}

fn config_service(dir: Option<&Path>) -> Result<ConfigService<FsConfigStore>, ConfigError> {
    let store = match dir {
        Some(dir) => FsConfigStore::at(dir)?,
        None => FsConfigStore::new()?,
    };
    Ok(ConfigService::new(store))
}
