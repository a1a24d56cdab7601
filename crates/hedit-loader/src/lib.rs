// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! hedit-loader: H-Edit JSON files into [`GraphDocument`]s.
//!
//! A file is accepted when it parses, carries both `data` and `conn`, and
//! was written in the current encoding (version 2 or later). Edges may use
//! the pair form `[src, dst]` or the labeled form `{"src": .., "dst": ..}`;
//! both normalize to the same [`Edge`](hedit_graph::Edge) values.
//!
//! Callers pass the mode they intend to work in. A document declaring a
//! more general mode than that still loads, with a warning logged.
#![forbid(unsafe_code)]

mod error;
mod raw;

use std::fmt;
use std::fs;
use std::path::Path;

use hedit_graph::{GraphDocument, Mode};
use tracing::{debug, warn};

pub use error::LoadError;
use raw::{RawDocument, RawEdge};

/// Oldest encoding still read.
pub const MIN_VERSION: i64 = 2;

/// Mode the loader assumes callers want when they do not say.
pub const DEFAULT_REQUIRED_MODE: Mode = Mode::T;

/// The caller asked for a stricter mode than the document declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeWarning {
    /// Mode the caller works in.
    pub required: Mode,
    /// Mode the document declares.
    pub declared: Mode,
}

impl fmt::Display for ModeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "required mode {} is stricter than declared mode {}",
            self.required, self.declared
        )
    }
}

/// Compares the caller's mode against the declared one. The required mode
/// must be no stricter than the declared mode.
pub fn check_mode(required: Mode, declared: Option<Mode>) -> Option<ModeWarning> {
    declared
        .filter(|&declared| required < declared)
        .map(|declared| ModeWarning { required, declared })
}

/// Parses a document from JSON text.
pub fn load_from_str(json: &str, required: Mode) -> Result<GraphDocument, LoadError> {
    load_from_slice(json.as_bytes(), required)
}

/// Parses a document from JSON bytes.
pub fn load_from_slice(bytes: &[u8], required: Mode) -> Result<GraphDocument, LoadError> {
    let raw: RawDocument = serde_json::from_slice(bytes)?;
    build(raw, required)
}

/// Reads and parses the file at `path`.
pub fn load_from_path(path: impl AsRef<Path>, required: Mode) -> Result<GraphDocument, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = load_from_slice(&bytes, required)?;
    debug!(path = %path.display(), "loaded H-Edit file");
    Ok(doc)
}

fn build(raw: RawDocument, required: Mode) -> Result<GraphDocument, LoadError> {
    let nodes = raw.data.ok_or(LoadError::MissingField("data"))?;
    let conn = raw.conn.ok_or(LoadError::MissingField("conn"))?;

    let outdated = match raw.version {
        Some(version) => version < MIN_VERSION,
        None => conn.iter().any(RawEdge::is_labeled),
    };
    if outdated {
        return Err(LoadError::FormatOutdated {
            version: raw.version,
        });
    }

    if let Some(mismatch) = check_mode(required, raw.mode) {
        warn!(
            required = %mismatch.required,
            declared = %mismatch.declared,
            "{mismatch}"
        );
    }

    let edges = conn.into_iter().map(RawEdge::into_edge).collect();
    let mut doc = GraphDocument::new(nodes, edges)?;
    if let Some(mode) = raw.mode {
        doc = doc.with_mode(mode);
    }
    if let Some(version) = raw.version {
        doc = doc.with_version(version);
    }
    if let Some(name) = raw.name {
        doc = doc.with_name(name);
    }
    debug!(
        nodes = doc.nodes().len(),
        edges = doc.edges().len(),
        mode = ?doc.mode(),
        "built document"
    );
    Ok(doc)
}
