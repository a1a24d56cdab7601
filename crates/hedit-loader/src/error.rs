// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Loader errors.

use std::io;
use std::path::PathBuf;

use hedit_graph::DocumentError;
use thiserror::Error;

/// Why a file could not be turned into a document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// The contents are not valid JSON or do not match the H-Edit shape.
    #[error("invalid H-Edit JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// `data` or `conn` is absent.
    #[error("H-Edit JSON must contain a {0:?} field")]
    MissingField(&'static str),
    /// Written by an editor release whose encoding is no longer read.
    #[error("document format is outdated (version {version:?}); load it into H-Edit and save it again")]
    FormatOutdated {
        /// Declared version, if any.
        version: Option<i64>,
    },
    /// The node/edge lists break a document invariant.
    #[error(transparent)]
    Document(#[from] DocumentError),
}
