// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for hedit crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`config`] - In-memory config store fake for testing without filesystem
//! - [`documents`] - `GraphDocument` builder
//! - [`fixtures`] - Canned documents (chain, tree-edge, people property graph)
//! - [`strategies`] - proptest strategies for random documents

pub mod config;
pub mod documents;
pub mod fixtures;
pub mod strategies;

pub use config::InMemoryConfigStore;
pub use documents::DocumentBuilder;
pub use strategies::arb_document;
