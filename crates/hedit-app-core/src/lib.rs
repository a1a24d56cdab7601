// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for hedit tools (config, query prefs).
//! Keeps the CLI thin and storage-agnostic.

pub mod config;
pub mod prefs;
