// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]
use hedit_app_core::config::{ConfigError, ConfigService, ConfigStore};
use hedit_app_core::prefs::QueryPrefs;
use hedit_config_fs::FsConfigStore;

#[test]
fn missing_key_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::at(dir.path()).unwrap();
    assert!(matches!(store.load_raw("absent"), Err(ConfigError::NotFound)));
}

#[test]
fn saves_json_file_per_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::at(dir.path().join("nested")).unwrap();
    store.save_raw("query_prefs", b"{}").unwrap();
    assert!(store.base().join("query_prefs.json").is_file());
    assert_eq!(store.load_raw("query_prefs").unwrap(), b"{}");
}

#[test]
fn prefs_persist_across_store_instances() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = QueryPrefs {
        omit_empty: false,
        ..QueryPrefs::default()
    };
    prefs
        .save(&ConfigService::new(FsConfigStore::at(dir.path()).unwrap()))
        .unwrap();

    let reopened = ConfigService::new(FsConfigStore::at(dir.path()).unwrap());
    assert_eq!(QueryPrefs::load(&reopened).unwrap(), prefs);
}
