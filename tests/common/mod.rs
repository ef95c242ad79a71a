//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use uislice::action::Action;
use uislice::config::StoreConfig;
use uislice::mvi::Intent;
use uislice::store::Store;

pub type ActionLog = Arc<Mutex<Vec<Action>>>;

/// Store with action tracing disabled, so tests stay quiet.
pub fn make_store() -> Store {
    Store::with_config(StoreConfig { log_actions: false })
}

/// Store plus a log of every action it applied, in dispatch order.
pub fn make_recording_store() -> (Store, ActionLog) {
    let store = make_store();
    let log: ActionLog = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    store.subscribe(move |_, action| sink.lock().push(action.clone()));
    (store, log)
}

/// Kinds of the recorded actions, handy for ordering assertions.
pub fn kinds(log: &ActionLog) -> Vec<&'static str> {
    log.lock().iter().map(|action| action.kind()).collect()
}

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
