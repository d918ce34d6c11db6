//! Host entry points
//!
//! The four operations the host invokes through its bridge. Each one returns
//! an [`Outcome`]: the JSON string or flag the host expects, plus whether the
//! call degraded to a safe default.
//!
//! `set_config` commits atomically by default: the merged document is only
//! kept in memory once it has been written. With
//! [`CommitPolicy::MergeThenSave`] the merge sticks even if the write fails.

use crate::{
    Error, ErrorKind,
    api::Outcome,
    store::{ConfigStore, LoadOutcome},
    types::HookConfig,
};
use serde_json::Value;
use tracing::{debug, error};

/// How `set_config` treats a merge whose write fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommitPolicy {
    /// Keep memory and disk in step: discard the merge if the write fails
    #[default]
    Atomic,
    /// Merge in memory first, then save; a failed write leaves memory ahead of disk
    MergeThenSave,
}

/// Config operations exposed to the host
#[derive(Debug)]
pub struct Backend {
    store: ConfigStore,
    policy: CommitPolicy,
}

impl Backend {
    /// Serve the given store with the atomic commit policy
    pub fn new(store: ConfigStore) -> Self {
        Self::with_policy(store, CommitPolicy::default())
    }

    pub fn with_policy(store: ConfigStore, policy: CommitPolicy) -> Self {
        Self { store, policy }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn policy(&self) -> CommitPolicy {
        self.policy
    }

    /// Full cached document as pretty-printed JSON
    pub fn get_config(&self) -> Outcome<String> {
        Outcome::ok(self.store.document().to_pretty_json())
    }

    /// Reload from disk, then return the two hook keys as compact JSON.
    ///
    /// A failed reload still answers from the cached document. If the view
    /// itself cannot be produced both keys come back empty.
    pub fn get_hook_config(&mut self) -> Outcome<String> {
        let loaded = self.store.load();
        let hook = self.store.document().hook_config();

        let outcome = match serde_json::to_string(&hook) {
            Ok(json) => Outcome::ok(json),
            Err(e) => {
                error!("Failed to get hook config: {}", e);
                Outcome::degraded(HookConfig::default().to_json(), ErrorKind::Internal)
            }
        };
        outcome.or_degraded(loaded.degraded())
    }

    /// Shallow-merge a JSON object into the config and persist it
    pub fn set_config(&mut self, config_json: &str) -> Outcome<bool> {
        debug!("Received config update: {}", config_json);

        let patch = match serde_json::from_str::<Value>(config_json) {
            Ok(Value::Object(patch)) => patch,
            Ok(other) => {
                let e = Error::not_an_object(&other);
                error!("Failed to update config: {}", e);
                return Outcome::degraded(false, ErrorKind::InputParse);
            }
            Err(e) => {
                error!("Failed to update config: {}", Error::InputParse(e));
                return Outcome::degraded(false, ErrorKind::InputParse);
            }
        };

        let result = match self.policy {
            CommitPolicy::Atomic => self.store.apply(patch),
            CommitPolicy::MergeThenSave => self.store.apply_unchecked(patch),
        };

        match result {
            Ok(()) => Outcome::ok(true),
            Err(e) => {
                error!("Failed to update config: {}", e);
                Outcome::degraded(false, e.kind())
            }
        }
    }

    /// Re-read the file into the cache. Completes even when the read degrades.
    pub fn reload_config(&mut self) -> Outcome<bool> {
        match self.store.load() {
            LoadOutcome::Degraded(kind) => Outcome::degraded(true, kind),
            LoadOutcome::Loaded | LoadOutcome::Created => Outcome::ok(true),
        }
    }
}
