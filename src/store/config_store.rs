//! File-backed config store
//!
//! Owns the resolved config path and the cached [`ConfigDocument`]. Every
//! operation opens, reads or writes, and closes the file within the call.
//! The store assumes a single caller; there is no locking and no atomic
//! replace, so concurrent writers race and the last one wins.

use crate::{Error, ErrorKind, Result, store::ConfigDocument};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// What a call to [`ConfigStore::load`] ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read and merged into the document
    Loaded,
    /// No file existed; the current document was written out
    Created,
    /// Reading, parsing or creating failed; the document is unchanged
    Degraded(ErrorKind),
}

impl LoadOutcome {
    pub fn degraded(&self) -> Option<ErrorKind> {
        match self {
            LoadOutcome::Degraded(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// Single source of truth for the plugin configuration
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    document: ConfigDocument,
}

impl ConfigStore {
    /// Create a store for `path` with the default document and load it.
    ///
    /// If the file does not exist yet it is created from the defaults.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self::detached(path);
        store.load();
        store
    }

    /// Create a store with the default document without touching the disk
    pub fn detached(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            document: ConfigDocument::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    /// Value for `key`, or `default` when absent
    pub fn get<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.document.get(key).unwrap_or(default)
    }

    /// Overlay the file contents on the cached document, creating the file if missing.
    ///
    /// Failures are logged and leave the document as it was.
    pub fn load(&mut self) -> LoadOutcome {
        match self.read_file() {
            Ok(Some(entries)) => {
                self.document.merge(entries);
                info!("Configuration loaded from file");
                LoadOutcome::Loaded
            }
            Ok(None) => match self.persist(&self.document) {
                Ok(()) => {
                    info!("Created default configuration file");
                    LoadOutcome::Created
                }
                Err(e) => {
                    error!("Failed to save config: {}", e);
                    LoadOutcome::Degraded(e.kind())
                }
            },
            Err(e) => {
                error!("Failed to load config: {}", e);
                LoadOutcome::Degraded(e.kind())
            }
        }
    }

    /// Write the cached document to disk, overwriting the file.
    ///
    /// Returns whether the write happened. On failure the cached document is
    /// kept, so memory and disk may diverge until the next successful save.
    pub fn save(&self) -> bool {
        match self.persist(&self.document) {
            Ok(()) => {
                info!("Configuration saved to file");
                true
            }
            Err(e) => {
                error!("Failed to save config: {}", e);
                false
            }
        }
    }

    /// Merge `patch` into the document, committing it only once it is on disk
    pub fn apply(&mut self, patch: Map<String, Value>) -> Result<()> {
        let candidate = self.document.merged(patch);
        self.persist(&candidate)?;
        self.document = candidate;
        info!("Configuration saved to file");
        Ok(())
    }

    /// Merge `patch` into the document first and persist afterwards.
    ///
    /// A failed write leaves the merged document in memory.
    pub fn apply_unchecked(&mut self, patch: Map<String, Value>) -> Result<()> {
        self.document.merge(patch);
        self.persist(&self.document)
    }

    /// Read and parse the file. `Ok(None)` means it does not exist.
    fn read_file(&self) -> Result<Option<Map<String, Value>>> {
        if !self.path.exists() {
            debug!("No config file at {}", self.path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| Error::FileRead {
            path: self.path.clone(),
            source,
        })?;

        let value: Value = serde_json::from_str(&content).map_err(|source| Error::Parse {
            path: self.path.clone(),
            source,
        })?;

        match value {
            Value::Object(entries) => Ok(Some(entries)),
            other => Err(Error::not_an_object(&other)),
        }
    }

    fn persist(&self, document: &ConfigDocument) -> Result<()> {
        debug!("Writing {} keys to {}", document.len(), self.path.display());
        std::fs::write(&self.path, document.to_pretty_json()).map_err(|source| {
            Error::FileWrite {
                path: self.path.clone(),
                source,
            }
        })
    }
}
