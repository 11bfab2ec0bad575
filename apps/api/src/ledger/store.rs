//! Durable backing store for the decision ledger.
//!
//! The persisted shape is the full collection, read and overwritten whole —
//! the upsert lives in the in-memory ledger, not here. An absent or empty
//! file means "no decisions yet", never an error.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::models::decision::DecisionRecord;

pub trait LedgerStore: Send + Sync {
    fn load(&self) -> Result<Vec<DecisionRecord>>;
    fn save(&self, records: &[DecisionRecord]) -> Result<()>;
}

/// JSON-file store, local to one running instance. Concurrent processes
/// sharing one file are out of scope.
pub struct JsonFileLedgerStore {
    path: PathBuf,
}

impl JsonFileLedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LedgerStore for JsonFileLedgerStore {
    fn load(&self) -> Result<Vec<DecisionRecord>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("reading ledger file {}", self.path.display()))
            }
        };
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing ledger file {}", self.path.display()))
    }

    fn save(&self, records: &[DecisionRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records).context("serializing ledger")?;
        // Write to a sibling temp file and rename into place, so a reader
        // (or a crash mid-write) never sees a half-written ledger.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .with_context(|| format!("writing ledger temp file {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing ledger file {}", self.path.display()))
    }
}
