//! Decision Ledger — the one mutable resource in the matching engine.
//!
//! Write-through: every decision lands in the in-memory map first and is
//! then persisted fire-and-forget. A failed durable write is logged and
//! swallowed; the decision stays visible for the rest of the session and
//! may simply not survive a restart. Best-effort by policy, not by accident.
//!
//! Saves are sequenced through a persist lock: each background task takes
//! its snapshot only once it holds the lock, so a save that was spawned
//! earlier but runs slower can never land a stale snapshot over a newer one.

pub mod store;

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tracing::warn;

use crate::models::decision::{DecisionRecord, SwipeDecision};

pub use store::{JsonFileLedgerStore, LedgerStore};

pub struct DecisionLedger {
    store: Arc<dyn LedgerStore>,
    records: Arc<Mutex<HashMap<String, DecisionRecord>>>,
    persist_lock: Arc<Mutex<()>>,
}

impl DecisionLedger {
    /// Loads existing decisions from the store. A failed or corrupt read
    /// degrades to an empty ledger with a warning — never an error.
    pub fn open(store: Arc<dyn LedgerStore>) -> Self {
        let records = match store.load() {
            Ok(list) => list
                .into_iter()
                .map(|r| (r.candidate_id.clone(), r))
                .collect(),
            Err(e) => {
                warn!("failed to load decision ledger, starting empty: {e:#}");
                HashMap::new()
            }
        };
        Self {
            store,
            records: Arc::new(Mutex::new(records)),
            persist_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Upserts a decision for `candidate_id` with the current timestamp.
    /// Any identity string is accepted — the ledger does not cross-check
    /// against the catalog. An existing record is replaced wholesale, so
    /// last call wins on repeat decisions.
    pub fn record(&self, candidate_id: &str, decision: SwipeDecision) {
        let record = DecisionRecord {
            candidate_id: candidate_id.to_string(),
            decision,
            decided_at: Utc::now(),
        };
        lock(&self.records).insert(candidate_id.to_string(), record);

        // Fire-and-forget: the caller never waits on durability. The task
        // snapshots the map only after acquiring the persist lock, so
        // whichever save writes the file last wrote current-or-newer state.
        let store = Arc::clone(&self.store);
        let records = Arc::clone(&self.records);
        let persist_lock = Arc::clone(&self.persist_lock);
        tokio::task::spawn_blocking(move || {
            let _guard = persist_lock.lock().unwrap_or_else(|p| p.into_inner());
            let snapshot: Vec<DecisionRecord> = lock(&records).values().cloned().collect();
            if let Err(e) = store.save(&snapshot) {
                warn!("failed to persist decision ledger: {e:#}");
            }
        });
    }

    /// Current records, in no guaranteed order.
    pub fn all(&self) -> Vec<DecisionRecord> {
        lock(&self.records).values().cloned().collect()
    }

    /// Identities with a decision on file — the generator's exclusion set.
    pub fn decided_ids(&self) -> HashSet<String> {
        lock(&self.records).keys().cloned().collect()
    }
}

fn lock(
    records: &Mutex<HashMap<String, DecisionRecord>>,
) -> MutexGuard<'_, HashMap<String, DecisionRecord>> {
    // Single logical writer; a poisoned lock still holds usable state.
    records.lock().unwrap_or_else(|p| p.into_inner())
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use anyhow::{anyhow, Result};

    /// In-memory store for deterministic tests. Starts empty; saves either
    /// vanish quietly or fail on demand.
    #[derive(Default)]
    pub struct InMemoryLedgerStore {
        pub fail_saves: bool,
    }

    impl LedgerStore for InMemoryLedgerStore {
        fn load(&self) -> Result<Vec<DecisionRecord>> {
            Ok(Vec::new())
        }

        fn save(&self, _records: &[DecisionRecord]) -> Result<()> {
            if self.fail_saves {
                return Err(anyhow!("simulated storage failure"));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::InMemoryLedgerStore;
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_record_is_immediately_visible() {
        let ledger = DecisionLedger::open(Arc::new(InMemoryLedgerStore::default()));
        ledger.record("alice", SwipeDecision::Like);

        assert!(ledger.decided_ids().contains("alice"));
        let all = ledger.all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].decision, SwipeDecision::Like);
    }

    #[tokio::test]
    async fn test_repeat_decision_overwrites() {
        let ledger = DecisionLedger::open(Arc::new(InMemoryLedgerStore::default()));
        ledger.record("alice", SwipeDecision::Like);
        ledger.record("alice", SwipeDecision::Pass);

        let all = ledger.all();
        assert_eq!(all.len(), 1, "one record per candidate id");
        assert_eq!(all[0].decision, SwipeDecision::Pass);
    }

    #[tokio::test]
    async fn test_failed_persistence_keeps_in_memory_state() {
        let store = Arc::new(InMemoryLedgerStore { fail_saves: true });
        let ledger = DecisionLedger::open(store);
        ledger.record("alice", SwipeDecision::Pass);

        // The write failed in the background; the session still sees it.
        assert!(ledger.decided_ids().contains("alice"));
    }

    #[tokio::test]
    async fn test_distinct_candidates_accumulate() {
        let ledger = DecisionLedger::open(Arc::new(InMemoryLedgerStore::default()));
        ledger.record("alice", SwipeDecision::Like);
        ledger.record("bob", SwipeDecision::Pass);

        let ids = ledger.decided_ids();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("alice") && ids.contains("bob"));
    }

    #[tokio::test]
    async fn test_corrupt_store_opens_empty() {
        struct CorruptStore;
        impl LedgerStore for CorruptStore {
            fn load(&self) -> anyhow::Result<Vec<DecisionRecord>> {
                Err(anyhow::anyhow!("corrupt serialized data"))
            }
            fn save(&self, _: &[DecisionRecord]) -> anyhow::Result<()> {
                Ok(())
            }
        }

        let ledger = DecisionLedger::open(Arc::new(CorruptStore));
        assert!(ledger.all().is_empty());
    }

    /// Store whose first save stalls long enough for a later save to run,
    /// keeping every snapshot it was handed.
    #[derive(Default)]
    struct StallingStore {
        calls: AtomicUsize,
        saves: Mutex<Vec<Vec<DecisionRecord>>>,
    }

    impl LedgerStore for StallingStore {
        fn load(&self) -> anyhow::Result<Vec<DecisionRecord>> {
            Ok(Vec::new())
        }

        fn save(&self, records: &[DecisionRecord]) -> anyhow::Result<()> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                std::thread::sleep(Duration::from_millis(300));
            }
            self.saves
                .lock()
                .unwrap_or_else(|p| p.into_inner())
                .push(records.to_vec());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_slow_earlier_save_cannot_clobber_later_decision() {
        let store = Arc::new(StallingStore::default());
        let ledger = DecisionLedger::open(Arc::clone(&store) as Arc<dyn LedgerStore>);

        ledger.record("alice", SwipeDecision::Like);
        ledger.record("bob", SwipeDecision::Pass);

        // Both background saves must land; the first one stalls 300ms.
        let mut saves = Vec::new();
        for _ in 0..40 {
            saves = store.saves.lock().unwrap_or_else(|p| p.into_inner()).clone();
            if saves.len() >= 2 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        assert_eq!(saves.len(), 2, "expected both saves to complete");

        // The last write wins on disk, so it must hold both decisions even
        // though the save spawned first finished second.
        let last: HashSet<String> = saves
            .last()
            .unwrap()
            .iter()
            .map(|r| r.candidate_id.clone())
            .collect();
        assert!(last.contains("alice"), "final snapshot lost alice: {last:?}");
        assert!(last.contains("bob"), "final snapshot lost bob: {last:?}");
    }
}
