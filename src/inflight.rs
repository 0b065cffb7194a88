//! Single-flight gate for upstream requests.
//!
//! Concurrent fetches of the same URL acquire the same async lock, so only the
//! first caller reaches the upstream. Later callers wake once it finishes and
//! find the body in the [`ResponseCache`](crate::cache::ResponseCache). If the
//! first caller failed, the next one in line retries on its own, still holding
//! the gate, so `n` duplicates against a hanging upstream can take up to
//! `n × request_timeout` to drain.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

type GateMap = HashMap<String, Arc<AsyncMutex<()>>>;

/// Table of per-URL gates currently in use.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    gates: Arc<Mutex<GateMap>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until no other caller holds the gate for `key`, then hold it.
    ///
    /// The gate is released when the returned guard drops.
    pub async fn acquire(&self, key: &str) -> InFlightGuard {
        let gate = {
            let mut gates = self.lock();
            // A gate only the table still references has no holder and no
            // waiter left; this happens when a waiter is dropped mid-wait.
            gates.retain(|_, g| Arc::strong_count(g) > 1);
            gates.entry(key.to_owned()).or_default().clone()
        };
        let held = gate.clone().lock_owned().await;
        InFlightGuard {
            owner: self.clone(),
            key: key.to_owned(),
            gate,
            held: Some(held),
        }
    }

    /// Number of URLs with a live gate.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, GateMap> {
        self.gates.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Holds one URL's gate; removes the table entry when nobody else waits on it.
#[derive(Debug)]
pub struct InFlightGuard {
    owner: InFlight,
    key: String,
    gate: Arc<AsyncMutex<()>>,
    held: Option<OwnedMutexGuard<()>>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.held.take();
        let mut gates = self.owner.lock();
        // Clones are only handed out under the table lock, so the count is
        // stable here: one for the table, one for this guard.
        if Arc::strong_count(&self.gate) == 2 {
            gates.remove(&self.key);
        }
    }
}
