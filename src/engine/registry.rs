use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use rand::Rng;
use rand::rngs::SmallRng;

use crate::id::IdGenerator;
use crate::model::Run;

/// A run together with its private random source.
#[derive(Debug)]
pub struct RunSlot {
    pub run: Run,
    pub rng: SmallRng,
}

/// When finished runs are dropped from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvictionPolicy {
    /// Keep every run until `remove` is called.
    #[default]
    Never,
    /// Keep at most this many ended runs; the oldest go first.
    KeepEnded(usize),
}

pub type SharedSlot = Arc<Mutex<RunSlot>>;

/// Owns every run. The map lock is held only to look up, insert, or remove a
/// slot; per-run work happens under the slot's own mutex, so different runs
/// proceed in parallel and calls on one run serialize.
#[derive(Debug)]
pub struct RunRegistry {
    slots: RwLock<BTreeMap<String, SharedSlot>>,
    ids: Mutex<IdGenerator>,
    policy: EvictionPolicy,
    warn_threshold: usize,
}

/// Lock a slot, recovering from poisoning. Runs are only mutated after a
/// decision validates, so a poisoned slot still holds a consistent run.
pub fn lock_slot(slot: &SharedSlot) -> MutexGuard<'_, RunSlot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

impl RunRegistry {
    pub fn new(policy: EvictionPolicy, warn_threshold: usize) -> Self {
        Self {
            slots: RwLock::new(BTreeMap::new()),
            ids: Mutex::new(IdGenerator::new()),
            policy,
            warn_threshold,
        }
    }

    /// `run_<counter>_<random hex>`. The counter keeps issue order within this
    /// registry; the suffix keeps ids unique across processes.
    pub fn next_run_id(&self) -> String {
        let tagged = self
            .ids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next_tagged("run");
        format!("{tagged}_{:08x}", rand::rng().random::<u32>())
    }

    /// Register a slot under its run id, then apply the eviction policy.
    /// Returns the ids of any runs evicted.
    pub fn insert(&self, slot: RunSlot) -> Vec<String> {
        let run_id = slot.run.run_id.clone();
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots.insert(run_id, Arc::new(Mutex::new(slot)));

        let evicted = match self.policy {
            EvictionPolicy::Never => Vec::new(),
            EvictionPolicy::KeepEnded(keep) => evict_ended(&mut slots, keep),
        };

        let len = slots.len();
        if self.warn_threshold > 0 && len % self.warn_threshold == 0 {
            tracing::warn!(runs = len, threshold = self.warn_threshold, "run registry growing");
        }
        evicted
    }

    pub fn get(&self, run_id: &str) -> Option<SharedSlot> {
        self.slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(run_id)
            .cloned()
    }

    pub fn remove(&self, run_id: &str) -> bool {
        self.slots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(run_id)
            .is_some()
    }

    pub fn contains(&self, run_id: &str) -> bool {
        self.slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(run_id)
    }

    pub fn len(&self) -> usize {
        self.slots.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Drop the oldest ended runs until at most `keep` remain. Ids sort in issue
/// order, so map order is age order.
fn evict_ended(slots: &mut BTreeMap<String, SharedSlot>, keep: usize) -> Vec<String> {
    let ended: Vec<String> = slots
        .iter()
        .filter(|(_, slot)| !lock_slot(slot).run.is_active())
        .map(|(id, _)| id.clone())
        .collect();
    let excess = ended.len().saturating_sub(keep);
    let evicted: Vec<String> = ended.into_iter().take(excess).collect();
    for id in &evicted {
        slots.remove(id);
        tracing::debug!(run_id = %id, "evicted ended run");
    }
    evicted
}
