pub mod registry;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::model::{EndReason, Event, Run, RunStatus, StabilityState};
use crate::sim;
use crate::worldgen::{RunConfig, generate_run};

pub use registry::{EvictionPolicy, RunRegistry, RunSlot};

use registry::lock_slot;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub eviction: EvictionPolicy,
    /// Log a warning whenever the registry size reaches a multiple of this.
    /// Zero disables the warning.
    pub warn_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            eviction: EvictionPolicy::Never,
            warn_threshold: 1000,
        }
    }
}

/// Final tally returned by [`Engine::end_run`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: String,
    pub seed: u64,
    pub final_score: i64,
    /// Number of resolved events.
    pub turns_played: usize,
    pub stability: f64,
    pub stability_state: StabilityState,
    pub status: RunStatus,
}

/// Entry point for every run operation. Safe to share across threads.
#[derive(Debug)]
pub struct Engine {
    registry: RunRegistry,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            registry: RunRegistry::new(config.eviction, config.warn_threshold),
        }
    }

    /// Generate and register a new run. A missing seed is drawn once and
    /// recorded on the run.
    pub fn start_run(&self, config: &RunConfig) -> Run {
        let seed = config.resolve_seed();
        let run_id = self.registry.next_run_id();
        let (run, rng) = generate_run(run_id, config, seed);

        tracing::info!(
            run_id = %run.run_id,
            seed,
            theme = %run.world_theme,
            difficulty = %run.difficulty,
            nations = run.nations.len(),
            "run started"
        );
        let snapshot = run.clone();
        self.registry.insert(RunSlot { run, rng });
        snapshot
    }

    /// Draw the next event. Requires an active run with no pending event.
    pub fn next_turn(&self, run_id: &str) -> Result<Event, EngineError> {
        self.with_slot(run_id, |slot| sim::generate_event(&mut slot.run, &mut slot.rng))
    }

    /// Resolve the pending event with `choice` and return the updated run.
    pub fn make_decision(
        &self,
        run_id: &str,
        event_id: &str,
        choice: &str,
    ) -> Result<Run, EngineError> {
        self.with_slot(run_id, |slot| {
            sim::resolve_decision(&mut slot.run, event_id, choice, &mut slot.rng)?;
            Ok(slot.run.clone())
        })
    }

    /// Stamp the run's terminal status and report its final numbers. The run
    /// stays registered until [`Engine::remove_run`] or eviction.
    pub fn end_run(&self, run_id: &str, reason: EndReason) -> Result<RunSummary, EngineError> {
        self.with_slot(run_id, |slot| {
            let run = &mut slot.run;
            run.run_status = reason.into();
            let summary = RunSummary {
                run_id: run.run_id.clone(),
                seed: run.seed,
                final_score: run.score,
                turns_played: run.resolved_count(),
                stability: run.stability,
                stability_state: run.stability_state,
                status: run.run_status,
            };
            tracing::info!(
                run_id = %summary.run_id,
                status = %summary.status,
                score = summary.final_score,
                turns = summary.turns_played,
                "run ended"
            );
            Ok(summary)
        })
    }

    /// Snapshot of the run.
    pub fn get_state(&self, run_id: &str) -> Result<Run, EngineError> {
        self.with_slot(run_id, |slot| Ok(slot.run.clone()))
    }

    pub fn pending_event(&self, run_id: &str) -> Result<Event, EngineError> {
        self.with_slot(run_id, |slot| {
            slot.run.pending_event().cloned().ok_or(EngineError::NoEvent)
        })
    }

    /// Drop a run from the registry. Returns false if it was not registered.
    pub fn remove_run(&self, run_id: &str) -> bool {
        let removed = self.registry.remove(run_id);
        if removed {
            tracing::debug!(run_id, "run removed");
        }
        removed
    }

    pub fn run_count(&self) -> usize {
        self.registry.len()
    }

    fn with_slot<T>(
        &self,
        run_id: &str,
        f: impl FnOnce(&mut RunSlot) -> Result<T, EngineError>,
    ) -> Result<T, EngineError> {
        let shared = self
            .registry
            .get(run_id)
            .ok_or_else(|| EngineError::RunNotFound(run_id.to_string()))?;
        let mut slot = lock_slot(&shared);
        f(&mut slot)
    }
}
