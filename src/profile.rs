//! Cross-run player progression, persisted as a single JSON file.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::PROPHET_ID;
use crate::model::{Event, Run, RunStatus, StabilityState};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile io error: {0}")]
    Io(#[from] io::Error),

    #[error("profile encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Snapshot of the most recently finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastRun {
    pub run_id: String,
    pub score: i64,
    pub stability: f64,
    pub stability_state: StabilityState,
    pub turns: usize,
    pub result: RunStatus,
    pub seed: u64,
    pub ended_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_event: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerProfile {
    pub total_runs: u32,
    pub victories: u32,
    pub collapses: u32,
    pub highest_score: i64,
    pub best_stability: f64,
    /// Template keys of rare events met, in first-seen order.
    pub rare_events_seen: Vec<String>,
    pub unlocked_assistants: BTreeMap<String, bool>,
    pub last_run: Option<LastRun>,
    /// Display names of assistants unlocked by the latest ingest.
    pub last_unlocks: Vec<String>,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            total_runs: 0,
            victories: 0,
            collapses: 0,
            highest_score: 0,
            best_stability: 0.0,
            rare_events_seen: Vec::new(),
            unlocked_assistants: BTreeMap::from([(PROPHET_ID.to_string(), true)]),
            last_run: None,
            last_unlocks: Vec::new(),
        }
    }
}

impl PlayerProfile {
    /// Repair invariants a hand-edited or older file may break.
    fn normalize(&mut self) {
        self.unlocked_assistants
            .entry(PROPHET_ID.to_string())
            .or_insert(true);
        let mut seen = Vec::with_capacity(self.rare_events_seen.len());
        for key in self.rare_events_seen.drain(..) {
            if !seen.contains(&key) {
                seen.push(key);
            }
        }
        self.rare_events_seen = seen;
    }

    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            total_runs: self.total_runs,
            victories: self.victories,
            collapses: self.collapses,
            highest_score: self.highest_score,
            best_stability: (self.best_stability * 1000.0).round() / 1000.0,
            rare_events_seen: self.rare_events_seen.clone(),
            unlocked_assistants: self.unlocked_assistants.clone(),
            last_run: self.last_run.clone(),
            last_unlocks: self.last_unlocks.clone(),
        }
    }
}

/// Read-only view handed back to callers after each ingest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub total_runs: u32,
    pub victories: u32,
    pub collapses: u32,
    pub highest_score: i64,
    pub best_stability: f64,
    pub rare_events_seen: Vec<String>,
    pub unlocked_assistants: BTreeMap<String, bool>,
    pub last_run: Option<LastRun>,
    pub last_unlocks: Vec<String>,
}

#[derive(Debug)]
pub struct ProfileStore {
    path: PathBuf,
    profile: PlayerProfile,
}

impl ProfileStore {
    /// Load the profile at `path`. A missing or unparseable file yields a
    /// fresh profile; other I/O failures are returned.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ProfileError> {
        let path = path.into();
        let profile = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<PlayerProfile>(&text) {
                Ok(mut profile) => {
                    profile.normalize();
                    profile
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "corrupt profile, starting fresh");
                    PlayerProfile::default()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => PlayerProfile::default(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, profile })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    pub fn summary(&self) -> ProfileSummary {
        self.profile.summary()
    }

    /// Fold the state after a decision (or after the run ends) into the
    /// profile. Writes the file only if something changed.
    ///
    /// A finished run is counted once; ingesting the same finished run again
    /// only refreshes unlocks and rare events.
    pub fn ingest_resolution(
        &mut self,
        run: &Run,
        event: Option<&Event>,
    ) -> Result<ProfileSummary, ProfileError> {
        let profile = &mut self.profile;
        let mut updated = false;

        let mut new_unlocks = Vec::new();
        for assistant in run.assistants.values().filter(|a| a.unlocked) {
            if profile.unlocked_assistants.get(&assistant.id) != Some(&true) {
                profile.unlocked_assistants.insert(assistant.id.clone(), true);
                new_unlocks.push(assistant.name.clone());
                updated = true;
            }
        }
        if !new_unlocks.is_empty() {
            profile.last_unlocks = new_unlocks;
        } else if !run.is_active() && !profile.last_unlocks.is_empty() {
            profile.last_unlocks.clear();
            updated = true;
        }

        if let Some(event) = event
            && event.has_tag("rare")
            && !profile.rare_events_seen.contains(&event.template_key)
        {
            profile.rare_events_seen.push(event.template_key.clone());
            updated = true;
        }

        let already_counted = profile
            .last_run
            .as_ref()
            .is_some_and(|last| last.run_id == run.run_id);
        if !run.is_active() && !already_counted {
            profile.total_runs += 1;
            match run.run_status {
                RunStatus::Won => profile.victories += 1,
                RunStatus::Collapsed => profile.collapses += 1,
                _ => {}
            }
            profile.highest_score = profile.highest_score.max(run.score);
            profile.best_stability = profile.best_stability.max(run.stability);
            profile.last_run = Some(LastRun {
                run_id: run.run_id.clone(),
                score: run.score,
                stability: run.stability,
                stability_state: run.stability_state,
                turns: run.resolved_count(),
                result: run.run_status,
                seed: run.seed,
                ended_at: Utc::now(),
                last_event: event.map(|e| e.template_key.clone()),
            });
            tracing::info!(run_id = %run.run_id, total_runs = profile.total_runs, "run recorded in profile");
            updated = true;
        }

        if updated {
            self.save()?;
        }
        Ok(self.summary())
    }

    fn save(&self) -> Result<(), ProfileError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.profile)?)?;
        Ok(())
    }
}
