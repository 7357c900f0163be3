use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::assistant::Assistant;
use super::event::Event;
use super::nation::Nation;
use super::traits::HiddenTrait;

/// Discrete world mood derived from `stability`. Five contiguous bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum StabilityState {
    GoldenAge,
    Peaceful,
    Stable,
    Tense,
    Chaotic,
}

string_enum!(StabilityState {
    GoldenAge => "golden_age",
    Peaceful => "peaceful",
    Stable => "stable",
    Tense => "tense",
    Chaotic => "chaotic",
});

impl StabilityState {
    /// `[0.9,1]` golden age, `[0.7,0.9)` peaceful, `[0.4,0.7)` stable,
    /// `[0.2,0.4)` tense, below 0.2 chaotic.
    pub fn from_stability(stability: f64) -> Self {
        if stability >= 0.9 {
            StabilityState::GoldenAge
        } else if stability >= 0.7 {
            StabilityState::Peaceful
        } else if stability >= 0.4 {
            StabilityState::Stable
        } else if stability >= 0.2 {
            StabilityState::Tense
        } else {
            StabilityState::Chaotic
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum RunStatus {
    Active,
    Won,
    Collapsed,
    TurnLimit,
    PlayerQuit,
}

string_enum!(RunStatus {
    Active => "active",
    Won => "won",
    Collapsed => "collapsed",
    TurnLimit => "turn_limit",
    PlayerQuit => "player_quit",
});

impl RunStatus {
    pub fn is_terminal(&self) -> bool {
        *self != RunStatus::Active
    }
}

/// Why a caller is ending a run. Every variant maps to a terminal [`RunStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EndReason {
    Won,
    Collapsed,
    TurnLimit,
    PlayerQuit,
}

string_enum!(EndReason {
    Won => "won",
    Collapsed => "collapsed",
    TurnLimit => "turn_limit",
    PlayerQuit => "player_quit",
});

impl From<EndReason> for RunStatus {
    fn from(reason: EndReason) -> Self {
        match reason {
            EndReason::Won => RunStatus::Won,
            EndReason::Collapsed => RunStatus::Collapsed,
            EndReason::TurnLimit => RunStatus::TurnLimit,
            EndReason::PlayerQuit => RunStatus::PlayerQuit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

string_enum!(Difficulty {
    Easy => "easy",
    Normal => "normal",
    Hard => "hard",
});

impl Difficulty {
    pub fn starting_stability(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.6,
            Difficulty::Normal => 0.5,
            Difficulty::Hard => 0.4,
        }
    }
}

/// Aggregate root of one playthrough.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Run {
    pub run_id: String,
    pub turn: u32,
    pub stability: f64,
    pub stability_state: StabilityState,
    pub score: i64,
    pub peace_streak: u32,
    pub chaos_streak: u32,
    pub nations: BTreeMap<String, Nation>,
    pub assistants: BTreeMap<String, Assistant>,
    pub events_log: Vec<Event>,
    pub world_theme: String,
    pub difficulty: Difficulty,
    pub run_status: RunStatus,
    pub turn_limit: u32,
    pub seed: u64,
    pub stability_history: Vec<f64>,
    pub revealed_traits: BTreeMap<String, Vec<HiddenTrait>>,
    pub god_quips: Vec<String>,
    /// Latest note from each assistant that has acted, keyed by assistant id.
    pub assistant_notes: BTreeMap<String, String>,
}

impl Run {
    pub fn is_active(&self) -> bool {
        self.run_status == RunStatus::Active
    }

    /// The unresolved tail of the event log, if any.
    pub fn pending_event(&self) -> Option<&Event> {
        self.events_log.last().filter(|e| !e.resolved)
    }

    pub fn resolved_count(&self) -> usize {
        self.events_log.iter().filter(|e| e.resolved).count()
    }

    pub fn revealed(&self, nation_id: &str) -> &[HiddenTrait] {
        self.revealed_traits
            .get(nation_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Record a revealed trait. Returns false (and changes nothing) if the nation
    /// is unknown, does not hold the trait, or it was already revealed.
    pub fn reveal_trait(&mut self, nation_id: &str, t: HiddenTrait) -> bool {
        let Some(nation) = self.nations.get(nation_id) else {
            return false;
        };
        if !nation.has_trait(t) {
            return false;
        }
        let revealed = self.revealed_traits.entry(nation_id.to_string()).or_default();
        if revealed.contains(&t) {
            return false;
        }
        revealed.push(t);
        true
    }

    pub fn assistant_unlocked(&self, id: &str) -> bool {
        self.assistants.get(id).is_some_and(|a| a.unlocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::nation::{Demeanor, EconomyType, Race};

    fn run_with_one_nation() -> Run {
        let nation = Nation {
            id: "nation_x".to_string(),
            name: "Xel".to_string(),
            archetype: "x".to_string(),
            primary_race: Race::Human,
            economy_type: EconomyType::Pastoral,
            demeanor: Demeanor::Stoic,
            hidden_traits: vec![HiddenTrait::Zealot, HiddenTrait::Mystic],
            relations: BTreeMap::new(),
            power: 0.5,
            population: 10_000,
            prosperity: 0.5,
            unrest: 0.1,
            last_interaction: "none".to_string(),
        };
        Run {
            run_id: "run_000001".to_string(),
            turn: 1,
            stability: 0.5,
            stability_state: StabilityState::Stable,
            score: 0,
            peace_streak: 0,
            chaos_streak: 0,
            nations: BTreeMap::from([(nation.id.clone(), nation)]),
            assistants: BTreeMap::new(),
            events_log: vec![],
            world_theme: "classic_fantasy".to_string(),
            difficulty: Difficulty::Normal,
            run_status: RunStatus::Active,
            turn_limit: 20,
            seed: 1,
            stability_history: vec![0.5],
            revealed_traits: BTreeMap::new(),
            god_quips: vec![],
            assistant_notes: BTreeMap::new(),
        }
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(StabilityState::from_stability(0.0), StabilityState::Chaotic);
        assert_eq!(StabilityState::from_stability(0.19), StabilityState::Chaotic);
        assert_eq!(StabilityState::from_stability(0.2), StabilityState::Tense);
        assert_eq!(StabilityState::from_stability(0.39), StabilityState::Tense);
        assert_eq!(StabilityState::from_stability(0.4), StabilityState::Stable);
        assert_eq!(StabilityState::from_stability(0.69), StabilityState::Stable);
        assert_eq!(StabilityState::from_stability(0.7), StabilityState::Peaceful);
        assert_eq!(StabilityState::from_stability(0.89), StabilityState::Peaceful);
        assert_eq!(StabilityState::from_stability(0.9), StabilityState::GoldenAge);
        assert_eq!(StabilityState::from_stability(1.0), StabilityState::GoldenAge);
    }

    #[test]
    fn end_reason_maps_to_terminal_status() {
        for reason in EndReason::ALL {
            let status: RunStatus = (*reason).into();
            assert!(status.is_terminal());
            assert_eq!(status.as_str(), reason.as_str());
        }
        assert!(!RunStatus::Active.is_terminal());
    }

    #[test]
    fn difficulty_defaults_to_normal() {
        assert_eq!(Difficulty::default(), Difficulty::Normal);
        assert_eq!(Difficulty::default().starting_stability(), 0.5);
        assert!(Difficulty::Hard.starting_stability() < Difficulty::Easy.starting_stability());
    }

    #[test]
    fn reveal_trait_is_append_only_and_checked() {
        let mut run = run_with_one_nation();
        assert!(run.reveal_trait("nation_x", HiddenTrait::Zealot));
        assert!(!run.reveal_trait("nation_x", HiddenTrait::Zealot), "duplicate");
        assert!(!run.reveal_trait("nation_x", HiddenTrait::Pacifist), "not held");
        assert!(!run.reveal_trait("nation_missing", HiddenTrait::Zealot));
        assert_eq!(run.revealed("nation_x"), &[HiddenTrait::Zealot]);
        assert!(run.revealed("nation_missing").is_empty());
    }

    #[test]
    fn run_serializes_status_and_state_as_strings() {
        let run = run_with_one_nation();
        let json = serde_json::to_value(&run).unwrap();
        assert_eq!(json["run_status"], "active");
        assert_eq!(json["stability_state"], "stable");
        assert_eq!(json["difficulty"], "normal");
        assert!(json["nations"]["nation_x"].is_object());
        let back: Run = serde_json::from_value(json).unwrap();
        assert_eq!(back, run);
    }
}
