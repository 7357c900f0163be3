use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::effect::Effect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EventKind {
    Interaction,
    Disaster,
    Prophecy,
    Random,
    TechMagic,
}

string_enum!(EventKind {
    Interaction => "interaction",
    Disaster => "disaster",
    Prophecy => "prophecy",
    Random => "random",
    TechMagic => "tech_magic",
});

/// The three ways the player can lean on an event.
///
/// Wire names are `peace`, `hostile`, `trade`. `cooperative` and `mercantile`
/// are accepted by [`ChoiceKey::parse`] as input aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ChoiceKey {
    Cooperative,
    Hostile,
    Mercantile,
}

string_enum!(ChoiceKey {
    Cooperative => "peace",
    Hostile => "hostile",
    Mercantile => "trade",
});

impl ChoiceKey {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "peace" | "cooperative" => Some(ChoiceKey::Cooperative),
            "hostile" => Some(ChoiceKey::Hostile),
            "trade" | "mercantile" => Some(ChoiceKey::Mercantile),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Choice {
    pub key: ChoiceKey,
    pub label: String,
    pub effects: Vec<Effect>,
}

/// Reserved record of a diplomatic shift between two nations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelationChange {
    pub a: String,
    pub b: String,
    pub new_status: String,
}

/// Outcome of a decision. Written once when the event resolves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resolution {
    pub chosen_key: ChoiceKey,
    pub stability_delta: f64,
    pub score_delta: i64,
    pub relation_changes: Vec<RelationChange>,
    pub logs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: String,
    pub kind: EventKind,
    pub turn: u32,
    /// The two participant nation ids, in draw order.
    pub nations: [String; 2],
    pub summary: String,
    pub template_key: String,
    pub tags: Vec<String>,
    pub choices: Vec<Choice>,
    pub resolved: bool,
    pub resolution: Option<Resolution>,
}

impl Event {
    pub fn choice(&self, key: ChoiceKey) -> Option<&Choice> {
        self.choices.iter().find(|c| c.key == key)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Attach the resolution and close the event. An already resolved event
    /// keeps its first resolution.
    pub fn resolve(&mut self, resolution: Resolution) -> Result<(), EngineError> {
        if self.resolved {
            return Err(EngineError::EventAlreadyResolved(self.id.clone()));
        }
        self.resolved = true;
        self.resolution = Some(resolution);
        Ok(())
    }
}
