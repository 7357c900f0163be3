use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::traits::HiddenTrait;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Race {
    Elf,
    Orc,
    Human,
    Dwarf,
    Undead,
    Fae,
    Lizardfolk,
    Djinn,
    Golem,
    Merfolk,
}

string_enum!(Race {
    Elf => "elf",
    Orc => "orc",
    Human => "human",
    Dwarf => "dwarf",
    Undead => "undead",
    Fae => "fae",
    Lizardfolk => "lizardfolk",
    Djinn => "djinn",
    Golem => "golem",
    Merfolk => "merfolk",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EconomyType {
    Trade,
    ResourceRich,
    Subsistence,
    MagicBased,
    Industrial,
    Pastoral,
}

string_enum!(EconomyType {
    Trade => "trade",
    ResourceRich => "resource_rich",
    Subsistence => "subsistence",
    MagicBased => "magic_based",
    Industrial => "industrial",
    Pastoral => "pastoral",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Demeanor {
    Aggressive,
    Cautious,
    Diplomatic,
    Chaotic,
    Stoic,
    Opportunistic,
}

string_enum!(Demeanor {
    Aggressive => "aggressive",
    Cautious => "cautious",
    Diplomatic => "diplomatic",
    Chaotic => "chaotic",
    Stoic => "stoic",
    Opportunistic => "opportunistic",
});

/// A generated nation. Identity fields never change after world generation;
/// hidden traits are revealed through `Run::revealed_traits`, never edited here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Nation {
    pub id: String,
    pub name: String,
    pub archetype: String,
    pub primary_race: Race,
    pub economy_type: EconomyType,
    pub demeanor: Demeanor,
    pub hidden_traits: Vec<HiddenTrait>,
    /// Reserved for diplomatic state; nothing writes to it yet.
    #[serde(default)]
    pub relations: BTreeMap<String, String>,
    pub power: f64,
    pub population: u64,
    pub prosperity: f64,
    pub unrest: f64,
    /// Choice key of the last event this nation took part in, or `"none"`.
    pub last_interaction: String,
}

impl Nation {
    pub fn has_trait(&self, t: HiddenTrait) -> bool {
        self.hidden_traits.contains(&t)
    }
}
