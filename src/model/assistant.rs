use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum AssistantClass {
    Prophet,
    Diplomat,
    SpyNetwork,
    Peacekeeper,
    CourtMage,
}

string_enum!(AssistantClass {
    Prophet => "prophet",
    Diplomat => "diplomat",
    SpyNetwork => "spy_network",
    Peacekeeper => "peacekeeper",
    CourtMage => "court_mage",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

string_enum!(Rarity {
    Common => "common",
    Rare => "rare",
    Epic => "epic",
    Legendary => "legendary",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum AssistantEffectKind {
    InstabilityPrediction,
    RelationInsight,
    TraitIntel,
    UnrestDampening,
    TurnForesight,
}

string_enum!(AssistantEffectKind {
    InstabilityPrediction => "instability_prediction",
    RelationInsight => "relation_insight",
    TraitIntel => "trait_intel",
    UnrestDampening => "unrest_dampening",
    TurnForesight => "turn_foresight",
});

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AssistantEffect {
    #[serde(rename = "type")]
    pub kind: AssistantEffectKind,
    pub magnitude: f64,
}

/// An unlockable helper. `unlocked` only ever goes false -> true within a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assistant {
    pub id: String,
    pub name: String,
    #[serde(rename = "clazz")]
    pub class: AssistantClass,
    pub rarity: Rarity,
    pub unlocked: bool,
    pub level: u32,
    pub effect: AssistantEffect,
    pub cooldown: u32,
    pub cooldown_remaining: u32,
    pub flavor_text: String,
}

impl Assistant {
    /// Flip the unlock flag. Returns true only on the locked -> unlocked edge.
    pub fn unlock(&mut self) -> bool {
        if self.unlocked {
            return false;
        }
        self.unlocked = true;
        self.cooldown_remaining = 0;
        true
    }

    /// Unlocked and off cooldown: the next tick acts.
    pub fn is_ready(&self) -> bool {
        self.unlocked && self.cooldown_remaining == 0
    }

    /// Advance one turn of cooldown. Returns true when the assistant is ready to act,
    /// in which case the cooldown restarts from the full length.
    pub fn tick_cooldown(&mut self) -> bool {
        if !self.unlocked {
            return false;
        }
        if !self.is_ready() {
            self.cooldown_remaining -= 1;
            return false;
        }
        self.cooldown_remaining = self.cooldown;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spy(unlocked: bool) -> Assistant {
        Assistant {
            id: "assistant_spy_network".to_string(),
            name: "The Whisper Web".to_string(),
            class: AssistantClass::SpyNetwork,
            rarity: Rarity::Epic,
            unlocked,
            level: 1,
            effect: AssistantEffect {
                kind: AssistantEffectKind::TraitIntel,
                magnitude: 0.3,
            },
            cooldown: 2,
            cooldown_remaining: 0,
            flavor_text: "Every tavern has ears.".to_string(),
        }
    }

    #[test]
    fn serializes_expected_shape() {
        let json = serde_json::to_value(spy(true)).unwrap();
        assert_eq!(json["clazz"], "spy_network");
        assert_eq!(json["rarity"], "epic");
        assert_eq!(json["effect"]["type"], "trait_intel");
        assert_eq!(json["cooldown_remaining"], 0);
    }

    #[test]
    fn unlock_is_one_way() {
        let mut a = spy(false);
        assert!(a.unlock());
        assert!(a.unlocked);
        assert!(!a.unlock(), "second unlock is not a new edge");
        assert!(a.unlocked);
    }

    #[test]
    fn locked_assistant_never_ticks() {
        let mut a = spy(false);
        assert!(!a.tick_cooldown());
        assert_eq!(a.cooldown_remaining, 0);
    }

    #[test]
    fn cooldown_cycles_within_bounds() {
        let mut a = spy(true);
        let mut fired = Vec::new();
        for _ in 0..7 {
            let ready = a.is_ready();
            let acted = a.tick_cooldown();
            assert_eq!(ready, acted);
            fired.push(acted);
            assert!(a.cooldown_remaining <= a.cooldown);
        }
        assert_eq!(fired, vec![true, false, false, true, false, false, true]);
    }
}
