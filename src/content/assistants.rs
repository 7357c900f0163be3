use crate::model::{
    Assistant, AssistantClass, AssistantEffect, AssistantEffectKind, Rarity, Run,
};

pub const PROPHET_ID: &str = "assistant_prophet";
pub const DIPLOMAT_ID: &str = "assistant_diplomat";

/// Gameplay condition that unlocks an assistant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnlockRule {
    AtStart,
    PeaceStreak(u32),
    ChaosStreak(u32),
    StabilityAtLeast(f64),
    ScoreAtLeast(i64),
}

impl UnlockRule {
    pub fn is_met(&self, run: &Run) -> bool {
        match *self {
            UnlockRule::AtStart => true,
            UnlockRule::PeaceStreak(n) => run.peace_streak >= n,
            UnlockRule::ChaosStreak(n) => run.chaos_streak >= n,
            UnlockRule::StabilityAtLeast(s) => run.stability >= s,
            UnlockRule::ScoreAtLeast(s) => run.score >= s,
        }
    }
}

pub struct AssistantDef {
    pub id: &'static str,
    pub name: &'static str,
    pub class: AssistantClass,
    pub rarity: Rarity,
    pub effect: AssistantEffectKind,
    pub magnitude: f64,
    pub cooldown: u32,
    pub flavor_text: &'static str,
    pub unlock: UnlockRule,
}

impl AssistantDef {
    pub fn instantiate(&self) -> Assistant {
        Assistant {
            id: self.id.to_string(),
            name: self.name.to_string(),
            class: self.class,
            rarity: self.rarity,
            unlocked: self.unlock == UnlockRule::AtStart,
            level: 1,
            effect: AssistantEffect {
                kind: self.effect,
                magnitude: self.magnitude,
            },
            cooldown: self.cooldown,
            cooldown_remaining: 0,
            flavor_text: self.flavor_text.to_string(),
        }
    }
}

pub const ASSISTANTS: &[AssistantDef] = &[
    AssistantDef {
        id: PROPHET_ID,
        name: "The Prophet",
        class: AssistantClass::Prophet,
        rarity: Rarity::Rare,
        effect: AssistantEffectKind::InstabilityPrediction,
        magnitude: 0.2,
        cooldown: 3,
        flavor_text: "The Prophet whispers of coming storms.",
        unlock: UnlockRule::AtStart,
    },
    AssistantDef {
        id: DIPLOMAT_ID,
        name: "The Silver-Tongued Diplomat",
        class: AssistantClass::Diplomat,
        rarity: Rarity::Rare,
        effect: AssistantEffectKind::RelationInsight,
        magnitude: 0.15,
        cooldown: 2,
        flavor_text: "No treaty is final until the wine runs out.",
        unlock: UnlockRule::PeaceStreak(5),
    },
    AssistantDef {
        id: "assistant_spy_network",
        name: "The Whisper Web",
        class: AssistantClass::SpyNetwork,
        rarity: Rarity::Epic,
        effect: AssistantEffectKind::TraitIntel,
        magnitude: 0.3,
        cooldown: 2,
        flavor_text: "Every tavern has ears, and every ear has a price.",
        unlock: UnlockRule::ChaosStreak(3),
    },
    AssistantDef {
        id: "assistant_peacekeeper",
        name: "The Iron Warden",
        class: AssistantClass::Peacekeeper,
        rarity: Rarity::Epic,
        effect: AssistantEffectKind::UnrestDampening,
        magnitude: 0.1,
        cooldown: 4,
        flavor_text: "Keeps the peace by glaring at it.",
        unlock: UnlockRule::StabilityAtLeast(0.9),
    },
    AssistantDef {
        id: "assistant_court_mage",
        name: "The Court Mage",
        class: AssistantClass::CourtMage,
        rarity: Rarity::Legendary,
        effect: AssistantEffectKind::TurnForesight,
        magnitude: 0.25,
        cooldown: 5,
        flavor_text: "Reads the future in teacups. Mostly sees tea.",
        unlock: UnlockRule::ScoreAtLeast(1500),
    },
];
