use rand::Rng;
use rand::RngCore;

use crate::model::{ChoiceKey, Effect, EventKind};

/// One of the three ways an event can be leaned on.
pub struct OutcomeDef {
    pub label: &'static str,
    pub effects: &'static [Effect],
}

/// Event template. `summary` uses `{a}` and `{b}` for the two participant names.
pub struct EventTemplate {
    pub key: &'static str,
    pub kind: EventKind,
    /// Relative draw weight.
    pub weight: u32,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub cooperative: OutcomeDef,
    pub hostile: OutcomeDef,
    pub mercantile: OutcomeDef,
    pub punchline: &'static str,
}

impl EventTemplate {
    pub fn outcome(&self, key: ChoiceKey) -> &OutcomeDef {
        match key {
            ChoiceKey::Cooperative => &self.cooperative,
            ChoiceKey::Hostile => &self.hostile,
            ChoiceKey::Mercantile => &self.mercantile,
        }
    }

    pub fn render_summary(&self, a: &str, b: &str) -> String {
        self.summary.replace("{a}", a).replace("{b}", b)
    }
}

/// Used when an event's template key no longer resolves.
pub const GENERIC_PUNCHLINE: &str = "The heavens shrug, and the world spins on.";

pub const EVENT_TEMPLATES: &[EventTemplate] = &[
    EventTemplate {
        key: "border_dispute",
        kind: EventKind::Interaction,
        weight: 6,
        summary: "{a} and {b} both claim the same river valley, and neither will blink.",
        tags: &["border", "territory"],
        cooperative: OutcomeDef {
            label: "Broker a shared border",
            effects: &[Effect::Stability { delta: 0.1 }, Effect::Score { delta: 100 }],
        },
        hostile: OutcomeDef {
            label: "Let them fight it out",
            effects: &[Effect::Stability { delta: -0.2 }, Effect::Score { delta: 50 }],
        },
        mercantile: OutcomeDef {
            label: "Lease the valley to both",
            effects: &[Effect::Stability { delta: 0.05 }, Effect::Score { delta: 70 }],
        },
        punchline: "The river, for its part, keeps flowing wherever it likes.",
    },
    EventTemplate {
        key: "royal_wedding",
        kind: EventKind::Interaction,
        weight: 4,
        summary: "A royal heir of {a} has fallen for an envoy of {b}.",
        tags: &["diplomacy", "romance"],
        cooperative: OutcomeDef {
            label: "Bless the union",
            effects: &[Effect::Stability { delta: 0.12 }, Effect::Score { delta: 120 }],
        },
        hostile: OutcomeDef {
            label: "Spoil the banquet",
            effects: &[Effect::Stability { delta: -0.15 }, Effect::Score { delta: 80 }],
        },
        mercantile: OutcomeDef {
            label: "Negotiate a dowry",
            effects: &[Effect::Stability { delta: 0.04 }, Effect::Score { delta: 90 }],
        },
        punchline: "Somewhere a bard is already rhyming 'dowry' with 'cowardly'.",
    },
    EventTemplate {
        key: "trade_caravan",
        kind: EventKind::Interaction,
        weight: 6,
        summary: "A caravan from {a} arrives at the gates of {b}, laden and nervous.",
        tags: &["trade"],
        cooperative: OutcomeDef {
            label: "Escort it safely",
            effects: &[Effect::Stability { delta: 0.08 }, Effect::Score { delta: 80 }],
        },
        hostile: OutcomeDef {
            label: "Whisper of bandits",
            effects: &[Effect::Stability { delta: -0.12 }, Effect::Score { delta: 60 }],
        },
        mercantile: OutcomeDef {
            label: "Open a toll road",
            effects: &[Effect::Stability { delta: 0.06 }, Effect::Score { delta: 110 }],
        },
        punchline: "The camels remain unimpressed by divine intervention.",
    },
    EventTemplate {
        key: "plague_outbreak",
        kind: EventKind::Disaster,
        weight: 3,
        summary: "A grey fever spreads from {a} toward the crowded markets of {b}.",
        tags: &["disaster", "plague"],
        cooperative: OutcomeDef {
            label: "Share the healers",
            effects: &[Effect::Stability { delta: 0.1 }, Effect::Score { delta: 90 }],
        },
        hostile: OutcomeDef {
            label: "Seal the borders at spearpoint",
            effects: &[Effect::Stability { delta: -0.18 }, Effect::Score { delta: 40 }],
        },
        mercantile: OutcomeDef {
            label: "Sell remedies at a premium",
            effects: &[Effect::Stability { delta: -0.02 }, Effect::Score { delta: 130 }],
        },
        punchline: "The fever did not read the treaty, but it respects soap.",
    },
    EventTemplate {
        key: "comet_omen",
        kind: EventKind::Prophecy,
        weight: 3,
        summary: "A green comet hangs over {a}; the priests of {b} call it a curse.",
        tags: &["omen", "faith"],
        cooperative: OutcomeDef {
            label: "Declare it a shared blessing",
            effects: &[Effect::Stability { delta: 0.09 }, Effect::Score { delta: 100 }],
        },
        hostile: OutcomeDef {
            label: "Confirm the curse",
            effects: &[Effect::Stability { delta: -0.2 }, Effect::Score { delta: 70 }],
        },
        mercantile: OutcomeDef {
            label: "Sell comet-viewing tickets",
            effects: &[Effect::Stability { delta: 0.03 }, Effect::Score { delta: 95 }],
        },
        punchline: "The comet was, in fact, a very confused dragon.",
    },
    EventTemplate {
        key: "arcane_engine",
        kind: EventKind::TechMagic,
        weight: 3,
        summary: "Artificers of {a} unveil a thundering arcane engine; {b} wants the blueprints.",
        tags: &["technology", "magic"],
        cooperative: OutcomeDef {
            label: "Found a joint academy",
            effects: &[Effect::Stability { delta: 0.11 }, Effect::Score { delta: 110 }],
        },
        hostile: OutcomeDef {
            label: "Encourage industrial espionage",
            effects: &[Effect::Stability { delta: -0.16 }, Effect::Score { delta: 90 }],
        },
        mercantile: OutcomeDef {
            label: "License the patent",
            effects: &[Effect::Stability { delta: 0.05 }, Effect::Score { delta: 120 }],
        },
        punchline: "It mostly makes toast, but very impressively.",
    },
    EventTemplate {
        key: "drunken_duel",
        kind: EventKind::Random,
        weight: 4,
        summary: "An ambassador of {a} challenged a poet of {b} to a duel after the third toast.",
        tags: &["comedy", "honor"],
        cooperative: OutcomeDef {
            label: "Turn it into a poetry contest",
            effects: &[Effect::Stability { delta: 0.07 }, Effect::Score { delta: 90 }],
        },
        hostile: OutcomeDef {
            label: "Hand them both swords",
            effects: &[Effect::Stability { delta: -0.1 }, Effect::Score { delta: 75 }],
        },
        mercantile: OutcomeDef {
            label: "Sell seats at the duel",
            effects: &[Effect::Stability { delta: 0.02 }, Effect::Score { delta: 100 }],
        },
        punchline: "The poet won. Nobody is sure how.",
    },
    EventTemplate {
        key: "sea_monster",
        kind: EventKind::Disaster,
        weight: 2,
        summary: "A leviathan surfaces between the harbors of {a} and {b}.",
        tags: &["disaster", "monster"],
        cooperative: OutcomeDef {
            label: "Unite the fleets",
            effects: &[Effect::Stability { delta: 0.14 }, Effect::Score { delta: 140 }],
        },
        hostile: OutcomeDef {
            label: "Steer it toward the rival",
            effects: &[Effect::Stability { delta: -0.22 }, Effect::Score { delta: 110 }],
        },
        mercantile: OutcomeDef {
            label: "Charge for monster tours",
            effects: &[Effect::Stability { delta: 0.01 }, Effect::Score { delta: 150 }],
        },
        punchline: "The leviathan just wanted directions.",
    },
    EventTemplate {
        key: "eclipse_of_ages",
        kind: EventKind::Prophecy,
        weight: 1,
        summary: "The sun goes dark for a full day; {a} and {b} each claim to have caused it.",
        tags: &["rare", "omen", "cosmic"],
        cooperative: OutcomeDef {
            label: "Reveal it was you all along",
            effects: &[Effect::Stability { delta: 0.15 }, Effect::Score { delta: 200 }],
        },
        hostile: OutcomeDef {
            label: "Let them war over the credit",
            effects: &[Effect::Stability { delta: -0.25 }, Effect::Score { delta: 150 }],
        },
        mercantile: OutcomeDef {
            label: "Auction the naming rights",
            effects: &[Effect::Stability { delta: 0.05 }, Effect::Score { delta: 220 }],
        },
        punchline: "You were napping. You did not cause it.",
    },
    EventTemplate {
        key: "lost_relic",
        kind: EventKind::Random,
        weight: 1,
        summary: "Miners of {a} unearth a relic bearing the royal seal of {b}.",
        tags: &["rare", "relic"],
        cooperative: OutcomeDef {
            label: "Return it with ceremony",
            effects: &[Effect::Stability { delta: 0.13 }, Effect::Score { delta: 180 }],
        },
        hostile: OutcomeDef {
            label: "Declare it stolen",
            effects: &[Effect::Stability { delta: -0.2 }, Effect::Score { delta: 120 }],
        },
        mercantile: OutcomeDef {
            label: "Rent it out to museums",
            effects: &[Effect::Stability { delta: 0.04 }, Effect::Score { delta: 190 }],
        },
        punchline: "The relic is a very old spoon. It is still priceless.",
    },
];

pub fn find_template(key: &str) -> Option<&'static EventTemplate> {
    EVENT_TEMPLATES.iter().find(|t| t.key == key)
}

/// Pick a template using weighted random selection.
pub fn select_template(rng: &mut dyn RngCore) -> &'static EventTemplate {
    let total: u32 = EVENT_TEMPLATES.iter().map(|t| t.weight).sum();
    let roll = rng.random_range(0..total);
    let mut cumulative = 0;
    for template in EVENT_TEMPLATES {
        cumulative += template.weight;
        if roll < cumulative {
            return template;
        }
    }
    &EVENT_TEMPLATES[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NetEffect;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn keys_are_unique() {
        let keys: std::collections::HashSet<_> = EVENT_TEMPLATES.iter().map(|t| t.key).collect();
        assert_eq!(keys.len(), EVENT_TEMPLATES.len());
    }

    #[test]
    fn summaries_have_both_placeholders() {
        for t in EVENT_TEMPLATES {
            assert!(t.summary.contains("{a}"), "{} missing {{a}}", t.key);
            assert!(t.summary.contains("{b}"), "{} missing {{b}}", t.key);
        }
    }

    #[test]
    fn weights_positive() {
        for t in EVENT_TEMPLATES {
            assert!(t.weight > 0, "template {} has zero weight", t.key);
        }
    }

    #[test]
    fn cooperative_is_stabilizing_and_hostile_is_not() {
        for t in EVENT_TEMPLATES {
            assert!(NetEffect::sum(t.cooperative.effects).stability > 0.0, "{}", t.key);
            assert!(NetEffect::sum(t.hostile.effects).stability < 0.0, "{}", t.key);
        }
    }

    #[test]
    fn render_substitutes_names() {
        let t = find_template("border_dispute").unwrap();
        let s = t.render_summary("Auria", "Brakka");
        assert!(s.starts_with("Auria and Brakka"));
        assert!(!s.contains('{'));
    }

    #[test]
    fn outcome_lookup_by_key() {
        let t = find_template("trade_caravan").unwrap();
        assert_eq!(t.outcome(ChoiceKey::Mercantile).label, "Open a toll road");
        assert_eq!(t.outcome(ChoiceKey::Hostile).label, "Whisper of bandits");
    }

    #[test]
    fn select_template_returns_catalog_entry() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let t = select_template(&mut rng);
            assert!(find_template(t.key).is_some());
        }
    }

    #[test]
    fn common_templates_outdraw_rare_ones() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut rare = 0;
        for _ in 0..2000 {
            if select_template(&mut rng).tags.contains(&"rare") {
                rare += 1;
            }
        }
        // Rare weight is 2 of 33.
        assert!(rare < 400, "rare drawn {rare} times");
        assert!(rare > 0);
    }
}
