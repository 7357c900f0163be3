use serde::{Deserialize, Serialize};

/// A nation attribute hidden from the player until revealed during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum HiddenTrait {
    BloodFeud,
    Xenophile,
    Zealot,
    Isolationist,
    Mercantile,
    Mystic,
    MartialCulture,
    Expansionist,
    Pacifist,
    Plutocracy,
    StarTouched,
    IronLegions,
    OracleCouncil,
    Stormborn,
    LuminousSages,
    RuneForges,
    TideBound,
    HollowCrown,
}

string_enum!(HiddenTrait {
    BloodFeud => "blood_feud",
    Xenophile => "xenophile",
    Zealot => "zealot",
    Isolationist => "isolationist",
    Mercantile => "mercantile",
    Mystic => "mystic",
    MartialCulture => "martial_culture",
    Expansionist => "expansionist",
    Pacifist => "pacifist",
    Plutocracy => "plutocracy",
    StarTouched => "star_touched",
    IronLegions => "iron_legions",
    OracleCouncil => "oracle_council",
    Stormborn => "stormborn",
    LuminousSages => "luminous_sages",
    RuneForges => "rune_forges",
    TideBound => "tide_bound",
    HollowCrown => "hollow_crown",
});

/// Traits any nation may roll on top of its archetype's mandated ones.
pub const COMMON_TRAITS: [HiddenTrait; 10] = [
    HiddenTrait::BloodFeud,
    HiddenTrait::Xenophile,
    HiddenTrait::Zealot,
    HiddenTrait::Isolationist,
    HiddenTrait::Mercantile,
    HiddenTrait::Mystic,
    HiddenTrait::MartialCulture,
    HiddenTrait::Expansionist,
    HiddenTrait::Pacifist,
    HiddenTrait::Plutocracy,
];

/// Hard cap on hidden traits per nation.
pub const MAX_TRAITS: usize = 3;

impl HiddenTrait {
    /// Human-readable form used in log lines ("blood feud").
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_string_round_trip() {
        for t in HiddenTrait::ALL {
            let s: String = (*t).into();
            let back = HiddenTrait::try_from(s).unwrap();
            assert_eq!(&back, t);
        }
    }

    #[test]
    fn unknown_trait_fails() {
        assert!(HiddenTrait::try_from("berserker".to_string()).is_err());
        assert!(HiddenTrait::try_from(String::new()).is_err());
    }

    #[test]
    fn label_replaces_underscores() {
        assert_eq!(HiddenTrait::MartialCulture.label(), "martial culture");
        assert_eq!(HiddenTrait::Zealot.label(), "zealot");
    }

    #[test]
    fn common_traits_are_distinct() {
        let unique: std::collections::HashSet<_> = COMMON_TRAITS.iter().collect();
        assert_eq!(unique.len(), COMMON_TRAITS.len());
    }
}
