use crate::model::{Demeanor, EconomyType, HiddenTrait, Race};

/// Template a nation is rolled from. Ranges are inclusive.
pub struct ArchetypeDef {
    pub key: &'static str,
    pub race: Race,
    pub economy: EconomyType,
    pub demeanor: Demeanor,
    pub power: (f64, f64),
    pub prosperity: (f64, f64),
    pub unrest: (f64, f64),
    pub population: (u64, u64),
    /// Traits every nation of this archetype carries.
    pub mandated_traits: &'static [HiddenTrait],
    /// Pool used to top the trait list up. Empty means the common pool.
    pub optional_traits: &'static [HiddenTrait],
}

pub const ARCHETYPES: &[ArchetypeDef] = &[
    ArchetypeDef {
        key: "sylvan_court",
        race: Race::Elf,
        economy: EconomyType::Trade,
        demeanor: Demeanor::Diplomatic,
        power: (0.4, 0.7),
        prosperity: (0.6, 0.9),
        unrest: (0.0, 0.15),
        population: (2_000_000, 14_000_000),
        mandated_traits: &[HiddenTrait::StarTouched],
        optional_traits: &[
            HiddenTrait::Pacifist,
            HiddenTrait::Xenophile,
            HiddenTrait::Mystic,
            HiddenTrait::Isolationist,
        ],
    },
    ArchetypeDef {
        key: "iron_horde",
        race: Race::Orc,
        economy: EconomyType::Industrial,
        demeanor: Demeanor::Aggressive,
        power: (0.6, 0.9),
        prosperity: (0.3, 0.6),
        unrest: (0.15, 0.35),
        population: (8_000_000, 30_000_000),
        mandated_traits: &[HiddenTrait::IronLegions],
        optional_traits: &[
            HiddenTrait::BloodFeud,
            HiddenTrait::MartialCulture,
            HiddenTrait::Expansionist,
        ],
    },
    ArchetypeDef {
        key: "celestial_concord",
        race: Race::Human,
        economy: EconomyType::MagicBased,
        demeanor: Demeanor::Cautious,
        power: (0.5, 0.7),
        prosperity: (0.6, 0.85),
        unrest: (0.05, 0.2),
        population: (10_000_000, 40_000_000),
        mandated_traits: &[HiddenTrait::OracleCouncil],
        optional_traits: &[
            HiddenTrait::Zealot,
            HiddenTrait::Mystic,
            HiddenTrait::Plutocracy,
        ],
    },
    ArchetypeDef {
        key: "storm_swarm",
        race: Race::Lizardfolk,
        economy: EconomyType::ResourceRich,
        demeanor: Demeanor::Chaotic,
        power: (0.5, 0.8),
        prosperity: (0.35, 0.6),
        unrest: (0.2, 0.35),
        population: (5_000_000, 20_000_000),
        mandated_traits: &[HiddenTrait::Stormborn],
        optional_traits: &[
            HiddenTrait::BloodFeud,
            HiddenTrait::Expansionist,
            HiddenTrait::Isolationist,
        ],
    },
    ArchetypeDef {
        key: "lantern_monastery",
        race: Race::Fae,
        economy: EconomyType::Pastoral,
        demeanor: Demeanor::Stoic,
        power: (0.3, 0.5),
        prosperity: (0.55, 0.75),
        unrest: (0.0, 0.1),
        population: (10_000, 9_000_000),
        mandated_traits: &[HiddenTrait::LuminousSages, HiddenTrait::Pacifist],
        optional_traits: &[HiddenTrait::Mystic, HiddenTrait::Isolationist],
    },
    ArchetypeDef {
        key: "fjord_clans",
        race: Race::Dwarf,
        economy: EconomyType::Industrial,
        demeanor: Demeanor::Opportunistic,
        power: (0.55, 0.8),
        prosperity: (0.45, 0.7),
        unrest: (0.1, 0.25),
        population: (3_000_000, 15_000_000),
        mandated_traits: &[HiddenTrait::RuneForges],
        optional_traits: &[
            HiddenTrait::Mercantile,
            HiddenTrait::MartialCulture,
            HiddenTrait::Plutocracy,
        ],
    },
    ArchetypeDef {
        key: "ashen_dominion",
        race: Race::Undead,
        economy: EconomyType::Subsistence,
        demeanor: Demeanor::Aggressive,
        power: (0.6, 0.85),
        prosperity: (0.2, 0.45),
        unrest: (0.2, 0.4),
        population: (1_000_000, 12_000_000),
        mandated_traits: &[HiddenTrait::HollowCrown],
        optional_traits: &[
            HiddenTrait::Zealot,
            HiddenTrait::Expansionist,
            HiddenTrait::BloodFeud,
        ],
    },
    ArchetypeDef {
        key: "brass_caliphate",
        race: Race::Djinn,
        economy: EconomyType::Trade,
        demeanor: Demeanor::Opportunistic,
        power: (0.45, 0.7),
        prosperity: (0.65, 0.9),
        unrest: (0.1, 0.25),
        population: (500_000, 6_000_000),
        mandated_traits: &[HiddenTrait::Plutocracy],
        optional_traits: &[
            HiddenTrait::Mercantile,
            HiddenTrait::Xenophile,
            HiddenTrait::Mystic,
        ],
    },
    ArchetypeDef {
        key: "granite_collective",
        race: Race::Golem,
        economy: EconomyType::Industrial,
        demeanor: Demeanor::Stoic,
        power: (0.5, 0.75),
        prosperity: (0.4, 0.6),
        unrest: (0.0, 0.1),
        population: (10_000, 2_000_000),
        mandated_traits: &[],
        optional_traits: &[],
    },
    ArchetypeDef {
        key: "tide_republic",
        race: Race::Merfolk,
        economy: EconomyType::Trade,
        demeanor: Demeanor::Diplomatic,
        power: (0.35, 0.6),
        prosperity: (0.5, 0.8),
        unrest: (0.05, 0.2),
        population: (4_000_000, 18_000_000),
        mandated_traits: &[HiddenTrait::TideBound],
        optional_traits: &[
            HiddenTrait::Mercantile,
            HiddenTrait::Xenophile,
            HiddenTrait::Pacifist,
        ],
    },
];

pub fn find_archetype(key: &str) -> Option<&'static ArchetypeDef> {
    ARCHETYPES.iter().find(|a| a.key == key)
}
