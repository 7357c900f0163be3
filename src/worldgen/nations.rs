use std::collections::BTreeMap;

use rand::Rng;
use rand::RngCore;

use crate::content::archetypes::{ARCHETYPES, ArchetypeDef};
use crate::content::names::generate_unique_nation_name;
use crate::model::traits::{COMMON_TRAITS, MAX_TRAITS};
use crate::model::{HiddenTrait, Nation};
use crate::sim::stability::round2;

/// Clamp a requested roster size to what the archetype table can supply.
pub fn clamp_nation_count(requested: usize) -> usize {
    let clamped = requested.clamp(2, ARCHETYPES.len());
    if clamped != requested {
        tracing::warn!(requested, clamped, "nation count out of range, clamping");
    }
    clamped
}

/// Sample `count` archetypes without replacement and roll one nation from each.
///
/// Nation ids are `nation_<archetype key>`, unique because archetypes are
/// never sampled twice.
pub fn generate_nations(count: usize, rng: &mut dyn RngCore) -> BTreeMap<String, Nation> {
    let count = clamp_nation_count(count);
    let picks = rand::seq::index::sample(rng, ARCHETYPES.len(), count);

    let mut names: Vec<String> = Vec::with_capacity(count);
    let mut nations = BTreeMap::new();
    for idx in picks.iter() {
        let nation = generate_nation(&ARCHETYPES[idx], &names, rng);
        names.push(nation.name.clone());
        nations.insert(nation.id.clone(), nation);
    }
    nations
}

fn generate_nation(archetype: &ArchetypeDef, taken: &[String], rng: &mut dyn RngCore) -> Nation {
    let name = generate_unique_nation_name(taken, rng);
    let power = roll(archetype.power, rng);
    let prosperity = roll(archetype.prosperity, rng);
    let unrest = roll(archetype.unrest, rng);
    let population = rng.random_range(archetype.population.0..=archetype.population.1);
    let hidden_traits = roll_traits(archetype, rng);

    Nation {
        id: format!("nation_{}", archetype.key),
        name,
        archetype: archetype.key.to_string(),
        primary_race: archetype.race,
        economy_type: archetype.economy,
        demeanor: archetype.demeanor,
        hidden_traits,
        relations: BTreeMap::new(),
        power,
        population,
        prosperity,
        unrest,
        last_interaction: "none".to_string(),
    }
}

fn roll((lo, hi): (f64, f64), rng: &mut dyn RngCore) -> f64 {
    round2(rng.random_range(lo..=hi))
}

/// Mandated traits first, then a random top-up from the optional pool until a
/// target of 1-3 is reached. Never exceeds [`MAX_TRAITS`], never duplicates.
pub fn roll_traits(archetype: &ArchetypeDef, rng: &mut dyn RngCore) -> Vec<HiddenTrait> {
    let target = rng.random_range(1..=MAX_TRAITS);

    let mut traits: Vec<HiddenTrait> = Vec::with_capacity(MAX_TRAITS);
    for t in archetype.mandated_traits {
        if traits.len() < MAX_TRAITS && !traits.contains(t) {
            traits.push(*t);
        }
    }

    let pool: &[HiddenTrait] = if archetype.optional_traits.is_empty() {
        &COMMON_TRAITS
    } else {
        archetype.optional_traits
    };
    let mut candidates: Vec<HiddenTrait> = pool
        .iter()
        .copied()
        .filter(|t| !traits.contains(t))
        .collect();

    while traits.len() < target && !candidates.is_empty() {
        let idx = rng.random_range(0..candidates.len());
        traits.push(candidates.swap_remove(idx));
    }
    traits
}
