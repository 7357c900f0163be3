use rand::Rng;
use rand::RngCore;

use crate::model::{HiddenTrait, Run};

/// Reveal one not-yet-known trait of the given nations, chosen uniformly.
/// Returns the log sentence, or `None` when every trait is already known.
pub fn reveal_random_trait(
    run: &mut Run,
    nation_ids: &[String],
    rng: &mut dyn RngCore,
) -> Option<String> {
    let candidates: Vec<(&String, HiddenTrait)> = nation_ids
        .iter()
        .filter_map(|id| run.nations.get(id).map(|n| (id, n)))
        .flat_map(|(id, nation)| {
            let known = run.revealed(id);
            nation
                .hidden_traits
                .iter()
                .filter(move |t| !known.contains(t))
                .map(move |&t| (id, t))
        })
        .collect();
    if candidates.is_empty() {
        return None;
    }

    let (id, t) = candidates[rng.random_range(0..candidates.len())];
    let id = id.clone();
    let name = run.nations[&id].name.clone();
    run.reveal_trait(&id, t);
    Some(format!("Revealed: {name} is secretly {}.", t.label()))
}
