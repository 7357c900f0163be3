use crate::content::ASSISTANTS;
use crate::model::{Assistant, AssistantClass, Run};

/// Unlock every locked assistant whose condition the run now meets.
/// Returns one log line per unlock, in catalog order.
pub fn unlock_assistants(run: &mut Run) -> Vec<String> {
    let mut lines = Vec::new();
    for def in ASSISTANTS {
        if run.assistant_unlocked(def.id) || !def.unlock.is_met(run) {
            continue;
        }
        if let Some(assistant) = run.assistants.get_mut(def.id)
            && assistant.unlock()
        {
            tracing::info!(run_id = %run.run_id, assistant = def.id, "assistant unlocked");
            lines.push(format!("Unlocked assistant: {}!", assistant.name));
        }
    }
    lines
}

/// Advance every unlocked assistant's cooldown. Those coming off cooldown
/// write a fresh note into `assistant_notes`.
pub fn tick_assistants(run: &mut Run, participants: &[String]) {
    let ready: Vec<String> = run
        .assistants
        .iter_mut()
        .filter_map(|(id, a)| a.tick_cooldown().then(|| id.clone()))
        .collect();

    for id in ready {
        let Some(assistant) = run.assistants.get(&id) else {
            continue;
        };
        let note = assistant_note(run, assistant, participants);
        run.assistant_notes.insert(id, note);
    }
}

fn assistant_note(run: &Run, assistant: &Assistant, participants: &[String]) -> String {
    let magnitude = assistant.effect.magnitude;
    match assistant.class {
        AssistantClass::Prophet => {
            let risk = ((1.0 - run.stability) * magnitude * 100.0).round();
            format!(
                "The Prophet sees a {risk}% chance of storms. The world feels {}.",
                run.stability_state
            )
        }
        AssistantClass::Diplomat => {
            let names: Vec<&str> = participants
                .iter()
                .filter_map(|id| run.nations.get(id))
                .map(|n| n.name.as_str())
                .collect();
            format!(
                "The Diplomat reports {} are still on speaking terms.",
                names.join(" and ")
            )
        }
        AssistantClass::SpyNetwork => {
            let hidden: usize = run
                .nations
                .values()
                .map(|n| n.hidden_traits.len() - run.revealed(&n.id).len())
                .sum();
            format!("The spies count {hidden} secrets still buried across the realms.")
        }
        AssistantClass::Peacekeeper => {
            let mean = run.nations.values().map(|n| n.unrest).sum::<f64>()
                / run.nations.len().max(1) as f64;
            let dampened = (mean * (1.0 - magnitude)).max(0.0);
            format!("The Warden holds unrest near {dampened:.2}.")
        }
        AssistantClass::CourtMage => {
            let left = (run.turn_limit + 1).saturating_sub(run.turn);
            format!("The Court Mage counts {left} turns before the sands run out.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{DIPLOMAT_ID, PROPHET_ID};
    use crate::worldgen::{RunConfig, generate_run};

    fn fresh() -> Run {
        generate_run("run_000001".to_string(), &RunConfig::default(), 4).0
    }

    #[test]
    fn unlocks_on_condition_once() {
        let mut run = fresh();
        assert!(unlock_assistants(&mut run).is_empty());

        run.peace_streak = 5;
        let lines = unlock_assistants(&mut run);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Diplomat"));
        assert!(run.assistant_unlocked(DIPLOMAT_ID));

        run.peace_streak = 0;
        assert!(unlock_assistants(&mut run).is_empty());
        assert!(run.assistant_unlocked(DIPLOMAT_ID), "unlock is permanent");
    }

    #[test]
    fn high_score_and_stability_unlock_together() {
        let mut run = fresh();
        run.stability = 0.95;
        run.score = 2000;
        let lines = unlock_assistants(&mut run);
        assert_eq!(lines.len(), 2);
        assert!(run.assistant_unlocked("assistant_peacekeeper"));
        assert!(run.assistant_unlocked("assistant_court_mage"));
    }

    #[test]
    fn prophet_notes_on_cooldown_cycle() {
        let mut run = fresh();
        let ids: Vec<String> = run.nations.keys().take(2).cloned().collect();

        tick_assistants(&mut run, &ids);
        assert!(run.assistant_notes.contains_key(PROPHET_ID));
        assert_eq!(run.assistant_notes.len(), 1, "locked assistants stay silent");
        let cooldown = run.assistants[PROPHET_ID].cooldown;
        assert_eq!(run.assistants[PROPHET_ID].cooldown_remaining, cooldown);

        for _ in 0..cooldown {
            run.assistant_notes.clear();
            tick_assistants(&mut run, &ids);
            assert!(run.assistant_notes.is_empty());
        }
        tick_assistants(&mut run, &ids);
        assert!(run.assistant_notes.contains_key(PROPHET_ID));
    }

    #[test]
    fn every_class_writes_a_note() {
        let mut run = fresh();
        for a in run.assistants.values_mut() {
            a.unlock();
        }
        let ids: Vec<String> = run.nations.keys().take(2).cloned().collect();
        tick_assistants(&mut run, &ids);
        assert_eq!(run.assistant_notes.len(), ASSISTANTS.len());
        for a in run.assistants.values() {
            assert!(a.cooldown_remaining <= a.cooldown);
        }
    }
}
