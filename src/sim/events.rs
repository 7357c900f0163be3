use rand::RngCore;

use crate::content::templates::select_template;
use crate::error::EngineError;
use crate::model::{Choice, ChoiceKey, Event, Run};

/// Draw the next event for `run` and append it as the unresolved tail.
///
/// Fails without touching the log if the run has ended or the tail event is
/// still waiting for a decision.
pub fn generate_event(run: &mut Run, rng: &mut dyn RngCore) -> Result<Event, EngineError> {
    if !run.is_active() {
        return Err(EngineError::RunEnded(run.run_id.clone()));
    }
    if let Some(pending) = run.pending_event() {
        return Err(EngineError::EventPending(pending.id.clone()));
    }

    let ids: Vec<&String> = run.nations.keys().collect();
    let picks = rand::seq::index::sample(rng, ids.len(), 2);
    let (a, b) = (ids[picks.index(0)], ids[picks.index(1)]);
    let template = select_template(rng);

    let summary = template.render_summary(&run.nations[a].name, &run.nations[b].name);
    let choices = ChoiceKey::ALL
        .iter()
        .map(|&key| {
            let outcome = template.outcome(key);
            Choice {
                key,
                label: outcome.label.to_string(),
                effects: outcome.effects.to_vec(),
            }
        })
        .collect();

    let event = Event {
        id: format!("event_{:03}", run.turn),
        kind: template.kind,
        turn: run.turn,
        nations: [a.clone(), b.clone()],
        summary,
        template_key: template.key.to_string(),
        tags: template.tags.iter().map(|t| t.to_string()).collect(),
        choices,
        resolved: false,
        resolution: None,
    };

    tracing::debug!(
        run_id = %run.run_id,
        event_id = %event.id,
        template = template.key,
        "event generated"
    );
    run.events_log.push(event.clone());
    Ok(event)
}
