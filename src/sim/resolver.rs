use rand::RngCore;

use crate::content::quips::stability_quip;
use crate::content::{GENERIC_PUNCHLINE, PROPHET_ID, find_template};
use crate::error::EngineError;
use crate::model::{ChoiceKey, NetEffect, Resolution, Run, RunStatus, StabilityState};

use super::assistants::{tick_assistants, unlock_assistants};
use super::reveal::reveal_random_trait;
use super::stability::apply_delta;

/// Consecutive same-kind steps that trigger a streak bonus.
pub const STREAK_INTERVAL: u32 = 3;
pub const PEACE_STREAK_BONUS: i64 = 150;
pub const CHAOS_STREAK_PENALTY: i64 = 100;

/// Apply the player's decision on the pending event.
///
/// Validation happens before any mutation: a rejected decision leaves the run
/// exactly as it was.
pub fn resolve_decision(
    run: &mut Run,
    event_id: &str,
    choice: &str,
    rng: &mut dyn RngCore,
) -> Result<(), EngineError> {
    let event = run.events_log.last().ok_or(EngineError::NoActiveEvent)?;
    if event.id != event_id {
        return Err(EngineError::EventIdMismatch {
            expected: event.id.clone(),
            got: event_id.to_string(),
        });
    }
    if event.resolved || !run.is_active() {
        return Err(EngineError::EventAlreadyResolved(event.id.clone()));
    }
    let key = ChoiceKey::parse(choice)
        .filter(|&k| event.choice(k).is_some())
        .ok_or_else(|| EngineError::InvalidChoice(choice.to_string()))?;

    let effects = event.choice(key).map(|c| c.effects.clone()).unwrap_or_default();
    let participants = event.nations.clone();
    let template_key = event.template_key.clone();

    let net = NetEffect::sum(&effects);
    let before = run.stability;
    let prev_state = run.stability_state;
    run.stability = apply_delta(run.stability, net.stability);
    run.score = (run.score + net.score).max(0);

    let mut logs = vec![format!(
        "Stability {:+.2} ({:.2} -> {:.2}), score {:+} (now {}).",
        net.stability, before, run.stability, net.score, run.score
    )];
    let mut reveals = Vec::new();

    match key {
        ChoiceKey::Cooperative => {
            run.peace_streak += 1;
            run.chaos_streak = 0;
            if run.peace_streak % STREAK_INTERVAL == 0 {
                run.score += PEACE_STREAK_BONUS;
                logs.push(format!(
                    "Peace streak of {}! +{PEACE_STREAK_BONUS} score.",
                    run.peace_streak
                ));
                reveals.extend(reveal_random_trait(run, &participants, rng));
            }
        }
        ChoiceKey::Hostile => {
            run.chaos_streak += 1;
            run.peace_streak = 0;
            if run.chaos_streak % STREAK_INTERVAL == 0 {
                run.score = (run.score - CHAOS_STREAK_PENALTY).max(0);
                logs.push(format!(
                    "Chaos streak of {}. -{CHAOS_STREAK_PENALTY} score.",
                    run.chaos_streak
                ));
            }
        }
        ChoiceKey::Mercantile => {}
    }

    run.stability_state = StabilityState::from_stability(run.stability);
    run.stability_history.push(run.stability);
    if run.stability_state != prev_state {
        let quip = stability_quip(run.stability_state);
        run.god_quips.push(quip.to_string());
        logs.push(format!("The world is now {}. {quip}", run.stability_state));
    }

    if net.stability > 0.0 && run.assistant_unlocked(PROPHET_ID) {
        reveals.extend(reveal_random_trait(run, &participants, rng));
    }
    logs.extend(reveals);

    // Tick before unlocking: a fresh unlock first acts on the next resolution.
    tick_assistants(run, &participants);
    logs.extend(unlock_assistants(run));

    let punchline = find_template(&template_key).map_or(GENERIC_PUNCHLINE, |t| t.punchline);
    logs.push(format!("Punchline: {punchline}"));

    let resolution = Resolution {
        chosen_key: key,
        stability_delta: net.stability,
        score_delta: net.score,
        relation_changes: Vec::new(),
        logs,
    };
    if let Some(event) = run.events_log.last_mut() {
        event.resolve(resolution)?;
    }
    for id in &participants {
        if let Some(nation) = run.nations.get_mut(id) {
            nation.last_interaction = key.as_str().to_string();
        }
    }

    run.turn += 1;
    if run.stability <= 0.0 {
        run.run_status = RunStatus::Collapsed;
    } else if run.turn > run.turn_limit {
        run.run_status = RunStatus::TurnLimit;
    }

    tracing::debug!(
        run_id = %run.run_id,
        event_id,
        choice = key.as_str(),
        stability = run.stability,
        score = run.score,
        "decision resolved"
    );
    if !run.is_active() {
        tracing::info!(run_id = %run.run_id, status = %run.run_status, "run reached terminal state");
    }
    Ok(())
}
