mod common;

use std::sync::Arc;

use lazy_god::content::DIPLOMAT_ID;
use lazy_god::{
    ChoiceKey, EndReason, Engine, EngineConfig, EngineError, EvictionPolicy, Run, RunConfig,
    RunStatus, StabilityState,
};

use common::{decide, play, seeded};

fn assert_invariants(run: &Run) {
    assert!((0.0..=1.0).contains(&run.stability), "stability {}", run.stability);
    assert_eq!(run.stability_state, StabilityState::from_stability(run.stability));
    assert!(run.events_log.iter().filter(|e| !e.resolved).count() <= 1);
    for event in &run.events_log {
        assert_eq!(event.resolved, event.resolution.is_some(), "{}", event.id);
    }
    for (id, revealed) in &run.revealed_traits {
        let nation = &run.nations[id];
        for t in revealed {
            assert!(nation.hidden_traits.contains(t), "{id} revealed {t} it does not hold");
        }
        let unique: std::collections::HashSet<_> = revealed.iter().collect();
        assert_eq!(unique.len(), revealed.len());
    }
    for a in run.assistants.values() {
        assert!(a.cooldown_remaining <= a.cooldown, "{}", a.id);
    }
    assert!(run.score >= 0);
    assert_eq!(run.stability_history.len(), run.resolved_count() + 1);
}

#[test]
fn seed_123_single_decision() {
    let engine = Engine::default();
    let run = play(&engine, &seeded(123), &["peace"]);

    assert_eq!(*run.stability_history.last().unwrap(), run.stability);
    let logs = &run.events_log[0].resolution.as_ref().unwrap().logs;
    assert!(logs.iter().any(|l| l.starts_with("Punchline")));
    assert!(logs.last().unwrap().starts_with("Punchline: "));
    assert_eq!(run.turn, 2);
    assert_invariants(&run);
}

#[test]
fn seed_7_three_cooperative_decisions() {
    let engine = Engine::default();
    let run = play(&engine, &seeded(7), &["peace", "peace", "peace"]);

    assert!(run.peace_streak >= 3);
    assert_eq!(run.chaos_streak, 0);
    assert!(
        run.revealed_traits.values().any(|t| !t.is_empty()),
        "three cooperative decisions reveal at least one trait"
    );
    // 0.5 plus three cooperative steps of at least 0.07 leaves the stable band.
    assert_ne!(run.stability_state, StabilityState::Stable);
    assert!(!run.god_quips.is_empty());
    let third = &run.events_log[2].resolution.as_ref().unwrap().logs;
    assert!(third.iter().any(|l| l.starts_with("Peace streak of 3")));
    assert_invariants(&run);
}

#[test]
fn second_next_turn_reports_pending() {
    let engine = Engine::default();
    let run = engine.start_run(&seeded(1));
    let event = engine.next_turn(&run.run_id).unwrap();

    let err = engine.next_turn(&run.run_id).unwrap_err();
    assert_eq!(err.code(), "EVENT_PENDING");
    assert_eq!(err, EngineError::EventPending(event.id));
    assert_eq!(engine.get_state(&run.run_id).unwrap().events_log.len(), 1);
}

#[test]
fn mismatched_event_id_changes_nothing() {
    let engine = Engine::default();
    let run = engine.start_run(&seeded(2));
    engine.next_turn(&run.run_id).unwrap();
    let before = engine.get_state(&run.run_id).unwrap();

    let err = engine
        .make_decision(&run.run_id, "event_999", "peace")
        .unwrap_err();
    assert_eq!(err.code(), "EVENT_ID_MISMATCH");
    assert_eq!(engine.get_state(&run.run_id).unwrap(), before);
}

#[test]
fn double_resolve_rejected_and_first_resolution_kept() {
    let engine = Engine::default();
    let run = engine.start_run(&seeded(3));
    let event = engine.next_turn(&run.run_id).unwrap();
    let after_first = engine.make_decision(&run.run_id, &event.id, "hostile").unwrap();

    let err = engine
        .make_decision(&run.run_id, &event.id, "peace")
        .unwrap_err();
    assert_eq!(err, EngineError::EventAlreadyResolved(event.id.clone()));

    let state = engine.get_state(&run.run_id).unwrap();
    assert_eq!(state, after_first);
    let resolution = state.events_log[0].resolution.as_ref().unwrap();
    assert_eq!(resolution.chosen_key, ChoiceKey::Hostile);
}

#[test]
fn invalid_choice_rejected() {
    let engine = Engine::default();
    let run = engine.start_run(&seeded(4));
    let event = engine.next_turn(&run.run_id).unwrap();
    let err = engine
        .make_decision(&run.run_id, &event.id, "surrender")
        .unwrap_err();
    assert_eq!(err.code(), "INVALID_CHOICE");
    assert!(engine.pending_event(&run.run_id).is_ok());
}

#[test]
fn decision_before_any_event() {
    let engine = Engine::default();
    let run = engine.start_run(&seeded(5));
    let err = engine
        .make_decision(&run.run_id, "event_001", "peace")
        .unwrap_err();
    assert_eq!(err, EngineError::NoActiveEvent);
}

#[test]
fn same_seed_same_world_and_first_event() {
    let a = Engine::default();
    let b = Engine::default();
    let run_a = a.start_run(&seeded(2024));
    let run_b = b.start_run(&seeded(2024));
    assert_eq!(run_a.nations, run_b.nations);

    let event_a = a.next_turn(&run_a.run_id).unwrap();
    let event_b = b.next_turn(&run_b.run_id).unwrap();
    assert_eq!(event_a, event_b);

    let end_a = play(&a, &seeded(99), &["peace", "hostile", "trade", "peace"]);
    let end_b = play(&b, &seeded(99), &["peace", "hostile", "trade", "peace"]);
    assert_eq!(end_a.events_log, end_b.events_log);
    assert_eq!(end_a.revealed_traits, end_b.revealed_traits);
}

#[test]
fn missing_seed_is_recorded_and_replayable() {
    let engine = Engine::default();
    let run = engine.start_run(&RunConfig::default());
    let replay = engine.start_run(&seeded(run.seed));
    assert_eq!(run.nations, replay.nations);
}

#[test]
fn invariants_hold_over_long_runs() {
    let engine = Engine::default();
    let pattern = ["peace", "hostile", "trade", "hostile", "peace", "peace", "hostile"];
    for seed in 0..20 {
        let config = RunConfig {
            turn_limit: 30,
            ..seeded(seed)
        };
        let mut run = engine.start_run(&config);
        let mut previous = run.revealed_traits.clone();
        let mut step = 0;
        while run.is_active() {
            run = decide(&engine, &run.run_id, pattern[(step + seed as usize) % pattern.len()]);
            assert_invariants(&run);
            for (id, before) in &previous {
                assert!(run.revealed(id).starts_with(before), "reveals are append-only");
            }
            previous = run.revealed_traits.clone();
            step += 1;
        }
        assert!(matches!(
            run.run_status,
            RunStatus::Collapsed | RunStatus::TurnLimit
        ));
        assert_eq!(engine.next_turn(&run.run_id).unwrap_err().code(), "RUN_ENDED");
    }
}

#[test]
fn diplomat_unlocks_after_five_cooperative_decisions() {
    let engine = Engine::default();
    let run = play(&engine, &seeded(11), &["peace"; 4]);
    assert!(!run.assistant_unlocked(DIPLOMAT_ID));

    let run = decide(&engine, &run.run_id, "peace");
    assert!(run.assistant_unlocked(DIPLOMAT_ID));
    let logs = &run.events_log[4].resolution.as_ref().unwrap().logs;
    assert!(logs.iter().any(|l| l.contains("Unlocked assistant: The Silver-Tongued Diplomat")));
    assert_eq!(run.assistants[DIPLOMAT_ID].cooldown_remaining, 0);

    // Acts on the next resolution, then stays unlocked through a hostile turn.
    let run = decide(&engine, &run.run_id, "hostile");
    assert!(run.assistant_notes.contains_key(DIPLOMAT_ID));
    assert!(run.assistant_unlocked(DIPLOMAT_ID));
}

#[test]
fn end_run_summary() {
    let engine = Engine::default();
    let run = play(&engine, &seeded(21), &["trade", "peace"]);
    engine.next_turn(&run.run_id).unwrap();

    let summary = engine.end_run(&run.run_id, EndReason::PlayerQuit).unwrap();
    assert_eq!(summary.run_id, run.run_id);
    assert_eq!(summary.seed, 21);
    assert_eq!(summary.turns_played, 2);
    assert_eq!(summary.final_score, run.score);
    assert_eq!(summary.stability, run.stability);
    assert_eq!(summary.status, RunStatus::PlayerQuit);

    let pending = engine.pending_event(&run.run_id).unwrap();
    let err = engine
        .make_decision(&run.run_id, &pending.id, "peace")
        .unwrap_err();
    assert_eq!(err.code(), "EVENT_ALREADY_RESOLVED");
    assert_eq!(engine.run_count(), 1);
}

#[test]
fn keep_ended_policy_evicts_oldest_finished_run() {
    let engine = Engine::new(EngineConfig {
        eviction: EvictionPolicy::KeepEnded(1),
        ..EngineConfig::default()
    });
    let first = engine.start_run(&seeded(1));
    let second = engine.start_run(&seeded(2));
    let third = engine.start_run(&seeded(3));
    engine.end_run(&first.run_id, EndReason::Won).unwrap();
    engine.end_run(&second.run_id, EndReason::PlayerQuit).unwrap();

    let fourth = engine.start_run(&seeded(4));
    assert_eq!(
        engine.get_state(&first.run_id).unwrap_err(),
        EngineError::RunNotFound(first.run_id.clone())
    );
    for id in [&second.run_id, &third.run_id, &fourth.run_id] {
        assert!(engine.get_state(id).is_ok(), "{id} should remain");
    }
    assert_eq!(engine.run_count(), 3);

    assert!(engine.remove_run(&third.run_id));
    assert_eq!(engine.run_count(), 2);
}

#[test]
fn runs_progress_in_parallel() {
    let engine = Arc::new(Engine::default());
    let runs: Vec<Run> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4u64)
            .map(|seed| {
                let engine = Arc::clone(&engine);
                scope.spawn(move || play(&engine, &seeded(seed), &["peace", "trade", "hostile"]))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let ids: std::collections::HashSet<_> = runs.iter().map(|r| r.run_id.clone()).collect();
    assert_eq!(ids.len(), 4);
    for run in &runs {
        assert_eq!(run.resolved_count(), 3);
        assert_invariants(run);
    }
}
