use lazy_god::{Engine, Run, RunConfig};

pub fn seeded(seed: u64) -> RunConfig {
    RunConfig::seeded(seed)
}

/// Draw the next event and resolve it with `choice`.
pub fn decide(engine: &Engine, run_id: &str, choice: &str) -> Run {
    let event = engine.next_turn(run_id).unwrap();
    engine.make_decision(run_id, &event.id, choice).unwrap()
}

/// Start a run and play `choices` in order, stopping early if the run ends.
pub fn play(engine: &Engine, config: &RunConfig, choices: &[&str]) -> Run {
    let mut run = engine.start_run(config);
    for choice in choices {
        if !run.is_active() {
            break;
        }
        run = decide(engine, &run.run_id, choice);
    }
    run
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
