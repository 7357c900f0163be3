pub mod assistants;
pub mod config;
pub mod nations;

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::model::{Run, RunStatus, StabilityState};

pub use config::RunConfig;

/// Generate the opening state of a run along with the RNG that every later
/// step of the run must draw from.
pub fn generate_run(run_id: String, config: &RunConfig, seed: u64) -> (Run, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);

    let nations = nations::generate_nations(config.nation_count, &mut rng);
    let assistants = assistants::generate_assistants();
    let stability = config.difficulty.starting_stability();

    let run = Run {
        run_id,
        turn: 1,
        stability,
        stability_state: StabilityState::from_stability(stability),
        score: 0,
        peace_streak: 0,
        chaos_streak: 0,
        nations,
        assistants,
        events_log: Vec::new(),
        world_theme: config.world_theme.clone(),
        difficulty: config.difficulty,
        run_status: RunStatus::Active,
        turn_limit: config.turn_limit,
        seed,
        stability_history: vec![stability],
        revealed_traits: BTreeMap::new(),
        god_quips: Vec::new(),
        assistant_notes: BTreeMap::new(),
    };
    (run, rng)
}
