//! Play a run from the terminal.
//!
//! Usage: `lazy-god [--seed N] [--turn-limit N] [--difficulty easy|normal|hard] [--profile FILE] [--out DIR]`

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lazy_god::flush::flush_run_to_jsonl;
use lazy_god::{Difficulty, EndReason, Engine, Event, ProfileStore, Run, RunConfig, RunStatus};

#[derive(Parser, Debug)]
#[command(name = "lazy-god")]
#[command(about = "Keep a bickering world from falling apart with as little effort as possible")]
struct Args {
    /// RNG seed; a random one is drawn when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Turns before the run ends on its own
    #[arg(long, default_value = "20")]
    turn_limit: u32,

    #[arg(long, default_value = "classic_fantasy")]
    theme: String,

    /// easy, normal or hard
    #[arg(long, default_value = "normal", value_parser = parse_difficulty)]
    difficulty: Difficulty,

    /// Player profile JSON file for cross-run progression
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Write the finished run as JSONL into this directory
    #[arg(long)]
    out: Option<PathBuf>,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::try_from(s.to_ascii_lowercase())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let mut profile = match args.profile.clone().map(ProfileStore::open).transpose() {
        Ok(store) => store,
        Err(err) => {
            tracing::error!(%err, "failed to open profile");
            return ExitCode::FAILURE;
        }
    };

    let engine = Engine::default();
    let config = RunConfig {
        world_theme: args.theme,
        turn_limit: args.turn_limit,
        difficulty: args.difficulty,
        seed: args.seed,
        ..RunConfig::default()
    };
    let run = engine.start_run(&config);
    println!("Run started: {} (seed {})", run.run_id, run.seed);
    println!("Tip: press q to quit at any time.");

    let final_run = match play(&engine, &run.run_id, profile.as_mut()) {
        Ok(run) => run,
        Err(err) => {
            tracing::error!(%err, "run aborted");
            return ExitCode::FAILURE;
        }
    };

    if let Some(dir) = args.out {
        if let Err(err) = flush_run_to_jsonl(&final_run, &dir) {
            tracing::error!(%err, dir = %dir.display(), "failed to write run export");
            return ExitCode::FAILURE;
        }
        println!("Run written to {}", dir.display());
    }
    ExitCode::SUCCESS
}

/// Drive the turn loop until the run ends. Returns the final run state.
fn play(
    engine: &Engine,
    run_id: &str,
    mut profile: Option<&mut ProfileStore>,
) -> Result<Run, Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let event = match engine.pending_event(run_id) {
            Ok(event) => event,
            Err(_) => engine.next_turn(run_id)?,
        };
        let state = engine.get_state(run_id)?;
        print_event(&state, &event);

        print!("\nChoose [p]eace, [h]ostile, [t]rade or [q]uit: ");
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            return finish(engine, run_id, EndReason::PlayerQuit, None, profile);
        };

        let choice = match line.trim().to_ascii_lowercase().as_str() {
            "q" | "quit" => {
                return finish(engine, run_id, EndReason::PlayerQuit, None, profile);
            }
            "p" => "peace",
            "h" => "hostile",
            "t" => "trade",
            other => {
                println!("Invalid input '{other}'. Try again.");
                continue;
            }
        };

        let updated = match engine.make_decision(run_id, &event.id, choice) {
            Ok(run) => run,
            Err(err) => {
                println!("Error: {} ({err})", err.code());
                continue;
            }
        };
        let resolved = updated.events_log.last();
        if let Some(resolution) = resolved.and_then(|e| e.resolution.as_ref()) {
            for line in &resolution.logs {
                println!("  {line}");
            }
        }
        if let Some(store) = profile.as_deref_mut() {
            let summary = store.ingest_resolution(&updated, resolved)?;
            for name in &summary.last_unlocks {
                println!("  [profile] new assistant: {name}");
            }
        }

        if !updated.is_active() {
            let reason = match updated.run_status {
                RunStatus::Collapsed => EndReason::Collapsed,
                RunStatus::Won => EndReason::Won,
                _ => EndReason::TurnLimit,
            };
            return finish(engine, run_id, reason, resolved.cloned(), profile);
        }
    }
}

fn finish(
    engine: &Engine,
    run_id: &str,
    reason: EndReason,
    last_event: Option<Event>,
    profile: Option<&mut ProfileStore>,
) -> Result<Run, Box<dyn std::error::Error>> {
    let summary = engine.end_run(run_id, reason)?;
    println!(
        "\nRun ended ({}). Final score: {}, stability {:.2} ({}), turns played: {}",
        summary.status,
        summary.final_score,
        summary.stability,
        summary.stability_state,
        summary.turns_played
    );
    let run = engine.get_state(run_id)?;
    if let Some(store) = profile {
        let totals = store.ingest_resolution(&run, last_event.as_ref())?;
        println!(
            "Profile: {} runs, {} victories, {} collapses, best score {}",
            totals.total_runs, totals.victories, totals.collapses, totals.highest_score
        );
    }
    Ok(run)
}

fn print_event(run: &Run, event: &Event) {
    println!(
        "\nTurn {} | Stability: {:.2} ({}) | Score: {} | Peace streak: {}",
        run.turn, run.stability, run.stability_state, run.score, run.peace_streak
    );
    println!("Event: {}", event.summary);
    let names: Vec<&str> = event
        .nations
        .iter()
        .map(|id| run.nations.get(id).map_or(id.as_str(), |n| n.name.as_str()))
        .collect();
    println!("Involved nations: {}", names.join(", "));
    for choice in &event.choices {
        println!("  {}) {}", &choice.key.as_str()[..1], choice.label);
    }
    for (id, note) in &run.assistant_notes {
        if let Some(assistant) = run.assistants.get(id) {
            println!("  {}: {note}", assistant.name);
        }
    }
}
