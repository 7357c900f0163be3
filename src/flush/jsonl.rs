use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::model::{Difficulty, Run, RunStatus, StabilityState};

/// Scalar fields of a run, written as `run.json`.
#[derive(Serialize)]
struct RunHeader<'a> {
    run_id: &'a str,
    seed: u64,
    world_theme: &'a str,
    difficulty: Difficulty,
    run_status: RunStatus,
    turn: u32,
    turn_limit: u32,
    stability: f64,
    stability_state: StabilityState,
    score: i64,
    peace_streak: u32,
    chaos_streak: u32,
    stability_history: &'a [f64],
    god_quips: &'a [String],
}

impl<'a> From<&'a Run> for RunHeader<'a> {
    fn from(run: &'a Run) -> Self {
        Self {
            run_id: &run.run_id,
            seed: run.seed,
            world_theme: &run.world_theme,
            difficulty: run.difficulty,
            run_status: run.run_status,
            turn: run.turn,
            turn_limit: run.turn_limit,
            stability: run.stability,
            stability_state: run.stability_state,
            score: run.score,
            peace_streak: run.peace_streak,
            chaos_streak: run.chaos_streak,
            stability_history: &run.stability_history,
            god_quips: &run.god_quips,
        }
    }
}

/// A nation plus the traits revealed so far.
#[derive(Serialize)]
struct NationLine<'a> {
    #[serde(flatten)]
    nation: &'a crate::model::Nation,
    revealed_traits: &'a [crate::model::HiddenTrait],
}

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Flush a run to the given output directory.
///
/// Creates the output directory if it does not exist. Writes 4 files:
/// - `run.json` — scalar run state, history and quips
/// - `nations.jsonl` — one Nation per line with its revealed traits
/// - `assistants.jsonl` — one Assistant per line
/// - `events.jsonl` — one Event per line, in turn order
pub fn flush_run_to_jsonl(run: &Run, output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    let mut header = BufWriter::new(File::create(output_dir.join("run.json"))?);
    serde_json::to_writer_pretty(&mut header, &RunHeader::from(run))?;
    header.write_all(b"\n")?;
    header.flush()?;

    write_jsonl(
        &output_dir.join("nations.jsonl"),
        run.nations.values().map(|nation| NationLine {
            nation,
            revealed_traits: run.revealed(&nation.id),
        }),
    )?;
    write_jsonl(
        &output_dir.join("assistants.jsonl"),
        run.assistants.values(),
    )?;
    write_jsonl(&output_dir.join("events.jsonl"), run.events_log.iter())?;

    Ok(())
}
