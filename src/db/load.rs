use serde::Serialize;
use sqlx::PgPool;

use crate::model::Run;

/// Load a run into Postgres using COPY FROM STDIN (text format).
///
/// Order respects FK constraints: runs → nations → events.
pub async fn load_run(pool: &PgPool, run: &Run) -> Result<(), sqlx::Error> {
    let run_id = escape(&run.run_id);

    // Run header
    {
        let buf = format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            run_id,
            run.seed,
            escape(&run.world_theme),
            run.difficulty.as_str(),
            run.run_status.as_str(),
            run.turn,
            run.turn_limit,
            run.stability,
            run.stability_state.as_str(),
            run.score,
            run.peace_streak,
            run.chaos_streak,
        );
        copy_in(pool, include_str!("../../sql/copy_runs.sql"), &buf).await?;
    }

    // Nations
    {
        let mut buf = String::new();
        for n in run.nations.values() {
            buf.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                run_id,
                escape(&n.id),
                escape(&n.name),
                escape(&n.archetype),
                n.primary_race.as_str(),
                n.economy_type.as_str(),
                n.demeanor.as_str(),
                n.power,
                n.population,
                n.prosperity,
                n.unrest,
                json(&n.hidden_traits)?,
                json(run.revealed(&n.id))?,
            ));
        }
        copy_in(pool, include_str!("../../sql/copy_nations.sql"), &buf).await?;
    }

    // Events
    {
        let mut buf = String::new();
        for ev in &run.events_log {
            let res = ev.resolution.as_ref();
            buf.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                run_id,
                escape(&ev.id),
                ev.turn,
                ev.kind.as_str(),
                escape(&ev.template_key),
                escape(&ev.nations[0]),
                escape(&ev.nations[1]),
                escape(&ev.summary),
                json(&ev.tags)?,
                ev.resolved,
                opt(res.map(|r| r.chosen_key.as_str())),
                opt(res.map(|r| r.stability_delta)),
                opt(res.map(|r| r.score_delta)),
                match res {
                    Some(r) => json(&r.logs)?,
                    None => NULL.to_string(),
                },
            ));
        }
        copy_in(pool, include_str!("../../sql/copy_events.sql"), &buf).await?;
    }

    tracing::info!(
        run_id = %run.run_id,
        nations = run.nations.len(),
        events = run.events_log.len(),
        "run loaded into postgres"
    );
    Ok(())
}

/// Execute a COPY FROM STDIN with the given text-format payload.
async fn copy_in(pool: &PgPool, statement: &str, data: &str) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    let mut copy = conn.copy_in_raw(statement).await?;
    copy.send(data.as_bytes()).await?;
    copy.finish().await?;
    Ok(())
}

const NULL: &str = "\\N";

/// Escape a string for Postgres COPY text format.
/// Backslash must be escaped first, then the special whitespace characters.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Render an optional value as a COPY text value (`\N` for NULL).
fn opt<T: ToString>(v: Option<T>) -> String {
    match v {
        Some(v) => escape(&v.to_string()),
        None => NULL.to_string(),
    }
}

/// Serialize to JSON for a JSONB column, escaped for COPY.
fn json<T: Serialize + ?Sized>(val: &T) -> Result<String, sqlx::Error> {
    let text = serde_json::to_string(val).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
    Ok(escape(&text))
}
