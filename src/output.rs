//! Output rendering for print-only and update/check runs.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-item fields and a top-level summary.

use crate::models::{LintRecord, RegionUpdate, Summary};
use crate::render;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::io::{self, Write};

fn use_colors(output: &str) -> bool {
    output != "json" && crate::utils::colors_enabled()
}

/// Print the lint table (`-n`) to stdout.
pub fn print_table(lints: &[LintRecord], output: &str) -> crate::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_table(&mut out, lints, output)
        .and_then(|_| out.flush())
        .map_err(crate::Error::Stdout)
}

/// Write the lint table. Human output is exactly the generated table.
pub fn write_table<W: Write>(out: &mut W, lints: &[LintRecord], output: &str) -> io::Result<()> {
    match output {
        "json" => writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&compose_table_json(lints))?
        ),
        _ => {
            for line in render::table(lints) {
                out.write_all(line.as_bytes())?;
            }
            Ok(())
        }
    }
}

/// Print one line per regenerated region. When `write` is false, changed
/// regions are reported as pending.
pub fn print_updates(updates: &[RegionUpdate], lints: usize, output: &str, write: bool) {
    match output {
        "json" => {
            let out = compose_updates_json(updates, lints);
            match serde_json::to_string_pretty(&out) {
                Ok(s) => println!("{}", s),
                Err(e) => log::error!("failed to serialize results: {}", e),
            }
        }
        _ => {
            let color = use_colors(output);
            for u in updates.iter().filter(|u| u.changed) {
                let label = if write { "updated:" } else { "would update:" };
                if color {
                    println!("{} {} ({})", label.green().bold(), u.file.bold(), u.region);
                } else {
                    println!("{} {} ({})", label, u.file, u.region);
                }
            }
        }
    }
}

/// One-line instruction shown when `--check` finds stale regions.
pub fn print_check_reminder(output: &str) {
    let msg = "Please run lintsync to regenerate lint lists.";
    if output == "json" {
        eprintln!("{}", msg);
    } else {
        println!("{}", msg);
    }
}

/// Compose print-only JSON object (pure) for testing/snapshot purposes.
pub fn compose_table_json(lints: &[LintRecord]) -> JsonVal {
    let mut sorted: Vec<&LintRecord> = lints.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    json!({
        "lints": sorted,
        "summary": { "total": lints.len() },
    })
}

/// Compose update JSON object (pure) for testing/snapshot purposes.
pub fn compose_updates_json(updates: &[RegionUpdate], lints: usize) -> JsonVal {
    json!({
        "results": updates,
        "summary": Summary::from_updates(lints, updates),
    })
}
