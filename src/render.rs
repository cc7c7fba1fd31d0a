//! Rendering of collected lints into the generated regions.
//!
//! All renderers are pure and lazy: they borrow the record list, never
//! mutate it, and yield `\n`-terminated lines ready to be spliced into a file.

use crate::models::LintRecord;
use std::cmp::Ordering;

/// Width of the `default` column (`forbid`, `deny`, ... fit in it).
const LEVEL_WIDTH: usize = 7;

fn max_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(|s| s.chars().count()).max().unwrap_or(0)
}

/// Markdown table of all lints, sorted by name.
///
/// The first and third column widths are the longest name and the longest
/// description respectively.
pub fn table(lints: &[LintRecord]) -> impl Iterator<Item = String> + '_ {
    let w_name = max_width(lints.iter().map(|l| l.name.as_str()));
    let w_desc = max_width(lints.iter().map(|l| l.description.as_str()));

    let header = [
        format!("{:<w$} | default | meaning\n", "name", w = w_name),
        format!(
            "{}-|-{}-|-{}\n",
            "-".repeat(w_name),
            "-".repeat(LEVEL_WIDTH),
            "-".repeat(w_desc)
        ),
    ];

    let mut rows: Vec<&LintRecord> = lints.iter().collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));

    header.into_iter().chain(rows.into_iter().map(move |l| {
        format!(
            "{:<w$} | {:<lw$} | {}\n",
            l.name,
            l.level,
            l.description,
            w = w_name,
            lw = LEVEL_WIDTH
        )
    }))
}

/// Full-record ordering: module, name, level, description.
fn group_order(a: &LintRecord, b: &LintRecord) -> Ordering {
    a.module
        .cmp(&b.module)
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.level.as_str().cmp(b.level.as_str()))
        .then_with(|| a.description.cmp(&b.description))
}

/// Registration list entries (`module::NAME,`), sorted by module first.
pub fn group(lints: &[LintRecord]) -> impl Iterator<Item = String> + '_ {
    let mut sorted: Vec<&LintRecord> = lints.iter().collect();
    sorted.sort_by(|a, b| group_order(a, b));
    sorted
        .into_iter()
        .map(|l| format!("        {}::{},\n", l.module, l.name.to_uppercase()))
}

/// The README sentence announcing how many lints exist.
pub fn count_statement(count: usize) -> String {
    format!("There are {} lints included in this crate:\n", count)
}
