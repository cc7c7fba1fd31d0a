//! Regeneration of the README lint table, the lint count and the
//! registration list in the entry file.

use crate::config::Effective;
use crate::error::Result;
use crate::models::{LintRecord, RegionUpdate};
use crate::region::{replace_region, Region};
use crate::{render, utils};
use std::path::Path;

/// README table: replaced from the `name | ...` header to the first blank line.
pub fn table_region() -> Result<Region> {
    Region::new(r"^name +\|", "^$", true)
}

/// README count sentence: a single line, the empty end pattern closes it at
/// the very next line.
pub fn count_region() -> Result<Region> {
    Region::new(r"^There are \d+ lints included in this crate:", "", true)
}

/// Registration list inside `register_lint_group("<group>", vec![ ... ]);`.
pub fn group_region(group: &str) -> Result<Region> {
    let start = format!(r#"reg.register_lint_group\("{}""#, regex::escape(group));
    Region::new(&start, r"\]\);", false)
}

fn record(
    eff: &Effective,
    path: &Path,
    region: &str,
    changed: bool,
    write: bool,
) -> RegionUpdate {
    log::debug!(
        "{} [{}]: {}",
        path.display(),
        region,
        if changed { "changed" } else { "up to date" }
    );
    RegionUpdate {
        file: utils::rel_to_root(path, &eff.repo_root),
        region: region.to_string(),
        changed,
        wrote: changed && write,
    }
}

/// Regenerate all three regions. With `write == false` (check mode) nothing
/// is written and the result only reports drift.
///
/// Regions are processed in order and each file write is independent; an
/// error midway leaves earlier rewrites in place.
pub fn run_update(
    eff: &Effective,
    lints: &[LintRecord],
    write: bool,
) -> Result<Vec<RegionUpdate>> {
    let readme = eff.readme_path();
    let entry = eff.entry_path();
    let mut updates = Vec::with_capacity(3);

    let changed = replace_region(&readme, &table_region()?, || render::table(lints), write)?;
    updates.push(record(eff, &readme, "table", changed, write));

    let changed = replace_region(
        &readme,
        &count_region()?,
        || [render::count_statement(lints.len())],
        write,
    )?;
    updates.push(record(eff, &readme, "count", changed, write));

    let changed = replace_region(
        &entry,
        &group_region(&eff.group)?,
        || render::group(lints),
        write,
    )?;
    updates.push(record(eff, &entry, "group", changed, write));

    Ok(updates)
}
