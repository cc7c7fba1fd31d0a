//! Lint collection from the source tree.
//!
//! Every file under the source directory with the configured extension is
//! read in full and scanned for declarations of the form
//! `declare_lint! { pub NAME, Level, "description" }`. Only this narrow shape
//! is recognized; anything else is skipped without a diagnostic.

use crate::error::{Error, Result};
use crate::models::{Level, LintRecord};
use glob::glob;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Build the declaration regex for `macro_name` (e.g. `declare_lint`).
pub fn declaration_regex(macro_name: &str) -> Result<Regex> {
    let pattern = format!(
        r#"(?xs)
        {}! \s* [{{(] \s*
        pub \s+ (?P<name>[A-Z_]+) \s*,\s*
        (?P<level>Forbid|Deny|Warn|Allow) \s*,\s*
        " (?P<desc>(?:[^"\\]+|\\.)*) " \s* [}})]
        "#,
        regex::escape(macro_name)
    );
    Regex::new(&pattern).map_err(|source| Error::Pattern { pattern, source })
}

/// Scans source files and turns declarations into `LintRecord`s.
pub struct Collector {
    decl: Regex,
    nl_escape: Regex,
}

impl Collector {
    pub fn new(macro_name: &str) -> Result<Self> {
        let nl = r"\\\r?\n\s*";
        Ok(Self {
            decl: declaration_regex(macro_name)?,
            nl_escape: Regex::new(nl).map_err(|source| Error::Pattern {
                pattern: nl.to_string(),
                source,
            })?,
        })
    }

    /// Extract all declarations from `text`, attributing them to `module`.
    pub fn extract(&self, module: &str, text: &str) -> Vec<LintRecord> {
        let mut out = Vec::new();
        for caps in self.decl.captures_iter(text) {
            let level = match caps["level"].parse::<Level>() {
                Ok(l) => l,
                Err(e) => {
                    log::trace!("{}: skipping declaration: {}", module, e);
                    continue;
                }
            };
            // backslash-newline continuations join multi-line string literals
            let desc = self.nl_escape.replace_all(&caps["desc"], "");
            out.push(LintRecord::new(
                module,
                caps["name"].to_lowercase(),
                level,
                desc.replace("\\\"", "\""),
            ));
        }
        out
    }

    /// Read one file and extract its declarations. The module is the file stem.
    pub fn collect_file(&self, path: &Path) -> Result<Vec<LintRecord>> {
        let code = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let module = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let found = self.extract(&module, &code);
        log::debug!("{}: {} lint(s)", path.display(), found.len());
        Ok(found)
    }

    /// Walk `dir` recursively and collect from every `*.{extension}` file.
    ///
    /// Files are visited in the glob crate's (sorted) order; records keep the
    /// order in which they were found.
    pub fn collect_dir(&self, dir: &Path, extension: &str) -> Result<Vec<LintRecord>> {
        let base = glob::Pattern::escape(&dir.to_string_lossy());
        let pattern = format!("{}/**/*.{}", base, extension);
        let entries = glob(&pattern).map_err(|source| Error::Glob {
            pattern: pattern.clone(),
            source,
        })?;
        let mut lints = Vec::new();
        for entry in entries {
            let path = entry?;
            if !path.is_file() {
                continue;
            }
            lints.extend(self.collect_file(&path)?);
        }
        Ok(lints)
    }
}

/// Collect every lint declared under `root/source_dir`.
pub fn collect_lints(
    root: &Path,
    source_dir: &str,
    extension: &str,
    macro_name: &str,
) -> Result<Vec<LintRecord>> {
    let collector = Collector::new(macro_name)?;
    let lints = collector.collect_dir(&root.join(source_dir), extension)?;
    log::info!("collected {} lint(s) from {}", lints.len(), source_dir);
    Ok(lints)
}
