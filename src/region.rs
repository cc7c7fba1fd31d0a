//! Line-delimited region replacement.
//!
//! A region starts at a line matching `start` and ends at the next line
//! matching `end`. Everything in between is regenerated; the end line is
//! always kept, the start line is kept unless `replace_start` is set.
//! Patterns see each line without its terminator, so `^$` matches a blank
//! line.

use crate::error::{Error, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Delimiters of a generated region.
#[derive(Debug, Clone)]
pub struct Region {
    pub start: Regex,
    pub end: Regex,
    pub replace_start: bool,
}

impl Region {
    pub fn new(start: &str, end: &str, replace_start: bool) -> Result<Self> {
        Ok(Self {
            start: compile(start)?,
            end: compile(end)?,
            replace_start,
        })
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Result of splicing freshly generated content into a list of lines.
#[derive(Debug, PartialEq, Eq)]
pub struct Spliced {
    pub lines: Vec<String>,
    pub changed: bool,
}

/// A start line was matched but no end line followed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unterminated {
    /// 1-based line number of the start delimiter.
    pub line: usize,
}

#[derive(Clone, Copy)]
enum ScanState {
    Outside,
    Inside { start: usize },
}

fn content(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Replace every region in `lines` with the output of `generate`.
///
/// Lines outside regions are copied unchanged. A file without a start line
/// comes back untouched; a start line with no matching end is an error and
/// nothing is produced.
pub fn splice<F, I>(
    lines: &[String],
    region: &Region,
    mut generate: F,
) -> std::result::Result<Spliced, Unterminated>
where
    F: FnMut() -> I,
    I: IntoIterator<Item = String>,
{
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut state = ScanState::Outside;
    for (idx, line) in lines.iter().enumerate() {
        let text = content(line);
        state = match state {
            ScanState::Outside if region.start.is_match(text) => {
                if !region.replace_start {
                    out.push(line.clone());
                }
                ScanState::Inside { start: idx + 1 }
            }
            ScanState::Outside => {
                out.push(line.clone());
                ScanState::Outside
            }
            ScanState::Inside { .. } if region.end.is_match(text) => {
                out.extend(generate());
                out.push(line.clone());
                ScanState::Outside
            }
            inside @ ScanState::Inside { .. } => inside,
        };
    }
    if let ScanState::Inside { start } = state {
        return Err(Unterminated { line: start });
    }
    let changed = out.as_slice() != lines;
    Ok(Spliced {
        lines: out,
        changed,
    })
}

/// Split text into lines that keep their terminators, so joining them
/// reproduces the input byte for byte.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

/// Replace the region(s) in the file at `path`.
///
/// Writes the file back only when `write_back` is set and the content
/// changed. Returns whether the regenerated content differs from the file.
pub fn replace_region<F, I>(
    path: &Path,
    region: &Region,
    generate: F,
    write_back: bool,
) -> Result<bool>
where
    F: FnMut() -> I,
    I: IntoIterator<Item = String>,
{
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = split_lines(&text);
    let spliced = splice(&lines, region, generate).map_err(|u| Error::UnterminatedRegion {
        path: path.to_path_buf(),
        line: u.line,
        end: region.end.as_str().to_string(),
    })?;
    if write_back && spliced.changed {
        fs::write(path, spliced.lines.concat()).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("rewrote {}", path.display());
    }
    Ok(spliced.changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn lines(text: &str) -> Vec<String> {
        split_lines(text)
    }

    fn fixed(items: &[&str]) -> impl FnMut() -> Vec<String> {
        let items: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        move || items.clone()
    }

    #[test]
    fn test_replaces_start_and_body_keeps_end() {
        let region = Region::new(r"^name +\|", "^$", true).unwrap();
        let input = lines("intro\nname | old\n---|---\nrow\n\ntail\n");
        let out = splice(&input, &region, fixed(&["new header\n", "new row\n"])).unwrap();
        assert_eq!(out.lines.concat(), "intro\nnew header\nnew row\n\ntail\n");
        assert!(out.changed);
    }

    #[test]
    fn test_keeps_start_when_not_replacing() {
        let region = Region::new(r#"register_lint_group\("clippy""#, r"\]\);", false).unwrap();
        let input = lines("fn f() {\n    reg.register_lint_group(\"clippy\", vec![\n        a::OLD,\n    ]);\n}\n");
        let out = splice(&input, &region, fixed(&["        a::NEW,\n"])).unwrap();
        assert_eq!(
            out.lines.concat(),
            "fn f() {\n    reg.register_lint_group(\"clippy\", vec![\n        a::NEW,\n    ]);\n}\n"
        );
    }

    #[test]
    fn test_empty_end_pattern_replaces_single_line() {
        let region = Region::new(r"^There are \d+ lints included in this crate:", "", true).unwrap();
        let input = lines("There are 2 lints included in this crate:\n\nname | x\n");
        let out = splice(&input, &region, || {
            vec!["There are 5 lints included in this crate:\n".to_string()]
        })
        .unwrap();
        assert_eq!(out.lines.concat(), "There are 5 lints included in this crate:\n\nname | x\n");
    }

    #[test]
    fn test_identical_content_is_unchanged() {
        let region = Region::new("^BEGIN$", "^END$", false).unwrap();
        let input = lines("BEGIN\nsame\nEND\n");
        let out = splice(&input, &region, fixed(&["same\n"])).unwrap();
        assert!(!out.changed);
        assert_eq!(out.lines, input);
    }

    #[test]
    fn test_no_start_line_is_noop() {
        let region = Region::new("^BEGIN$", "^END$", false).unwrap();
        let input = lines("a\nb\n");
        let mut called = false;
        let out = splice(&input, &region, || {
            called = true;
            Vec::<String>::new()
        })
        .unwrap();
        assert!(!out.changed);
        assert!(!called);
    }

    #[test]
    fn test_missing_end_is_reported() {
        let region = Region::new("^BEGIN$", "^END$", false).unwrap();
        let input = lines("x\nBEGIN\nold\n");
        let err = splice(&input, &region, fixed(&["new\n"])).unwrap_err();
        assert_eq!(err, Unterminated { line: 2 });
    }

    #[test]
    fn test_every_region_is_regenerated() {
        let region = Region::new("^BEGIN$", "^END$", false).unwrap();
        let input = lines("BEGIN\n1\nEND\nmid\nBEGIN\n2\nEND\n");
        let out = splice(&input, &region, fixed(&["x\n"])).unwrap();
        assert_eq!(out.lines.concat(), "BEGIN\nx\nEND\nmid\nBEGIN\nx\nEND\n");
    }

    #[test]
    fn test_crlf_blank_line_ends_region() {
        let region = Region::new(r"^name +\|", "^$", true).unwrap();
        let input = lines("name | a\r\nrow\r\n\r\nafter\r\n");
        let out = splice(&input, &region, fixed(&["t\n"])).unwrap();
        assert_eq!(out.lines.concat(), "t\n\r\nafter\r\n");
    }

    #[test]
    fn test_replace_region_check_mode_leaves_file_untouched() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("README.md");
        let original = "BEGIN\nold\nEND\nno trailing newline";
        fs::write(&p, original).unwrap();
        let region = Region::new("^BEGIN$", "^END$", false).unwrap();

        let changed = replace_region(&p, &region, fixed(&["new\n"]), false).unwrap();
        assert!(changed);
        assert_eq!(fs::read_to_string(&p).unwrap(), original);

        let changed = replace_region(&p, &region, fixed(&["new\n"]), true).unwrap();
        assert!(changed);
        assert_eq!(
            fs::read_to_string(&p).unwrap(),
            "BEGIN\nnew\nEND\nno trailing newline"
        );

        let changed = replace_region(&p, &region, fixed(&["new\n"]), true).unwrap();
        assert!(!changed);
    }

    #[test]
    fn test_replace_region_unterminated_does_not_write() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("lib.rs");
        fs::write(&p, "BEGIN\nold\n").unwrap();
        let region = Region::new("^BEGIN$", "^END$", false).unwrap();
        let err = replace_region(&p, &region, fixed(&["new\n"]), true).unwrap_err();
        assert!(matches!(err, Error::UnterminatedRegion { line: 1, .. }));
        assert_eq!(fs::read_to_string(&p).unwrap(), "BEGIN\nold\n");
    }

    #[test]
    fn test_replace_region_missing_file_is_read_error() {
        let tmp = tempdir().unwrap();
        let region = Region::new("^BEGIN$", "^END$", false).unwrap();
        let err = replace_region(&tmp.path().join("nope.md"), &region, fixed(&[]), false).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
