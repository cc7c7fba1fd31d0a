//! Error types shared by the collector, the region replacer and the CLI.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a run.
#[derive(Debug, Error)]
pub enum Error {
    /// A scanned or target file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A target file could not be rewritten.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configured delimiter or declaration pattern is not a valid regex.
    #[error("invalid pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The source tree glob could not be built.
    #[error("bad glob pattern `{pattern}`: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Walking the source tree hit an unreadable entry.
    #[error("failed to walk source tree: {0}")]
    Walk(#[from] glob::GlobError),

    /// Printing the lint table to stdout failed (e.g. a closed pipe).
    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] io::Error),

    /// A region start line was found but no closing line follows it.
    #[error(
        "{}: region opened at line {line} is never closed (no line matches `{end}`)",
        .path.display()
    )]
    UnterminatedRegion {
        path: PathBuf,
        line: usize,
        end: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
