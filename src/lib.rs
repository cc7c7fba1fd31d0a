//! lintsync core library.
//!
//! This crate keeps generated lint documentation in step with the lint
//! declarations in a source tree: it collects `declare_lint!` invocations and
//! regenerates delimited regions in README.md and the plugin entry file.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `collect`: Declaration scanning over the source tree.
//! - `render`: Lint table, registration list and count rendering.
//! - `region`: Line-delimited region replacement.
//! - `update`: The three README/entry file regenerations.
//! - `models`: Lint records and update results.
//! - `output`: Human/JSON printers.
//! - `error`: Error type shared by all stages.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod collect;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod region;
pub mod render;
pub mod update;
pub mod utils;

pub use error::{Error, Result};
