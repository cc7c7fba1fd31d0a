//! Shared data models for collected lints and update outputs.

pub mod lint;

pub use lint::{Level, LintRecord};

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
/// Outcome of regenerating one region in one target file.
pub struct RegionUpdate {
    pub file: String,
    pub region: String,
    pub changed: bool,
    pub wrote: bool,
}

#[derive(Debug, Serialize)]
/// Aggregated update summary used by printers.
pub struct Summary {
    pub lints: usize,
    pub regions: usize,
    pub changed: usize,
    pub wrote: usize,
}

impl Summary {
    pub fn from_updates(lints: usize, updates: &[RegionUpdate]) -> Self {
        Summary {
            lints,
            regions: updates.len(),
            changed: updates.iter().filter(|u| u.changed).count(),
            wrote: updates.iter().filter(|u| u.wrote).count(),
        }
    }
}
