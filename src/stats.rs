//! Run statistics.
//!
//! Counters only ever grow during a run. `created`, `duplicates`, `unused`,
//! `internals`, `streams` and `names` are driven by the ledger; `multitrack`
//! and `trims` belong to the playlist builders and are bumped by them directly.

use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub created: u32,
    pub duplicates: u32,
    pub unused: u32,
    pub multitrack: u32,
    pub trims: u32,
    pub streams: u32,
    pub internals: u32,
    pub names: u32,
}

impl RunStats {
    /// Outputs seen in total, new or not.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.created + self.duplicates
    }

    pub fn log_summary(&self) {
        info!(
            "Created {} txtp ({} duplicates, {} unused, {} multitrack, {} trims, \
             {} streams, {} internals, {} names)",
            self.created,
            self.duplicates,
            self.unused,
            self.multitrack,
            self.trims,
            self.streams,
            self.internals,
            self.names,
        );
    }

    /// JSON snapshot for reporting.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
