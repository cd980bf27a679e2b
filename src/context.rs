//! # Run Context
//!
//! One [`RunContext`] is built at the start of a generation run, passed by
//! reference to every collaborator, and dropped at the end. It is not shared
//! between runs or threads.

use crate::basepath::{normalize_path, BankNode, BasepathResolver};
use crate::config::RunConfig;
use crate::ledger::{DedupLedger, Fingerprint, OutputMedia};
use crate::stats::RunStats;
use crate::volume::{VolumeOutcome, VolumeState};
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RunContext {
    pub config: RunConfig,
    pub stats: RunStats,
    /// New txtp registered while set are counted as unused.
    pub unused_mark: bool,
    pub transition_mark: bool,
    pub is_windows: bool,
    /// Working directory when the run started
    pub basedir: PathBuf,
    ledger: DedupLedger,
    resolver: BasepathResolver,
    volume: VolumeState,
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new(RunConfig::default())
    }
}

impl RunContext {
    /// Creates a context for one run. The configured volume expression, if
    /// any, is applied immediately.
    #[must_use]
    pub fn new(config: RunConfig) -> Self {
        Self::with_ledger(config, DedupLedger::new())
    }

    #[must_use]
    pub fn with_ledger(config: RunConfig, ledger: DedupLedger) -> Self {
        let volume = config.volume.clone();
        let mut context = Self {
            config,
            stats: RunStats::default(),
            unused_mark: false,
            transition_mark: false,
            is_windows: cfg!(windows),
            basedir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            ledger,
            resolver: BasepathResolver::new(),
            volume: VolumeState::default(),
        };
        context.set_volume(volume.as_deref());
        context
    }

    pub fn register_content<M: OutputMedia + ?Sized>(
        &mut self,
        fingerprint: Fingerprint,
        media: &M,
    ) -> bool {
        self.ledger
            .register_content(fingerprint, media, self.unused_mark, &mut self.stats)
    }

    pub fn register_name(&mut self, name: &str) -> bool {
        self.ledger.register_name(name, &mut self.stats)
    }

    pub fn register_bank(&mut self, bank_id: &str) {
        self.ledger.register_bank(bank_id);
    }

    #[must_use]
    pub fn get_banks(&self) -> &HashSet<String> {
        self.ledger.banks()
    }

    #[must_use]
    pub fn has_bank(&self, bank_id: &str) -> bool {
        self.ledger.has_bank(bank_id)
    }

    /// Stores normalised output and media directories.
    pub fn set_output_dirs(&mut self, outdir: Option<&str>, wemdir: Option<&str>) {
        self.config.outdir = normalize_path(outdir);
        self.config.wemdir = normalize_path(wemdir);
    }

    /// Output directory followed by the media subdirectory, as configured.
    #[must_use]
    pub fn get_output_dir(&self) -> String {
        format!("{}{}", self.config.outdir, self.config.wemdir)
    }

    pub fn get_basepath(&mut self, node: &dyn BankNode) -> String {
        self.resolver.get_basepath(node, self.config.lang)
    }

    pub fn set_basepath<B: BankNode>(&mut self, banks: &[B]) {
        self.resolver.set_basepath(banks);
    }

    pub fn set_volume(&mut self, input: Option<&str>) -> VolumeOutcome {
        self.volume.set_volume(input)
    }

    /// Master volume offset in dB, `None` for no adjustment.
    #[must_use]
    pub fn volume_master(&self) -> Option<f64> {
        self.volume.master_db
    }

    #[must_use]
    pub fn volume_master_auto(&self) -> bool {
        self.volume.auto
    }
}
