//! # Deduplication Ledger
//!
//! Tracks which rendered playlists and which output names have already been
//! produced during one generation run.
//!
//! - **Content**: every fully rendered txtp is reduced to a [`Fingerprint`].
//!   The first registration of a fingerprint is "new", every later one is a
//!   duplicate and must not be written again.
//! - **Names**: proposed output names are hashed and the hash is the identity.
//!   Two different names with the same hash collide. The default hash is not
//!   collision resistant, so a very small share of distinct names can be
//!   reported as taken.
//! - **Banks**: a plain presence set of bank identifiers seen during the run.
//!
//! Nothing here fails or performs I/O; outcomes are reported through return
//! values and the [`RunStats`] counters.

use crate::stats::RunStats;
use log::{debug, trace};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// Media capabilities of a generated playlist, as reported by whatever
/// printed it.
pub trait OutputMedia {
    /// The playlist references media embedded inside a bank.
    fn has_internal_media(&self) -> bool;
    /// The playlist references streamed media files.
    fn has_streamed_media(&self) -> bool;
}

/// Opaque fingerprint of a rendered playlist's full text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// Fingerprint of the exact text, whitespace and order included.
    #[must_use]
    pub fn of_text(text: &str) -> Self {
        Self(fixed_hash(text))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Fingerprint {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Hash function applied to proposed output names.
pub type NameHasher = fn(&str) -> u64;

/// Default name hash. Fixed keys, so equal names always hash the same.
#[must_use]
pub fn default_name_hash(name: &str) -> u64 {
    fixed_hash(name)
}

fn fixed_hash(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}

/// Content, name and bank registries for a single run.
#[derive(Debug, Clone)]
pub struct DedupLedger {
    seen_content: HashSet<Fingerprint>,
    seen_names: HashSet<u64>,
    banks: HashSet<String>,
    name_hasher: NameHasher,
}

impl Default for DedupLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl DedupLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::with_name_hasher(default_name_hash)
    }

    /// Ledger using a custom name hash.
    #[must_use]
    pub fn with_name_hasher(name_hasher: NameHasher) -> Self {
        Self {
            seen_content: HashSet::new(),
            seen_names: HashSet::new(),
            banks: HashSet::new(),
            name_hasher,
        }
    }

    /// Registers a rendered playlist. Returns `true` the first time a
    /// fingerprint is seen; callers must skip writing when this is `false`.
    ///
    /// `unused_mark` is the pipeline's mark as it stands at this call.
    pub fn register_content<M>(
        &mut self,
        fingerprint: Fingerprint,
        media: &M,
        unused_mark: bool,
        stats: &mut RunStats,
    ) -> bool
    where
        M: OutputMedia + ?Sized,
    {
        if self.seen_content.contains(&fingerprint) {
            stats.duplicates += 1;
            trace!("Duplicate content {:016x}", fingerprint.value());
            return false;
        }

        self.seen_content.insert(fingerprint);
        stats.created += 1;
        if unused_mark {
            stats.unused += 1;
        }
        if media.has_internal_media() {
            stats.internals += 1;
        }
        if media.has_streamed_media() {
            stats.streams += 1;
        }
        trace!("New content {:016x}", fingerprint.value());
        true
    }

    /// Registers a proposed output name. Every attempt is counted; returns
    /// `false` when the name's hash is already taken.
    pub fn register_name(&mut self, name: &str, stats: &mut RunStats) -> bool {
        let hashed = (self.name_hasher)(name);

        stats.names += 1;
        if !self.seen_names.insert(hashed) {
            debug!("Name collision for '{name}'");
            return false;
        }
        true
    }

    pub fn register_bank(&mut self, bank_id: &str) {
        if !self.banks.contains(bank_id) {
            self.banks.insert(bank_id.to_string());
        }
    }

    #[must_use]
    pub fn banks(&self) -> &HashSet<String> {
        &self.banks
    }

    #[must_use]
    pub fn has_bank(&self, bank_id: &str) -> bool {
        self.banks.contains(bank_id)
    }

    #[must_use]
    pub fn content_count(&self) -> usize {
        self.seen_content.len()
    }

    #[must_use]
    pub fn name_count(&self) -> usize {
        self.seen_names.len()
    }
}
