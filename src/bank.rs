//! Filesystem-backed collaborators used by the `wtxtp` binary.
//!
//! [`FsBank`] treats a bank file as the root of its own tree, rooted at the
//! directory holding it. [`RenderedPlaylist`] wraps already printed txtp text
//! and infers its media from the lines it references: `.bnk` entries point at
//! media embedded in a bank, `.wem` entries at streamed files.

use crate::basepath::{normalize_path, BankNode};
use crate::ledger::{Fingerprint, OutputMedia};
use anyhow::{anyhow, Context, Result};
use path_absolutize::Absolutize;
use rayon::prelude::*;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsBank {
    /// Bank identifier, the file stem
    pub id: String,
    dir: String,
}

impl FsBank {
    /// Describes the bank at `path`. The file need not exist.
    pub fn from_path(path: &Path) -> Result<Self> {
        let absolute = path
            .absolutize()
            .with_context(|| format!("Failed to resolve bank path {}", path.display()))?;
        let id = absolute
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .ok_or_else(|| anyhow!("Bank path has no file name: {}", path.display()))?;
        let dir = absolute
            .parent()
            .map(|parent| parent.to_string_lossy().into_owned());

        Ok(Self {
            id,
            dir: normalize_path(dir.as_deref()),
        })
    }
}

impl BankNode for FsBank {
    fn root(&self) -> &dyn BankNode {
        self
    }

    fn path(&self) -> &str {
        &self.dir
    }
}

/// A printed txtp, ready to be registered.
#[derive(Debug, Clone)]
pub struct RenderedPlaylist {
    pub name: String,
    pub text: String,
    has_internals: bool,
    has_streams: bool,
}

impl RenderedPlaylist {
    #[must_use]
    pub fn from_text(name: &str, text: String) -> Self {
        let mut has_internals = false;
        let mut has_streams = false;
        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line = line.to_ascii_lowercase();
            has_internals |= line.contains(".bnk");
            has_streams |= line.contains(".wem");
        }

        Self {
            name: name.to_string(),
            text,
            has_internals,
            has_streams,
        }
    }

    /// Reads a txtp file; the name is its file stem.
    pub fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read playlist {}", path.display()))?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::from_text(&name, text))
    }

    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of_text(&self.text)
    }
}

impl OutputMedia for RenderedPlaylist {
    fn has_internal_media(&self) -> bool {
        self.has_internals
    }

    fn has_streamed_media(&self) -> bool {
        self.has_streams
    }
}

/// Fingerprints a batch in parallel. Output order matches input order, so
/// registering the results in sequence keeps first-come-first-served.
#[must_use]
pub fn fingerprint_all(playlists: &[RenderedPlaylist]) -> Vec<Fingerprint> {
    playlists.par_iter().map(RenderedPlaylist::fingerprint).collect()
}
