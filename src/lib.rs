//! Run bookkeeping for generating txtp playlists from audio banks.
//!
//! A generation pass turns loaded banks into many small txtp files. While it
//! runs, something has to remember what was already written, where outputs
//! go and how loud they should be. That is this crate.
//!
//! Core modules:
//! - [`ledger`] - Duplicate content and name collision tracking
//! - [`basepath`] - Shared output root for a batch of banks
//! - [`volume`] - Volume expression to decibel offset
//! - [`context`] - The per-run aggregate tying them together
//!
//! ### Supporting Modules
//!
//! - [`config`] - Run configuration and config file loading
//! - [`stats`] - Run counters and reporting
//! - [`bank`] - Filesystem-backed banks and printed playlists
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//!
//! ## Quick Start Example
//!
//! ```
//! use wtxtp::bank::RenderedPlaylist;
//! use wtxtp::config::RunConfig;
//! use wtxtp::context::RunContext;
//!
//! let mut context = RunContext::new(RunConfig::default());
//! context.set_volume(Some("50%"));
//! assert_eq!(context.volume_master(), Some(-6.0));
//!
//! let txtp = RenderedPlaylist::from_text("bgm_01", "wem/100.wem\n".to_string());
//! assert!(context.register_content(txtp.fingerprint(), &txtp));
//! assert!(!context.register_content(txtp.fingerprint(), &txtp));
//! assert_eq!(context.stats.duplicates, 1);
//! ```
//!
//! ## Error Handling
//!
//! The bookkeeping itself never fails: duplicates and collisions are normal
//! outcomes reported through return values and counters, and bad volume input
//! is ignored with an informational log line. Only the edges that touch the
//! filesystem (config loading, reading playlists) return `anyhow::Result`.

pub mod bank;
pub mod basepath;
pub mod cli;
pub mod completion;
pub mod config;
pub mod context;
pub mod ledger;
pub mod stats;
pub mod volume;
