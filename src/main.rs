//! # wtxtp
//!
//! Driver for the run bookkeeping of a txtp generation pass.
//!
//! ## Usage
//!
//! ```bash
//! # How is a volume expression read?
//! wtxtp volume 50%
//!
//! # Register already printed txtp as one run
//! wtxtp scan --bank sound/BGM.bnk --bank sound/SFX.bnk txtp/*.txtp
//! ```

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::{info, warn};
use std::io;
use wtxtp::bank::{fingerprint_all, FsBank, RenderedPlaylist};
use wtxtp::cli::{self, ScanArgs};
use wtxtp::completion;
use wtxtp::config::RunConfig;
use wtxtp::context::RunContext;
use wtxtp::volume::VolumeOutcome;

/// Initializes logging (`RUST_LOG`, e.g. `RUST_LOG=wtxtp=debug`), parses
/// arguments and routes the subcommand.
fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();

    match args.command {
        cli::Command::Volume { expr } => {
            let mut context = RunContext::default();
            match context.set_volume(Some(&expr)) {
                VolumeOutcome::Applied { auto: true, .. } => println!("auto"),
                VolumeOutcome::Applied { db, .. } => println!("{db} dB"),
                VolumeOutcome::Empty
                | VolumeOutcome::IgnoredInvalid
                | VolumeOutcome::IgnoredNonPositive => println!("unchanged"),
            }
        }
        cli::Command::Scan(scan_args) => {
            scan(scan_args)?;
        }
        cli::Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(
                completion::shell_to_completion_shell(&shell),
                &mut cmd,
                &mut io::stdout(),
            );
        }
    }

    Ok(())
}

fn scan(args: ScanArgs) -> Result<()> {
    let mut config = RunConfig::load_or_default(args.config.as_deref())?;
    config.lang |= args.lang;
    if args.volume.is_some() {
        config.volume = args.volume;
    }
    let outdir = args.outdir.unwrap_or_else(|| config.outdir.clone());
    let wemdir = args.wemdir.unwrap_or_else(|| config.wemdir.clone());

    let mut context = RunContext::new(config);
    context.set_output_dirs(Some(outdir.as_str()), Some(wemdir.as_str()));
    context.unused_mark = args.unused;

    let banks = args
        .banks
        .iter()
        .map(|path| FsBank::from_path(path))
        .collect::<Result<Vec<_>>>()?;
    for bank in &banks {
        context.register_bank(&bank.id);
    }
    context.set_basepath(&banks);

    let mut playlists = Vec::with_capacity(args.playlists.len());
    for path in &args.playlists {
        match RenderedPlaylist::read(path) {
            Ok(playlist) => playlists.push(playlist),
            Err(e) => warn!("Skipping playlist: {e:#}"),
        }
    }
    info!("Registering {} playlists", playlists.len());

    let fingerprints = fingerprint_all(&playlists);
    for (playlist, fingerprint) in playlists.iter().zip(fingerprints) {
        let is_new = context.register_content(fingerprint, playlist);
        let mut line = format!("{}: {}", playlist.name, if is_new { "new" } else { "duplicate" });
        if (is_new || context.config.dupes) && !context.register_name(&playlist.name) {
            line.push_str(" (name-collision)");
        }
        println!("{line}");
    }

    println!("output: {}", context.get_output_dir());
    if let Some(bank) = banks.first() {
        println!("basepath: {}", context.get_basepath(bank));
    }
    match (context.volume_master(), context.volume_master_auto()) {
        (_, true) => println!("volume: auto"),
        (Some(db), false) => println!("volume: {db} dB"),
        (None, false) => {}
    }

    context.stats.log_summary();
    if args.json {
        println!("{}", context.stats.to_json()?);
    } else {
        let stats = &context.stats;
        println!(
            "created: {}, duplicates: {}, unused: {}, streams: {}, internals: {}, names: {}",
            stats.created,
            stats.duplicates,
            stats.unused,
            stats.streams,
            stats.internals,
            stats.names
        );
    }

    Ok(())
}
