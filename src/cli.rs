//! # Command-Line Interface Module
//!
//! Clap definitions for the `wtxtp` driver.
//!
//! ## Commands
//!
//! - `volume`: show how a volume expression is interpreted
//! - `scan`: register rendered txtp files and report duplicates and stats
//! - `completion`: print a shell completion script
//!
//! ## Examples
//!
//! ```bash
//! wtxtp volume 50%
//! wtxtp scan --bank sound/BGM.bnk txtp/*.txtp
//! wtxtp scan --lang --volume=-3db --json txtp/*.txtp
//! ```

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
#[derive(Parser)]
#[command(name = "wtxtp")]
#[command(about = "Run bookkeeping for txtp playlist generation")]
#[command(version)]
pub struct Args {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the decibel offset a volume expression resolves to
    ///
    /// Accepts `*` (auto), decibels (`-6db`), percentages (`50%`) or
    /// plain multipliers (`2`).
    Volume {
        /// Volume expression
        #[arg(allow_hyphen_values = true)]
        expr: String,
    },

    /// Register rendered txtp files as one generation run
    ///
    /// Files are registered in the order given. The first occurrence of
    /// any content is new, later identical ones are duplicates.
    Scan(ScanArgs),

    /// Generate shell completions
    ///
    /// Usage: wtxtp completion bash > ~/.local/share/bash-completion/completions/wtxtp
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(ClapArgs, Debug)]
pub struct ScanArgs {
    /// Rendered txtp files
    #[arg(required = true)]
    pub playlists: Vec<PathBuf>,

    /// Bank files loaded for this run; the first one sets the basepath
    #[arg(long = "bank")]
    pub banks: Vec<PathBuf>,

    /// JSON config file (default: platform config dir)
    #[arg(long, env = "WTXTP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output directory
    #[arg(long)]
    pub outdir: Option<String>,

    /// Media subdirectory inside the output directory
    #[arg(long)]
    pub wemdir: Option<String>,

    /// Master volume expression
    #[arg(long, allow_hyphen_values = true)]
    pub volume: Option<String>,

    /// Per-language basepaths
    #[arg(long)]
    pub lang: bool,

    /// Count new txtp as unused
    #[arg(long)]
    pub unused: bool,

    /// Print statistics as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_negative_volume_accepted() {
        let args = Args::try_parse_from(["wtxtp", "volume", "-6db"]).expect("Should parse");
        match args.command {
            Command::Volume { expr } => assert_eq!(expr, "-6db"),
            _ => panic!("Expected volume command"),
        }
    }

    #[test]
    fn test_scan_requires_playlists() {
        assert!(Args::try_parse_from(["wtxtp", "scan"]).is_err());

        let args = Args::try_parse_from([
            "wtxtp", "scan", "--bank", "a.bnk", "--bank", "b.bnk", "--lang", "x.txtp",
        ])
        .expect("Should parse");
        match args.command {
            Command::Scan(scan) => {
                assert_eq!(scan.banks.len(), 2);
                assert!(scan.lang);
                assert_eq!(scan.playlists, vec![PathBuf::from("x.txtp")]);
            }
            _ => panic!("Expected scan command"),
        }
    }
}
