use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "agentreg",
    about = "Import agent profiles into a categorized registry",
    version,
    after_help = "Logs are written to: ~/.local/share/agentreg/logs/agentreg.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to agentreg.yaml config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, help = "Suppress non-error output")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert agent profiles into records and write the registry
    Import {
        /// Directory of agent profiles
        #[arg(long)]
        source: Option<PathBuf>,

        /// Output root for per-agent files
        #[arg(long)]
        output: Option<PathBuf>,

        /// Registry file to write
        #[arg(long)]
        registry: Option<PathBuf>,
    },

    /// Generate category index files from the registry
    Categories {
        /// Registry file to read
        #[arg(long)]
        registry: Option<PathBuf>,

        /// Directory for category files
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Seed for placeholder ratings and downloads
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Fill localized names and descriptions in imported metadata
    Translate {
        /// Output root containing <author>/<agent>/metadata.json
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Run import, then categories
    Build {
        /// Seed for placeholder ratings and downloads
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

/// Console verbosity from the global flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    pub fn is_quiet(&self) -> bool {
        *self == Verbosity::Quiet
    }

    pub fn is_verbose(&self) -> bool {
        *self == Verbosity::Verbose
    }
}
