use crate::config::Config;
use crate::paths;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "judgeseed")]
#[command(about = "Seed example judge executables into a content-addressed store")]
#[command(version)]
pub struct Cli {
    /// Store root directory (default: config, then ~/.judgeseed/store)
    #[arg(long, global = true, value_name = "DIR")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Seed the boolfind example executables from their zip archives
    Seed {
        /// Directory holding files/examples/ (default: config, then
        /// the current directory)
        #[arg(long, value_name = "DIR")]
        base_dir: Option<PathBuf>,
    },

    /// List stored executables
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details for one executable
    Show {
        /// Executable id (e.g. boolfind_cmp)
        execid: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check stored bundle payloads against their recorded digests
    Verify {
        /// Executable id to verify (default: all)
        execid: Option<String>,
    },

    /// Remove a stored executable
    Remove {
        /// Executable id to remove
        execid: String,
    },

    /// View or set persistent defaults
    Config {
        /// Default store root directory
        #[arg(long, value_name = "DIR")]
        store_dir: Option<PathBuf>,

        /// Default fixtures base directory
        #[arg(long, value_name = "DIR")]
        base_dir: Option<PathBuf>,
    },
}

/// Resolve the store root: flag, then config, then the default path
pub fn resolve_store_root(flag: Option<PathBuf>, config: &Config) -> PathBuf {
    flag.or_else(|| config.store_dir().map(Path::to_path_buf))
        .unwrap_or_else(paths::store_dir)
}

pub mod configure;
pub mod list;
pub mod remove;
pub mod seed;
pub mod show;
pub mod verify;
