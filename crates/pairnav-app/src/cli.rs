use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// pairnav: jump between a file and its same-named counterpart in a paired directory.
#[derive(Parser, Debug)]
#[command(name = "pairnav", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Workspace root (defaults to the current directory).
    #[arg(short = 'w', long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Log filter directive override (e.g. `pairnav=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the counterpart of a file beside it.
    Open { file: PathBuf },
    /// Open a file together with every same-named file in both directories.
    OpenBoth { file: PathBuf },
    /// Report which directory role a file belongs to.
    Classify { file: PathBuf },
    /// Interactive editor session with automatic mode and live config reload.
    Session,
    /// Write the default config file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration as JSON.
    ShowConfig,
}

pub fn parse() -> Args {
    Args::parse()
}
