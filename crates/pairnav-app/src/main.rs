mod cli;
mod commands;
mod session;

use std::path::PathBuf;

use pairnav_common::{ConfigError, PairnavError};
use pairnav_config::{toml_loader, validation, PairnavConfig};
use pairnav_workbench::WorkspaceIndex;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};
use crate::commands::Context;

const DEFAULT_DIRECTIVE: &str = "pairnav=info";

/// Load the config named by `--config`, else the platform default.
/// Runs before logging is initialised, so problems are returned, not logged.
fn load_config(args: &Args) -> (Option<PathBuf>, Result<PairnavConfig, ConfigError>) {
    match &args.config {
        Some(path) => (Some(path.clone()), toml_loader::load_from_path(path)),
        None => match toml_loader::default_config_path() {
            Ok(path) => (Some(path), toml_loader::load_default()),
            Err(e) => (None, Err(e)),
        },
    }
}

fn init_logging(args: &Args, config: Option<&PairnavConfig>) {
    let directive = args
        .log_level
        .as_deref()
        .or_else(|| config.map(|c| c.logging.level.directive()))
        .unwrap_or(DEFAULT_DIRECTIVE);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| DEFAULT_DIRECTIVE.parse().unwrap()),
            ),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args) -> pairnav_common::Result<()> {
    let (config_path, loaded) = load_config(&args);
    init_logging(&args, loaded.as_ref().ok());

    tracing::debug!("pairnav v{} starting", env!("CARGO_PKG_VERSION"));

    if let Command::InitConfig { force } = args.command {
        let path = config_path
            .ok_or_else(|| PairnavError::Other("could not determine config path".into()))?;
        return commands::init_config(&path, force);
    }

    let config = match loaded {
        Ok(config) => {
            if let Err(e) = validation::validate(&config) {
                tracing::warn!("config validation warning: {e}");
            }
            config
        }
        Err(e) => {
            tracing::warn!("config load failed, using defaults: {e}");
            PairnavConfig::default()
        }
    };

    let root = match &args.workspace {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let ctx = Context {
        config_path,
        config,
        workspace: WorkspaceIndex::new(root),
    };
    tracing::debug!(root = %ctx.workspace.root().display(), "workspace");

    match args.command {
        Command::Open { file } => commands::open(&ctx, &file).await,
        Command::OpenBoth { file } => commands::open_both(&ctx, &file).await,
        Command::Classify { file } => {
            commands::classify_file(&ctx, &file);
            Ok(())
        }
        Command::ShowConfig => {
            println!("{}", pairnav_config::config_to_json(&ctx.config));
            Ok(())
        }
        Command::Session => session::run(ctx).await,
        Command::InitConfig { .. } => Ok(()),
    }
}

#[tokio::main]
async fn main() {
    let args = cli::parse();
    if let Err(e) = run(args).await {
        tracing::error!("{e}");
        eprintln!("pairnav: {e}");
        std::process::exit(1);
    }
}
