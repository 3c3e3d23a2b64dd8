//! One-shot CLI commands.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use pairnav_common::{EventBus, PairnavError};
use pairnav_config::{toml_loader, PairnavConfig};
use pairnav_core::{classify, BothOutcome, Host, OpenCoordinator, OpenResult, PairOutcome};
use pairnav_workbench::{WorkbenchHost, WorkspaceIndex};
use tracing::info;

/// Everything a command needs after startup.
pub struct Context {
    pub config_path: Option<PathBuf>,
    pub config: PairnavConfig,
    pub workspace: WorkspaceIndex,
}

impl Context {
    /// A fresh workbench host over the workspace, with its event bus.
    pub fn host(&self) -> (Arc<EventBus>, Arc<WorkbenchHost>) {
        let bus = Arc::new(EventBus::default());
        let host = Arc::new(WorkbenchHost::new(self.workspace.clone(), Arc::clone(&bus)));
        (bus, host)
    }
}

pub async fn open(ctx: &Context, file: &Path) -> pairnav_common::Result<()> {
    let (_bus, host) = ctx.host();
    let coordinator = OpenCoordinator::new(Arc::clone(&host), ctx.config.clone());

    let path = ctx.workspace.absolutize(file);
    host.user_open(&path).await?;
    let outcome = coordinator.open_pair(Some(path.as_path())).await;

    println!("{}", describe_pair(&outcome, &*host));
    print_state(&host);
    Ok(())
}

pub async fn open_both(ctx: &Context, file: &Path) -> pairnav_common::Result<()> {
    let (_bus, host) = ctx.host();
    let coordinator = OpenCoordinator::new(Arc::clone(&host), ctx.config.clone());

    let path = ctx.workspace.absolutize(file);
    let outcome = coordinator.open_both(Some(path.as_path())).await;

    println!("{}", describe_both(&outcome, &*host));
    print_state(&host);
    Ok(())
}

pub fn classify_file(ctx: &Context, file: &Path) {
    let config = ctx.config.pair_configuration();
    let relative = ctx.workspace.relativize(&ctx.workspace.absolutize(file));

    if config.directories().is_none() {
        println!("{relative}: not configured ({} unset)", config.missing_settings().join(", "));
        return;
    }
    match classify(&relative, &config) {
        Some(c) => println!("{relative}: {} -> {}", c.role, c.target_dir),
        None => println!("{relative}: not applicable"),
    }
}

pub fn init_config(path: &Path, force: bool) -> pairnav_common::Result<()> {
    if path.exists() && !force {
        return Err(PairnavError::Other(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    toml_loader::create_default_config(path)?;
    info!("wrote default config");
    println!("{}", path.display());
    Ok(())
}

/// Print the editor layout and drain pending notices.
pub fn print_state(host: &WorkbenchHost) {
    for line in host.render_layout() {
        println!("{line}");
    }
    for notice in host.drain_notifications() {
        println!("{notice}");
    }
}

pub fn describe_pair(outcome: &PairOutcome, host: &dyn Host) -> String {
    match outcome {
        PairOutcome::Opened(f) => format!("opened {}", host.relativize(f.path())),
        PairOutcome::AlreadyVisible(f) => {
            format!("already visible: {}", host.relativize(f.path()))
        }
        PairOutcome::NotFound { target_dir, stem } => {
            format!("no counterpart for '{stem}' in {target_dir}")
        }
        PairOutcome::OutOfScope => "not in a pair directory".into(),
        PairOutcome::NoFile => "no file".into(),
        PairOutcome::Misconfigured(missing) => format!("not configured: {}", missing.join(", ")),
        PairOutcome::Failed(e) => format!("failed: {e}"),
    }
}

pub fn describe_both(outcome: &BothOutcome, host: &dyn Host) -> String {
    match outcome {
        BothOutcome::Opened {
            original,
            counterparts,
        } => {
            let mut parts = vec![format!("original {}", describe_open(original))];
            for (file, result) in counterparts {
                parts.push(format!(
                    "{} {}",
                    host.relativize(file.path()),
                    describe_open(result)
                ));
            }
            parts.join(", ")
        }
        BothOutcome::NoCounterpart {
            original,
            target_dir,
        } => format!(
            "original {}, nothing to pair in {target_dir}",
            describe_open(original)
        ),
        BothOutcome::OutOfScope => "not in a pair directory".into(),
        BothOutcome::NoFile => "no file".into(),
        BothOutcome::Misconfigured(missing) => format!("not configured: {}", missing.join(", ")),
    }
}

fn describe_open(result: &OpenResult) -> String {
    match result {
        OpenResult::Opened => "opened".into(),
        OpenResult::AlreadyVisible => "already visible".into(),
        OpenResult::Failed(e) => format!("failed ({e})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairnav_common::FileRef;

    fn host() -> (tempfile::TempDir, WorkbenchHost) {
        let dir = tempfile::tempdir().unwrap();
        let host = WorkbenchHost::new(
            WorkspaceIndex::new(dir.path()),
            Arc::new(EventBus::default()),
        );
        (dir, host)
    }

    #[test]
    fn pair_outcomes_use_relative_paths() {
        let (_dir, host) = host();
        let file = FileRef::new(host.index().root().join("typeDefs/User.graphql"));
        assert_eq!(
            describe_pair(&PairOutcome::Opened(file), &host),
            "opened typeDefs/User.graphql"
        );
        assert_eq!(
            describe_pair(
                &PairOutcome::Misconfigured(vec!["pairing.source_dir"]),
                &host
            ),
            "not configured: pairing.source_dir"
        );
    }

    #[test]
    fn both_outcome_lists_each_file() {
        let (_dir, host) = host();
        let file = FileRef::new(host.index().root().join("resolvers/User.ts"));
        let outcome = BothOutcome::Opened {
            original: OpenResult::AlreadyVisible,
            counterparts: vec![(file, OpenResult::Opened)],
        };
        assert_eq!(
            describe_both(&outcome, &host),
            "original already visible, resolvers/User.ts opened"
        );
    }

    #[test]
    fn init_config_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairnav").join("config.toml");

        init_config(&path, false).unwrap();
        assert!(path.exists());
        assert!(init_config(&path, false).is_err());
        init_config(&path, true).unwrap();
    }
}
