//! Interactive editor session.
//!
//! Reads commands from stdin and drives the workbench the way a user
//! would, with automatic mode, the scope signal and live config reload
//! running in the background.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use pairnav_common::{Action, Event, EventBus, PairnavError};
use pairnav_config::{toml_loader, PairnavConfig, ReloadManager};
use pairnav_core::{ActionOutcome, OpenCoordinator, CONTEXT_KEY};
use pairnav_workbench::WorkbenchHost;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::commands::{describe_both, describe_pair, print_state, Context};

const HELP: &str = "\
commands:
  view <file>      open a file as the user would (triggers automatic mode)
  open [file]      open corresponding file (default: active file)
  both [file]      open both files (default: active file)
  run <command-id> run a palette command on the active file
  palette          list palette commands and whether they are enabled
  close <file>     close every tab showing a file
  focus <group>    focus an editor group
  layout           show editor groups
  help             show this list
  quit             end the session";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    View(PathBuf),
    Open(Option<PathBuf>),
    Both(Option<PathBuf>),
    Run(String),
    Palette,
    Close(PathBuf),
    Focus(u32),
    Layout,
    Help,
    Quit,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Result<Option<SessionCommand>, String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let arg = (!rest.is_empty()).then(|| PathBuf::from(rest));

        let command = match word {
            "view" => SessionCommand::View(required(arg, word)?),
            "open" => SessionCommand::Open(arg),
            "both" => SessionCommand::Both(arg),
            "run" if !rest.is_empty() => SessionCommand::Run(rest.to_string()),
            "run" => return Err("run: missing command id".into()),
            "palette" => SessionCommand::Palette,
            "close" => SessionCommand::Close(required(arg, word)?),
            "focus" => SessionCommand::Focus(
                rest.parse()
                    .map_err(|_| format!("focus: expected a group number, got '{rest}'"))?,
            ),
            "layout" => SessionCommand::Layout,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            other => return Err(format!("unknown command '{other}' (try 'help')")),
        };
        Ok(Some(command))
    }
}

fn required(arg: Option<PathBuf>, word: &str) -> Result<PathBuf, String> {
    arg.ok_or_else(|| format!("{word}: missing file"))
}

pub async fn run(ctx: Context) -> pairnav_common::Result<()> {
    let config_path = ctx
        .config_path
        .clone()
        .ok_or_else(|| PairnavError::Other("session needs a config file path".into()))?;
    if !config_path.exists() {
        toml_loader::create_default_config(&config_path)?;
    }

    let (_initial, config_rx) = ReloadManager::start(config_path.clone()).await;
    let bus = Arc::new(EventBus::default());
    let host = Arc::new(WorkbenchHost::new(ctx.workspace.clone(), Arc::clone(&bus)));
    let coordinator = Arc::new(OpenCoordinator::new(Arc::clone(&host), config_rx.clone()));

    let listener = tokio::spawn(Arc::clone(&coordinator).run(bus.subscribe()));

    // Forward reloads onto the editor bus.
    let mut reloads = config_rx;
    let reload_bus = Arc::clone(&bus);
    let forwarder = tokio::spawn(async move {
        while reloads.changed().await.is_ok() {
            info!("configuration reloaded");
            reload_bus.publish(Event::ConfigurationChanged);
        }
    });

    let mut scope = coordinator.scope().subscribe();
    let scope_printer = tokio::spawn(async move {
        while scope.changed().await.is_ok() {
            let in_scope = scope.borrow_and_update().in_scope();
            println!("{CONTEXT_KEY} = {in_scope}");
        }
    });

    println!(
        "pairnav session in {} (config: {}). Type 'help' for commands.",
        ctx.workspace.root().display(),
        config_path.display()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        debug!(?command, "session command");
        if command == SessionCommand::Quit {
            break;
        }
        execute(&ctx, &host, &coordinator, command).await;
        for notice in host.drain_notifications() {
            println!("{notice}");
        }
    }

    bus.publish(Event::Shutdown);
    if let Err(e) = listener.await {
        warn!("coordinator task failed: {e}");
    }
    forwarder.abort();
    scope_printer.abort();
    info!("session ended");
    Ok(())
}

type SessionCoordinator = OpenCoordinator<WorkbenchHost, watch::Receiver<PairnavConfig>>;

async fn execute(
    ctx: &Context,
    host: &Arc<WorkbenchHost>,
    coordinator: &SessionCoordinator,
    command: SessionCommand,
) {
    let resolve = |file: &Path| ctx.workspace.absolutize(file);
    let active = || host.with_workbench(|wb| wb.active_file().map(Path::to_path_buf));

    match command {
        SessionCommand::View(file) => {
            if let Err(e) = host.user_open(&resolve(&file)).await {
                println!("{e}");
            }
        }
        SessionCommand::Open(file) => {
            let target = file.map(|f| resolve(&f)).or_else(active);
            let outcome = coordinator.open_pair(target.as_deref()).await;
            println!("{}", describe_pair(&outcome, &**host));
        }
        SessionCommand::Both(file) => {
            let target = file.map(|f| resolve(&f)).or_else(active);
            let outcome = coordinator.open_both(target.as_deref()).await;
            println!("{}", describe_both(&outcome, &**host));
        }
        SessionCommand::Run(id) => match Action::from_command_id(&id) {
            Some(action) => {
                let target = active();
                match coordinator.dispatch(action, target.as_deref()).await {
                    ActionOutcome::Pair(outcome) => println!("{}", describe_pair(&outcome, &**host)),
                    ActionOutcome::Both(outcome) => println!("{}", describe_both(&outcome, &**host)),
                    ActionOutcome::ConfigurationRefreshed => println!("configuration refreshed"),
                    ActionOutcome::Ignored => {}
                }
            }
            None => println!("unknown command id '{id}'"),
        },
        SessionCommand::Palette => {
            let in_scope = coordinator.scope().current().in_scope();
            for action in Action::palette_actions() {
                let enabled = !action.requires_pair_scope() || in_scope;
                let marker = if enabled { " " } else { "-" };
                println!("{marker} {:<28} {}", action.command_id(), action.label());
            }
        }
        SessionCommand::Close(file) => {
            if !host.user_close(&resolve(&file)) {
                println!("{} is not open", file.display());
            }
        }
        SessionCommand::Focus(group) => {
            if !host.user_focus(group) {
                println!("no group {group}");
            }
        }
        SessionCommand::Layout => print_state(host),
        SessionCommand::Help => println!("{HELP}"),
        SessionCommand::Quit => {}
    }
}
