use serde::{Deserialize, Serialize};

/// Every user-triggerable action.
///
/// Command palette entries, context menus and the CLI all resolve to an
/// `Action`; the coordinator dispatcher matches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    OpenCorrespondingFile,
    OpenBothFiles,
    ReloadConfig,
    None,
}

impl Action {
    /// Stable identifier used by the host's command surface.
    pub fn command_id(&self) -> &'static str {
        match self {
            Action::OpenCorrespondingFile => "pairnav.openCorrespondingFile",
            Action::OpenBothFiles => "pairnav.openBothFiles",
            Action::ReloadConfig => "pairnav.reloadConfig",
            Action::None => "pairnav.none",
        }
    }

    /// Human-readable label for display in the command palette.
    pub fn label(&self) -> &'static str {
        match self {
            Action::OpenCorrespondingFile => "Open Corresponding File",
            Action::OpenBothFiles => "Open Both Files",
            Action::ReloadConfig => "Reload Config",
            Action::None => "None",
        }
    }

    /// Whether the action should only be offered on files inside a pair directory.
    pub fn requires_pair_scope(&self) -> bool {
        matches!(self, Action::OpenCorrespondingFile | Action::OpenBothFiles)
    }

    pub fn from_command_id(id: &str) -> Option<Action> {
        Self::palette_actions()
            .into_iter()
            .find(|a| a.command_id() == id)
    }

    /// All actions that should appear in the command palette.
    pub fn palette_actions() -> Vec<Action> {
        vec![
            Action::OpenCorrespondingFile,
            Action::OpenBothFiles,
            Action::ReloadConfig,
        ]
    }
}
