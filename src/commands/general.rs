// General commands - clear, exit, help, guide

use super::{CommandResult, COMMAND_USAGES};
use crate::model::{ClientPredicate, Model};

pub const CLEAR_COMMAND_WORD: &str = "clear";
pub const EXIT_COMMAND_WORD: &str = "exit";
pub const HELP_COMMAND_WORD: &str = "help";
pub const GUIDE_COMMAND_WORD: &str = "guide";

pub const CLEAR_MESSAGE_USAGE: &str = "clear: Deletes every client from the tracker.\n\
    Example: clear";
pub const EXIT_MESSAGE_USAGE: &str = "exit: Exits the program.\n\
    Example: exit";
pub const HELP_MESSAGE_USAGE: &str = "help: Shows program usage instructions.\n\
    Example: help";
pub const GUIDE_MESSAGE_USAGE: &str = "guide: Shows a summary of every command.\n\
    Example: guide";

pub(crate) fn execute_clear(model: &mut dyn Model) -> CommandResult {
    let removed = model.clients().len();
    model.clear();
    model.update_filtered_client_list(ClientPredicate::ShowAll);
    log::info!("Cleared {} clients", removed);
    CommandResult::new("Tracker has been cleared!")
}

pub(crate) fn execute_exit() -> CommandResult {
    CommandResult::new("Exiting tracker as requested ...").with_exit()
}

pub(crate) fn execute_help() -> CommandResult {
    CommandResult::new("Opened help window.").with_help()
}

/// Every command's usage, one block per command
pub fn guide_text() -> String {
    COMMAND_USAGES
        .iter()
        .map(|(_, usage)| *usage)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub(crate) fn execute_guide() -> CommandResult {
    CommandResult::new(guide_text())
}
