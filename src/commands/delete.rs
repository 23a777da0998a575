// 🗑️ Delete a client

use super::{client_at, CommandResult};
use crate::error::CommandError;
use crate::index::Index;
use crate::model::Model;

pub const COMMAND_WORD: &str = "delete";

pub const MESSAGE_USAGE: &str = "delete: Deletes the client, or the client's company, identified \
    by the index number used in the displayed client list.\n\
    Parameters: INDEX (must be a positive integer) m/client|company\n\
    Example: delete 1 m/client";

/// `delete INDEX m/client`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteClientCommand {
    pub index: Index,
}

impl DeleteClientCommand {
    pub fn new(index: Index) -> Self {
        DeleteClientCommand { index }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let client = client_at(model, self.index)?;

        model.delete_client(&client);
        log::info!("Deleted client {}", client.name.as_str());
        Ok(CommandResult::new(format!("Deleted client: {}", client)))
    }
}
