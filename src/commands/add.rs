// ➕ Add a new client

use super::CommandResult;
use crate::entities::Client;
use crate::error::CommandError;
use crate::model::Model;

pub const COMMAND_WORD: &str = "add";

pub const MESSAGE_USAGE: &str = "add: Adds a client to the tracker.\n\
    Parameters: n/NAME ph/PHONE e/EMAIL a/ADDRESS [t/TAG]...\n\
    Example: add n/John Doe ph/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 t/supplier";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    pub client: Client,
}

impl AddCommand {
    pub fn new(client: Client) -> Self {
        AddCommand { client }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if model.has_client(&self.client) {
            return Err(CommandError::DuplicateClient);
        }

        model.add_client(self.client.clone());
        log::info!("Added client {}", self.client.name.as_str());
        Ok(CommandResult::new(format!("New client added: {}", self.client)))
    }
}
