// ✏️ Edit a client's contact details
//
// Builds a new snapshot from the descriptor; transactions and company are
// carried over untouched.

use super::{client_at, CommandResult};
use crate::entities::{Address, Client, Email, Name, Phone, Tag};
use crate::error::CommandError;
use crate::index::Index;
use crate::model::{ClientPredicate, Model};
use std::collections::BTreeSet;

pub const COMMAND_WORD: &str = "edit";

pub const MESSAGE_USAGE: &str = "edit: Edits the details of the client identified by the index \
    number used in the displayed client list. Existing values will be overwritten by the input values.\n\
    Parameters: INDEX (must be a positive integer) [n/NAME] [ph/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...\n\
    Example: edit 1 ph/91234567 e/johndoe@example.com";

// ============================================================================
// DESCRIPTOR
// ============================================================================

/// Fields to overwrite; `None` keeps the current value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditClientDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditClientDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    /// New snapshot of `client` with the descriptor applied
    pub fn apply(&self, client: &Client) -> Client {
        let mut edited = client.clone();
        if let Some(name) = &self.name {
            edited.name = name.clone();
        }
        if let Some(phone) = &self.phone {
            edited.phone = phone.clone();
        }
        if let Some(email) = &self.email {
            edited.email = email.clone();
        }
        if let Some(address) = &self.address {
            edited.address = address.clone();
        }
        if let Some(tags) = &self.tags {
            edited.tags = tags.clone();
        }
        edited
    }
}

// ============================================================================
// COMMAND
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    pub index: Index,
    pub descriptor: EditClientDescriptor,
}

impl EditCommand {
    pub fn new(index: Index, descriptor: EditClientDescriptor) -> Self {
        EditCommand { index, descriptor }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let target = client_at(model, self.index)?;
        let edited = self.descriptor.apply(&target);

        if !target.is_same_client(&edited) && model.has_client(&edited) {
            return Err(CommandError::DuplicateClient);
        }

        model.set_client(&target, edited.clone());
        model.update_filtered_client_list(ClientPredicate::ShowAll);
        log::info!("Edited client {}", edited.name.as_str());

        Ok(CommandResult::new(format!("Edited client: {}", edited)))
    }
}
