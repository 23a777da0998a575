// 🔍 View commands - change what the client and transaction lists show
// None of these touch stored data.

use super::{client_at, CommandResult};
use crate::entities::TransactionFilter;
use crate::error::CommandError;
use crate::index::Index;
use crate::model::{ClientPredicate, Model};

pub const FIND_COMMAND_WORD: &str = "find";
pub const FILTER_COMMAND_WORD: &str = "filter";
pub const VIEW_COMMAND_WORD: &str = "view";
pub const LIST_COMMAND_WORD: &str = "list";

pub const FIND_MESSAGE_USAGE: &str = "find: Finds all clients whose names contain any of the \
    specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
    Parameters: KEYWORD [MORE_KEYWORDS]...\n\
    Example: find alice bob charlie";

pub const FILTER_MESSAGE_USAGE: &str = "filter: Filters buy or sell transactions.\n\
    Parameters: buy|sell\n\
    Example: filter buy";

pub const VIEW_MESSAGE_USAGE: &str = "view: Shows the transactions of the client identified by the \
    index number used in the displayed client list.\n\
    Parameters: INDEX (must be a positive integer)\n\
    Example: view 1";

pub const LIST_MESSAGE_USAGE: &str = "list: Lists all clients and all their transactions.\n\
    Example: list";

// ============================================================================
// FIND
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    pub predicate: ClientPredicate,
}

impl FindCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        FindCommand {
            predicate: ClientPredicate::NameContainsKeywords(keywords),
        }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_client_list(self.predicate.clone());
        let shown = model.filtered_client_list().len();
        Ok(CommandResult::new(format!("{} clients listed!", shown)))
    }
}

// ============================================================================
// FILTER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCommand {
    pub filter: TransactionFilter,
}

impl FilterCommand {
    pub fn buy() -> Self {
        FilterCommand {
            filter: TransactionFilter::Buy,
        }
    }

    pub fn sell() -> Self {
        FilterCommand {
            filter: TransactionFilter::Sell,
        }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_client_list(ClientPredicate::ShowAll);
        model.update_filtered_transaction_list(self.filter);

        let label = match self.filter {
            TransactionFilter::Sell => "sell",
            TransactionFilter::Buy | TransactionFilter::All => "buy",
        };
        Ok(CommandResult::new(format!("Filtered all {} transactions.", label)).with_transaction_refresh())
    }
}

// ============================================================================
// VIEW
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewCommand {
    pub index: Index,
}

impl ViewCommand {
    pub fn new(index: Index) -> Self {
        ViewCommand { index }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let client = client_at(model, self.index)?;

        model.update_filtered_client_list(ClientPredicate::SameClient(client.name.clone()));
        model.update_filtered_transaction_list(TransactionFilter::All);

        Ok(CommandResult::new(format!("Viewing client: {}", client.name.as_str())).with_transaction_refresh())
    }
}

// ============================================================================
// LIST
// ============================================================================

pub(crate) fn execute_list(model: &mut dyn Model) -> CommandResult {
    model.update_filtered_client_list(ClientPredicate::ShowAll);
    model.update_filtered_transaction_list(TransactionFilter::All);
    CommandResult::new("Listed all clients")
}
