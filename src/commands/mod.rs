// 🎯 Commands - one immutable value per user intent
//
// Command is a closed enum: every parser produces one variant, and
// `execute` is the only place that touches the model. Each command checks
// everything first (index bounds, duplicates) and mutates last, so a failed
// command leaves the model exactly as it found it.

pub mod add;
pub mod company;
pub mod delete;
pub mod edit;
pub mod general;
pub mod trade;
pub mod view;

pub use add::AddCommand;
pub use company::{CreateCommand, DeleteCompanyCommand};
pub use delete::DeleteClientCommand;
pub use edit::{EditClientDescriptor, EditCommand};
pub use trade::TradeCommand;
pub use view::{FilterCommand, FindCommand, ViewCommand};

use crate::entities::Client;
use crate::error::CommandError;
use crate::index::Index;
use crate::model::Model;

// ============================================================================
// COMMAND RESULT
// ============================================================================

/// What the shell should show and do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,

    /// Terminate the session
    pub exit: bool,

    /// Show the help screen
    pub show_help: bool,

    /// The transaction view changed and should be redrawn
    pub refresh_transactions: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        CommandResult {
            feedback: feedback.into(),
            exit: false,
            show_help: false,
            refresh_transactions: false,
        }
    }

    /// Builder pattern: ask the shell to exit
    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }

    /// Builder pattern: ask the shell to show help
    pub fn with_help(mut self) -> Self {
        self.show_help = true;
        self
    }

    /// Builder pattern: ask the shell to redraw transactions
    pub fn with_transaction_refresh(mut self) -> Self {
        self.refresh_transactions = true;
        self
    }
}

// ============================================================================
// COMMAND
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Buy(TradeCommand),
    Sell(TradeCommand),
    Create(CreateCommand),
    DeleteClient(DeleteClientCommand),
    DeleteCompany(DeleteCompanyCommand),
    Edit(EditCommand),
    Find(FindCommand),
    Filter(FilterCommand),
    View(ViewCommand),
    List,
    Clear,
    Exit,
    Help,
    Guide,
}

impl Command {
    /// The command word this command was parsed from
    pub fn word(&self) -> &'static str {
        match self {
            Command::Add(_) => add::COMMAND_WORD,
            Command::Buy(_) => trade::BUY_COMMAND_WORD,
            Command::Sell(_) => trade::SELL_COMMAND_WORD,
            Command::Create(_) => company::CREATE_COMMAND_WORD,
            Command::DeleteClient(_) | Command::DeleteCompany(_) => delete::COMMAND_WORD,
            Command::Edit(_) => edit::COMMAND_WORD,
            Command::Find(_) => view::FIND_COMMAND_WORD,
            Command::Filter(_) => view::FILTER_COMMAND_WORD,
            Command::View(_) => view::VIEW_COMMAND_WORD,
            Command::List => view::LIST_COMMAND_WORD,
            Command::Clear => general::CLEAR_COMMAND_WORD,
            Command::Exit => general::EXIT_COMMAND_WORD,
            Command::Help => general::HELP_COMMAND_WORD,
            Command::Guide => general::GUIDE_COMMAND_WORD,
        }
    }

    /// Does this command change stored data (and so need saving)?
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Add(_)
                | Command::Buy(_)
                | Command::Sell(_)
                | Command::Create(_)
                | Command::DeleteClient(_)
                | Command::DeleteCompany(_)
                | Command::Edit(_)
                | Command::Clear
        )
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        log::debug!("Executing {} command", self.word());

        match self {
            Command::Add(cmd) => cmd.execute(model),
            Command::Buy(cmd) | Command::Sell(cmd) => cmd.execute(model),
            Command::Create(cmd) => cmd.execute(model),
            Command::DeleteClient(cmd) => cmd.execute(model),
            Command::DeleteCompany(cmd) => cmd.execute(model),
            Command::Edit(cmd) => cmd.execute(model),
            Command::Find(cmd) => cmd.execute(model),
            Command::Filter(cmd) => cmd.execute(model),
            Command::View(cmd) => cmd.execute(model),
            Command::List => Ok(view::execute_list(model)),
            Command::Clear => Ok(general::execute_clear(model)),
            Command::Exit => Ok(general::execute_exit()),
            Command::Help => Ok(general::execute_help()),
            Command::Guide => Ok(general::execute_guide()),
        }
    }
}

// ============================================================================
// SHARED HELPERS
// ============================================================================

/// Resolve `index` against the filtered view as it is *now*.
pub(crate) fn client_at(model: &dyn Model, index: Index) -> Result<Client, CommandError> {
    let visible = model.filtered_client_list();
    visible
        .get(index.zero_based())
        .map(|client| (*client).clone())
        .ok_or(CommandError::InvalidIndex {
            index: index.one_based(),
            visible: visible.len(),
        })
}

/// Every command word with its usage text, in guide order
pub const COMMAND_USAGES: &[(&str, &str)] = &[
    (add::COMMAND_WORD, add::MESSAGE_USAGE),
    (company::CREATE_COMMAND_WORD, company::CREATE_MESSAGE_USAGE),
    (trade::BUY_COMMAND_WORD, trade::BUY_MESSAGE_USAGE),
    (trade::SELL_COMMAND_WORD, trade::SELL_MESSAGE_USAGE),
    (edit::COMMAND_WORD, edit::MESSAGE_USAGE),
    (delete::COMMAND_WORD, delete::MESSAGE_USAGE),
    (view::FIND_COMMAND_WORD, view::FIND_MESSAGE_USAGE),
    (view::FILTER_COMMAND_WORD, view::FILTER_MESSAGE_USAGE),
    (view::VIEW_COMMAND_WORD, view::VIEW_MESSAGE_USAGE),
    (view::LIST_COMMAND_WORD, view::LIST_MESSAGE_USAGE),
    (general::CLEAR_COMMAND_WORD, general::CLEAR_MESSAGE_USAGE),
    (general::HELP_COMMAND_WORD, general::HELP_MESSAGE_USAGE),
    (general::GUIDE_COMMAND_WORD, general::GUIDE_MESSAGE_USAGE),
    (general::EXIT_COMMAND_WORD, general::EXIT_MESSAGE_USAGE),
];

// ============================================================================
// TEST FIXTURES
// ============================================================================
