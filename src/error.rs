// 🚨 Error Taxonomy
// Parse-time and execution-time failures are separate types so callers can
// tell "not a command" from "bad arguments" from "bad index right now".

use thiserror::Error;

pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_CLIENT_DISPLAYED_INDEX: &str = "The client index provided is invalid";
pub const MESSAGE_DUPLICATE_CLIENT: &str = "This client already exists in the tracker";
pub const MESSAGE_DUPLICATE_COMPANY: &str = "This company already exists in the tracker";
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

// ============================================================================
// FIELD VALIDATION
// ============================================================================

/// A value failed its own validity predicate.
///
/// `Display` is the fixed user-facing constraint message, reported verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        ValidationError { field, message }
    }
}

// ============================================================================
// PARSE ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The command word is not in the dispatch table
    #[error("{}", MESSAGE_UNKNOWN_COMMAND)]
    UnknownCommand,

    /// Structurally malformed arguments for a known command
    #[error("Invalid command format! \n{usage}")]
    Usage { usage: &'static str },

    /// A present field failed validation; takes precedence over usage
    #[error(transparent)]
    InvalidField(#[from] ValidationError),

    /// `edit` named a client but no field to change
    #[error("{}", MESSAGE_NOT_EDITED)]
    NothingToEdit,
}

impl ParseError {
    pub fn usage(usage: &'static str) -> Self {
        ParseError::Usage { usage }
    }
}

// ============================================================================
// EXECUTION ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Index is out of range for the filtered view at execution time
    #[error("{}", MESSAGE_INVALID_CLIENT_DISPLAYED_INDEX)]
    InvalidIndex { index: usize, visible: usize },

    #[error("{}", MESSAGE_DUPLICATE_CLIENT)]
    DuplicateClient,

    #[error("{}", MESSAGE_DUPLICATE_COMPANY)]
    DuplicateCompany,

    #[error("Client {client} is not linked to any company")]
    NoCompany { client: String },

    #[error("Client {client} is already linked to {company}; delete it first with m/company")]
    CompanyAlreadyLinked { client: String, company: String },
}

// ============================================================================
// FACADE ERROR
// ============================================================================

/// Everything a single input line can fail with.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Could not save data to file: {0}")]
    Storage(String),
}
