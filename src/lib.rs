// Trade Tracker - Core Library
// Client book and buy/sell ledger driven by one-line text commands.
// The REPL in main.rs and the integration tests both go through `Logic`.

pub mod clock;
pub mod commands;
pub mod config;
pub mod entities;
pub mod error;
pub mod index;
pub mod logic;
pub mod model;
pub mod parser;
pub mod storage;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::{Command, CommandResult};
pub use config::TrackerConfig;
pub use entities::{
    Address, Client, Company, CompanyAddress, CompanyName, Date, Email, Goods, Name, Phone, Price,
    Quantity, Tag, Transaction, TransactionFilter, TransactionKind,
};
pub use error::{CommandError, ParseError, TrackerError, ValidationError};
pub use index::Index;
pub use logic::Logic;
pub use model::{ClientPredicate, Model, ModelManager};
pub use parser::{parse_command, TrackerParser};
pub use storage::JsonStorage;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
