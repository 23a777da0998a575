// 🏗️ Command Dispatcher
// Maps the leading word of an input line to its parser.
//
// Words match exactly and case-sensitively. An unknown word is a different
// error from bad arguments to a known word, and a blank line is a usage
// error pointing at `guide`.

pub mod client;
pub mod company;
pub mod syntax;
pub mod tokenizer;
pub mod trade;
pub mod util;
pub mod view;

pub use tokenizer::{tokenize, ArgumentMultimap, Prefix};

use crate::clock::{Clock, SystemClock};
use crate::commands::general::GUIDE_MESSAGE_USAGE;
use crate::commands::{self, Command};
use crate::error::ParseError;

/// Every parser has the same shape; the clock is only read by buy/sell.
pub type ParseFn = fn(&str, &dyn Clock) -> Result<Command, ParseError>;

// ============================================================================
// DISPATCH TABLE
// ============================================================================

struct CommandSpec {
    word: &'static str,
    parse: ParseFn,
}

static COMMAND_TABLE: &[CommandSpec] = &[
    CommandSpec { word: commands::add::COMMAND_WORD, parse: client::parse_add },
    CommandSpec { word: commands::trade::BUY_COMMAND_WORD, parse: trade::parse_buy },
    CommandSpec { word: commands::trade::SELL_COMMAND_WORD, parse: trade::parse_sell },
    CommandSpec { word: commands::company::CREATE_COMMAND_WORD, parse: company::parse_create },
    CommandSpec { word: commands::delete::COMMAND_WORD, parse: client::parse_delete },
    CommandSpec { word: commands::edit::COMMAND_WORD, parse: client::parse_edit },
    CommandSpec { word: commands::view::FIND_COMMAND_WORD, parse: view::parse_find },
    CommandSpec { word: commands::view::FILTER_COMMAND_WORD, parse: view::parse_filter },
    CommandSpec { word: commands::view::VIEW_COMMAND_WORD, parse: view::parse_view },
    CommandSpec { word: commands::view::LIST_COMMAND_WORD, parse: view::parse_list },
    CommandSpec { word: commands::general::CLEAR_COMMAND_WORD, parse: view::parse_clear },
    CommandSpec { word: commands::general::EXIT_COMMAND_WORD, parse: view::parse_exit },
    CommandSpec { word: commands::general::HELP_COMMAND_WORD, parse: view::parse_help },
    CommandSpec { word: commands::general::GUIDE_COMMAND_WORD, parse: view::parse_guide },
];

/// Find the parser registered for `word`
fn lookup(word: &str) -> Option<ParseFn> {
    COMMAND_TABLE
        .iter()
        .find(|spec| spec.word == word)
        .map(|spec| spec.parse)
}

/// Split a line into its command word and the rest (leading space kept).
pub fn split_command_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(char::is_whitespace) {
        Some(pos) => input.split_at(pos),
        None => (input, ""),
    }
}

/// Parse one input line into a command.
pub fn parse_command(input: &str, clock: &dyn Clock) -> Result<Command, ParseError> {
    let (word, args) = split_command_word(input);
    if word.is_empty() {
        return Err(ParseError::usage(GUIDE_MESSAGE_USAGE));
    }

    let parse = lookup(word).ok_or(ParseError::UnknownCommand)?;
    parse(args, clock)
}

// ============================================================================
// TRACKER PARSER
// ============================================================================

/// Dispatcher bound to a clock.
pub struct TrackerParser {
    clock: Box<dyn Clock>,
}

impl TrackerParser {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        TrackerParser { clock }
    }

    pub fn parse_command(&self, input: &str) -> Result<Command, ParseError> {
        parse_command(input, self.clock.as_ref())
    }

    /// All command words, in table order
    pub fn command_words() -> impl Iterator<Item = &'static str> {
        COMMAND_TABLE.iter().map(|spec| spec.word)
    }
}

impl Default for TrackerParser {
    fn default() -> Self {
        Self::new(Box::new(SystemClock))
    }
}

// ============================================================================
// TESTS
// ============================================================================
