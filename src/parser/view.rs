// 🔍 find / filter / view parsers, plus the argument-free commands

use super::util::parse_index_or_usage;
use crate::clock::Clock;
use crate::commands::view::{FILTER_MESSAGE_USAGE, FIND_MESSAGE_USAGE, VIEW_MESSAGE_USAGE};
use crate::commands::{Command, FilterCommand, FindCommand, ViewCommand};
use crate::error::ParseError;

/// find KEYWORD [MORE_KEYWORDS]...
pub fn parse_find(args: &str, _clock: &dyn Clock) -> Result<Command, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::usage(FIND_MESSAGE_USAGE));
    }
    Ok(Command::Find(FindCommand::new(keywords)))
}

/// filter buy | filter sell
pub fn parse_filter(args: &str, _clock: &dyn Clock) -> Result<Command, ParseError> {
    match args.trim() {
        "buy" => Ok(Command::Filter(FilterCommand::buy())),
        "sell" => Ok(Command::Filter(FilterCommand::sell())),
        _ => Err(ParseError::usage(FILTER_MESSAGE_USAGE)),
    }
}

/// view INDEX
pub fn parse_view(args: &str, _clock: &dyn Clock) -> Result<Command, ParseError> {
    let index = parse_index_or_usage(args, VIEW_MESSAGE_USAGE)?;
    Ok(Command::View(ViewCommand::new(index)))
}

// Trailing text after these words is ignored

pub fn parse_list(_args: &str, _clock: &dyn Clock) -> Result<Command, ParseError> {
    Ok(Command::List)
}

pub fn parse_clear(_args: &str, _clock: &dyn Clock) -> Result<Command, ParseError> {
    Ok(Command::Clear)
}

pub fn parse_exit(_args: &str, _clock: &dyn Clock) -> Result<Command, ParseError> {
    Ok(Command::Exit)
}

pub fn parse_help(_args: &str, _clock: &dyn Clock) -> Result<Command, ParseError> {
    Ok(Command::Help)
}

pub fn parse_guide(_args: &str, _clock: &dyn Clock) -> Result<Command, ParseError> {
    Ok(Command::Guide)
}
