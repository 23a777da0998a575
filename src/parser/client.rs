// 👤 Client parsers - add, edit, delete

use super::syntax::{
    PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_MODE, PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG,
};
use super::tokenizer::tokenize;
use super::util::{parse_index_or_usage, parse_tags, parse_tags_for_edit};
use crate::clock::Clock;
use crate::commands::{
    add, delete, edit, AddCommand, Command, DeleteClientCommand, DeleteCompanyCommand,
    EditClientDescriptor, EditCommand,
};
use crate::entities::{Address, Client, Email, Name, Phone};
use crate::error::ParseError;

const CLIENT_PREFIXES: [super::tokenizer::Prefix; 5] =
    [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_TAG];

// ============================================================================
// ADD
// ============================================================================

/// add n/NAME ph/PHONE e/EMAIL a/ADDRESS [t/TAG]...
pub fn parse_add(args: &str, _clock: &dyn Clock) -> Result<Command, ParseError> {
    let map = tokenize(args, &CLIENT_PREFIXES);
    let usage = || ParseError::usage(add::MESSAGE_USAGE);

    if !map.preamble().is_empty()
        || !map.exactly_once(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS])
    {
        return Err(usage());
    }

    let (Some(name), Some(phone), Some(email), Some(address)) = (
        map.value(PREFIX_NAME),
        map.value(PREFIX_PHONE),
        map.value(PREFIX_EMAIL),
        map.value(PREFIX_ADDRESS),
    ) else {
        return Err(usage());
    };

    let client = Client::new(
        Name::parse(name)?,
        Phone::parse(phone)?,
        Email::parse(email)?,
        Address::parse(address)?,
        parse_tags(map.all_values(PREFIX_TAG))?,
    );
    Ok(Command::Add(AddCommand::new(client)))
}

// ============================================================================
// EDIT
// ============================================================================

/// edit INDEX [n/NAME] [ph/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...
pub fn parse_edit(args: &str, _clock: &dyn Clock) -> Result<Command, ParseError> {
    let map = tokenize(args, &CLIENT_PREFIXES);
    let index = parse_index_or_usage(map.preamble(), edit::MESSAGE_USAGE)?;

    if !map.at_most_once(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS]) {
        return Err(ParseError::usage(edit::MESSAGE_USAGE));
    }

    let descriptor = EditClientDescriptor {
        name: map.value(PREFIX_NAME).map(Name::parse).transpose()?,
        phone: map.value(PREFIX_PHONE).map(Phone::parse).transpose()?,
        email: map.value(PREFIX_EMAIL).map(Email::parse).transpose()?,
        address: map.value(PREFIX_ADDRESS).map(Address::parse).transpose()?,
        tags: parse_tags_for_edit(&map.all_values(PREFIX_TAG))?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NothingToEdit);
    }

    Ok(Command::Edit(EditCommand::new(index, descriptor)))
}

// ============================================================================
// DELETE
// ============================================================================

/// delete INDEX m/client | delete INDEX m/company
pub fn parse_delete(args: &str, _clock: &dyn Clock) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_MODE]);
    let usage = || ParseError::usage(delete::MESSAGE_USAGE);

    let index = parse_index_or_usage(map.preamble(), delete::MESSAGE_USAGE)?;
    if !map.exactly_once(&[PREFIX_MODE]) {
        return Err(usage());
    }

    match map.value(PREFIX_MODE) {
        Some("client") => Ok(Command::DeleteClient(DeleteClientCommand::new(index))),
        Some("company") => Ok(Command::DeleteCompany(DeleteCompanyCommand::new(index))),
        _ => Err(usage()),
    }
}
