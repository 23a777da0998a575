// 🏢 create INDEX n/COMPANY_NAME a/COMPANY_ADDRESS [t/TAG]...

use super::syntax::{PREFIX_ADDRESS, PREFIX_NAME, PREFIX_TAG};
use super::tokenizer::tokenize;
use super::util::{parse_index_or_usage, parse_tags};
use crate::clock::Clock;
use crate::commands::company::CREATE_MESSAGE_USAGE;
use crate::commands::{Command, CreateCommand};
use crate::entities::{Company, CompanyAddress, CompanyName};
use crate::error::ParseError;

pub fn parse_create(args: &str, _clock: &dyn Clock) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_NAME, PREFIX_ADDRESS, PREFIX_TAG]);
    let index = parse_index_or_usage(map.preamble(), CREATE_MESSAGE_USAGE)?;

    if !map.exactly_once(&[PREFIX_NAME, PREFIX_ADDRESS]) {
        return Err(ParseError::usage(CREATE_MESSAGE_USAGE));
    }
    let (Some(name), Some(address)) = (map.value(PREFIX_NAME), map.value(PREFIX_ADDRESS)) else {
        return Err(ParseError::usage(CREATE_MESSAGE_USAGE));
    };

    let company = Company::new(
        CompanyName::parse(name)?,
        CompanyAddress::parse(address)?,
        parse_tags(map.all_values(PREFIX_TAG))?,
    );
    Ok(Command::Create(CreateCommand::new(index, company)))
}
