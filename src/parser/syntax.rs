// Command-line prefixes shared by every parser

use super::tokenizer::Prefix;

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("ph/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");

pub const PREFIX_QUANTITY: Prefix = Prefix::new("q/");
pub const PREFIX_GOODS: Prefix = Prefix::new("g/");
pub const PREFIX_PRICE: Prefix = Prefix::new("p/");
pub const PREFIX_DATE: Prefix = Prefix::new("d/");

/// Selects what `delete` removes
pub const PREFIX_MODE: Prefix = Prefix::new("m/");
