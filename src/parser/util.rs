// Parsing helpers shared by the per-command parsers

use crate::entities::Tag;
use crate::error::{ParseError, ValidationError};
use crate::index::Index;
use std::collections::BTreeSet;

pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

/// Parse a 1-based index: ASCII digits only, no sign, not zero.
pub fn parse_index(text: &str) -> Result<Index, ValidationError> {
    let text = text.trim();
    let invalid = || ValidationError::new("index", MESSAGE_INVALID_INDEX);

    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    text.parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(invalid)
}

/// Like `parse_index`, but a bad index is a usage error for `usage`.
pub fn parse_index_or_usage(text: &str, usage: &'static str) -> Result<Index, ParseError> {
    parse_index(text).map_err(|_| ParseError::usage(usage))
}

pub fn parse_tags<'a>(values: impl IntoIterator<Item = &'a str>) -> Result<BTreeSet<Tag>, ValidationError> {
    values.into_iter().map(Tag::parse).collect()
}

/// Tags for `edit`: nothing given means "leave alone", a lone empty `t/`
/// means "remove all tags".
pub fn parse_tags_for_edit(values: &[&str]) -> Result<Option<BTreeSet<Tag>>, ValidationError> {
    match values {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        _ => parse_tags(values.iter().copied()).map(Some),
    }
}
