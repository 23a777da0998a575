// ✂️ Argument Tokenizer
// Splits "1 q/200 g/Orange p/2.5" into a preamble ("1") plus prefix → values.
//
// A prefix only counts when it starts a whitespace-separated word, so "g/"
// inside "Apple/g/Pear" is part of a value, not a new field.

use std::collections::HashMap;
use std::fmt;

// ============================================================================
// PREFIX
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Prefix(marker)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// ============================================================================
// ARGUMENT MULTIMAP
// ============================================================================

/// Result of tokenizing one argument string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
    /// Prefixes in the order they were written
    order: Vec<Prefix>,
}

impl ArgumentMultimap {
    /// Text before the first recognised prefix, trimmed
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in order
    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .get(&prefix)
            .map(|v| v.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn count(&self, prefix: Prefix) -> usize {
        self.values.get(&prefix).map_or(0, Vec::len)
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.count(prefix) > 0
    }

    /// True when each prefix appears exactly once
    pub fn exactly_once(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.count(*p) == 1)
    }

    /// True when none of the prefixes is repeated
    pub fn at_most_once(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.count(*p) <= 1)
    }

    pub fn positions(&self) -> &[Prefix] {
        &self.order
    }
}

// ============================================================================
// TOKENIZE
// ============================================================================

/// Tokenize `args` against the prefixes a command understands.
///
/// Unknown markers stay inside whichever value (or the preamble) they were
/// written in. Values are trimmed; an empty value is still recorded.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    // Leading space lets a prefix at the very start of `args` match
    let text = format!(" {}", args);

    let mut found: Vec<(usize, Prefix)> = Vec::new();
    for prefix in prefixes {
        for (pos, _) in text.match_indices(prefix.as_str()) {
            let starts_word = text[..pos]
                .chars()
                .last()
                .is_some_and(char::is_whitespace);
            if starts_word {
                found.push((pos, *prefix));
            }
        }
    }
    found.sort_by_key(|(pos, _)| *pos);

    let preamble_end = found.first().map_or(text.len(), |(pos, _)| *pos);
    let mut multimap = ArgumentMultimap {
        preamble: text[..preamble_end].trim().to_string(),
        ..ArgumentMultimap::default()
    };

    for (i, (pos, prefix)) in found.iter().enumerate() {
        let start = pos + prefix.as_str().len();
        let end = found.get(i + 1).map_or(text.len(), |(next, _)| *next);
        let value = text[start..end].trim().to_string();

        multimap.values.entry(*prefix).or_default().push(value);
        multimap.order.push(*prefix);
    }

    multimap
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const Q: Prefix = Prefix::new("q/");
    const G: Prefix = Prefix::new("g/");
    const P: Prefix = Prefix::new("p/");
    const PH: Prefix = Prefix::new("ph/");
    const T: Prefix = Prefix::new("t/");

    #[test]
    fn test_tokenize_empty() {
        let map = tokenize("", &[Q, G]);
        assert_eq!(map.preamble(), "");
        assert!(!map.is_present(Q));
        assert!(map.positions().is_empty());
    }

    #[test]
    fn test_tokenize_preamble_only() {
        let map = tokenize("  some random text  ", &[Q]);
        assert_eq!(map.preamble(), "some random text");
        assert_eq!(map.value(Q), None);
    }

    #[test]
    fn test_tokenize_fields() {
        let map = tokenize(" 1 q/200 g/Orange juice  p/2.5", &[Q, G, P]);
        assert_eq!(map.preamble(), "1");
        assert_eq!(map.value(Q), Some("200"));
        assert_eq!(map.value(G), Some("Orange juice"));
        assert_eq!(map.value(P), Some("2.5"));
        assert_eq!(map.positions(), &[Q, G, P]);
    }

    #[test]
    fn test_tokenize_prefix_at_start() {
        let map = tokenize("q/5 g/Kiwi", &[Q, G]);
        assert_eq!(map.preamble(), "");
        assert_eq!(map.value(Q), Some("5"));
    }

    #[test]
    fn test_tokenize_repeated_prefix_last_wins() {
        let map = tokenize("1 t/friends t/owesMoney q/1 q/2", &[Q, T]);
        assert_eq!(map.value(Q), Some("2"));
        assert_eq!(map.count(Q), 2);
        assert_eq!(map.all_values(T), vec!["friends", "owesMoney"]);
        assert!(!map.at_most_once(&[Q]));
        assert!(map.exactly_once(&[]));
    }

    #[test]
    fn test_tokenize_empty_value_is_present() {
        let map = tokenize("1 g/ p/3", &[G, P]);
        assert!(map.is_present(G));
        assert_eq!(map.value(G), Some(""));
    }

    #[test]
    fn test_prefix_must_start_a_word() {
        let map = tokenize("1 g/Apple/g/Pear q/2", &[G, Q]);
        assert_eq!(map.value(G), Some("Apple/g/Pear"));
        assert_eq!(map.count(G), 1);
    }

    #[test]
    fn test_unknown_prefix_stays_in_preamble() {
        let map = tokenize("1 i/ string q/3", &[Q]);
        assert_eq!(map.preamble(), "1 i/ string");
    }

    #[test]
    fn test_similar_prefixes_do_not_collide() {
        let map = tokenize("n/Bob ph/999 p/1.5", &[P, PH]);
        assert_eq!(map.value(PH), Some("999"));
        assert_eq!(map.value(P), Some("1.5"));
    }

    #[test]
    fn test_tokenize_is_restartable() {
        let args = "2 q/1 g/Tea p/3";
        assert_eq!(tokenize(args, &[Q, G, P]), tokenize(args, &[Q, G, P]));
    }
}
