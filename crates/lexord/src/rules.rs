//! Per-locale substitution rule tables.
//!
//! # Invariants
//!
//! 1. **Fixed order**: each table is an ordered slice and rules are
//!    applied first-to-last. Case folding plus sequential substitution is
//!    order-sensitive in principle, so the order here is part of the
//!    contract even though the shipped patterns do not overlap.
//!
//! 2. **Read-only**: tables are `const` data. There is no runtime
//!    registration; concurrent reads need no synchronization.

use crate::CollationError;
use crate::locale::Locale;

/// A single substitution rule: every occurrence of `pattern` in the
/// lowercased input is replaced by `replacement` before the next rule
/// runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Literal pattern to search for, typically a single character.
    pub pattern: &'static str,
    /// Literal replacement, zero or more characters.
    pub replacement: &'static str,
}

impl Rule {
    const fn new(pattern: &'static str, replacement: &'static str) -> Self {
        Self {
            pattern,
            replacement,
        }
    }
}

/// Spanish: accented vowels fold to their base letter; "ñ" expands to
/// "nz" so it sorts after every plain "n" sequence.
const SPANISH: &[Rule] = &[
    Rule::new("á", "a"),
    Rule::new("é", "e"),
    Rule::new("í", "i"),
    Rule::new("ó", "o"),
    Rule::new("ú", "u"),
    Rule::new("ñ", "nz"),
    Rule::new("ü", "u"),
];

/// French: accented letters fold to their base letter; "œ" expands to
/// "oe".
const FRENCH: &[Rule] = &[
    Rule::new("é", "e"),
    Rule::new("è", "e"),
    Rule::new("ê", "e"),
    Rule::new("ë", "e"),
    Rule::new("à", "a"),
    Rule::new("â", "a"),
    Rule::new("ù", "u"),
    Rule::new("û", "u"),
    Rule::new("ç", "c"),
    Rule::new("î", "i"),
    Rule::new("ï", "i"),
    Rule::new("ô", "o"),
    Rule::new("œ", "oe"),
];

/// Whether `locale` has a registered rule table. Never fails.
#[must_use]
pub fn is_supported(locale: &Locale) -> bool {
    lookup(locale).is_some()
}

/// The ordered rule table for `locale`.
///
/// # Errors
///
/// [`CollationError::UnsupportedLocale`] if no table is registered.
pub fn rules_for(locale: &Locale) -> Result<&'static [Rule], CollationError> {
    lookup(locale).ok_or_else(|| CollationError::UnsupportedLocale(locale.tag().to_string()))
}

fn lookup(locale: &Locale) -> Option<&'static [Rule]> {
    match locale.tag() {
        "es" => Some(SPANISH),
        "fr" => Some(FRENCH),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_locales_are_supported() {
        assert!(is_supported(&Locale::FRENCH));
        assert!(is_supported(&Locale::SPANISH));
    }

    #[test]
    fn unregistered_locales_are_not_supported() {
        for tag in ["de", "en", "it", "pt", "fr-ca", "es-mx"] {
            let locale = Locale::from_tag(tag).unwrap();
            assert!(!is_supported(&locale), "{tag} should not be supported");
            assert_eq!(
                rules_for(&locale),
                Err(CollationError::UnsupportedLocale(tag.to_string()))
            );
        }
    }

    #[test]
    fn spanish_table_is_complete_and_ordered() {
        let rules = rules_for(&Locale::SPANISH).unwrap();
        assert_eq!(rules.len(), 7);
        assert_eq!(rules[0], Rule::new("á", "a"));
        assert_eq!(rules[5], Rule::new("ñ", "nz"));
        assert_eq!(rules[6], Rule::new("ü", "u"));
    }

    #[test]
    fn french_table_is_complete_and_ordered() {
        let rules = rules_for(&Locale::FRENCH).unwrap();
        assert_eq!(rules.len(), 13);
        assert_eq!(rules[0], Rule::new("é", "e"));
        assert_eq!(rules[8], Rule::new("ç", "c"));
        assert_eq!(rules[12], Rule::new("œ", "oe"));
    }

    #[test]
    fn every_shipped_replacement_is_rule_stable() {
        // No replacement reintroduces a pattern that a later rule would
        // rewrite, so a single pass per rule is a fixed point.
        for locale in [Locale::FRENCH, Locale::SPANISH] {
            let rules = rules_for(&locale).unwrap();
            for rule in rules {
                for other in rules {
                    assert!(
                        !rule.replacement.contains(other.pattern),
                        "{:?} reintroduces {:?}",
                        rule,
                        other
                    );
                }
            }
        }
    }
}
