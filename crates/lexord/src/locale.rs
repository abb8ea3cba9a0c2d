//! Locale identifiers.
//!
//! A [`Locale`] is an opaque language tag. Equality is exact tag match:
//! `"fr"` and `"fr-ca"` are distinct locales with no inheritance or
//! fallback between them.

use std::borrow::Cow;
use std::fmt;

use crate::CollationError;

/// Identifier for a language convention governing case folding and
/// character equivalence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    tag: Cow<'static, str>,
}

impl Locale {
    /// French (`"fr"`).
    pub const FRENCH: Locale = Locale {
        tag: Cow::Borrowed("fr"),
    };

    /// Spanish (`"es"`).
    pub const SPANISH: Locale = Locale {
        tag: Cow::Borrowed("es"),
    };

    /// Parse a language tag such as `"fr"`, `"es"`, or `"fr-CA"`.
    ///
    /// The tag is folded to lowercase, so `from_tag("FR")` equals
    /// [`Locale::FRENCH`]. The primary subtag must be 2–8 ASCII letters;
    /// further hyphen-separated subtags must be 1–8 ASCII alphanumerics.
    ///
    /// # Errors
    ///
    /// [`CollationError::InvalidLocale`] if the tag is empty, blank, or
    /// violates the shape above. Validation runs before any other
    /// processing, so a malformed tag never reaches the rule tables.
    pub fn from_tag(tag: &str) -> Result<Self, CollationError> {
        let trimmed = tag.trim();
        if !is_well_formed(trimmed) {
            return Err(CollationError::InvalidLocale(tag.to_string()));
        }
        Ok(Self {
            tag: Cow::Owned(trimmed.to_ascii_lowercase()),
        })
    }

    /// The lowercase language tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

fn is_well_formed(tag: &str) -> bool {
    let mut subtags = tag.split('-');
    let Some(primary) = subtags.next() else {
        return false;
    };
    if primary.len() < 2 || primary.len() > 8 {
        return false;
    }
    if !primary.bytes().all(|b| b.is_ascii_alphabetic()) {
        return false;
    }
    subtags.all(|s| {
        !s.is_empty() && s.len() <= 8 && s.bytes().all(|b| b.is_ascii_alphanumeric())
    })
}
