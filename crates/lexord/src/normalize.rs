//! Canonical-form normalization.
//!
//! Normalization turns an input string into the canonical form its sort
//! key is derived from: lowercase the input, then apply the locale's
//! substitution rules in table order. Each rule rewrites every
//! non-overlapping occurrence of its pattern, scanning left to right,
//! before the next rule runs.
//!
//! # Example
//! ```
//! use lexord::{normalize::normalize, Locale};
//!
//! assert_eq!(normalize("Côte", &Locale::FRENCH)?, "cote");
//! assert_eq!(normalize("ñandú", &Locale::SPANISH)?, "nzandu");
//! # Ok::<(), lexord::CollationError>(())
//! ```

use tracing::trace;

use crate::CollationError;
use crate::locale::Locale;
use crate::rules;

/// Produce the canonical form of `input` under `locale`'s rules.
///
/// Pure function of its arguments; repeated calls return identical
/// strings.
///
/// # Errors
///
/// [`CollationError::UnsupportedLocale`] if the locale has no rule table.
/// The public facade checks support before calling, so this path is
/// unreachable through [`crate::create_key`] and [`crate::compare`]
/// except via the error they already surface.
pub fn normalize(input: &str, locale: &Locale) -> Result<String, CollationError> {
    let table = rules::rules_for(locale)?;
    let mut canonical = lowercase(input, locale);
    for rule in table {
        // str::replace allocates even on no-op inputs; most strings match
        // few rules, so gate on contains first.
        if canonical.contains(rule.pattern) {
            canonical = canonical.replace(rule.pattern, rule.replacement);
        }
    }
    trace!(input, canonical = canonical.as_str(), locale = %locale, "normalized");
    Ok(canonical)
}

/// Locale-parameterized lowercasing.
///
/// Unicode default casing is correct for both registered locales; the
/// locale parameter stays so tailored case folds (Turkish dotless-i and
/// the like) can slot in if more locales are ever registered.
fn lowercase(input: &str, _locale: &Locale) -> String {
    input.to_lowercase()
}
