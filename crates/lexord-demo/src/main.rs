#![forbid(unsafe_code)]

//! Walkthrough of the collation API: direct comparison, key reuse, and
//! locale-specific ordering.

use std::cmp::Ordering;

use lexord::{CollationKey, Locale, compare, create_key, is_supported};

fn sorted_keys(words: &[&str], locale: &Locale) -> Result<Vec<CollationKey>, lexord::CollationError> {
    let mut keys = words
        .iter()
        .map(|w| create_key(w, locale))
        .collect::<Result<Vec<_>, _>>()?;
    keys.sort();
    Ok(keys)
}

fn main() -> Result<(), lexord::CollationError> {
    println!("== Direct comparison (French) ==");
    for (a, b) in [("résumé", "resume"), ("côte", "coté"), ("coast", "côte")] {
        let verdict = match compare(a, b, &Locale::FRENCH)? {
            Ordering::Less => "sorts before",
            Ordering::Equal => "collates equal to",
            Ordering::Greater => "sorts after",
        };
        println!("  {a:>8} {verdict} {b}");
    }

    println!("\n== Key-based sort (French) ==");
    let french = ["côté", "coast", "cote", "œuvre", "côte", "zèbre", "abeille"];
    for key in sorted_keys(&french, &Locale::FRENCH)? {
        println!("  {:>8}  bytes = {:02x?}", key.original(), key.collation_bytes());
    }

    println!("\n== Key-based sort (Spanish) ==");
    let spanish = ["ñandú", "nube", "mano", "ozono", "único"];
    for key in sorted_keys(&spanish, &Locale::SPANISH)? {
        println!("  {:>8}  bytes = {:02x?}", key.original(), key.collation_bytes());
    }

    println!("\n== Locale support ==");
    for tag in ["fr", "es", "de", "fr-CA"] {
        let locale = Locale::from_tag(tag)?;
        println!("  {tag:>6}: supported = {}", is_supported(&locale));
    }

    Ok(())
}
