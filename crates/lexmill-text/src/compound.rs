//! Hyphenated-compound splitting.
//!
//! A compound token contributes its parts to the vocabulary independently
//! of the joined form. Numeral-ordinal parts ("fourth", "tenth",
//! "fourteenth") are discarded as noise from dates and chapter numbering.

use std::collections::HashSet;

use crate::clean::clean;

const CARDINALS: [&str; 10] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];
const ORDINAL_SUFFIXES: [&str; 4] = ["th", "st", "nd", "rd"];

/// Split a cleaned token on `-` and return the parts worth keeping: each
/// part is re-cleaned, digit-stripped, checked against the numeral-ordinal
/// pattern, and retained only when purely alphabetic and longer than 2
/// characters. An empty set means "no compound contribution", never an
/// error.
pub fn split_compound(cleaned: &str) -> HashSet<String> {
    let mut parts = HashSet::new();

    for part in cleaned.split('-') {
        let part = clean(part);
        if part.chars().count() < 2 {
            continue;
        }

        let part: String = part.chars().filter(|c| !c.is_ascii_digit()).collect();

        if is_numeral_ordinal(&part) {
            continue;
        }

        if part.chars().count() > 2 && part.chars().all(|c| c.is_alphabetic()) {
            parts.insert(part);
        }
    }

    parts
}

/// True for cardinal-number words, plain ordinals ("fourth" = "four"+"th")
/// and the -teenth/-tieth series ("fourteenth" = "four" + remainder ending
/// in "th").
fn is_numeral_ordinal(part: &str) -> bool {
    CARDINALS.iter().any(|prefix| match part.strip_prefix(prefix) {
        Some("") => true,
        Some(rest) => {
            ORDINAL_SUFFIXES.contains(&rest)
                || ORDINAL_SUFFIXES.iter().any(|suffix| rest.ends_with(suffix))
        }
        None => false,
    })
}
