//! Stopword set loading.
//!
//! The refined extraction variant drops high-frequency function words from
//! the vocabulary; the earlier variant keeps them. `ValidityFilter` takes
//! whichever set the caller builds here, so the choice stays configurable.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// The English stopword list, lowercased.
pub fn english_stop_words() -> HashSet<String> {
    get(LANGUAGE::English)
        .iter()
        .map(|w| w.to_lowercase())
        .collect()
}
