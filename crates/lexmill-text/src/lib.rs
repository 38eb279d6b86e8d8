pub mod clean;
pub mod compound;
pub mod extract;
pub mod filter;
pub mod lemma;
pub mod resolve;
pub mod stop_words;

pub use clean::clean;
pub use compound::split_compound;
pub use extract::VocabularyExtractor;
pub use filter::ValidityFilter;
pub use resolve::{resolver_for, BaseFormResolver, PosLemmaResolver, StemFamilyResolver};
pub use stop_words::english_stop_words;

/// Tokenize text: split on whitespace and punctuation, keeping internal
/// hyphens intact. Apostrophes split contractions into a stem and a clitic
/// fragment ("don't" → "don", "t"); the validity filter discards the
/// fragments downstream. Casing is preserved; the cleaner owns lowercasing.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || (!c.is_alphanumeric() && c != '-'))
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
