//! Validity filtering: decides whether a cleaned token is worth keeping.
//!
//! Everything here guards against the noise a tokenized book throws at the
//! pipeline: page furniture, base64 fragments, contraction clitics and
//! vowelless junk.

use std::collections::HashSet;

use crate::clean::clean;
use crate::stop_words::english_stop_words;

/// Contraction leftovers the tokenizer produces ("we'll" → "we", "ll").
const CLITIC_FRAGMENTS: [&str; 7] = ["ll", "ve", "re", "t", "s", "d", "m"];

const STANDARD_VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];
const VOWELS_WITH_Y: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// Anything longer is almost certainly an encoded string, not a word.
const MAX_WORD_LEN: usize = 30;

/// Tolerated non-alphabetic characters before a token counts as garbage.
const MAX_NON_ALPHA: usize = 3;

/// A configurable keep/drop decision for cleaned tokens.
///
/// The stopword set is the only variant-dependent part: pass an empty set
/// to reproduce the earlier extraction variant, or the English list for the
/// refined one. All structural rules are always on.
#[derive(Debug, Clone)]
pub struct ValidityFilter {
    stopwords: HashSet<String>,
}

impl ValidityFilter {
    /// Filter with an explicit stopword set.
    pub fn new(stopwords: HashSet<String>) -> Self {
        Self { stopwords }
    }

    /// Filter with the English stopword list.
    pub fn english() -> Self {
        Self::new(english_stop_words())
    }

    /// Filter with no stopword rule at all.
    pub fn without_stopwords() -> Self {
        Self::new(HashSet::new())
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Decide on the *cleaned* form of `token`. Pure: cleans its own input,
    /// never mutates the filter.
    pub fn is_valid(&self, token: &str) -> bool {
        let word = clean(token);
        if word.is_empty() {
            return false;
        }

        let len = word.chars().count();
        if len < 2 {
            return false;
        }

        if self.stopwords.contains(&word) {
            return false;
        }

        if len > MAX_WORD_LEN {
            return false;
        }

        if word.chars().filter(|c| !c.is_alphabetic()).count() > MAX_NON_ALPHA {
            return false;
        }

        if !word.chars().next().is_some_and(|c| c.is_alphabetic()) {
            return false;
        }

        if CLITIC_FRAGMENTS.contains(&word.as_str()) {
            return false;
        }

        // Tokens that are all vowels, or that have no standard vowel at
        // all ("rhythms"), are noise. Only past the short-word carve-out:
        // "by", "ox", "cry" are real words.
        if len > 3 {
            let all_vowel = word.chars().all(|c| VOWELS_WITH_Y.contains(&c));
            let no_standard_vowel = !word.chars().any(|c| STANDARD_VOWELS.contains(&c));
            if all_vowel || no_standard_vowel {
                return false;
            }
        }

        true
    }
}

impl Default for ValidityFilter {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_single_char() {
        let f = ValidityFilter::without_stopwords();
        assert!(!f.is_valid(""));
        assert!(!f.is_valid("a"));
        assert!(!f.is_valid("!!"));
    }

    #[test]
    fn stopwords_depend_on_configuration() {
        let english = ValidityFilter::english();
        assert!(english.is_stopword("the"));
        assert!(!english.is_stopword("fox"));
        assert!(!english.is_valid("the"));
        assert!(!english.is_valid("The,"));
        assert!(english.is_valid("fox"));

        let bare = ValidityFilter::without_stopwords();
        assert!(bare.is_valid("the"));
    }

    #[test]
    fn length_boundary_at_thirty() {
        let f = ValidityFilter::without_stopwords();
        let ok: String = "ab".repeat(15); // 30 chars, mixed vowel/consonant
        let too_long: String = format!("{}a", "ab".repeat(15)); // 31 chars
        assert!(f.is_valid(&ok));
        assert!(!f.is_valid(&too_long));
    }

    #[test]
    fn rejects_garbage_with_many_non_letters() {
        let f = ValidityFilter::without_stopwords();
        assert!(!f.is_valid("ab12345"));
        assert!(!f.is_valid("a-b-c-d-e"));
        // up to three non-letters tolerated
        assert!(f.is_valid("ab12c"));
    }

    #[test]
    fn first_char_must_be_a_letter() {
        let f = ValidityFilter::without_stopwords();
        assert!(!f.is_valid("1st"));
        assert!(!f.is_valid("42nd"));
        assert!(f.is_valid("first"));
    }

    #[test]
    fn rejects_clitic_fragments() {
        let f = ValidityFilter::without_stopwords();
        for fragment in ["ll", "ve", "re", "t", "s", "d", "m"] {
            assert!(!f.is_valid(fragment), "{:?} should be rejected", fragment);
        }
        // same length, but a real word
        assert!(f.is_valid("ox"));
    }

    #[test]
    fn vowel_consonant_shape_rule() {
        let f = ValidityFilter::without_stopwords();
        assert!(!f.is_valid("rhythms")); // 7 chars, no standard vowel
        assert!(!f.is_valid("aieee")); // all vowels, 5 chars
        assert!(!f.is_valid("yyyy")); // y-runs count as all-vowel
        assert!(f.is_valid("by")); // short carve-out
        assert!(f.is_valid("cry")); // short carve-out
        assert!(f.is_valid("mayhem"));
    }

    #[test]
    fn operates_on_the_cleaned_form() {
        let f = ValidityFilter::without_stopwords();
        assert!(f.is_valid("Fox!"));
        assert!(f.is_valid("-century-"));
    }
}
