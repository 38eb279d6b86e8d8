//! The translation stage: caching, bounded retry, degraded fallback.
//!
//! A translation failure never aborts the batch: after the retry budget is
//! spent the word stands in for its own translation and the run continues.
//! The `Translated` result carries the attempt count and the degraded flag
//! so callers see what happened without parsing log output.

use std::collections::HashMap;

use lexmill_core::WordPair;

use crate::translator::Translator;

/// Fixed retry bound per word; no backoff between attempts.
pub const MAX_ATTEMPTS: u32 = 3;

/// Outcome of translating one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translated {
    pub text: String,
    /// Backend calls made for this word; 0 means the cache answered.
    pub attempts: u32,
    /// True when every attempt failed and `text` is the source word.
    pub degraded: bool,
}

/// Serial, cached translation of a vocabulary. Owns the backend and the
/// run-scoped cache.
pub struct TranslationStage {
    backend: Box<dyn Translator>,
    cache: HashMap<String, String>,
    cache_hits: usize,
    failures: usize,
}

impl TranslationStage {
    pub fn new(backend: Box<dyn Translator>) -> Self {
        Self {
            backend,
            cache: HashMap::new(),
            cache_hits: 0,
            failures: 0,
        }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Words that fell back untranslated this run.
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Translate one word: cache first, then up to `MAX_ATTEMPTS` backend
    /// calls, then the same-word fallback.
    pub fn translate_word(&mut self, word: &str) -> Translated {
        if let Some(hit) = self.cache.get(word) {
            self.cache_hits += 1;
            return Translated {
                text: hit.clone(),
                attempts: 0,
                degraded: false,
            };
        }

        let mut last_error = String::new();
        for attempt in 1..=MAX_ATTEMPTS {
            match self.backend.translate(word) {
                Ok(text) => {
                    self.cache.insert(word.to_string(), text.clone());
                    return Translated {
                        text,
                        attempts: attempt,
                        degraded: false,
                    };
                }
                Err(e) => {
                    last_error = e;
                    if attempt < MAX_ATTEMPTS {
                        eprintln!(
                            "[translate] retrying '{}' (attempt {}/{})",
                            word, attempt, MAX_ATTEMPTS
                        );
                    }
                }
            }
        }

        // Deliberately left out of the cache: the next run over this word
        // (there is none in a single pass, but callers may reuse the
        // stage) should try the backend again rather than pin the
        // fallback.
        self.failures += 1;
        eprintln!("[translate] giving up on '{}': {}", word, last_error);
        Translated {
            text: word.to_string(),
            attempts: MAX_ATTEMPTS,
            degraded: true,
        }
    }

    /// Translate a sorted vocabulary slice into word pairs, preserving
    /// order. Serial by design; the only latency source is the backend.
    pub fn translate_all(&mut self, words: &[String]) -> Vec<WordPair> {
        let total = words.len();
        let mut pairs = Vec::with_capacity(total);

        for (i, word) in words.iter().enumerate() {
            let outcome = self.translate_word(word);
            pairs.push(WordPair {
                word: word.clone(),
                translation: outcome.text,
            });

            if (i + 1) % 25 == 0 {
                eprintln!("[translate] {}/{} words", i + 1, total);
            }
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Fails the first `fail_first` calls, then succeeds.
    struct FlakyTranslator {
        fail_first: u32,
        calls: Cell<u32>,
    }

    impl FlakyTranslator {
        fn new(fail_first: u32) -> Self {
            Self {
                fail_first,
                calls: Cell::new(0),
            }
        }
    }

    impl Translator for FlakyTranslator {
        fn translate(&self, word: &str) -> Result<String, String> {
            let n = self.calls.get() + 1;
            self.calls.set(n);
            if n <= self.fail_first {
                Err(format!("simulated outage #{}", n))
            } else {
                Ok(format!("<{}>", word))
            }
        }

        fn name(&self) -> &str {
            "flaky"
        }
    }

    #[test]
    fn fallback_after_exactly_three_attempts() {
        let mut stage = TranslationStage::new(Box::new(FlakyTranslator::new(u32::MAX)));
        let outcome = stage.translate_word("fox");

        assert_eq!(outcome.text, "fox");
        assert_eq!(outcome.attempts, MAX_ATTEMPTS);
        assert!(outcome.degraded);
        assert_eq!(stage.failures(), 1);
    }

    #[test]
    fn success_on_second_attempt() {
        let mut stage = TranslationStage::new(Box::new(FlakyTranslator::new(1)));
        let outcome = stage.translate_word("fox");

        assert_eq!(outcome.text, "<fox>");
        assert_eq!(outcome.attempts, 2);
        assert!(!outcome.degraded);
    }

    #[test]
    fn cache_answers_repeat_lookups() {
        let mut stage = TranslationStage::new(Box::new(FlakyTranslator::new(0)));
        assert_eq!(stage.translate_word("fox").attempts, 1);

        let repeat = stage.translate_word("fox");
        assert_eq!(repeat.text, "<fox>");
        assert_eq!(repeat.attempts, 0);
        assert_eq!(stage.cache_len(), 1);
    }

    #[test]
    fn degraded_results_are_not_cached() {
        let backend = FlakyTranslator::new(MAX_ATTEMPTS); // fails the whole first word
        let mut stage = TranslationStage::new(Box::new(backend));

        let first = stage.translate_word("fox");
        assert!(first.degraded);
        assert_eq!(stage.cache_len(), 0);

        // backend has recovered; the word is retried rather than pinned
        let second = stage.translate_word("fox");
        assert!(!second.degraded);
        assert_eq!(second.text, "<fox>");
    }

    #[test]
    fn translate_all_keeps_order_and_degrades_per_word() {
        let mut stage = TranslationStage::new(Box::new(FlakyTranslator::new(0)));
        let words = vec!["apple".to_string(), "fox".to_string()];
        let pairs = stage.translate_all(&words);

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].word, "apple");
        assert_eq!(pairs[0].translation, "<apple>");
        assert_eq!(pairs[1].word, "fox");
    }
}
