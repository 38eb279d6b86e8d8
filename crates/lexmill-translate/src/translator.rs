//! Pluggable translation backend trait.
//!
//! Any word-translation service implements `Translator`. Current
//! implementation: MyMemoryTranslator. The trait is object-safe and uses
//! `&self`; retry, caching and fallback live in `TranslationStage`, not in
//! the backends.

pub trait Translator {
    /// Translate a single word. `Err` carries a human-readable reason for
    /// the stage's logging; one call is one attempt, retries are the
    /// caller's business.
    fn translate(&self, word: &str) -> Result<String, String>;

    /// Human-readable name of this backend (for logging/reports).
    fn name(&self) -> &str;
}
