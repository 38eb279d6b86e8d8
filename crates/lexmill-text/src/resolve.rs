//! Base-form resolution: map a validated token to the canonical string
//! that represents its word family in the vocabulary.
//!
//! Two interchangeable strategies sit behind one trait. The stem-family
//! strategy groups surface forms by Snowball stem and lets the shortest
//! form represent the family; the POS-lemmatization strategy computes a
//! dictionary base form per token and memoizes it.

use std::collections::HashMap;

use lexmill_core::Strategy;
use rust_stemmers::{Algorithm, Stemmer};

use crate::lemma::{self, PosCategory};

/// A pluggable token → base form mapping. Resolvers own their caches, so
/// lookups take `&mut self`; state lives for one extraction run.
pub trait BaseFormResolver {
    fn resolve(&mut self, token: &str) -> String;

    /// Human-readable strategy name (for logging/reports).
    fn name(&self) -> &str;
}

/// Build the resolver for a configured strategy.
pub fn resolver_for(strategy: Strategy) -> Box<dyn BaseFormResolver> {
    match strategy {
        Strategy::Stem => Box::new(StemFamilyResolver::new()),
        Strategy::Lemma => Box::new(PosLemmaResolver::new()),
    }
}

// ─── Stem-family strategy ────────────────────────────────────────

/// Groups tokens by their Snowball stem. The first surface form seen
/// registers the family; a later form replaces it only when strictly
/// shorter, or when equal in length and lexicographically smaller. The
/// canonical form of a family can therefore only shrink over a run, and
/// the outcome is independent of token arrival order.
pub struct StemFamilyResolver {
    stemmer: Stemmer,
    families: HashMap<String, String>,
}

impl StemFamilyResolver {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
            families: HashMap::new(),
        }
    }

    /// Number of distinct families seen so far.
    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    /// The current canonical form for a raw stem key, if any.
    pub fn canonical_for_stem(&self, stem: &str) -> Option<&str> {
        self.families.get(stem).map(|w| w.as_str())
    }
}

impl Default for StemFamilyResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseFormResolver for StemFamilyResolver {
    fn resolve(&mut self, token: &str) -> String {
        let stem = self.stemmer.stem(token).into_owned();
        let canonical = self
            .families
            .entry(stem)
            .or_insert_with(|| token.to_string());

        let token_len = token.chars().count();
        let canonical_len = canonical.chars().count();
        if token_len < canonical_len || (token_len == canonical_len && token < canonical.as_str()) {
            *canonical = token.to_string();
        }

        canonical.clone()
    }

    fn name(&self) -> &str {
        "stem-family"
    }
}

// ─── POS-lemmatization strategy ──────────────────────────────────

/// Tags each token in isolation, lemmatizes under the tagged category and
/// memoizes the result. A no-op lemmatization under a non-noun category is
/// retried once under the default noun category, mirroring how dictionary
/// lemmatizers fall back.
pub struct PosLemmaResolver {
    cache: HashMap<String, String>,
}

impl PosLemmaResolver {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Number of memoized lookups (test introspection).
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

impl Default for PosLemmaResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseFormResolver for PosLemmaResolver {
    fn resolve(&mut self, token: &str) -> String {
        if token.chars().count() < 2 {
            return token.to_string();
        }
        if let Some(hit) = self.cache.get(token) {
            return hit.clone();
        }

        let pos = lemma::tag_token(token);
        let mut base = lemma::lemmatize(token, pos);
        if base == token && pos != PosCategory::Noun {
            base = lemma::lemmatize(token, PosCategory::Noun);
        }

        let base = base.to_lowercase();
        self.cache.insert(token.to_string(), base.clone());
        base
    }

    fn name(&self) -> &str {
        "pos-lemma"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_family_shortest_form_wins() {
        let mut resolver = StemFamilyResolver::new();
        assert_eq!(resolver.resolve("running"), "running");
        assert_eq!(resolver.resolve("run"), "run");
        // the family now answers with the shorter form
        assert_eq!(resolver.resolve("running"), "run");
    }

    #[test]
    fn stem_family_order_independent() {
        let mut forward = StemFamilyResolver::new();
        forward.resolve("running");
        forward.resolve("run");

        let mut backward = StemFamilyResolver::new();
        backward.resolve("run");
        backward.resolve("running");

        assert_eq!(forward.resolve("runs"), "run");
        assert_eq!(backward.resolve("runs"), "run");
    }

    #[test]
    fn stem_family_never_grows() {
        let mut resolver = StemFamilyResolver::new();
        resolver.resolve("run");
        assert_eq!(resolver.resolve("running"), "run");
        assert_eq!(resolver.resolve("runner"), "runner"); // different stem
    }

    #[test]
    fn stem_family_equal_length_tie_is_lexicographic() {
        // "mated" and "mates" share a stem and a length; the
        // lexicographically smaller form wins under either arrival order
        let mut forward = StemFamilyResolver::new();
        forward.resolve("mates");
        assert_eq!(forward.resolve("mated"), "mated");

        let mut backward = StemFamilyResolver::new();
        backward.resolve("mated");
        assert_eq!(backward.resolve("mates"), "mated");
    }

    #[test]
    fn stem_family_counts_families() {
        let mut resolver = StemFamilyResolver::new();
        resolver.resolve("run");
        resolver.resolve("running");
        resolver.resolve("fox");
        assert_eq!(resolver.family_count(), 2);
        assert_eq!(resolver.canonical_for_stem("run"), Some("run"));
        assert_eq!(resolver.canonical_for_stem("absent"), None);
    }

    #[test]
    fn lemma_resolver_caches() {
        let mut resolver = PosLemmaResolver::new();
        assert_eq!(resolver.resolve("dogs"), "dog");
        assert_eq!(resolver.cache_len(), 1);
        // repeat lookups hit the cache and stay stable
        assert_eq!(resolver.resolve("dogs"), "dog");
        assert_eq!(resolver.cache_len(), 1);
        assert_eq!(resolver.resolve("running"), "run");
        assert_eq!(resolver.cache_len(), 2);
    }

    #[test]
    fn lemma_resolver_retries_as_noun() {
        let mut resolver = PosLemmaResolver::new();
        // "kindly" tags as adverb (no-op), then retries under noun rules
        assert_eq!(resolver.resolve("kindly"), "kindly");
        // "tables" tags as noun directly
        assert_eq!(resolver.resolve("tables"), "table");
    }

    #[test]
    fn lemma_resolver_leaves_short_tokens() {
        let mut resolver = PosLemmaResolver::new();
        assert_eq!(resolver.resolve("a"), "a");
        assert_eq!(resolver.cache_len(), 0);
    }

    #[test]
    fn resolver_for_picks_strategy() {
        assert_eq!(resolver_for(Strategy::Stem).name(), "stem-family");
        assert_eq!(resolver_for(Strategy::Lemma).name(), "pos-lemma");
    }
}
