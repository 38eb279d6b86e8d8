//! Vocabulary accumulation: one pass over the token stream, folding every
//! qualifying base form into a deduplicated, sorted vocabulary.

use lexmill_core::{ExtractReport, Vocabulary};

use crate::clean::clean;
use crate::compound::split_compound;
use crate::filter::ValidityFilter;
use crate::resolve::BaseFormResolver;

/// Drives the cleaning → splitting → filtering → resolution pipeline over
/// a full token stream. Owns the filter and resolver so all per-run state
/// (word families, lemma cache) dies with it.
pub struct VocabularyExtractor {
    filter: ValidityFilter,
    resolver: Box<dyn BaseFormResolver>,
}

impl VocabularyExtractor {
    pub fn new(filter: ValidityFilter, resolver: Box<dyn BaseFormResolver>) -> Self {
        Self { filter, resolver }
    }

    pub fn resolver_name(&self) -> &str {
        self.resolver.name()
    }

    /// Consume the ordered token stream once and return the sorted,
    /// deduplicated vocabulary plus run counters.
    pub fn extract<I, S>(&mut self, tokens: I) -> (Vocabulary, ExtractReport)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut collected = Vocabulary::new();
        let mut report = ExtractReport::default();

        for token in tokens {
            report.tokens_seen += 1;
            let cleaned = clean(token.as_ref());
            if cleaned.contains('-') {
                self.add_compound(&cleaned, &mut collected, &mut report);
            } else {
                self.add_single(&cleaned, &mut collected, &mut report);
            }
        }

        // A stem family's canonical form may have shrunk after some of its
        // members were already collected; re-reading every entry maps each
        // one to the family's final answer.
        let mut vocab = Vocabulary::new();
        for word in collected.to_vec() {
            vocab.insert(self.resolver.resolve(&word));
        }

        report.unique_words = vocab.len();
        (vocab, report)
    }

    fn add_single(&mut self, cleaned: &str, vocab: &mut Vocabulary, report: &mut ExtractReport) {
        if !self.filter.is_valid(cleaned) {
            return;
        }
        report.tokens_kept += 1;

        let base = self.resolver.resolve(cleaned);
        if self.filter.is_valid(&base) {
            vocab.insert(base);
        }
    }

    fn add_compound(&mut self, cleaned: &str, vocab: &mut Vocabulary, report: &mut ExtractReport) {
        // the joined form and every split part are independent candidates
        self.add_single(cleaned, vocab, report);
        for part in split_compound(cleaned) {
            self.add_single(&part, vocab, report);
        }
    }
}
