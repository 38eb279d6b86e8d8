use std::collections::BTreeSet;

// ─── Configuration ───────────────────────────────────────────────

/// Base-form resolution strategy for the extraction pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Strategy {
    /// Group surface forms by Snowball stem; the shortest form represents
    /// the family.
    Stem,
    /// POS-tag each token in isolation and lemmatize under the tagged
    /// category.
    Lemma,
}

impl Strategy {
    /// Parse a CLI-style strategy name. Returns `None` for unknown names.
    pub fn parse(name: &str) -> Option<Strategy> {
        match name.to_lowercase().as_str() {
            "stem" => Some(Strategy::Stem),
            "lemma" => Some(Strategy::Lemma),
            _ => None,
        }
    }
}

/// Options for one extraction run. All literal parameters; nothing is
/// reconfigured mid-run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ExtractOptions {
    pub strategy: Strategy,
    /// Drop high-frequency function words from the vocabulary.
    pub filter_stopwords: bool,
    /// Cap on how many words reach the translation stage. `None` = all.
    pub max_words: Option<usize>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::Stem,
            filter_stopwords: true,
            max_words: None,
        }
    }
}

// ─── Vocabulary ──────────────────────────────────────────────────

/// A deduplicated set of base-form words. Grows monotonically during the
/// extraction pass; iteration is always lexicographically sorted.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: BTreeSet<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: String) -> bool {
        self.words.insert(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_str())
    }

    /// The full vocabulary as a sorted `Vec`.
    pub fn to_vec(&self) -> Vec<String> {
        self.words.iter().cloned().collect()
    }

    /// The first `max` words in sort order, for capping what reaches the
    /// translation stage.
    pub fn truncated(&self, max: usize) -> Vec<String> {
        self.words.iter().take(max).cloned().collect()
    }
}

impl FromIterator<String> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

// ─── Word Pairs ──────────────────────────────────────────────────

/// One vocabulary word paired with its target-language translation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WordPair {
    pub word: String,
    pub translation: String,
}

// ─── Report ──────────────────────────────────────────────────────

/// Counters from one extraction pass, printed by the CLI at the end.
#[derive(Debug, Clone, Default)]
pub struct ExtractReport {
    /// Raw tokens consumed from the tokenizer.
    pub tokens_seen: usize,
    /// Cleaned tokens (or compound parts) that passed the validity filter.
    pub tokens_kept: usize,
    /// Distinct base forms in the final vocabulary.
    pub unique_words: usize,
}
