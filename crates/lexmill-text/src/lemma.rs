//! Single-token POS tagging and rule-based lemmatization.
//!
//! The tagger sees one token at a time with no sentence context, so it can
//! only go by word shape; that loses accuracy on ambiguous forms ("saw",
//! "left") and is a known limitation of this strategy. Irregular forms are
//! resolved through a fixed table before any suffix rule runs.

/// Coarse part-of-speech categories the lemmatizer distinguishes.
/// Anything unrecognized is treated as a noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosCategory {
    Adjective,
    Verb,
    Noun,
    Adverb,
}

const ADVERB_SUFFIXES: [&str; 1] = ["ly"];
const VERB_SUFFIXES: [&str; 5] = ["ing", "ed", "ize", "ise", "ify"];
const ADJECTIVE_SUFFIXES: [&str; 11] = [
    "ous", "ful", "ive", "able", "ible", "al", "ic", "less", "ish", "est", "er",
];

/// Common irregular form → lemma pairs, consulted before suffix rules.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("bent", "bend"),
    ("best", "good"),
    ("better", "good"),
    ("came", "come"),
    ("children", "child"),
    ("did", "do"),
    ("done", "do"),
    ("dying", "die"),
    ("feet", "foot"),
    ("found", "find"),
    ("gave", "give"),
    ("geese", "goose"),
    ("given", "give"),
    ("gone", "go"),
    ("had", "have"),
    ("has", "have"),
    ("is", "be"),
    ("knew", "know"),
    ("known", "know"),
    ("lying", "lie"),
    ("made", "make"),
    ("men", "man"),
    ("mice", "mouse"),
    ("ran", "run"),
    ("said", "say"),
    ("saw", "see"),
    ("seen", "see"),
    ("taken", "take"),
    ("teeth", "tooth"),
    ("thought", "think"),
    ("took", "take"),
    ("was", "be"),
    ("went", "go"),
    ("were", "be"),
    ("women", "woman"),
    ("worse", "bad"),
    ("worst", "bad"),
];

/// Tag a token in isolation by its suffix shape.
pub fn tag_token(token: &str) -> PosCategory {
    if ADVERB_SUFFIXES.iter().any(|s| token.ends_with(s)) {
        return PosCategory::Adverb;
    }
    if VERB_SUFFIXES.iter().any(|s| token.ends_with(s)) {
        return PosCategory::Verb;
    }
    if ADJECTIVE_SUFFIXES.iter().any(|s| token.ends_with(s)) {
        return PosCategory::Adjective;
    }
    PosCategory::Noun
}

/// Lemmatize `token` under the given category. Returns the token unchanged
/// when no rule applies; the caller decides whether to retry as a noun.
pub fn lemmatize(token: &str, pos: PosCategory) -> String {
    if let Some(&(_, lemma)) = IRREGULAR_FORMS.iter().find(|(form, _)| *form == token) {
        return lemma.to_string();
    }

    match pos {
        PosCategory::Noun => lemmatize_noun(token),
        PosCategory::Verb => lemmatize_verb(token),
        PosCategory::Adjective => lemmatize_adjective(token),
        // -ly adverbs lemmatize to themselves in dictionary terms
        PosCategory::Adverb => token.to_string(),
    }
}

fn lemmatize_noun(token: &str) -> String {
    let len = token.chars().count();

    if len > 4 {
        if let Some(stem) = token.strip_suffix("ies") {
            return format!("{}y", stem);
        }
    }
    for suffix in ["xes", "ches", "shes", "sses", "zes"] {
        if token.ends_with(suffix) && len > suffix.len() + 1 {
            return token[..token.len() - 2].to_string();
        }
    }
    // "glass", "bus", "basis" keep their endings
    if token.ends_with("ss") || token.ends_with("us") || token.ends_with("is") {
        return token.to_string();
    }
    if len > 3 {
        if let Some(stem) = token.strip_suffix('s') {
            return stem.to_string();
        }
    }
    token.to_string()
}

fn lemmatize_verb(token: &str) -> String {
    let len = token.chars().count();

    for suffix in ["ing", "ed"] {
        if len > suffix.len() + 2 {
            if let Some(stem) = token.strip_suffix(suffix) {
                return restore_stem(stem);
            }
        }
    }
    if len > 3 {
        if let Some(stem) = token.strip_suffix("es") {
            return restore_stem(stem);
        }
        if let Some(stem) = token.strip_suffix('s') {
            return stem.to_string();
        }
    }
    token.to_string()
}

fn lemmatize_adjective(token: &str) -> String {
    let len = token.chars().count();

    if len > 4 {
        if let Some(stem) = token.strip_suffix("iest").or_else(|| token.strip_suffix("ier")) {
            return format!("{}y", stem);
        }
    }
    for suffix in ["est", "er"] {
        if len > suffix.len() + 2 {
            if let Some(stem) = token.strip_suffix(suffix) {
                return restore_stem(stem);
            }
        }
    }
    token.to_string()
}

/// Repair a suffix-stripped stem: undouble the final consonant
/// ("runn" → "run"), restore i → y ("tidi" → "tidy") and restore the
/// silent e after stem-final letters that never end an English word
/// ("danc" → "dance").
fn restore_stem(stem: &str) -> String {
    // the repair rules are English-letter phonotactics; leave anything
    // else untouched
    if !stem.is_ascii() {
        return stem.to_string();
    }

    let bytes = stem.as_bytes();
    let n = bytes.len();

    if n >= 3 && bytes[n - 1] == bytes[n - 2] && !stem.ends_with("ll") && !stem.ends_with("ss") {
        return stem[..n - 1].to_string();
    }
    if stem.ends_with('i') && n >= 3 {
        return format!("{}y", &stem[..n - 1]);
    }
    if stem.ends_with(['c', 'u', 'v', 'z']) {
        return format!("{}e", stem);
    }
    stem.to_string()
}
