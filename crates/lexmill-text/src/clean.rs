//! Token cleaning: the first pipeline stage every raw token passes through.

/// Clean a raw token: lowercase, keep only alphanumerics, whitespace,
/// hyphens and underscores, then trim stray edge characters left over from
/// contraction splitting and dash-wrapped dialogue.
///
/// Total and idempotent: `clean(clean(x)) == clean(x)` for any input, and
/// the result may be empty.
pub fn clean(raw: &str) -> String {
    let kept: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || matches!(c, '-' | '_'))
        .collect();
    kept.trim_matches(|c: char| matches!(c, '-' | '_' | '\'' | '"'))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(clean("Hello!"), "hello");
        assert_eq!(clean("FOX,"), "fox");
        assert_eq!(clean("(word)"), "word");
    }

    #[test]
    fn keeps_internal_hyphens() {
        assert_eq!(clean("quick-witted"), "quick-witted");
        assert_eq!(clean("Self-Portrait"), "self-portrait");
    }

    #[test]
    fn trims_edge_hyphens_and_underscores() {
        assert_eq!(clean("-dash"), "dash");
        assert_eq!(clean("word-"), "word");
        assert_eq!(clean("__init__"), "init");
        assert_eq!(clean("--"), "");
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(clean("42nd"), "42nd");
    }

    #[test]
    fn empty_and_pure_punctuation() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("!?!"), "");
        assert_eq!(clean("'\""), "");
    }

    #[test]
    fn unicode_letters_survive() {
        assert_eq!(clean("Café"), "café");
        assert_eq!(clean("Привіт,"), "привіт");
    }

    #[test]
    fn idempotent() {
        for s in ["Hello!", "-quick-witted-", "it's", "42nd", "…", "Привіт!", ""] {
            let once = clean(s);
            assert_eq!(clean(&once), once, "clean not idempotent for {:?}", s);
        }
    }
}
