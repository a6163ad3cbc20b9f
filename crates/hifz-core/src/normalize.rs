//! Token normalization and whitespace tokenization.
//!
//! Normalized tokens are only used for matching and deduplicating distractor
//! candidates; verse text shown to the user is never normalized.

/// Arabic full stop, comma, and question mark.
const PUNCTUATION: [char; 3] = ['\u{06D4}', '\u{060C}', '\u{061F}'];

/// Tanween, short vowels, and sukun (U+064B..=U+0650, U+0652). Shadda and the
/// Uthmani annotation marks are intentionally left in place.
const DIACRITICS: [char; 7] = [
    '\u{064B}', '\u{064C}', '\u{064D}', '\u{064E}', '\u{064F}', '\u{0650}', '\u{0652}',
];

/// Strip punctuation and vowel diacritics from a token and trim it.
pub fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|c| !PUNCTUATION.contains(c) && !DIACRITICS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Split verse text into words on Unicode whitespace.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Number of characters in a normalized token.
pub(crate) fn char_len(token: &str) -> usize {
    token.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_vowel_diacritics() {
        assert_eq!(normalize("الْحَمْدُ"), "الحمد");
        assert_eq!(normalize("رَبِّ"), "رب\u{0651}");
    }

    #[test]
    fn strips_punctuation_and_trims() {
        assert_eq!(normalize("  قُلْ، "), "قل");
        assert_eq!(normalize("أَمْ؟"), "أم");
        assert_eq!(normalize("هُوَ۔"), "هو");
    }

    #[test]
    fn leaves_plain_tokens_alone() {
        assert_eq!(normalize("abc"), "abc");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for word in ["بِسْمِ", "اللَّهِ", "الرَّحْمَٰنِ", "الرَّحِيمِ"] {
            let once = normalize(word);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  قُلْ  هُوَ\tاللَّهُ\nأَحَدٌ "), vec!["قُلْ", "هُوَ", "اللَّهُ", "أَحَدٌ"]);
        assert!(tokenize("   ").is_empty());
    }
}
