//! Word-reordering questions.

use crate::model::Quiz;
use crate::normalize::tokenize;

/// Verses longer than this are cut down before reordering.
pub const MAX_WORDS: usize = 8;

/// Words kept from a verse longer than [`MAX_WORDS`].
pub const TRUNCATED_WORDS: usize = 6;

/// The verse's words in correct order. Long verses keep only their opening
/// words; the caller shuffles a working copy for the user.
pub fn synthesize(text: &str) -> Quiz {
    let mut words: Vec<String> = tokenize(text).into_iter().map(str::to_string).collect();
    if words.len() > MAX_WORDS {
        words.truncate(TRUNCATED_WORDS);
    }
    Quiz::Reorder { words }
}
