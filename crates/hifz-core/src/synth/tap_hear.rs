//! Tap-what-you-hear questions.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Quiz, Verse};
use crate::normalize::{normalize, tokenize};
use crate::synth::{sample_distractors, word_pool, LONG_VERSE_FALLBACK};

/// Distractors mixed into the word pool for a verse of `word_count` words:
/// 40% of the verse length, clamped to `2..=6`.
pub fn distractor_count(word_count: usize) -> usize {
    (word_count * 2 / 5).clamp(2, 6)
}

/// Shuffle the verse's words together with distractors from `chapter`.
///
/// The user taps words in recitation order; the expected sequence is the
/// whitespace tokenization of `text`.
pub fn synthesize<R: Rng + ?Sized>(rng: &mut R, text: &str, chapter: &[Verse]) -> Quiz {
    let words = tokenize(text);
    let in_verse: HashSet<String> = words.iter().map(|w| normalize(w)).collect();
    let is_in_verse = |w: &str| in_verse.contains(w);

    let pool = word_pool(chapter, 2, is_in_verse);
    let distractors = sample_distractors(
        rng,
        pool,
        distractor_count(words.len()),
        &LONG_VERSE_FALLBACK,
        is_in_verse,
    );

    let mut options: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    options.extend(distractors);
    options.shuffle(rng);

    Quiz::TapHear { options }
}
