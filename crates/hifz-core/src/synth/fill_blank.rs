//! Fill-in-the-blank questions.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Quiz, Verse, BLANK_MARKER};
use crate::normalize::{normalize, tokenize};
use crate::synth::{sample_distractors, word_pool, LONG_VERSE_FALLBACK, SHORT_VERSE_FALLBACK};

/// Number of wrong options offered next to the correct word.
pub const DISTRACTOR_COUNT: usize = 3;

/// Hide one word of `text` and offer it among three distractors drawn from
/// the words of `chapter`.
///
/// Returns the text to display (with the blank marker) and the quiz.
///
/// - One word: the whole verse is masked and the translation is shown
///   alongside so the question stays answerable.
/// - Two words: either word may be hidden.
/// - Three or more: only interior words are hidden; the first and last are
///   too easy to guess.
pub fn synthesize<R: Rng + ?Sized>(
    rng: &mut R,
    text: &str,
    translation: &str,
    chapter: &[Verse],
) -> (String, Quiz) {
    let mut words = tokenize(text);

    let (display, correct_answer, blank_index, min_chars, fallback) = match words.len() {
        0 | 1 => {
            let answer = words.first().copied().unwrap_or_default().to_string();
            let display = format!("{BLANK_MARKER} ({translation})");
            (display, answer, None, 1, &SHORT_VERSE_FALLBACK)
        }
        2 => {
            let index = rng.gen_range(0..2);
            let answer = words[index].to_string();
            words[index] = BLANK_MARKER;
            (words.join(" "), answer, Some(index), 1, &SHORT_VERSE_FALLBACK)
        }
        n => {
            let index = rng.gen_range(1..n - 1);
            let answer = words[index].to_string();
            words[index] = BLANK_MARKER;
            (words.join(" "), answer, Some(index), 2, &LONG_VERSE_FALLBACK)
        }
    };

    let answer_key = normalize(&correct_answer);
    let is_answer = |w: &str| w == answer_key;
    let pool = word_pool(chapter, min_chars, is_answer);
    let distractors = sample_distractors(rng, pool, DISTRACTOR_COUNT, fallback, is_answer);

    let mut options = Vec::with_capacity(DISTRACTOR_COUNT + 1);
    options.push(correct_answer.clone());
    options.extend(distractors);
    options.shuffle(rng);

    (
        display,
        Quiz::FillBlank {
            options,
            correct_answer,
            blank_index,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::test_support::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn unpack(quiz: Quiz) -> (Vec<String>, String, Option<usize>) {
        match quiz {
            Quiz::FillBlank {
                options,
                correct_answer,
                blank_index,
            } => (options, correct_answer, blank_index),
            other => panic!("expected fill-blank, got {other:?}"),
        }
    }

    #[test]
    fn long_verse_blanks_an_interior_word() {
        let chapter = verses(&AN_NAS);
        let text = AN_NAS[4];
        let n = tokenize(text).len();

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (display, quiz) = synthesize(&mut rng, text, "who whispers", &chapter);
            let (options, answer, blank) = unpack(quiz);

            let index = blank.expect("long verses always have a blank position");
            assert!(index > 0 && index < n - 1, "seed {seed}: index {index}");
            assert_eq!(tokenize(text)[index], answer);
            assert_eq!(tokenize(&display)[index], BLANK_MARKER);

            assert_eq!(options.len(), 4);
            let unique: HashSet<&String> = options.iter().collect();
            assert_eq!(unique.len(), 4, "seed {seed}: {options:?}");
            assert!(options.contains(&answer));
        }
    }

    #[test]
    fn distractors_never_match_answer_without_diacritics() {
        let chapter = verses(&AN_NAS);
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (_, quiz) = synthesize(&mut rng, AN_NAS[0], "", &chapter);
            let (options, answer, _) = unpack(quiz);
            let key = normalize(&answer);
            let clashes = options.iter().filter(|o| normalize(o) == key).count();
            assert_eq!(clashes, 1, "seed {seed}: {options:?}");
        }
    }

    #[test]
    fn single_word_verse_masks_everything() {
        let chapter = verses(&["الم", "ذَٰلِكَ الْكِتَابُ لَا رَيْبَ فِيهِ"]);
        let mut rng = StdRng::seed_from_u64(1);
        let (display, quiz) = synthesize(&mut rng, "الم", "Alif, Lam, Mim.", &chapter);
        let (options, answer, blank) = unpack(quiz);

        assert_eq!(display, "_____ (Alif, Lam, Mim.)");
        assert_eq!(answer, "الم");
        assert_eq!(blank, None);
        assert_eq!(options.len(), 4);
        assert!(options.contains(&answer));
    }

    #[test]
    fn two_word_verse_blanks_either_word() {
        let chapter = verses(&AL_IKHLAS);
        let text = AL_IKHLAS[1];
        let mut positions = HashSet::new();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (display, quiz) = synthesize(&mut rng, text, "", &chapter);
            let (options, answer, blank) = unpack(quiz);
            let index = blank.unwrap();
            positions.insert(index);
            assert_eq!(tokenize(text)[index], answer);
            assert_eq!(tokenize(&display).len(), 2);
            assert_eq!(options.len(), 4);
        }
        assert_eq!(positions.len(), 2, "both positions should be chosen eventually");
    }

    #[test]
    fn tiny_chapter_falls_back_to_common_words() {
        let chapter = verses(&["مُدْهَامَّتَانِ"]);
        let mut rng = StdRng::seed_from_u64(5);
        let (_, quiz) = synthesize(&mut rng, "مُدْهَامَّتَانِ", "Dark green.", &chapter);
        let (options, answer, _) = unpack(quiz);
        assert_eq!(options.len(), 4);
        let unique: HashSet<&String> = options.iter().collect();
        assert_eq!(unique.len(), 4);
        for option in options.iter().filter(|o| **o != answer) {
            assert!(SHORT_VERSE_FALLBACK.contains(&option.as_str()), "{option}");
        }
    }

    #[test]
    fn same_seed_same_question() {
        let chapter = verses(&AN_NAS);
        let a = synthesize(&mut StdRng::seed_from_u64(42), AN_NAS[3], "", &chapter);
        let b = synthesize(&mut StdRng::seed_from_u64(42), AN_NAS[3], "", &chapter);
        assert_eq!(a, b);
    }
}
