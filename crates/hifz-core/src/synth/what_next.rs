//! What-comes-next questions.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Quiz, Verse};

/// Offered as the "next verse" after the last verse of a chapter.
pub const CLOSING_PHRASE: &str = "صَدَقَ اللَّهُ الْعَظِيمُ";

/// Wrong verses offered next to the correct one.
pub const DISTRACTOR_COUNT: usize = 3;

/// Ask which verse follows `verses[index]`.
///
/// For the last verse the closing phrase is the answer and stays at position
/// 0; elsewhere the options are shuffled. Verses whose text duplicates the
/// current or next verse are never used as distractors, so chapters with
/// refrains can yield fewer than four options.
pub fn synthesize<R: Rng + ?Sized>(rng: &mut R, verses: &[Verse], index: usize) -> Quiz {
    let current = verses.get(index).map(|v| v.text.as_str()).unwrap_or_default();

    match verses.get(index + 1) {
        None => {
            let mut next_options = vec![CLOSING_PHRASE.to_string()];
            next_options.extend(pick_other_verses(rng, verses, &[index], &[current]));
            Quiz::WhatNext {
                next_options,
                correct_answer: CLOSING_PHRASE.to_string(),
            }
        }
        Some(next) => {
            let correct_answer = next.text.clone();
            let mut next_options = vec![correct_answer.clone()];
            next_options.extend(pick_other_verses(
                rng,
                verses,
                &[index, index + 1],
                &[current, next.text.as_str()],
            ));
            next_options.shuffle(rng);
            Quiz::WhatNext {
                next_options,
                correct_answer,
            }
        }
    }
}

/// Up to [`DISTRACTOR_COUNT`] distinct verse texts, skipping the given
/// positions and texts.
fn pick_other_verses<R: Rng + ?Sized>(
    rng: &mut R,
    verses: &[Verse],
    skip_positions: &[usize],
    skip_texts: &[&str],
) -> Vec<String> {
    let mut seen: HashSet<&str> = skip_texts.iter().copied().collect();
    let mut candidates: Vec<&str> = verses
        .iter()
        .enumerate()
        .filter(|(i, _)| !skip_positions.contains(i))
        .map(|(_, v)| v.text.as_str())
        .filter(|text| seen.insert(*text))
        .collect();

    candidates.shuffle(rng);
    candidates.truncate(DISTRACTOR_COUNT);
    candidates.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::test_support::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn unpack(quiz: Quiz) -> (Vec<String>, String) {
        match quiz {
            Quiz::WhatNext {
                next_options,
                correct_answer,
            } => (next_options, correct_answer),
            other => panic!("expected what-next, got {other:?}"),
        }
    }

    #[test]
    fn middle_verse_offers_next_verse() {
        let chapter = verses(&AN_NAS);
        for index in 0..AN_NAS.len() - 1 {
            for seed in 0..20 {
                let mut rng = StdRng::seed_from_u64(seed);
                let (options, answer) = unpack(synthesize(&mut rng, &chapter, index));
                assert_eq!(answer, AN_NAS[index + 1]);
                assert_eq!(options.len(), 4);
                assert!(options.contains(&answer));
                assert!(!options.iter().any(|o| o == AN_NAS[index]));
            }
        }
    }

    #[test]
    fn last_verse_offers_closing_phrase_first() {
        let chapter = verses(&AN_NAS);
        let mut rng = StdRng::seed_from_u64(2);
        let (options, answer) = unpack(synthesize(&mut rng, &chapter, AN_NAS.len() - 1));
        assert_eq!(answer, CLOSING_PHRASE);
        assert_eq!(options[0], CLOSING_PHRASE);
        assert_eq!(options.len(), 4);
        assert!(!options.iter().any(|o| o == AN_NAS[5]));
    }

    #[test]
    fn short_chapter_yields_fewer_options() {
        let chapter = verses(&AL_IKHLAS[..3]);
        let mut rng = StdRng::seed_from_u64(0);
        let (options, _) = unpack(synthesize(&mut rng, &chapter, 0));
        assert_eq!(options.len(), 2);

        let (options, _) = unpack(synthesize(&mut rng, &chapter, 2));
        assert_eq!(options.len(), 3);
        assert_eq!(options[0], CLOSING_PHRASE);
    }

    #[test]
    fn refrains_are_not_offered_twice() {
        let refrain = "فَبِأَيِّ آلَاءِ رَبِّكُمَا تُكَذِّبَانِ";
        let chapter = verses(&[
            "الرَّحْمَٰنُ",
            refrain,
            "خَلَقَ الْإِنسَانَ",
            refrain,
            "عَلَّمَهُ الْبَيَانَ",
            refrain,
        ]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (options, answer) = unpack(synthesize(&mut rng, &chapter, 0));
            assert_eq!(answer, refrain);
            assert_eq!(options.iter().filter(|o| *o == refrain).count(), 1);
            assert!(!options.iter().any(|o| o == "الرَّحْمَٰنُ"));
        }
    }
}
