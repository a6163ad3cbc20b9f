//! Quiz synthesizers, one per mode.
//!
//! Every synthesizer is a pure function of a verse, its chapter, and an
//! injected random source. Pass a seeded `StdRng` for reproducible output.

pub mod fill_blank;
pub mod full_chapter;
pub mod reorder;
pub mod tap_hear;
pub mod what_next;

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::Verse;
use crate::normalize::{char_len, normalize, tokenize};

/// Common words used when a chapter offers too few distractors for short verses.
pub const SHORT_VERSE_FALLBACK: [&str; 14] = [
    "اللَّهِ",
    "الرَّحْمَنِ",
    "الرَّحِيمِ",
    "الْحَمْدُ",
    "رَبِّ",
    "وَ",
    "فِي",
    "مِنْ",
    "إِلَى",
    "قُلْ",
    "مَا",
    "لَا",
    "أَمْ",
    "هُوَ",
];

/// Common words used when a chapter offers too few distractors for longer verses.
pub const LONG_VERSE_FALLBACK: [&str; 14] = [
    "اللَّهِ",
    "الرَّحْمَنِ",
    "الرَّحِيمِ",
    "الْحَمْدُ",
    "رَبِّ",
    "الْعَالَمِينَ",
    "وَ",
    "فِي",
    "مِنْ",
    "إِلَى",
    "قُلْ",
    "الَّذِي",
    "مَا",
    "لَا",
];

/// Normalized words of every verse in `verses`, deduplicated in first-seen
/// order, keeping those at least `min_chars` long that `exclude` does not reject.
pub(crate) fn word_pool<F>(verses: &[Verse], min_chars: usize, exclude: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut seen = HashSet::new();
    let mut pool = Vec::new();
    for verse in verses {
        for word in tokenize(&verse.text) {
            let clean = normalize(word);
            if char_len(&clean) < min_chars || exclude(&clean) {
                continue;
            }
            if seen.insert(clean.clone()) {
                pool.push(clean);
            }
        }
    }
    pool
}

/// Draw `count` distinct words from `pool` uniformly without replacement,
/// topping up from `fallback` when the pool runs short.
///
/// Fallback words whose normalized form is rejected by `exclude`, or matches
/// a word already drawn, are skipped. The result can still be shorter than
/// `count` if the fallback list is exhausted, e.g. when the verse itself
/// uses most of the fallback words.
pub(crate) fn sample_distractors<R, F>(
    rng: &mut R,
    mut pool: Vec<String>,
    count: usize,
    fallback: &[&str],
    exclude: F,
) -> Vec<String>
where
    R: Rng + ?Sized,
    F: Fn(&str) -> bool,
{
    pool.shuffle(rng);
    pool.truncate(count);

    if pool.len() < count {
        let mut spares: Vec<&str> = fallback.to_vec();
        spares.shuffle(rng);
        for word in spares {
            if pool.len() >= count {
                break;
            }
            let clean = normalize(word);
            if exclude(&clean) || pool.iter().any(|w| normalize(w) == clean) {
                continue;
            }
            pool.push(word.to_string());
        }
    }

    pool
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::Verse;

    pub fn verses(texts: &[&str]) -> Vec<Verse> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| Verse {
                number: i as u32 + 1,
                number_in_chapter: i as u32 + 1,
                text: text.to_string(),
                juz: 30,
                page: 604,
            })
            .collect()
    }

    /// Al-Ikhlas (112), Uthmani script.
    pub const AL_IKHLAS: [&str; 4] = [
        "قُلْ هُوَ اللَّهُ أَحَدٌ",
        "اللَّهُ الصَّمَدُ",
        "لَمْ يَلِدْ وَلَمْ يُولَدْ",
        "وَلَمْ يَكُن لَّهُ كُفُوًا أَحَدٌ",
    ];

    /// An-Nas (114), Uthmani script.
    pub const AN_NAS: [&str; 6] = [
        "قُلْ أَعُوذُ بِرَبِّ النَّاسِ",
        "مَلِكِ النَّاسِ",
        "إِلَٰهِ النَّاسِ",
        "مِن شَرِّ الْوَسْوَاسِ الْخَنَّاسِ",
        "الَّذِي يُوَسْوِسُ فِي صُدُورِ النَّاسِ",
        "مِنَ الْجِنَّةِ وَالنَّاسِ",
    ];
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn word_pool_dedupes_after_normalizing() {
        let chapter = verses(&["مَلِكِ النَّاسِ", "إِلَٰهِ النَّاسِ"]);
        let pool = word_pool(&chapter, 1, |_| false);
        let nas = normalize("النَّاسِ");
        assert_eq!(pool.iter().filter(|w| **w == nas).count(), 1);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn word_pool_applies_length_and_exclusion() {
        let chapter = verses(&["وَ قُلْ هُوَ"]);
        let pool = word_pool(&chapter, 2, |w| w == "قل");
        assert_eq!(pool, vec!["هو".to_string()]);
    }

    #[test]
    fn sample_pads_from_fallback_without_duplicates() {
        let mut rng = StdRng::seed_from_u64(3);
        let picked = sample_distractors(
            &mut rng,
            vec!["الله".into()],
            3,
            &SHORT_VERSE_FALLBACK,
            |w| w == "هو",
        );
        assert_eq!(picked.len(), 3);
        let normalized: HashSet<String> = picked.iter().map(|w| normalize(w)).collect();
        assert_eq!(normalized.len(), 3, "fallback must not repeat a drawn word: {picked:?}");
        assert!(!normalized.contains("هو"));
    }

    #[test]
    fn sample_takes_only_count_from_large_pool() {
        let mut rng = StdRng::seed_from_u64(9);
        let pool: Vec<String> = (0..20).map(|i| format!("w{i}")).collect();
        let picked = sample_distractors(&mut rng, pool.clone(), 3, &[], |_| false);
        assert_eq!(picked.len(), 3);
        assert!(picked.iter().all(|w| pool.contains(w)));
    }
}
