//! In-memory chapter cache.
//!
//! One cache is owned per client (or shared between clients through an
//! `Arc`). Entries live as long as the cache; there is no eviction, since
//! there are only 114 chapters.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use hifz_core::model::{ChapterPair, ChapterSummary};

/// Fetched chapters keyed by chapter number, plus the chapter list.
#[derive(Debug, Default)]
pub struct ChapterCache {
    chapters: Mutex<HashMap<u16, Arc<ChapterPair>>>,
    chapter_list: Mutex<Option<Arc<[ChapterSummary]>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ChapterCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chapter(&self, number: u16) -> Option<Arc<ChapterPair>> {
        lock(&self.chapters).get(&number).cloned()
    }

    /// Store a chapter pair and return the shared handle. A concurrent fetch
    /// of the same chapter simply replaces the earlier entry.
    pub fn insert_chapter(&self, number: u16, pair: ChapterPair) -> Arc<ChapterPair> {
        let pair = Arc::new(pair);
        lock(&self.chapters).insert(number, Arc::clone(&pair));
        pair
    }

    pub fn chapter_list(&self) -> Option<Vec<ChapterSummary>> {
        lock(&self.chapter_list).as_ref().map(|list| list.to_vec())
    }

    pub fn set_chapter_list(&self, list: Vec<ChapterSummary>) {
        *lock(&self.chapter_list) = Some(list.into());
    }

    /// Number of cached chapters.
    pub fn len(&self) -> usize {
        lock(&self.chapters).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        lock(&self.chapters).clear();
        *lock(&self.chapter_list) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hifz_core::model::{Chapter, RevelationPlace, Verse};

    fn pair(number: u16) -> ChapterPair {
        let chapter = Chapter {
            number,
            name: "الكوثر".into(),
            english_name: "Al-Kauthar".into(),
            english_name_translation: "The River of Abundance".into(),
            revelation_place: RevelationPlace::Meccan,
            verses: vec![Verse {
                number: 6205,
                number_in_chapter: 1,
                text: "إِنَّا أَعْطَيْنَاكَ الْكَوْثَرَ".into(),
                juz: 30,
                page: 602,
            }],
        };
        ChapterPair::new(chapter.clone(), chapter).unwrap()
    }

    #[test]
    fn starts_empty() {
        let cache = ChapterCache::new();
        assert!(cache.is_empty());
        assert!(cache.chapter(108).is_none());
        assert!(cache.chapter_list().is_none());
    }

    #[test]
    fn insert_and_get_share_the_same_pair() {
        let cache = ChapterCache::new();
        let stored = cache.insert_chapter(108, pair(108));
        let fetched = cache.chapter(108).unwrap();
        assert!(Arc::ptr_eq(&stored, &fetched));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn chapter_list_roundtrip_and_clear() {
        let cache = ChapterCache::new();
        cache.set_chapter_list(hifz_core::catalog::chapters());
        assert_eq!(cache.chapter_list().unwrap().len(), 114);

        cache.insert_chapter(108, pair(108));
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.chapter_list().is_none());
    }

    #[test]
    fn separate_caches_are_isolated() {
        let a = ChapterCache::new();
        let b = ChapterCache::new();
        a.insert_chapter(108, pair(108));
        assert!(b.chapter(108).is_none());
    }
}
