//! In-memory scripture source for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use hifz_core::catalog;
use hifz_core::error::RetrievalError;
use hifz_core::model::{ChapterPair, ChapterSummary, Edition, SearchMatch};
use hifz_core::normalize::normalize;
use hifz_core::traits::{build_audio_url, ScriptureSource, DEFAULT_AUDIO_BASE_URL, DEFAULT_RECITER};

/// A scripture source that serves preloaded chapters without network access.
pub struct MockSource {
    chapters: HashMap<u16, Arc<ChapterPair>>,
    editions: Vec<Edition>,
    failure: Option<RetrievalError>,
    /// Number of `fetch_chapter` calls made.
    fetch_count: AtomicU32,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// An empty source; unknown chapters answer with a 404.
    pub fn new() -> Self {
        Self {
            chapters: HashMap::new(),
            editions: Vec::new(),
            failure: None,
            fetch_count: AtomicU32::new(0),
        }
    }

    pub fn with_chapter(mut self, pair: ChapterPair) -> Self {
        self.chapters.insert(pair.original.number, Arc::new(pair));
        self
    }

    pub fn with_edition(mut self, edition: Edition) -> Self {
        self.editions.push(edition);
        self
    }

    /// Make every fetch fail with `error`.
    pub fn with_failure(mut self, error: RetrievalError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn fetch_count(&self) -> u32 {
        self.fetch_count.load(Ordering::Relaxed)
    }

    fn check_failure(&self) -> Result<(), RetrievalError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ScriptureSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_chapter_list(&self) -> Result<Vec<ChapterSummary>, RetrievalError> {
        self.check_failure()?;
        Ok(catalog::chapters())
    }

    async fn fetch_chapter(&self, chapter: u16) -> Result<Arc<ChapterPair>, RetrievalError> {
        self.fetch_count.fetch_add(1, Ordering::Relaxed);
        self.check_failure()?;
        self.chapters
            .get(&chapter)
            .cloned()
            .ok_or_else(|| RetrievalError::Http {
                status: 404,
                message: format!("chapter {chapter} not loaded"),
            })
    }

    async fn search_verses(
        &self,
        keyword: &str,
        chapter: Option<u16>,
    ) -> Result<Vec<SearchMatch>, RetrievalError> {
        self.check_failure()?;
        let needle = normalize(keyword).to_lowercase();

        let mut numbers: Vec<_> = self.chapters.keys().copied().collect();
        numbers.sort_unstable();

        Ok(numbers
            .into_iter()
            .filter(|n| chapter.map_or(true, |c| c == *n))
            .flat_map(|n| {
                let pair = &self.chapters[&n];
                pair.original
                    .verses
                    .iter()
                    .chain(&pair.translated.verses)
                    .filter(|v| normalize(&v.text).to_lowercase().contains(&needle))
                    .map(|v| SearchMatch {
                        number: v.number,
                        text: v.text.clone(),
                        chapter_number: n,
                        chapter_name: pair.original.english_name.clone(),
                        number_in_chapter: v.number_in_chapter,
                        edition: "mock".into(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect())
    }

    async fn fetch_editions(&self) -> Result<Vec<Edition>, RetrievalError> {
        self.check_failure()?;
        Ok(self.editions.clone())
    }

    fn audio_url(&self, chapter: u16, _verse: u32, reciter: Option<&str>) -> String {
        build_audio_url(
            DEFAULT_AUDIO_BASE_URL,
            reciter.unwrap_or(DEFAULT_RECITER),
            chapter,
            "mp3",
        )
    }
}
