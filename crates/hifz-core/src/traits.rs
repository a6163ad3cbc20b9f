//! Core trait definitions for scripture sources.
//!
//! The HTTP implementation lives in `hifz-client`; the quiz-set builder only
//! depends on this trait so it can run against in-memory sources in tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::RetrievalError;
use crate::model::{ChapterPair, ChapterSummary, Edition, SearchMatch};

// ---------------------------------------------------------------------------
// Scripture source trait
// ---------------------------------------------------------------------------

/// A backend that serves chapter text, translations, and search results.
#[async_trait]
pub trait ScriptureSource: Send + Sync {
    /// Human-readable source name (e.g. "alquran.cloud").
    fn name(&self) -> &str;

    /// Summaries of all chapters, in order.
    async fn fetch_chapter_list(&self) -> Result<Vec<ChapterSummary>, RetrievalError>;

    /// Original-language text and translation of one chapter, aligned by verse.
    async fn fetch_chapter(&self, chapter: u16) -> Result<Arc<ChapterPair>, RetrievalError>;

    /// Verses matching `keyword`, optionally restricted to one chapter.
    async fn search_verses(
        &self,
        keyword: &str,
        chapter: Option<u16>,
    ) -> Result<Vec<SearchMatch>, RetrievalError>;

    /// Text translation editions the source can serve.
    async fn fetch_editions(&self) -> Result<Vec<Edition>, RetrievalError>;

    /// Recitation audio for a verse. `None` selects the source's default reciter.
    fn audio_url(&self, chapter: u16, verse: u32, reciter: Option<&str>) -> String;
}

// ---------------------------------------------------------------------------
// Audio URLs
// ---------------------------------------------------------------------------

/// Default recitation host and path.
pub const DEFAULT_AUDIO_BASE_URL: &str = "https://cdn.islamic.network/quran/audio-surah";

/// Mishary Alafasy.
pub const DEFAULT_RECITER: &str = "ar.alafasy";

pub const DEFAULT_AUDIO_FORMAT: &str = "mp3";

/// Builds `{base}/{reciter}/{chapter:03}.{format}`.
///
/// Audio is served per chapter, so every verse of a chapter maps to the same
/// file; the player seeks within it.
pub fn build_audio_url(base_url: &str, reciter: &str, chapter: u16, format: &str) -> String {
    format!(
        "{}/{}/{:03}.{}",
        base_url.trim_end_matches('/'),
        reciter,
        chapter,
        format
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_url_pads_chapter() {
        assert_eq!(
            build_audio_url(DEFAULT_AUDIO_BASE_URL, DEFAULT_RECITER, 1, DEFAULT_AUDIO_FORMAT),
            "https://cdn.islamic.network/quran/audio-surah/ar.alafasy/001.mp3"
        );
        assert_eq!(
            build_audio_url("http://host/audio/", "ar.husary", 36, "ogg"),
            "http://host/audio/ar.husary/036.ogg"
        );
        assert_eq!(
            build_audio_url("http://host", "ar.maher", 114, "mp3"),
            "http://host/ar.maher/114.mp3"
        );
    }
}
