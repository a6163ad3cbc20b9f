//! Quiz-set builder.
//!
//! Fetches a chapter through a [`ScriptureSource`], walks its verses in
//! order, and hands each one to the synthesizer for the requested mode.

use std::sync::Arc;

use rand::Rng;

use crate::error::{InputError, QuizError};
use crate::model::{ChapterPair, QuizMode, QuizRecord, CHAPTER_COUNT};
use crate::synth;
use crate::traits::ScriptureSource;

/// Configuration for the quiz-set builder.
#[derive(Debug, Clone)]
pub struct QuizSetConfig {
    /// Verses per quiz set unless the whole chapter is requested.
    pub max_verses: usize,
    /// Reciter for audio URLs; `None` uses the source's default.
    pub reciter: Option<String>,
}

impl Default for QuizSetConfig {
    fn default() -> Self {
        Self {
            max_verses: 10,
            reciter: None,
        }
    }
}

/// Assembles ordered quiz sets for a chapter.
pub struct QuizSetBuilder {
    source: Arc<dyn ScriptureSource>,
    config: QuizSetConfig,
}

impl QuizSetBuilder {
    pub fn new(source: Arc<dyn ScriptureSource>, config: QuizSetConfig) -> Self {
        Self { source, config }
    }

    /// Build a quiz set using the thread-local random source.
    ///
    /// Fails without partial results if the chapter cannot be fetched.
    pub async fn build(
        &self,
        chapter: u16,
        mode: QuizMode,
        use_full_chapter: bool,
    ) -> Result<Vec<QuizRecord>, QuizError> {
        let pair = self.fetch(chapter).await?;
        let count = self.verse_limit(&pair, mode, use_full_chapter);
        let mut rng = rand::thread_rng();
        Ok(self.synthesize(&pair, mode, count, &mut rng))
    }

    /// Build a quiz set with an injected random source.
    pub async fn build_with_rng<R>(
        &self,
        chapter: u16,
        mode: QuizMode,
        use_full_chapter: bool,
        rng: &mut R,
    ) -> Result<Vec<QuizRecord>, QuizError>
    where
        R: Rng + Send + ?Sized,
    {
        let pair = self.fetch(chapter).await?;
        let count = self.verse_limit(&pair, mode, use_full_chapter);
        Ok(self.synthesize(&pair, mode, count, rng))
    }

    async fn fetch(&self, chapter: u16) -> Result<Arc<ChapterPair>, QuizError> {
        if !(1..=CHAPTER_COUNT).contains(&chapter) {
            return Err(InputError::ChapterOutOfRange(chapter).into());
        }
        let pair = self.source.fetch_chapter(chapter).await.map_err(|e| {
            tracing::error!("failed to fetch chapter {chapter} from {}: {e}", self.source.name());
            e
        })?;
        Ok(pair)
    }

    fn verse_limit(&self, pair: &ChapterPair, mode: QuizMode, use_full_chapter: bool) -> usize {
        let total = pair.verse_count();
        if use_full_chapter || mode == QuizMode::FullChapter {
            total
        } else {
            total.min(self.config.max_verses)
        }
    }

    fn synthesize<R: Rng + ?Sized>(
        &self,
        pair: &ChapterPair,
        mode: QuizMode,
        count: usize,
        rng: &mut R,
    ) -> Vec<QuizRecord> {
        tracing::info!(
            chapter = pair.original.number,
            %mode,
            verses = count,
            "building quiz set"
        );
        let reciter = self.config.reciter.as_deref();
        synthesize(pair, mode, count, rng, |chapter, verse| {
            self.source.audio_url(chapter, verse, reciter)
        })
    }
}

/// Turn the first `count` verses of `pair` into quiz records.
///
/// This is the network-free core of [`QuizSetBuilder`]; `audio_url` maps a
/// chapter and verse number to a recitation URL.
pub fn synthesize<R, F>(
    pair: &ChapterPair,
    mode: QuizMode,
    count: usize,
    rng: &mut R,
    audio_url: F,
) -> Vec<QuizRecord>
where
    R: Rng + ?Sized,
    F: Fn(u16, u32) -> String,
{
    let chapter = &pair.original;
    let verses = &chapter.verses;

    verses
        .iter()
        .zip(&pair.translated.verses)
        .take(count)
        .enumerate()
        .map(|(index, (verse, translation))| {
            let mut arabic_text = verse.text.clone();
            let quiz = match mode {
                QuizMode::FillBlank => {
                    let (display, quiz) =
                        synth::fill_blank::synthesize(rng, &verse.text, &translation.text, verses);
                    arabic_text = display;
                    quiz
                }
                QuizMode::TapHear => synth::tap_hear::synthesize(rng, &verse.text, verses),
                QuizMode::WhatNext => synth::what_next::synthesize(rng, verses, index),
                QuizMode::Reorder => synth::reorder::synthesize(&verse.text),
                QuizMode::FullChapter => synth::full_chapter::synthesize(&verse.text),
            };

            QuizRecord {
                chapter_number: chapter.number,
                verse_number: verse.number_in_chapter,
                chapter_name: chapter.english_name.clone(),
                arabic_text,
                translation_text: translation.text.clone(),
                audio_url: audio_url(chapter.number, verse.number_in_chapter),
                quiz,
            }
        })
        .collect()
}
