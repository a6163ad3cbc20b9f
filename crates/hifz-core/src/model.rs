//! Core data model types for hifz.
//!
//! Chapters and verses as fetched from a scripture source, and the quiz
//! records synthesized from them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

/// Number of chapters in the Quran. Valid chapter numbers are `1..=CHAPTER_COUNT`.
pub const CHAPTER_COUNT: u16 = 114;

/// Marker substituted for the hidden word in fill-in-the-blank questions.
pub const BLANK_MARKER: &str = "_____";

/// Where a chapter was revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevelationPlace {
    Meccan,
    Medinan,
}

impl fmt::Display for RevelationPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevelationPlace::Meccan => write!(f, "Meccan"),
            RevelationPlace::Medinan => write!(f, "Medinan"),
        }
    }
}

impl FromStr for RevelationPlace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "meccan" | "makki" => Ok(RevelationPlace::Meccan),
            "medinan" | "madani" => Ok(RevelationPlace::Medinan),
            other => Err(format!("unknown revelation place: {other}")),
        }
    }
}

/// A single verse in one edition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Position of the verse in the whole Quran.
    pub number: u32,
    /// Position of the verse within its chapter, starting at 1.
    pub number_in_chapter: u32,
    /// Verse text in this edition.
    pub text: String,
    #[serde(default)]
    pub juz: u32,
    #[serde(default)]
    pub page: u32,
}

/// One chapter in one edition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub number: u16,
    /// Native (Arabic) name.
    pub name: String,
    /// Transliterated name used for display, e.g. "Al-Fatihah".
    pub english_name: String,
    pub english_name_translation: String,
    pub revelation_place: RevelationPlace,
    pub verses: Vec<Verse>,
}

impl Chapter {
    pub fn verse_count(&self) -> usize {
        self.verses.len()
    }
}

/// The original-language chapter and its translation, aligned by verse index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterPair {
    pub original: Chapter,
    pub translated: Chapter,
}

impl ChapterPair {
    /// Pair two editions of a chapter, rejecting misaligned verse lists.
    pub fn new(original: Chapter, translated: Chapter) -> Result<Self, String> {
        if original.verses.len() != translated.verses.len() {
            return Err(format!(
                "chapter {} has {} original verses but {} translated verses",
                original.number,
                original.verses.len(),
                translated.verses.len()
            ));
        }
        let misaligned = original
            .verses
            .iter()
            .zip(&translated.verses)
            .find(|(o, t)| o.number_in_chapter != t.number_in_chapter);
        if let Some((o, t)) = misaligned {
            return Err(format!(
                "chapter {} verse order differs between editions ({} vs {})",
                original.number, o.number_in_chapter, t.number_in_chapter
            ));
        }
        Ok(Self {
            original,
            translated,
        })
    }

    pub fn verse_count(&self) -> usize {
        self.original.verse_count()
    }
}

/// Chapter metadata without verse text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterSummary {
    pub number: u16,
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    pub verse_count: u32,
    pub revelation_place: RevelationPlace,
}

/// A verse returned by a keyword search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub number: u32,
    pub text: String,
    pub chapter_number: u16,
    pub chapter_name: String,
    pub number_in_chapter: u32,
    /// Edition the matched text comes from.
    pub edition: String,
}

/// A textual rendering of the Quran offered by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edition {
    pub identifier: String,
    pub language: String,
    pub name: String,
    pub english_name: String,
    pub format: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// An audio recitation source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reciter {
    pub id: String,
    pub name: String,
    pub language: String,
}

/// The five quiz modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuizMode {
    FillBlank,
    TapHear,
    WhatNext,
    Reorder,
    FullChapter,
}

impl QuizMode {
    pub const ALL: [QuizMode; 5] = [
        QuizMode::FillBlank,
        QuizMode::TapHear,
        QuizMode::WhatNext,
        QuizMode::Reorder,
        QuizMode::FullChapter,
    ];

    /// Human-readable mode name.
    pub fn title(&self) -> &'static str {
        match self {
            QuizMode::FillBlank => "Fill in the Blank",
            QuizMode::TapHear => "Tap What You Hear",
            QuizMode::WhatNext => "What Comes Next?",
            QuizMode::Reorder => "Reorder the Words",
            QuizMode::FullChapter => "Full Chapter Memorization",
        }
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizMode::FillBlank => write!(f, "fill-blank"),
            QuizMode::TapHear => write!(f, "tap-hear"),
            QuizMode::WhatNext => write!(f, "what-next"),
            QuizMode::Reorder => write!(f, "reorder"),
            QuizMode::FullChapter => write!(f, "full-chapter"),
        }
    }
}

impl FromStr for QuizMode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fill-blank" => Ok(QuizMode::FillBlank),
            "tap-hear" => Ok(QuizMode::TapHear),
            "what-next" => Ok(QuizMode::WhatNext),
            "reorder" => Ok(QuizMode::Reorder),
            "full-chapter" | "full-surah" => Ok(QuizMode::FullChapter),
            other => Err(InputError::UnknownMode(other.to_string())),
        }
    }
}

/// Mode-specific part of a quiz record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum Quiz {
    /// One word of the verse is hidden; pick it among four options.
    FillBlank {
        options: Vec<String>,
        correct_answer: String,
        /// Token position replaced by the blank marker. `None` when the
        /// whole (single-word) verse is masked.
        blank_index: Option<usize>,
    },
    /// Tap the verse's words in order from a shuffled pool with distractors.
    TapHear { options: Vec<String> },
    /// Pick the verse that follows.
    WhatNext {
        next_options: Vec<String>,
        correct_answer: String,
    },
    /// Put the words back in order. `words` is the correct order.
    Reorder { words: Vec<String> },
    /// Whole verse shown or recited from memory.
    FullChapter { words: Vec<String> },
}

impl Quiz {
    pub fn mode(&self) -> QuizMode {
        match self {
            Quiz::FillBlank { .. } => QuizMode::FillBlank,
            Quiz::TapHear { .. } => QuizMode::TapHear,
            Quiz::WhatNext { .. } => QuizMode::WhatNext,
            Quiz::Reorder { .. } => QuizMode::Reorder,
            Quiz::FullChapter { .. } => QuizMode::FullChapter,
        }
    }

    /// The single correct choice for multiple-choice modes.
    pub fn correct_answer(&self) -> Option<&str> {
        match self {
            Quiz::FillBlank { correct_answer, .. } | Quiz::WhatNext { correct_answer, .. } => {
                Some(correct_answer)
            }
            _ => None,
        }
    }
}

/// A single question in a quiz set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRecord {
    pub chapter_number: u16,
    pub verse_number: u32,
    pub chapter_name: String,
    /// Verse text as displayed; contains [`BLANK_MARKER`] in fill-blank mode.
    pub arabic_text: String,
    pub translation_text: String,
    pub audio_url: String,
    #[serde(flatten)]
    pub quiz: Quiz,
}

impl QuizRecord {
    pub fn mode(&self) -> QuizMode {
        self.quiz.mode()
    }
}
