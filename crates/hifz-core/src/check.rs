//! Answer checking and per-session tallies.
//!
//! Applications present a [`QuizRecord`], collect the user's response as an
//! [`Answer`], and ask the record whether it is correct.

use serde::{Deserialize, Serialize};

use crate::model::{Quiz, QuizRecord};
use crate::normalize::tokenize;

/// A user's response to a quiz record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Answer {
    /// One option picked from a multiple-choice list.
    Choice(String),
    /// Words tapped or arranged in order.
    Sequence(Vec<String>),
    /// Free text typed from memory.
    Recall(String),
}

impl QuizRecord {
    /// Whether `answer` is correct for this record. An answer of the wrong
    /// shape for the mode is never correct.
    pub fn check(&self, answer: &Answer) -> bool {
        match (&self.quiz, answer) {
            (Quiz::FillBlank { correct_answer, .. }, Answer::Choice(choice))
            | (Quiz::WhatNext { correct_answer, .. }, Answer::Choice(choice)) => {
                choice == correct_answer
            }
            (Quiz::TapHear { .. }, Answer::Sequence(tapped)) => {
                let expected = tokenize(&self.arabic_text);
                tapped.len() == expected.len()
                    && tapped.iter().zip(&expected).all(|(t, e)| t == e)
            }
            (Quiz::Reorder { words }, Answer::Sequence(arranged)) => {
                arranged.join(" ") == words.join(" ")
            }
            (Quiz::FullChapter { .. }, Answer::Recall(text)) => {
                collapse_whitespace(text) == collapse_whitespace(&self.arabic_text)
            }
            _ => false,
        }
    }
}

/// Trim and collapse runs of whitespace into single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    tokenize(text).join(" ")
}

/// Running score for one pass through a quiz set. Kept in memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub total: usize,
    pub correct: u32,
    pub incorrect: u32,
    pub streak: u32,
    /// Percent of the set completed, updated on correct answers.
    pub progress: u8,
}

impl Session {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    /// Record the outcome of the question at `index` (0-based).
    ///
    /// A correct answer extends the streak and advances progress; a wrong one
    /// shortens the streak by one.
    pub fn record(&mut self, index: usize, correct: bool) {
        if correct {
            self.correct += 1;
            self.streak += 1;
            if self.total > 0 {
                let percent = (index + 1) * 100 / self.total;
                self.progress = percent.min(100) as u8;
            }
        } else {
            self.incorrect += 1;
            self.streak = self.streak.saturating_sub(1);
        }
    }

    /// Check `answer` against `record` and tally the result.
    pub fn submit(&mut self, index: usize, record: &QuizRecord, answer: &Answer) -> bool {
        let correct = record.check(answer);
        self.record(index, correct);
        correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str, quiz: Quiz) -> QuizRecord {
        QuizRecord {
            chapter_number: 112,
            verse_number: 1,
            chapter_name: "Al-Ikhlas".into(),
            arabic_text: text.into(),
            translation_text: "Say: He is God, the One".into(),
            audio_url: String::new(),
            quiz,
        }
    }

    fn seq(words: &[&str]) -> Answer {
        Answer::Sequence(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn choice_must_match_exactly() {
        let r = record(
            "قُلْ _____ اللَّهُ أَحَدٌ",
            Quiz::FillBlank {
                options: vec!["هُوَ".into(), "ما".into(), "لا".into(), "من".into()],
                correct_answer: "هُوَ".into(),
                blank_index: Some(1),
            },
        );
        assert!(r.check(&Answer::Choice("هُوَ".into())));
        assert!(!r.check(&Answer::Choice("هو".into())));
        assert!(!r.check(&seq(&["هُوَ"])));
    }

    #[test]
    fn tap_sequence_is_positional() {
        let r = record("قُلْ هُوَ اللَّهُ أَحَدٌ", Quiz::TapHear { options: vec![] });
        assert!(r.check(&seq(&["قُلْ", "هُوَ", "اللَّهُ", "أَحَدٌ"])));
        assert!(!r.check(&seq(&["هُوَ", "قُلْ", "اللَّهُ", "أَحَدٌ"])));
        assert!(!r.check(&seq(&["قُلْ", "هُوَ", "اللَّهُ"])));
        assert!(!r.check(&seq(&["قُلْ", "هُوَ", "اللَّهُ", "أَحَدٌ", "أَحَدٌ"])));
    }

    #[test]
    fn reorder_compares_joined_words() {
        let r = record(
            "قُلْ هُوَ اللَّهُ أَحَدٌ",
            Quiz::Reorder {
                words: vec!["قُلْ".into(), "هُوَ".into(), "اللَّهُ".into(), "أَحَدٌ".into()],
            },
        );
        assert!(r.check(&seq(&["قُلْ", "هُوَ", "اللَّهُ", "أَحَدٌ"])));
        assert!(!r.check(&seq(&["اللَّهُ", "هُوَ", "قُلْ", "أَحَدٌ"])));
    }

    #[test]
    fn recall_ignores_extra_whitespace() {
        let text = "قُلْ هُوَ اللَّهُ أَحَدٌ";
        let r = record(text, Quiz::FullChapter { words: vec![] });
        assert!(r.check(&Answer::Recall("  قُلْ   هُوَ\nاللَّهُ أَحَدٌ ".into())));
        assert!(!r.check(&Answer::Recall("قُلْ هُوَ اللَّهُ".into())));
        assert!(!r.check(&Answer::Choice(text.into())));
    }

    #[test]
    fn session_streak_and_progress() {
        let mut session = Session::new(4);
        session.record(0, true);
        session.record(1, true);
        assert_eq!(session.streak, 2);
        assert_eq!(session.progress, 50);

        session.record(2, false);
        assert_eq!(session.streak, 1);
        assert_eq!(session.progress, 50);

        session.record(3, false);
        session.record(3, false);
        assert_eq!(session.streak, 0);
        assert_eq!(session.correct, 2);
        assert_eq!(session.incorrect, 3);
    }

    #[test]
    fn session_submit_checks_and_tallies() {
        let r = record("قُلْ هُوَ اللَّهُ أَحَدٌ", Quiz::TapHear { options: vec![] });
        let mut session = Session::new(1);
        assert!(session.submit(0, &r, &seq(&["قُلْ", "هُوَ", "اللَّهُ", "أَحَدٌ"])));
        assert_eq!(session.progress, 100);
        assert_eq!(session.correct, 1);
    }
}
