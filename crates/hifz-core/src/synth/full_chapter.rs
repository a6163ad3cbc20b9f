//! Full-chapter memorization: verses are shown whole.

use crate::model::Quiz;
use crate::normalize::tokenize;

pub fn synthesize(text: &str) -> Quiz {
    Quiz::FullChapter {
        words: tokenize(text).into_iter().map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_every_word() {
        let text = "قُلْ هُوَ اللَّهُ أَحَدٌ";
        match synthesize(text) {
            Quiz::FullChapter { words } => assert_eq!(words.join(" "), text),
            other => panic!("expected full-chapter, got {other:?}"),
        }
    }
}
