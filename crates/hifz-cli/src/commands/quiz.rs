//! The `hifz quiz` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use hifz_core::model::{Quiz, QuizMode, QuizRecord};
use hifz_core::QuizSetBuilder;

pub async fn execute(
    chapter: u16,
    mode: String,
    full: bool,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mode: QuizMode = mode.parse()?;
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "json"),
        "unknown format: {format} (expected text or json)"
    );

    let (config, client) = super::client(config_path.as_deref())?;
    let builder = QuizSetBuilder::new(Arc::new(client), config.quiz_set_config());
    let records = builder.build(chapter, mode, full).await?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if let Some(first) = records.first() {
        println!(
            "{} (chapter {}, {} questions)",
            mode.title(),
            first.chapter_number,
            records.len()
        );
        println!("{}", first.chapter_name);
    }
    for (i, record) in records.iter().enumerate() {
        println!();
        print_record(i + 1, record);
    }

    Ok(())
}

fn print_record(position: usize, record: &QuizRecord) {
    println!("[{position}] Verse {}", record.verse_number);
    println!("    {}", record.arabic_text);
    println!("    {}", record.translation_text);

    match &record.quiz {
        Quiz::FillBlank { options, .. } => print_options(options),
        Quiz::TapHear { options } => {
            println!("    Tap in order: {}", options.join(" | "));
        }
        Quiz::WhatNext { next_options, .. } => {
            println!("    What comes next?");
            print_options(next_options);
        }
        Quiz::Reorder { words } => {
            println!("    Arrange: {}", words.join(" | "));
        }
        Quiz::FullChapter { words } => {
            println!("    Recite ({} words)", words.len());
        }
    }

    if let Some(answer) = record.quiz.correct_answer() {
        println!("    Answer: {answer}");
    }
    println!("    Audio: {}", record.audio_url);
}

fn print_options(options: &[String]) {
    for (label, option) in ('a'..).zip(options) {
        println!("    {label}) {option}");
    }
}
