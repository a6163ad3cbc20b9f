//! The `hifz search` command.

use std::path::PathBuf;

use anyhow::Result;

use hifz_core::model::CHAPTER_COUNT;
use hifz_core::traits::ScriptureSource;
use hifz_core::InputError;

pub async fn execute(
    keyword: String,
    chapter: Option<u16>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(!keyword.trim().is_empty(), "keyword must not be empty");
    if let Some(n) = chapter.filter(|n| !(1..=CHAPTER_COUNT).contains(n)) {
        return Err(InputError::ChapterOutOfRange(n).into());
    }

    let (_, client) = super::client(config_path.as_deref())?;
    let matches = client.search_verses(keyword.trim(), chapter).await?;

    if matches.is_empty() {
        println!("No verses match \"{}\".", keyword.trim());
        return Ok(());
    }

    for m in &matches {
        println!(
            "{}:{} ({})  {}",
            m.chapter_number, m.number_in_chapter, m.chapter_name, m.text
        );
    }
    println!("\n{} matches", matches.len());
    Ok(())
}
