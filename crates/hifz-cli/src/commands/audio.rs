//! The `hifz audio` command.

use std::path::PathBuf;

use anyhow::Result;

use hifz_core::model::CHAPTER_COUNT;
use hifz_core::traits::ScriptureSource;
use hifz_core::InputError;

pub fn execute(
    chapter: u16,
    verse: u32,
    reciter: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    if !(1..=CHAPTER_COUNT).contains(&chapter) {
        return Err(InputError::ChapterOutOfRange(chapter).into());
    }
    let (_, client) = super::client(config_path.as_deref())?;
    println!("{}", client.audio_url(chapter, verse, reciter.as_deref()));
    Ok(())
}
