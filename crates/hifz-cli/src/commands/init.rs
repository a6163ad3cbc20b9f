//! The `hifz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("hifz.toml").exists() {
        println!("hifz.toml already exists, skipping.");
        return Ok(());
    }

    std::fs::write("hifz.toml", SAMPLE_CONFIG)?;
    println!("Created hifz.toml");

    println!("\nNext steps:");
    println!("  1. Pick a translation: hifz editions");
    println!("  2. Browse chapters: hifz chapters --filter short");
    println!("  3. Start a quiz: hifz quiz --chapter 1 --mode fill-blank");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# hifz configuration

base_url = "https://api.alquran.cloud/v1"
original_edition = "quran-uthmani"
translation_edition = "en.asad"
search_language = "en"

audio_base_url = "https://cdn.islamic.network/quran/audio-surah"
audio_format = "mp3"
reciter = "ar.alafasy"

# Verses per quiz unless --full is given.
max_quiz_verses = 10

# Seconds before a request is abandoned. Unset waits indefinitely.
# request_timeout_secs = 30
"#;
