//! The `hifz chapters` command.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use comfy_table::{Cell, Table};

use hifz_core::catalog::{self, ChapterFilter};
use hifz_core::traits::ScriptureSource;

pub async fn execute(
    remote: bool,
    filter: Option<String>,
    search: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let filter = filter
        .map(|f| f.parse::<ChapterFilter>().map_err(|e| anyhow!(e)))
        .transpose()?;

    let mut chapters = if remote {
        let (_, client) = super::client(config_path.as_deref())?;
        client.fetch_chapter_list().await?
    } else {
        catalog::chapters()
    };

    if let Some(filter) = filter {
        chapters.retain(|c| filter.matches(c));
    }
    if let Some(term) = search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        chapters.retain(|c| catalog::name_matches(c, term));
    }

    if chapters.is_empty() {
        println!("No chapters match.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Name", "English", "Meaning", "Verses", "Revealed"]);
    for c in &chapters {
        table.add_row(vec![
            Cell::new(c.number),
            Cell::new(&c.name),
            Cell::new(&c.english_name),
            Cell::new(&c.english_name_translation),
            Cell::new(c.verse_count),
            Cell::new(c.revelation_place),
        ]);
    }

    println!("{table}");
    println!("{} chapters", chapters.len());
    Ok(())
}
