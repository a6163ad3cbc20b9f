//! The `hifz editions` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use hifz_core::traits::ScriptureSource;

pub async fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let (_, client) = super::client(config_path.as_deref())?;
    let editions = client.fetch_editions().await?;

    if editions.is_empty() {
        println!("No translation editions available.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Identifier", "Language", "Name"]);
    for edition in &editions {
        table.add_row(vec![&edition.identifier, &edition.language, &edition.english_name]);
    }
    println!("{table}");
    println!("{} editions", editions.len());
    Ok(())
}
