//! The `hifz reciters` command.

use anyhow::Result;
use comfy_table::Table;

use hifz_core::catalog;

pub fn execute() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Id", "Name", "Language"]);
    for reciter in catalog::reciters() {
        table.add_row(vec![reciter.id, reciter.name, reciter.language]);
    }
    println!("{table}");
    Ok(())
}
