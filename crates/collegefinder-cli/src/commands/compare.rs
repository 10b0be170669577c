//! The `collegefinder compare` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use collegefinder_core::compare::{comparison_rows, Comparison};

pub fn execute(ids: Vec<String>, format: String, config_path: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let catalog = super::load_catalog(&config)?;

    let mut comparison = Comparison::new();
    for id in &ids {
        let id = id.trim();
        if catalog.get(id).is_none() {
            anyhow::bail!("unknown college id: {id}");
        }
        comparison.add(id)?;
    }

    let colleges = comparison.colleges(&catalog);
    let rows = comparison_rows(&colleges);

    match format.as_str() {
        "json" => {
            let names: Vec<&str> = colleges.iter().map(|c| c.name.as_str()).collect();
            let out = serde_json::json!({
                "colleges": names,
                "rows": rows,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        "table" => {
            let mut table = Table::new();
            let mut header = vec![Cell::new("Criteria")];
            header.extend(colleges.iter().map(|c| Cell::new(&c.name)));
            table.set_header(header);

            for row in &rows {
                let mut cells = vec![Cell::new(row.label)];
                cells.extend(row.values.iter().map(Cell::new));
                table.add_row(cells);
            }
            println!("{table}");
        }
        other => anyhow::bail!("unknown format: {other} (expected table or json)"),
    }

    Ok(())
}
