//! The `collegefinder search` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use collegefinder_core::bookmarks::load_bookmarks;
use collegefinder_core::filter::{filter_and_sort, FilterConfig, SortKey};
use collegefinder_core::model::InstitutionType;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    query: String,
    location: Option<String>,
    institution_type: Option<String>,
    max_fee: Option<u64>,
    sort: Option<String>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = super::load_config(config_path)?;
    let catalog = super::load_catalog(&config)?;

    let institution_type = institution_type
        .map(|t| t.parse::<InstitutionType>())
        .transpose()
        .map_err(anyhow::Error::msg)
        .context("invalid --type")?;
    let sort = match sort {
        Some(s) => s
            .parse::<SortKey>()
            .map_err(anyhow::Error::msg)
            .context("invalid --sort")?,
        None => config.default_sort,
    };

    let filter = FilterConfig {
        query,
        location,
        institution_type,
        max_fee: Some(max_fee.unwrap_or(config.default_max_fee)),
        sort,
    };
    let results = filter_and_sort(&catalog.colleges, &filter);

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        "table" => {
            if results.is_empty() {
                println!("No colleges match your filters.");
                return Ok(());
            }

            let bookmarks = load_bookmarks(super::open_storage(&config).as_ref());

            let mut table = Table::new();
            table.set_header(vec![
                "ID",
                "Name",
                "City",
                "Type",
                "NIRF",
                "Rating",
                "Annual Fee",
                "Saved",
            ]);
            for college in &results {
                table.add_row(vec![
                    Cell::new(&college.id),
                    Cell::new(&college.name),
                    Cell::new(format!("{}, {}", college.city, college.state)),
                    Cell::new(college.institution_type),
                    Cell::new(format!("#{}", college.nirf_rank)),
                    Cell::new(format!("{:.1}", college.rating)),
                    Cell::new(super::rupees(college.fees.annual)),
                    Cell::new(if bookmarks.contains(&college.id) {
                        "★"
                    } else {
                        ""
                    }),
                ]);
            }
            println!("{table}");
            println!("Found {} colleges", results.len());
        }
        other => anyhow::bail!("unknown format: {other} (expected table or json)"),
    }

    Ok(())
}
