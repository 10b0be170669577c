//! The `collegefinder bookmark` commands.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use collegefinder_core::bookmarks::Bookmarks;

pub fn toggle(id: String, config_path: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let catalog = super::load_catalog(&config)?;

    let Some(college) = catalog.get(&id) else {
        anyhow::bail!("unknown college id: {id}");
    };

    let mut bookmarks = Bookmarks::load(super::open_storage(&config));
    if bookmarks.toggle(&college.id) {
        println!("Bookmarked {}", college.name);
    } else {
        println!("Removed bookmark for {}", college.name);
    }
    println!("{} saved colleges", bookmarks.set().len());

    Ok(())
}

pub fn list(config_path: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let catalog = super::load_catalog(&config)?;

    let bookmarks = Bookmarks::load(super::open_storage(&config));
    let saved = bookmarks.set().saved_colleges(&catalog);

    if saved.is_empty() {
        println!("No saved colleges yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "City", "NIRF", "Annual Fee"]);
    for college in &saved {
        table.add_row(vec![
            Cell::new(&college.id),
            Cell::new(&college.name),
            Cell::new(&college.city),
            Cell::new(format!("#{}", college.nirf_rank)),
            Cell::new(super::rupees(college.fees.annual)),
        ]);
    }
    println!("{table}");
    println!("{} saved colleges", saved.len());

    Ok(())
}
