//! The `collegefinder dashboard` command.

use std::path::PathBuf;

use anyhow::Result;

use collegefinder_core::bookmarks::load_bookmarks;
use collegefinder_core::dashboard::Dashboard;
use collegefinder_core::traits::Authenticator;
use collegefinder_services::MockAuthenticator;

pub fn execute(email: String, password: String, config_path: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let catalog = super::load_catalog(&config)?;

    let auth = MockAuthenticator::new();
    let user = auth.login(&email, &password)?;

    let bookmarks = load_bookmarks(super::open_storage(&config).as_ref());
    let dashboard = Dashboard::build(&user, &catalog, &bookmarks);

    println!("{}", dashboard.greeting());
    println!("Signed in as {} via {}", user.email, auth.name());
    println!("\nSaved colleges: {}", dashboard.saved_count());
    for college in &dashboard.saved_colleges {
        println!(
            "  - {} ({}, {}) NIRF #{}",
            college.name, college.city, college.state, college.nirf_rank
        );
    }
    if dashboard.saved_count() == 0 {
        println!("  Bookmark colleges with `collegefinder bookmark toggle <id>`.");
    }

    auth.logout();
    Ok(())
}
