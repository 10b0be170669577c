//! The `collegefinder init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("collegefinder.toml").exists() {
        println!("collegefinder.toml already exists, skipping.");
    } else {
        std::fs::write("collegefinder.toml", SAMPLE_CONFIG)?;
        println!("Created collegefinder.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit collegefinder.toml to set where bookmarks are stored");
    println!("  2. Run: collegefinder search --query engineering");
    println!("  3. Run: collegefinder quiz");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# collegefinder configuration

# Directory bookmarks are saved in.
storage_dir = ".collegefinder"

# Alternative catalog file. Omit to use the built-in catalog.
# catalog = "colleges.toml"

# rank, fee, or name
default_sort = "rank"

# Annual fee ceiling in rupees when --max-fee is not given.
default_max_fee = 500000
"#;
