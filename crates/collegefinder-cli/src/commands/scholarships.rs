//! The `collegefinder scholarships` command.

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use collegefinder_core::model::ScholarshipType;
use collegefinder_core::scholarship::{filter_scholarships, is_deadline_near, ScholarshipFilter};

pub fn execute(
    query: String,
    scholarship_type: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let scholarships = collegefinder_core::builtin::builtin_scholarships()?;

    let scholarship_type = scholarship_type
        .map(|t| t.parse::<ScholarshipType>())
        .transpose()
        .map_err(anyhow::Error::msg)
        .context("invalid --type")?;

    let filter = ScholarshipFilter {
        query,
        scholarship_type,
        category,
    };
    let results = filter_scholarships(&scholarships, &filter);

    if results.is_empty() {
        println!("No scholarships match your filters.");
        return Ok(());
    }

    let today = chrono::Local::now().date_naive();

    let mut table = Table::new();
    table.set_header(vec!["Name", "Provider", "Amount", "Type", "Deadline", "Categories"]);
    for s in &results {
        let deadline = if is_deadline_near(s.deadline, today) {
            format!("{} (closing soon)", s.deadline.format("%d %b %Y"))
        } else {
            s.deadline.format("%d %b %Y").to_string()
        };
        table.add_row(vec![
            Cell::new(&s.name),
            Cell::new(&s.provider),
            Cell::new(super::rupees(s.amount)),
            Cell::new(s.scholarship_type.label()),
            Cell::new(deadline),
            Cell::new(s.category.join(", ")),
        ]);
    }
    println!("{table}");
    println!("Found {} scholarships", results.len());

    Ok(())
}
