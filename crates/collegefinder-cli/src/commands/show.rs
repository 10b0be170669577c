//! The `collegefinder show` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use collegefinder_core::bookmarks::load_bookmarks;

pub fn execute(id: String, config_path: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let catalog = super::load_catalog(&config)?;

    let Some(college) = catalog.get(&id) else {
        anyhow::bail!("unknown college id: {id}");
    };
    let saved = load_bookmarks(super::open_storage(&config).as_ref()).contains(&college.id);

    println!("{}", college.name);
    if !college.address.is_empty() {
        println!("{}", college.address);
    }
    println!("{}, {}", college.city, college.state);
    println!(
        "{} | NIRF #{} | ★ {} | {}",
        college.institution_type,
        college.nirf_rank,
        college.rating,
        if saved { "Saved" } else { "Not saved" }
    );

    println!("\nCourses Offered");
    for course in &college.courses {
        println!("  - {course}");
    }

    println!("\nAdmission Process");
    println!("  1. Entrance Exam: {}", college.admission.entrance);
    println!("  2. Eligibility: {}", college.admission.eligibility);
    println!("  3. Application Process: {}", college.admission.process);

    println!("\nFee Structure");
    let mut fees = Table::new();
    fees.add_row(vec!["Annual Fee".to_string(), super::rupees(college.fees.annual)]);
    fees.add_row(vec!["Total Course".to_string(), super::rupees(college.fees.total)]);
    fees.add_row(vec!["Additional".to_string(), super::rupees(college.fees.additional)]);
    println!("{fees}");

    println!("\nContact Information");
    println!("  Phone: {}", college.contact.phone);
    println!("  Email: {}", college.contact.email);
    println!("  Website: {}", college.contact.website);

    if !college.admission.documents.is_empty() {
        println!("\nRequired Documents");
        for doc in &college.admission.documents {
            println!("  - {doc}");
        }
    }

    Ok(())
}
