use anyhow::{Context, Result};
use schoolmap::{rank_by_distance, SchoolStore};
use std::path::PathBuf;

pub fn run(db_path: PathBuf, lat: f64, lon: f64, json: bool) -> Result<()> {
    let store = SchoolStore::open(&db_path)
        .with_context(|| format!("Failed to open database: {}", db_path.display()))?;

    let schools = store.list_all().context("Failed to list schools")?;
    let ranked = rank_by_distance(schools, lat, lon);

    if json {
        println!("{}", serde_json::to_string(&ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("No schools registered in: {}", db_path.display());
        return Ok(());
    }

    println!(
        "{:>5} {:<28} {:<32} {:>12}",
        "ID", "NAME", "ADDRESS", "DISTANCE KM"
    );
    println!("{}", "-".repeat(80));

    for school in &ranked {
        println!(
            "{:>5} {:<28} {:<32} {:>12.2}",
            school.id, school.name, school.address, school.distance
        );
    }

    // Summary
    println!();
    println!("Summary:");
    println!("  Total schools: {}", ranked.len());
    println!("  Reference point: ({}, {})", lat, lon);
    println!("  Database: {}", db_path.display());

    Ok(())
}
