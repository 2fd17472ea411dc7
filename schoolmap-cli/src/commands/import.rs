use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use schoolmap::{NewSchool, SchoolStore};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

pub fn run(
    db_path: PathBuf,
    input: PathBuf,
    name_col: String,
    address_col: String,
    lat_col: String,
    lon_col: String,
) -> Result<()> {
    let store = SchoolStore::open(&db_path)
        .with_context(|| format!("Failed to open database: {}", db_path.display()))?;

    let file = File::open(&input).context("Failed to open input file")?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    // Find column indices
    let headers = reader.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("Column '{}' not found in CSV", name))
    };
    let name_idx = column(&name_col)?;
    let address_idx = column(&address_col)?;
    let lat_idx = column(&lat_col)?;
    let lon_idx = column(&lon_col)?;

    // Collect records for progress bar
    let records: Vec<_> = reader.records().collect::<Result<_, _>>()?;
    let total = records.len() as u64;

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )?
            .progress_chars("#>-"),
    );

    let mut imported = 0u64;
    let mut skipped = 0u64;

    for record in records {
        let school = parse_row(&record, name_idx, address_idx, lat_idx, lon_idx);

        match school {
            Some(school) => {
                store.insert(&school).context("Failed to insert school")?;
                imported += 1;
            }
            None => skipped += 1,
        }

        pb.inc(1);
    }

    pb.finish_with_message("done");

    println!("Imported {} schools from: {}", imported, input.display());
    if skipped > 0 {
        println!("Skipped {} invalid rows", skipped);
    }

    Ok(())
}

/// Parse one CSV row into a validated record; `None` if any field is invalid.
fn parse_row(
    record: &csv::StringRecord,
    name_idx: usize,
    address_idx: usize,
    lat_idx: usize,
    lon_idx: usize,
) -> Option<NewSchool> {
    let name = record.get(name_idx)?;
    let address = record.get(address_idx)?;
    let lat: f64 = record.get(lat_idx)?.trim().parse().ok()?;
    let lon: f64 = record.get(lon_idx)?.trim().parse().ok()?;

    NewSchool::new(name, address, lat, lon).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> csv::StringRecord {
        csv::StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_parse_row_valid() {
        let record = row(&["Springfield Elementary", "742 Evergreen Terrace", "44.05", "-123.09"]);
        let school = parse_row(&record, 0, 1, 2, 3).unwrap();
        assert_eq!(school.name, "Springfield Elementary");
        assert_eq!(school.latitude, 44.05);
    }

    #[test]
    fn test_parse_row_invalid_coordinate() {
        let record = row(&["A", "X", "not-a-number", "0.0"]);
        assert!(parse_row(&record, 0, 1, 2, 3).is_none());
    }

    #[test]
    fn test_parse_row_empty_name() {
        let record = row(&["", "X", "0.0", "0.0"]);
        assert!(parse_row(&record, 0, 1, 2, 3).is_none());
    }

    #[test]
    fn test_parse_row_missing_column() {
        let record = row(&["A", "X"]);
        assert!(parse_row(&record, 0, 1, 2, 3).is_none());
    }
}
