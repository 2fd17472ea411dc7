use anyhow::{Context, Result};
use schoolmap::{NewSchool, SchoolStore};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct AddResponse {
    id: i64,
    name: String,
    address: String,
    latitude: f64,
    longitude: f64,
}

pub fn run(
    db_path: PathBuf,
    name: String,
    address: String,
    lat: f64,
    lon: f64,
    json: bool,
) -> Result<()> {
    let store = SchoolStore::open(&db_path)
        .with_context(|| format!("Failed to open database: {}", db_path.display()))?;

    let school = NewSchool::new(name, address, lat, lon)?;
    let id = store.insert(&school).context("Failed to insert school")?;

    if json {
        let response = AddResponse {
            id,
            name: school.name,
            address: school.address,
            latitude: school.latitude,
            longitude: school.longitude,
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("Added '{}' with id {}", school.name, id);
    }

    Ok(())
}
