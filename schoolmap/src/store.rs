//! SQLite-backed school store.
//!
//! [`SchoolStore`] owns a single connection guarded by a mutex; the busy
//! timeout covers writers contending on the database file. Opening a store
//! bootstraps the connection: the `schools_table` schema is created
//! idempotently before the handle is returned, so every store is usable
//! immediately.
//!
//! Records are insert-only. Listing reads every row ordered by id, which
//! equals insertion order.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use rusqlite::{params, Connection};
use tracing::debug;

use crate::error::Result;
use crate::school::{NewSchool, School};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS schools_table (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    address TEXT NOT NULL,
    latitude REAL NOT NULL,
    longitude REAL NOT NULL
)";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the school database.
///
/// Cheap to share behind an `Arc`; all operations take `&self`.
pub struct SchoolStore {
    conn: Mutex<Connection>,
}

impl SchoolStore {
    /// Open (or create) a school database file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "opened school database");
        Self::bootstrap(conn)
    }

    /// Open an in-memory school database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        debug!("opened in-memory school database");
        Self::bootstrap(conn)
    }

    fn bootstrap(conn: Connection) -> Result<Self> {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        // The connection stays usable even if a previous holder panicked
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a validated record and return its assigned id.
    pub fn insert(&self, school: &NewSchool) -> Result<i64> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO schools_table (name, address, latitude, longitude)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                school.name,
                school.address,
                school.latitude,
                school.longitude
            ],
        )?;
        let id = conn.last_insert_rowid();
        debug!(id, name = %school.name, "inserted school");
        Ok(id)
    }

    /// Read every record, ordered by id (insertion order).
    pub fn list_all(&self) -> Result<Vec<School>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, name, address, latitude, longitude
             FROM schools_table
             ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(School {
                id: row.get(0)?,
                name: row.get(1)?,
                address: row.get(2)?,
                latitude: row.get(3)?,
                longitude: row.get(4)?,
            })
        })?;

        let schools = rows.collect::<rusqlite::Result<Vec<School>>>()?;
        debug!(count = schools.len(), "listed schools");
        Ok(schools)
    }

    /// Number of records in the store.
    pub fn count(&self) -> Result<u64> {
        let count: i64 =
            self.conn()
                .query_row("SELECT COUNT(*) FROM schools_table", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample(name: &str, lat: f64, lon: f64) -> NewSchool {
        NewSchool::new(name, "1 Main St", lat, lon).unwrap()
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let store = SchoolStore::open_in_memory().unwrap();

        let first = store.insert(&sample("A", 0.0, 0.0)).unwrap();
        let second = store.insert(&sample("B", 1.0, 1.0)).unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn test_list_returns_insertion_order() {
        let store = SchoolStore::open_in_memory().unwrap();
        store.insert(&sample("A", 0.0, 0.0)).unwrap();
        store.insert(&sample("B", 1.0, 1.0)).unwrap();
        store.insert(&sample("C", 2.0, 2.0)).unwrap();

        let schools = store.list_all().unwrap();
        let names: Vec<&str> = schools.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_roundtrip_preserves_fields() {
        let store = SchoolStore::open_in_memory().unwrap();
        let id = store.insert(&sample("A", -12.34, 56.78)).unwrap();

        let schools = store.list_all().unwrap();
        assert_eq!(schools.len(), 1);
        assert_eq!(schools[0].id, id);
        assert_eq!(schools[0].name, "A");
        assert_eq!(schools[0].address, "1 Main St");
        assert_eq!(schools[0].latitude, -12.34);
        assert_eq!(schools[0].longitude, 56.78);
    }

    #[test]
    fn test_out_of_range_coordinates_stored_as_given() {
        let store = SchoolStore::open_in_memory().unwrap();
        store.insert(&sample("A", 200.0, -400.0)).unwrap();

        let schools = store.list_all().unwrap();
        assert_eq!(schools[0].latitude, 200.0);
        assert_eq!(schools[0].longitude, -400.0);
    }

    #[test]
    fn test_count() {
        let store = SchoolStore::open_in_memory().unwrap();
        assert_eq!(store.count().unwrap(), 0);

        store.insert(&sample("A", 0.0, 0.0)).unwrap();
        store.insert(&sample("B", 1.0, 1.0)).unwrap();
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        let store = SchoolStore::open_in_memory().unwrap();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_records_persist_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("schools.db");

        {
            let store = SchoolStore::open(&db_path).unwrap();
            store.insert(&sample("A", 0.0, 0.0)).unwrap();
        }

        let store = SchoolStore::open(&db_path).unwrap();
        let schools = store.list_all().unwrap();
        assert_eq!(schools.len(), 1);
        assert_eq!(schools[0].name, "A");
    }

    #[test]
    fn test_reopen_does_not_reset_ids() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("schools.db");

        let first = {
            let store = SchoolStore::open(&db_path).unwrap();
            store.insert(&sample("A", 0.0, 0.0)).unwrap()
        };

        let store = SchoolStore::open(&db_path).unwrap();
        let second = store.insert(&sample("B", 1.0, 1.0)).unwrap();
        assert!(second > first);
    }
}
