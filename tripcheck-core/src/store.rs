//! Trip persistence.
//!
//! Conflict detection never touches storage; callers load trips through a
//! [`TripStore`] and hand the slice over.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;

use crate::error::StoreError;
use crate::trip::{Trip, sample_trips};

pub trait TripStore {
    /// All trips, in insertion order.
    fn all(&self) -> Result<Vec<Trip>, StoreError>;

    /// Replace the trip with the same id in place, or append it.
    fn upsert(&self, trip: Trip) -> Result<(), StoreError>;

    /// Remove the trip with this id. Returns false if there was none.
    fn delete(&self, id: &str) -> Result<bool, StoreError>;

    fn get(&self, id: &str) -> Result<Option<Trip>, StoreError> {
        Ok(self.all()?.into_iter().find(|t| t.id == id))
    }
}

fn upsert_into(trips: &mut Vec<Trip>, trip: Trip) {
    match trips.iter_mut().find(|t| t.id == trip.id) {
        Some(existing) => *existing = trip,
        None => trips.push(trip),
    }
}

/// Trips held in memory.
#[derive(Default)]
pub struct MemoryTripStore {
    trips: Mutex<Vec<Trip>>,
}

impl MemoryTripStore {
    pub fn new(trips: Vec<Trip>) -> Self {
        MemoryTripStore { trips: Mutex::new(trips) }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Trip>> {
        // Every mutation is a single Vec operation, so a poisoned lock is still consistent.
        self.trips.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TripStore for MemoryTripStore {
    fn all(&self) -> Result<Vec<Trip>, StoreError> {
        Ok(self.lock().clone())
    }

    fn upsert(&self, trip: Trip) -> Result<(), StoreError> {
        upsert_into(&mut self.lock(), trip);
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut trips = self.lock();
        let before = trips.len();
        trips.retain(|t| t.id != id);
        Ok(trips.len() != before)
    }
}

/// Trips stored as a JSON array in a single file.
pub struct JsonFileTripStore {
    path: PathBuf,
}

impl JsonFileTripStore {
    pub const FILE_NAME: &'static str = "trips.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileTripStore { path: path.into() }
    }

    /// `trips.json` inside the given data directory.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    /// Write to a temp file beside `trips.json`, then rename over it, so a
    /// crash never leaves a half-written store.
    fn write(&self, trips: &[Trip]) -> Result<(), StoreError> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;

        let content = serde_json::to_string_pretty(trips)?;
        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| self.io_error(e))?;
        tmp.write_all(content.as_bytes()).map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        tracing::debug!(path = %self.path.display(), count = trips.len(), "saved trips");
        Ok(())
    }
}

impl TripStore for JsonFileTripStore {
    fn all(&self) -> Result<Vec<Trip>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: self.path.display().to_string(),
            source,
        })
    }

    fn upsert(&self, trip: Trip) -> Result<(), StoreError> {
        let mut trips = self.all()?;
        upsert_into(&mut trips, trip);
        self.write(&trips)
    }

    fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut trips = self.all()?;
        let before = trips.len();
        trips.retain(|t| t.id != id);

        if trips.len() == before {
            return Ok(false);
        }

        self.write(&trips)?;
        Ok(true)
    }
}

/// Stored trips, or the sample trips for `year` (saved first) when the store is empty.
pub fn load_or_seed(store: &dyn TripStore, year: i32) -> Result<Vec<Trip>, StoreError> {
    let trips = store.all()?;
    if !trips.is_empty() {
        return Ok(trips);
    }

    tracing::info!(year, "no trips stored, seeding sample trips");
    let samples = sample_trips(year);
    for trip in &samples {
        store.upsert(trip.clone())?;
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(id: &str, title: &str) -> Trip {
        Trip {
            id: id.to_string(),
            title: title.to_string(),
            destination: "Lisbon".to_string(),
            start_date: "2024-06-01".to_string(),
            end_date: "2024-06-07".to_string(),
            description: None,
        }
    }

    fn exercise(store: &dyn TripStore) {
        assert!(store.all().unwrap().is_empty());

        store.upsert(trip("a", "First")).unwrap();
        store.upsert(trip("b", "Second")).unwrap();
        store.upsert(trip("a", "First, renamed")).unwrap();

        let trips = store.all().unwrap();
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].title, "First, renamed");
        assert_eq!(trips[1].id, "b");

        assert_eq!(store.get("b").unwrap().map(|t| t.title), Some("Second".to_string()));
        assert!(store.delete("a").unwrap());
        assert!(!store.delete("a").unwrap());
        assert_eq!(store.all().unwrap(), vec![trip("b", "Second")]);
    }

    #[test]
    fn test_memory_store() {
        exercise(&MemoryTripStore::default());
    }

    #[test]
    fn test_json_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileTripStore::in_dir(&dir.path().join("nested"));
        exercise(&store);

        // Survives reopening.
        let reopened = JsonFileTripStore::new(store.path());
        assert_eq!(reopened.all().unwrap().len(), 1);
    }

    #[test]
    fn test_json_file_store_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileTripStore::in_dir(dir.path());
        store.upsert(trip("a", "First")).unwrap();
        store.upsert(trip("a", "First, again")).unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["trips.json".to_string()]);
        assert_eq!(store.all().unwrap()[0].title, "First, again");
    }

    #[test]
    fn test_json_file_store_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trips.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = JsonFileTripStore::new(&path).all().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn test_load_or_seed() {
        let store = MemoryTripStore::default();
        let seeded = load_or_seed(&store, 2024).unwrap();
        assert_eq!(seeded.len(), 3);
        assert_eq!(store.all().unwrap(), seeded);

        store.delete("2").unwrap();
        assert_eq!(load_or_seed(&store, 2024).unwrap().len(), 2);
    }
}
