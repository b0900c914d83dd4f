//! Append-only per-park, per-day observation log.
//!
//! One CSV file per (park, calendar date), created lazily on the first
//! non-empty append. The header row is written exactly once, before any
//! data row, and appends never rewrite it. Rows keep arrival order and
//! duplicates: the file records what the API reported at each tick.
//!
//! The header and field forms are byte-identical to the files the
//! previous deployment wrote, so old and new logs stay interchangeable.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use parkvakt_core::observation::Observation;

use crate::StoreError;

/// Fixed header row of every day-file.
pub const DAY_FILE_HEADER: [&str; 4] = ["FechaHora", "Tipo", "Nombre", "Espera"];

/// Writes and reads day-files under one data directory.
#[derive(Debug, Clone)]
pub struct RecordStore {
    data_dir: PathBuf,
}

impl RecordStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the day-file for one (park, date) pair:
    /// `<data_dir>/<park>_<YYYY-MM-DD>.csv`.
    pub fn day_file(&self, park: &str, date: NaiveDate) -> PathBuf {
        self.data_dir
            .join(format!("{park}_{}.csv", date.format("%Y-%m-%d")))
    }

    /// Appends observations to the park's day-file, creating it (with
    /// header) on first use. An empty slice is a no-op and never creates
    /// a file, so a day with nothing operating leaves no header-only
    /// stub behind. Returns the number of rows written.
    pub fn append(
        &self,
        park: &str,
        date: NaiveDate,
        observations: &[Observation],
    ) -> Result<usize, StoreError> {
        if observations.is_empty() {
            return Ok(0);
        }

        let path = self.day_file(park, date);
        let needs_header = !path.exists();
        if needs_header {
            fs::create_dir_all(&self.data_dir).map_err(|source| StoreError::Io {
                path: self.data_dir.clone(),
                source,
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;

        let mut writer = csv::Writer::from_writer(file);
        let csv_err = |source| StoreError::Csv {
            path: path.clone(),
            source,
        };

        if needs_header {
            writer.write_record(DAY_FILE_HEADER).map_err(csv_err)?;
        }
        for obs in observations {
            writer
                .write_record([
                    obs.timestamp.as_str(),
                    obs.entity_type.as_str(),
                    obs.name.as_str(),
                    obs.wait.to_string().as_str(),
                ])
                .map_err(csv_err)?;
        }
        writer
            .flush()
            .map_err(|source| StoreError::Io { path, source })?;

        Ok(observations.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkvakt_core::observation::WaitTime;

    fn store() -> (tempfile::TempDir, RecordStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("data"));
        (dir, store)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 8).unwrap()
    }

    fn obs(name: &str, wait: WaitTime) -> Observation {
        Observation::attraction("2026-08-08 10:15", Some(name), wait)
    }

    #[test]
    fn test_round_trip_header_then_rows_in_order() {
        let (_dir, store) = store();
        let rows = vec![
            obs("Everest", WaitTime::Minutes(45)),
            obs("Safari", WaitTime::NoData),
        ];
        assert_eq!(store.append("AnimalKingdom", date(), &rows).unwrap(), 2);

        let content = fs::read_to_string(store.day_file("AnimalKingdom", date())).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "FechaHora,Tipo,Nombre,Espera",
                "2026-08-08 10:15,ATTRACTION,Everest,45",
                "2026-08-08 10:15,ATTRACTION,Safari,Sin datos",
            ]
        );
    }

    #[test]
    fn test_second_append_never_duplicates_header() {
        let (_dir, store) = store();
        store
            .append("EPCOT", date(), &[obs("Ratatouille", WaitTime::Minutes(60))])
            .unwrap();
        store
            .append("EPCOT", date(), &[obs("Frozen", WaitTime::Minutes(30))])
            .unwrap();

        let content = fs::read_to_string(store.day_file("EPCOT", date())).unwrap();
        let headers = content
            .lines()
            .filter(|line| *line == "FechaHora,Tipo,Nombre,Espera")
            .count();
        assert_eq!(headers, 1);
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_empty_append_creates_no_file() {
        let (_dir, store) = store();
        assert_eq!(store.append("EPCOT", date(), &[]).unwrap(), 0);
        assert!(!store.day_file("EPCOT", date()).exists());
        assert!(!store.data_dir().exists());
    }

    #[test]
    fn test_duplicate_rows_are_retained() {
        let (_dir, store) = store();
        let row = obs("Everest", WaitTime::Minutes(45));
        store
            .append("AnimalKingdom", date(), &[row.clone()])
            .unwrap();
        store.append("AnimalKingdom", date(), &[row]).unwrap();

        let content = fs::read_to_string(store.day_file("AnimalKingdom", date())).unwrap();
        assert_eq!(content.lines().count(), 3);
    }
}
