//! Daily summary generation.
//!
//! Reads one day-file back and reduces it to row counts and a mean
//! standby wait. Rows carrying the no-data sentinel stay out of the mean
//! entirely; folding them in as zero would drag the average down and
//! silently corrupt the day's numbers.

use std::fmt;

use chrono::NaiveDate;

use parkvakt_core::observation::{WaitTime, ENTITY_ATTRACTION};

use crate::{RecordStore, StoreError};

/// Outcome of summarizing one (park, date) pair.
#[derive(Debug, Clone, PartialEq)]
pub enum DaySummary {
    /// The day-file had data rows.
    Report(SummaryReport),
    /// No day-file exists; nothing was recorded that day.
    NoFile,
    /// The day-file exists but holds no data rows.
    EmptyFile,
}

/// Counts and mean wait for one park day.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub park: String,
    pub date: NaiveDate,
    /// All data rows, whatever their type.
    pub total_rows: usize,
    /// Rows whose type field is `ATTRACTION`.
    pub attraction_rows: usize,
    /// Mean over waits that are valid non-negative integers; `None` when
    /// every recorded wait was the no-data sentinel.
    pub mean_wait: Option<f64>,
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} - daily summary for {}", self.park, self.date)?;
        writeln!(f, "-----------------------------------")?;
        writeln!(f, "Total rows: {}", self.total_rows)?;
        writeln!(f, "Attractions recorded: {}", self.attraction_rows)?;
        match self.mean_wait {
            Some(mean) => writeln!(f, "Mean wait (min): {mean:.2}")?,
            None => writeln!(f, "No valid wait data")?,
        }
        write!(f, "-----------------------------------")
    }
}

impl RecordStore {
    /// Summarizes the park's day-file. Missing file and header-only file
    /// are distinct non-error outcomes; an unreadable file is an error
    /// (the runtime reports it and retires the park without a summary).
    pub fn summarize(&self, park: &str, date: NaiveDate) -> Result<DaySummary, StoreError> {
        let path = self.day_file(park, date);
        if !path.exists() {
            return Ok(DaySummary::NoFile);
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&path)
            .map_err(|source| StoreError::Csv {
                path: path.clone(),
                source,
            })?;

        let mut total_rows = 0usize;
        let mut attraction_rows = 0usize;
        let mut wait_sum = 0u64;
        let mut wait_count = 0usize;

        for record in reader.records() {
            let record = record.map_err(|source| StoreError::Csv {
                path: path.clone(),
                source,
            })?;
            total_rows += 1;

            if record.get(1) == Some(ENTITY_ATTRACTION) {
                attraction_rows += 1;
                if let Some(WaitTime::Minutes(minutes)) =
                    record.get(3).map(WaitTime::parse_field)
                {
                    wait_sum += u64::from(minutes);
                    wait_count += 1;
                }
            }
        }

        if total_rows == 0 {
            return Ok(DaySummary::EmptyFile);
        }

        let mean_wait = (wait_count > 0).then(|| wait_sum as f64 / wait_count as f64);
        Ok(DaySummary::Report(SummaryReport {
            park: park.to_owned(),
            date,
            total_rows,
            attraction_rows,
            mean_wait,
        }))
    }
}
