//! # parkvakt-store
//!
//! Flat-file persistence for wait-time observations.
//!
//! ### Expectations:
//! - Append-only for the life of a calendar date; never truncates or rewrites
//! - Header written exactly once per file, before any data row
//! - Files readable by the spreadsheet tooling the on-site team already uses
//!
//! ### Key Submodules:
//! - `day_file`: the per-park, per-day append-only record store
//! - `summary`: end-of-day reduction to counts and mean wait

pub mod day_file;
pub mod error;
pub mod summary;

pub use day_file::{RecordStore, DAY_FILE_HEADER};
pub use error::StoreError;
pub use summary::{DaySummary, SummaryReport};
