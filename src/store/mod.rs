//! Date-partitioned persistence for daily task logs.

pub mod csv_store;

use crate::errors::AppResult;
use crate::models::daily_log::DailyLog;
use chrono::NaiveDate;

pub use csv_store::CsvStore;

/// Backing storage for one `DailyLog` per calendar date.
pub trait RecordStore {
    /// Human-readable identifier of the storage unit holding `date`.
    fn locate(&self, date: NaiveDate) -> String;

    /// Read the log of `date`, sorted by start time.
    /// `Ok(None)` means nothing was ever saved for that date.
    fn load(&self, date: NaiveDate) -> AppResult<Option<DailyLog>>;

    /// Replace everything stored for `log.date` with `log.records`.
    fn save(&self, log: &DailyLog) -> AppResult<()>;
}
