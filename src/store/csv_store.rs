//! One CSV file per date: `<YYYY-MM-DD>.<ext>`.

use super::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::daily_log::DailyLog;
use crate::models::task::TaskRecord;
use crate::models::task_status::TaskStatus;
use crate::models::task_type::TaskType;
use chrono::NaiveDate;
use csv::{ReaderBuilder, Writer};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

pub const HEADER: [&str; 7] = ["Date", "ProjectID", "Type", "Title", "Start", "End", "Status"];

/// On-disk row shape. The leading `Date` column is dropped on load.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Date")]
    _date: String,
    #[serde(rename = "ProjectID")]
    project_id: String,
    #[serde(rename = "Type")]
    kind: TaskType,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Start")]
    start: String,
    #[serde(rename = "End")]
    end: String,
    #[serde(rename = "Status")]
    status: TaskStatus,
}

impl From<CsvRow> for TaskRecord {
    fn from(row: CsvRow) -> Self {
        TaskRecord {
            project_id: row.project_id,
            kind: row.kind,
            title: row.title,
            start: row.start,
            end: row.end,
            status: row.status,
        }
    }
}

pub struct CsvStore {
    dir: PathBuf,
    extension: String,
}

impl CsvStore {
    pub fn new(dir: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn file_name(&self, date: NaiveDate) -> String {
        format!("{}.{}", date.format("%Y-%m-%d"), self.extension)
    }

    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(self.file_name(date))
    }
}

impl RecordStore for CsvStore {
    fn locate(&self, date: NaiveDate) -> String {
        self.path_for(date).display().to_string()
    }

    fn load(&self, date: NaiveDate) -> AppResult<Option<DailyLog>> {
        let path = self.path_for(date);
        if !path.exists() {
            debug!(file = %path.display(), "no existing data");
            return Ok(None);
        }

        let mut rdr = ReaderBuilder::new().has_headers(true).from_path(&path)?;

        let headers = rdr.headers()?.clone();
        if headers.iter().ne(HEADER.iter().copied()) {
            return Err(AppError::MalformedFile {
                file: path.display().to_string(),
                found: headers.iter().collect::<Vec<_>>().join(","),
            });
        }

        let mut records = Vec::new();
        for row in rdr.deserialize::<CsvRow>() {
            records.push(TaskRecord::from(row?));
        }

        debug!(file = %path.display(), rows = records.len(), "loaded daily log");
        Ok(Some(DailyLog::new(date, records)))
    }

    fn save(&self, log: &DailyLog) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;

        let mut sorted = log.clone();
        sorted.sort_by_start();

        let path = self.path_for(log.date);
        let date_str = sorted.date_str();
        let mut wtr = Writer::from_path(&path)?;

        wtr.write_record(HEADER)?;
        for rec in &sorted.records {
            wtr.write_record([
                date_str.as_str(),
                rec.project_id.as_str(),
                rec.kind.as_str(),
                rec.title.as_str(),
                rec.start.as_str(),
                rec.end.as_str(),
                rec.status.as_str(),
            ])?;
        }

        wtr.flush()?;
        info!(file = %path.display(), rows = sorted.len(), "saved daily log");
        Ok(())
    }
}
