use super::task::TaskRecord;
use chrono::NaiveDate;

/// All task records of one calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyLog {
    pub date: NaiveDate,
    pub records: Vec<TaskRecord>,
}

impl DailyLog {
    pub fn new(date: NaiveDate, records: Vec<TaskRecord>) -> Self {
        let mut log = Self { date, records };
        log.sort_by_start();
        log
    }

    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            records: Vec::new(),
        }
    }

    /// Stable ascending sort on the `start` string.
    pub fn sort_by_start(&mut self) {
        self.records.sort_by(|a, b| a.start.cmp(&b.start));
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
