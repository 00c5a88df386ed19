//! In-memory task list of the selected date, mirrored to a record store.
//!
//! Every mutation is persisted before returning, so switching dates never
//! loses anything.

use crate::core::session::SessionContext;
use crate::errors::{AppError, AppResult};
use crate::models::daily_log::DailyLog;
use crate::models::task::TaskRecord;
use crate::store::RecordStore;
use chrono::NaiveDate;
use tracing::debug;

/// Outcome of (re)loading the list for a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded(usize),
    /// No file yet: the list is empty and a file is created on first save.
    Missing,
}

pub struct TaskList<S: RecordStore> {
    store: S,
    session: SessionContext,
    log: DailyLog,
}

impl<S: RecordStore> TaskList<S> {
    pub fn open(store: S, date: NaiveDate) -> AppResult<(Self, LoadStatus)> {
        let session = SessionContext::new(date, &store);
        let mut list = Self {
            store,
            session,
            log: DailyLog::empty(date),
        };
        let status = list.select_date(date)?;
        Ok((list, status))
    }

    /// Replace the whole list with the stored log of `date`.
    pub fn select_date(&mut self, date: NaiveDate) -> AppResult<LoadStatus> {
        let session = SessionContext::new(date, &self.store);
        let loaded = self.store.load(date)?;

        self.session = session;
        match loaded {
            Some(log) => {
                self.log = log;
                Ok(LoadStatus::Loaded(self.log.len()))
            }
            None => {
                self.log = DailyLog::empty(date);
                Ok(LoadStatus::Missing)
            }
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn records(&self) -> &[TaskRecord] {
        &self.log.records
    }

    pub fn get(&self, index: usize) -> AppResult<&TaskRecord> {
        self.log
            .records
            .get(index)
            .ok_or_else(|| self.invalid_index(index))
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn add(&mut self, record: TaskRecord) -> AppResult<()> {
        debug!(date = %self.session.date_str(), start = %record.start, "add task");
        let mut next = self.log.clone();
        next.records.push(record);
        self.commit(next)
    }

    pub fn update(&mut self, index: usize, record: TaskRecord) -> AppResult<()> {
        if index >= self.log.len() {
            return Err(self.invalid_index(index));
        }
        debug!(date = %self.session.date_str(), index, "update task");
        let mut next = self.log.clone();
        next.records[index] = record;
        self.commit(next)
    }

    pub fn delete(&mut self, index: usize) -> AppResult<TaskRecord> {
        if index >= self.log.len() {
            return Err(self.invalid_index(index));
        }
        debug!(date = %self.session.date_str(), index, "delete task");
        let mut next = self.log.clone();
        let removed = next.records.remove(index);
        self.commit(next)?;
        Ok(removed)
    }

    /// Persist `next` and only then make it the in-memory list.
    fn commit(&mut self, mut next: DailyLog) -> AppResult<()> {
        self.store.save(&next)?;
        next.sort_by_start();
        self.log = next;
        Ok(())
    }

    fn invalid_index(&self, index: usize) -> AppError {
        AppError::InvalidIndex {
            index: index + 1,
            date: self.session.date_str(),
        }
    }
}
