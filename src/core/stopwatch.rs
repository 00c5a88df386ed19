//! Elapsed-time stopwatch used to pre-fill `actual` tasks.

use crate::core::ticker::Ticker;
use crate::errors::{AppError, AppResult};
use crate::models::task::TaskRecord;
use crate::models::task_status::TaskStatus;
use crate::models::task_type::TaskType;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::time::{format_elapsed, format_hhmm};
use chrono::{Duration, NaiveDateTime};
use std::time::Duration as StdDuration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchState {
    Idle,
    Running { started_at: NaiveDateTime },
}

pub struct Stopwatch<C: Clock = SystemClock> {
    clock: C,
    state: StopwatchState,
}

impl Stopwatch<SystemClock> {
    pub fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> Stopwatch<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            state: StopwatchState::Idle,
        }
    }

    pub fn state(&self) -> StopwatchState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, StopwatchState::Running { .. })
    }

    pub fn start(&mut self) -> AppResult<NaiveDateTime> {
        if self.is_running() {
            return Err(AppError::TimerAlreadyRunning);
        }
        let started_at = self.clock.now();
        self.state = StopwatchState::Running { started_at };
        debug!(%started_at, "stopwatch started");
        Ok(started_at)
    }

    pub fn elapsed(&self) -> Option<Duration> {
        match self.state {
            StopwatchState::Running { started_at } => Some(self.clock.now() - started_at),
            StopwatchState::Idle => None,
        }
    }

    /// Current display value, `None` when idle.
    pub fn tick(&self) -> Option<String> {
        self.elapsed().map(format_elapsed)
    }

    /// Stop and derive the candidate `actual` record.
    ///
    /// `end` is `started_at + elapsed` rather than a second clock read.
    pub fn stop(&mut self) -> AppResult<TaskRecord> {
        let StopwatchState::Running { started_at } = self.state else {
            return Err(AppError::TimerNotRunning);
        };

        let elapsed = self.clock.now() - started_at;
        let end = started_at + elapsed;
        self.state = StopwatchState::Idle;
        debug!(%started_at, elapsed = %format_elapsed(elapsed), "stopwatch stopped");

        Ok(TaskRecord::new(
            "",
            TaskType::Actual,
            "",
            format_hhmm(started_at),
            format_hhmm(end),
            TaskStatus::Active,
        ))
    }
}

impl<C: Clock + Clone + Send + 'static> Stopwatch<C> {
    /// Publish the elapsed time to `listener` every `interval` until the
    /// returned ticker is stopped.
    pub fn ticker<F>(&self, interval: StdDuration, mut listener: F) -> AppResult<Ticker>
    where
        F: FnMut(Duration) + Send + 'static,
    {
        let StopwatchState::Running { started_at } = self.state else {
            return Err(AppError::TimerNotRunning);
        };
        let clock = self.clock.clone();
        Ticker::spawn(interval, move || listener(clock.now() - started_at))
    }
}
