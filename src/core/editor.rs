//! Task editor: a form seeded from defaults or an existing record,
//! validated before it turns into a `TaskRecord`.
//!
//! The editor never touches the task list. It hands back either the
//! committed record or a cancellation and the caller decides what to do.

use crate::errors::{AppResult, ValidationError};
use crate::models::task::TaskRecord;
use crate::models::task_status::TaskStatus;
use crate::models::task_type::TaskType;
use crate::ui::messages::format_warning;
use crate::utils::time::{join_hhmm, split_hhmm};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskForm {
    pub project_id: String,
    pub kind: TaskType,
    pub title: String,
    pub start_hour: String,
    pub start_minute: String,
    pub end_hour: String,
    pub end_minute: String,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    Committed(TaskRecord),
    Cancelled,
}

impl TaskForm {
    /// Blank form for a new record.
    pub fn new(kind: TaskType, status: TaskStatus) -> Self {
        Self {
            kind,
            status,
            ..Default::default()
        }
    }

    /// Form seeded with an existing record, times split into hour/minute.
    pub fn from_record(rec: &TaskRecord) -> Self {
        let (start_hour, start_minute) = split_hhmm(&rec.start);
        let (end_hour, end_minute) = split_hhmm(&rec.end);
        Self {
            project_id: rec.project_id.clone(),
            kind: rec.kind,
            title: rec.title.clone(),
            start_hour,
            start_minute,
            end_hour,
            end_minute,
            status: rec.status,
        }
    }

    pub fn set_start(&mut self, hhmm: &str) {
        (self.start_hour, self.start_minute) = split_hhmm(hhmm);
    }

    pub fn set_end(&mut self, hhmm: &str) {
        (self.end_hour, self.end_minute) = split_hhmm(hhmm);
    }

    /// Validate and build the record.
    pub fn commit(&self) -> Result<TaskRecord, ValidationError> {
        if self.project_id.is_empty() || self.title.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        let start = join_hhmm(&self.start_hour, &self.start_minute);
        let end = join_hhmm(&self.end_hour, &self.end_minute);
        let (Some(start), Some(end)) = (start, end) else {
            return Err(ValidationError::InvalidTime);
        };

        Ok(TaskRecord {
            project_id: self.project_id.clone(),
            kind: self.kind,
            title: self.title.clone(),
            start,
            end,
            status: self.status,
        })
    }
}

/// Prompt for every field until the form validates.
///
/// An empty answer keeps the value shown in brackets. End of input
/// cancels without side effects.
pub fn run_editor<R, W>(input: &mut R, out: &mut W, mut form: TaskForm) -> AppResult<EditorOutcome>
where
    R: BufRead,
    W: Write,
{
    loop {
        if !ask_into(input, out, "Project ID", &mut form.project_id)? {
            return Ok(EditorOutcome::Cancelled);
        }

        loop {
            let Some(kind) = ask(input, out, "Type (planned/actual)", form.kind.as_str())? else {
                return Ok(EditorOutcome::Cancelled);
            };
            match TaskType::from_code(&kind) {
                Some(k) => {
                    form.kind = k;
                    break;
                }
                None => writeln!(out, "{}", format_warning(format!("Unknown type '{}'", kind)))?,
            }
        }

        let text_fields = [
            ("Title", &mut form.title),
            ("Start hour", &mut form.start_hour),
            ("Start minute", &mut form.start_minute),
            ("End hour", &mut form.end_hour),
            ("End minute", &mut form.end_minute),
        ];
        for (label, field) in text_fields {
            if !ask_into(input, out, label, field)? {
                return Ok(EditorOutcome::Cancelled);
            }
        }

        loop {
            let Some(status) = ask(
                input,
                out,
                "Status (done/active/crit/milestone)",
                form.status.as_str(),
            )?
            else {
                return Ok(EditorOutcome::Cancelled);
            };
            match TaskStatus::from_code(&status) {
                Some(s) => {
                    form.status = s;
                    break;
                }
                None => writeln!(
                    out,
                    "{}",
                    format_warning(format!("Unknown status '{}'", status))
                )?,
            }
        }

        match form.commit() {
            Ok(rec) => return Ok(EditorOutcome::Committed(rec)),
            Err(e) => writeln!(out, "{}", format_warning(e))?,
        }
    }
}

/// Overwrite `field` with the answer; `false` on end of input.
fn ask_into<R, W>(input: &mut R, out: &mut W, label: &str, field: &mut String) -> AppResult<bool>
where
    R: BufRead,
    W: Write,
{
    match ask(input, out, label, field)? {
        Some(value) => {
            *field = value;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// `None` on end of input.
fn ask<R, W>(input: &mut R, out: &mut W, label: &str, current: &str) -> AppResult<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{} [{}]: ", label, current)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let answer = line.trim();
    if answer.is_empty() {
        Ok(Some(current.to_string()))
    } else {
        Ok(Some(answer.to_string()))
    }
}
