use super::{task_status::TaskStatus, task_type::TaskType};
use serde::{Deserialize, Serialize};

/// One row of work for a given day.
///
/// `start` and `end` are kept as `HH:MM` strings: records are ordered by
/// plain string comparison, which matches chronological order within a day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskRecord {
    pub project_id: String,
    #[serde(rename = "type")]
    pub kind: TaskType,
    pub title: String,
    pub start: String,
    pub end: String,
    pub status: TaskStatus,
}

impl TaskRecord {
    pub fn new(
        project_id: impl Into<String>,
        kind: TaskType,
        title: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        status: TaskStatus,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            kind,
            title: title.into(),
            start: start.into(),
            end: end.into(),
            status,
        }
    }
}
