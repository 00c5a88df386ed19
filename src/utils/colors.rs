//! Colour helpers for task table cells.

use crate::models::task_status::TaskStatus;
use crate::models::task_type::TaskType;
use ansi_term::Colour;

pub fn colour_for_status(status: TaskStatus) -> Colour {
    match status {
        TaskStatus::Done => Colour::Green,
        TaskStatus::Active => Colour::Blue,
        TaskStatus::Crit => Colour::Red,
        TaskStatus::Milestone => Colour::Purple,
    }
}

pub fn colour_for_type(kind: TaskType) -> Colour {
    match kind {
        TaskType::Planned => Colour::Cyan,
        TaskType::Actual => Colour::Yellow,
    }
}
