use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Done,
    #[default]
    Active,
    Crit,
    Milestone,
}

impl TaskStatus {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "done" => Some(Self::Done),
            "active" => Some(Self::Active),
            "crit" => Some(Self::Crit),
            "milestone" => Some(Self::Milestone),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Done => "done",
            TaskStatus::Active => "active",
            TaskStatus::Crit => "crit",
            TaskStatus::Milestone => "milestone",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
