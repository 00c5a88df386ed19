pub mod daily_log;
pub mod task;
pub mod task_status;
pub mod task_type;
