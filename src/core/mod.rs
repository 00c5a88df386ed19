pub mod editor;
pub mod session;
pub mod stopwatch;
pub mod task_list;
pub mod ticker;
