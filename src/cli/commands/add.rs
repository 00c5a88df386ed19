use crate::cli::commands::{apply_fields, complete_form, open_list, print_tasks};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::editor::{EditorOutcome, TaskForm};
use crate::errors::AppResult;
use crate::models::task_type::TaskType;
use crate::ui::messages::{info, success};

/// Add a task to the selected date.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { fields } = &cli.command {
        //
        // 1. Load the existing file for the date first
        //
        let mut list = open_list(cli, cfg, false)?;

        //
        // 2. Seed the form (planned) and apply command-line values
        //
        let mut form = TaskForm::new(TaskType::Planned, cfg.default_status);
        apply_fields(&mut form, fields)?;

        let interactive = fields.project.is_none()
            || fields.title.is_none()
            || fields.start.is_none()
            || fields.end.is_none();

        //
        // 3. Commit and persist
        //
        match complete_form(form, interactive)? {
            EditorOutcome::Committed(rec) => {
                let summary = format!("{} {}-{} {}", rec.project_id, rec.start, rec.end, rec.title);
                list.add(rec)?;
                success(format!("Task added for {}: {}", list.session().date_str(), summary));
                print_tasks(&list);
            }
            EditorOutcome::Cancelled => info("Operation cancelled."),
        }
    }

    Ok(())
}
