use crate::cli::commands::{apply_fields, complete_form, open_list, print_tasks, to_position};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::editor::{EditorOutcome, TaskForm};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Edit a task of the selected date.
///
/// With any field given on the command line the record is committed
/// directly; otherwise the interactive editor is seeded with the row.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { index, fields } = &cli.command {
        let mut list = open_list(cli, cfg, false)?;
        let pos = to_position(*index, &list)?;

        let mut form = TaskForm::from_record(list.get(pos)?);
        apply_fields(&mut form, fields)?;

        match complete_form(form, fields.is_empty())? {
            EditorOutcome::Committed(rec) => {
                list.update(pos, rec)?;
                success(format!("Task #{} for {} has been updated.", index, list.session().date_str()));
                print_tasks(&list);
            }
            EditorOutcome::Cancelled => info("Operation cancelled."),
        }
    }

    Ok(())
}
