pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod init;
pub mod load;
pub mod timer;

use crate::cli::parser::{Cli, TaskFields};
use crate::config::Config;
use crate::core::editor::{EditorOutcome, TaskForm, run_editor};
use crate::core::task_list::{LoadStatus, TaskList};
use crate::errors::{AppError, AppResult};
use crate::models::task::TaskRecord;
use crate::models::task_status::TaskStatus;
use crate::models::task_type::TaskType;
use crate::store::CsvStore;
use crate::ui::messages::info;
use crate::utils::colors::{colour_for_status, colour_for_type};
use crate::utils::date;
use crate::utils::table::{Cell, Column, Table};
use std::io;

/// Resolve the selected date and load its task list.
/// With `notify_missing`, a missing file is reported as a notice.
pub(crate) fn open_list(
    cli: &Cli,
    cfg: &Config,
    notify_missing: bool,
) -> AppResult<TaskList<CsvStore>> {
    let d = date::date_from_parts(cli.year.as_deref(), cli.month.as_deref(), cli.day.as_deref())?;
    let store = CsvStore::new(cfg.data_path(), &cfg.file_extension);

    let (list, status) = TaskList::open(store, d)?;
    if notify_missing && status == LoadStatus::Missing {
        info(format!(
            "No existing data for {}. A new file will be created upon saving.",
            list.session().date_str()
        ));
    }
    Ok(list)
}

/// Apply command-line overrides on top of a seeded form.
pub(crate) fn apply_fields(form: &mut TaskForm, fields: &TaskFields) -> AppResult<()> {
    if let Some(p) = &fields.project {
        form.project_id = p.trim().to_string();
    }
    if let Some(k) = &fields.kind {
        form.kind = TaskType::from_code(k).ok_or_else(|| AppError::InvalidTaskType(k.clone()))?;
    }
    if let Some(t) = &fields.title {
        form.title = t.trim().to_string();
    }
    if let Some(s) = &fields.start {
        form.set_start(s.trim());
    }
    if let Some(e) = &fields.end {
        form.set_end(e.trim());
    }
    if let Some(s) = &fields.status {
        form.status = TaskStatus::from_code(s).ok_or_else(|| AppError::InvalidStatus(s.clone()))?;
    }
    Ok(())
}

/// Commit the form directly, or hand it to the interactive editor.
pub(crate) fn complete_form(form: TaskForm, interactive: bool) -> AppResult<EditorOutcome> {
    if !interactive {
        return Ok(EditorOutcome::Committed(form.commit()?));
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_editor(&mut stdin.lock(), &mut stdout.lock(), form)
}

pub(crate) fn print_tasks(list: &TaskList<CsvStore>) {
    println!("\n=== {} ===", list.session().date_str());

    if list.is_empty() {
        println!("No tasks.");
        return;
    }

    let mut table = Table::new(
        ["#", "ProjectID", "Type", "Title", "Start", "End", "Status"]
            .into_iter()
            .map(Column::new)
            .collect(),
    );

    for (i, rec) in list.records().iter().enumerate() {
        table.add_row(task_row(i + 1, rec));
    }

    print!("{}", table.render());
}

fn task_row(n: usize, rec: &TaskRecord) -> Vec<Cell> {
    vec![
        Cell::from(n.to_string()),
        Cell::from(rec.project_id.as_str()),
        Cell {
            text: rec.kind.to_string(),
            styled: Some(colour_for_type(rec.kind).paint(rec.kind.as_str()).to_string()),
        },
        Cell::from(rec.title.as_str()),
        Cell::from(rec.start.as_str()),
        Cell::from(rec.end.as_str()),
        Cell {
            text: rec.status.to_string(),
            styled: Some(
                colour_for_status(rec.status)
                    .paint(rec.status.as_str())
                    .to_string(),
            ),
        },
    ]
}

/// 1-based index from the command line to a list position.
pub(crate) fn to_position(index: usize, list: &TaskList<CsvStore>) -> AppResult<usize> {
    if index == 0 || index > list.len() {
        return Err(AppError::InvalidIndex {
            index,
            date: list.session().date_str(),
        });
    }
    Ok(index - 1)
}
