use crate::cli::commands::{complete_form, open_list, print_tasks};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::editor::{EditorOutcome, TaskForm};
use crate::core::stopwatch::Stopwatch;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::time::format_elapsed;

use std::io::{self, BufRead, Write};

/// Run the stopwatch in the foreground until Enter is pressed, then record
/// an `actual` task spanning the measured interval.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Timer { project, title } = &cli.command {
        // validate the date before starting to time anything
        let mut list = open_list(cli, cfg, false)?;

        let mut stopwatch = Stopwatch::system();
        let started_at = stopwatch.start()?;
        info(format!(
            "Timer started at {}. Press Enter to stop.",
            started_at.format("%H:%M:%S")
        ));

        let ticker = stopwatch.ticker(cfg.timer_refresh(), |elapsed| {
            let mut out = io::stdout();
            let _ = write!(out, "\r⏱  {}", format_elapsed(elapsed));
            let _ = out.flush();
        })?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        ticker.stop()?;
        println!();

        let candidate = stopwatch.stop()?;
        info(format!("Elapsed interval: {} - {}", candidate.start, candidate.end));

        let mut form = TaskForm::from_record(&candidate);
        if let Some(p) = project {
            form.project_id = p.trim().to_string();
        }
        if let Some(t) = title {
            form.title = t.trim().to_string();
        }

        match complete_form(form, project.is_none() || title.is_none())? {
            EditorOutcome::Committed(rec) => {
                list.add(rec)?;
                success(format!("Actual task recorded for {}", list.session().date_str()));
                print_tasks(&list);
            }
            EditorOutcome::Cancelled => info("Operation cancelled."),
        }
    }

    Ok(())
}
