use crate::cli::commands::{open_list, print_tasks, to_position};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { index, force } = &cli.command {
        let mut list = open_list(cli, cfg, false)?;
        let pos = to_position(*index, &list)?;

        let rec = list.get(pos)?;
        let prompt = format!(
            "Delete task #{} ({} {}-{} {}) for {}?",
            index,
            rec.project_id,
            rec.start,
            rec.end,
            rec.title,
            list.session().date_str()
        );

        if !*force && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        list.delete(pos)?;
        success(format!("Task #{} for {} has been deleted.", index, list.session().date_str()));
        print_tasks(&list);
    }

    Ok(())
}
