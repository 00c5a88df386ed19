use crate::cli::commands::{open_list, print_tasks};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Load { json } = &cli.command {
        let list = open_list(cli, cfg, true)?;

        if *json {
            let out = serde_json::to_string_pretty(list.records())
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
        } else {
            print_tasks(&list);
        }
    }

    Ok(())
}
