use crate::cli::commands::{open_workspace, persist_workspace, render_table};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::view_mode::ViewMode;
use crate::utils::date::{parse_date, today};

/// Handles all the view navigation commands: `show`, `view`, `next`,
/// `prev` and `today`. Each one mutates the table state, renders it, and
/// persists the session so the view survives into the next invocation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut ws = open_workspace(cfg)?;

    match cmd {
        Commands::Show { view, date } => {
            if let Some(mode_str) = view {
                let mode = ViewMode::from_cli_str(mode_str)
                    .ok_or_else(|| AppError::InvalidViewMode(mode_str.clone()))?;
                ws.core.set_view_mode(mode);
            }
            if let Some(date_str) = date {
                let anchor = parse_date(date_str)
                    .ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;
                ws.core.set_anchor(anchor);
            }
        }
        Commands::View { mode } => {
            let mode = ViewMode::from_cli_str(mode)
                .ok_or_else(|| AppError::InvalidViewMode(mode.clone()))?;
            ws.core.set_view_mode(mode);
        }
        Commands::Next => {
            ws.core.page(true);
        }
        Commands::Prev => {
            ws.core.page(false);
        }
        Commands::Today => {
            ws.core.jump_to_today(today());
        }
        _ => {}
    }

    render_table(&ws.core);
    persist_workspace(&ws)?;
    Ok(())
}
