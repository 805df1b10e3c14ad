use crate::cli::commands::{open_workspace, persist_workspace, render_day_line};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::rows;
use crate::core::table::FieldEdit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::date::{parse_date, today};
use crate::utils::time::parse_required_time;
use std::io::{self, Write, stdin};

/// Handles `edit` and `del`: field-level changes on one day's record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Edit {
            date,
            came,
            went,
            note,
        } => {
            let date =
                parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

            if came.is_none() && went.is_none() && note.is_none() {
                messages::warning("Nothing to edit: provide at least one of --in/--out/--note");
                return Ok(());
            }

            let mut ws = open_workspace(cfg)?;

            if let Some(t) = came {
                let t = parse_required_time(t)?;
                ws.core.edit_field(date, FieldEdit::Came(t));
                messages::success(format!("Came time {} registered for {}", t, date));
            }
            if let Some(t) = went {
                let t = parse_required_time(t)?;
                ws.core.edit_field(date, FieldEdit::Went(t));
                messages::success(format!("Went time {} registered for {}", t, date));
            }
            if let Some(text) = note {
                ws.core.edit_field(date, FieldEdit::Note(text.clone()));
                messages::success(format!("Note updated for {}", date));
            }

            println!();
            render_day_line(&rows::project(date, ws.core.store().get(date), today()));

            persist_workspace(&ws)?;
            Ok(())
        }
        Commands::Del { date } => {
            let date =
                parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

            let mut ws = open_workspace(cfg)?;

            if ws.core.store().get(date).is_none() {
                messages::warning(format!("No record found for date {}", date));
                return Ok(());
            }

            print!("Are you sure to delete the record of the date {} (N/y) ? ", date);
            let _ = io::stdout().flush();
            let mut input = String::new();
            stdin().read_line(&mut input).unwrap_or(0);
            if input.trim().to_lowercase() != "y" {
                println!("Aborted. No record deleted.");
                return Ok(());
            }

            ws.core.remove_entry(date);
            messages::success(format!("Record deleted for {}", date));

            persist_workspace(&ws)?;
            Ok(())
        }
        _ => Ok(()),
    }
}
