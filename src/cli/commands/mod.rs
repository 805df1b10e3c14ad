pub mod config;
pub mod edit;
pub mod file;
pub mod init;
pub mod project;
pub mod punch;
pub mod show;

use crate::config::Config;
use crate::core::table::TableCore;
use crate::errors::AppResult;
use crate::models::row::DayRow;
use crate::session::SessionSettings;
use crate::store::{json, seed};
use crate::ui::messages;
use crate::utils::colors::paint_for_class;
use crate::utils::date::today;
use crate::utils::formatting::{MISSING_TIME, bold};
use crate::utils::table::{Column, Table};
use crate::utils::{format_signed_duration, format_time};
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::PathBuf;

const NOTE_WRAP_WIDTH: usize = 40;

/// Everything a command needs: the table core plus the resolved file
/// paths to persist it back to.
pub struct Workspace {
    pub store_path: PathBuf,
    pub session_path: PathBuf,
    pub core: TableCore,
}

/// Load session and store from the configured paths and build the table.
/// A missing store file yields a seeded store; an unreadable session file
/// degrades to defaults with a warning, only the store fails hard.
pub fn open_workspace(cfg: &Config) -> AppResult<Workspace> {
    let store_path = expand_tilde(&cfg.database);
    let session_path = expand_tilde(&cfg.session_file);

    let settings = match SessionSettings::load(&session_path) {
        Ok(s) => s,
        Err(e) => {
            messages::warning(format!(
                "Could not read session file {}: {}. Using defaults.",
                session_path.display(),
                e
            ));
            SessionSettings::default()
        }
    };

    let store = if store_path.exists() {
        json::load_from_json(&store_path)?
    } else {
        messages::info(format!(
            "Record store {} does not exist yet. Starting with sample data.",
            store_path.display()
        ));
        seed::seed_store(today())
    };

    Ok(Workspace {
        store_path,
        session_path,
        core: TableCore::new(store, settings),
    })
}

/// Persist store and session. The CLI process end is the app's clean
/// shutdown, so every command writes both back before exiting.
pub fn persist_workspace(ws: &Workspace) -> AppResult<()> {
    for path in [&ws.store_path, &ws.session_path] {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
    }
    json::save_as_json(ws.core.store(), &ws.store_path)?;
    ws.core.settings().save(&ws.session_path)?;
    Ok(())
}

fn row_cells(row: &DayRow) -> Vec<String> {
    let cells = [
        row.date.format("%Y-%m-%d").to_string(),
        row.iso_week.to_string(),
        row.weekday.clone(),
        row.came.map(format_time).unwrap_or_else(|| MISSING_TIME.to_string()),
        row.went.map(format_time).unwrap_or_else(|| MISSING_TIME.to_string()),
        row.total.map(format_signed_duration).unwrap_or_default(),
        row.note.clone(),
    ];
    cells
        .into_iter()
        .map(|c| paint_for_class(row.class, &c))
        .collect()
}

/// Render the current view: period label header plus one line per date.
pub fn render_table(core: &TableCore) {
    println!("{}", bold(&core.period_label()));
    println!();

    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Week", 4),
        Column::new("Weekday", 9),
        Column::new("Came", 8),
        Column::new("Went", 8),
        Column::new("Total", 7),
        Column::new("Note", 4),
    ])
    .wrap_column(6, NOTE_WRAP_WIDTH);

    for row in core.rows() {
        table.add_row(row_cells(row));
    }

    print!("{}", table.render());
}

/// One-line summary of a single day, used after punch/edit.
pub fn render_day_line(row: &DayRow) {
    let total = row
        .total
        .map(format_signed_duration)
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{} ({}) | Came {} | Went {} | Total {} | {}",
        row.date,
        row.weekday,
        row.came.map(format_time).unwrap_or_else(|| MISSING_TIME.to_string()),
        row.went.map(format_time).unwrap_or_else(|| MISSING_TIME.to_string()),
        total,
        row.note,
    );
}
