use crate::cli::commands::{open_workspace, persist_workspace, render_day_line};
use crate::config::Config;
use crate::core::rows;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::date::today;

/// Handle the `punch` command: widen today's came/went window to the
/// current moment. Punching repeatedly never narrows the window.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut ws = open_workspace(cfg)?;

    let now = chrono::Local::now().naive_local();
    ws.core.punch(now);

    messages::success(format!("Presence recorded at {}", now.format("%H:%M:%S")));
    render_day_line(&rows::project(
        now.date(),
        ws.core.store().get(now.date()),
        today(),
    ));

    persist_workspace(&ws)?;
    Ok(())
}
