use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::session::SessionSettings;
use crate::store::{json, seed};
use crate::ui::messages;
use crate::utils::date::today;
use crate::utils::path::expand_tilde;
use std::fs;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - a seeded record store (when none exists yet)
///  - a default session file
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    let store_path = expand_tilde(&cfg.database);
    let session_path = expand_tilde(cli.session.as_ref().unwrap_or(&cfg.session_file));

    for path in [&store_path, &session_path] {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
    }

    if store_path.exists() {
        messages::info(format!(
            "Record store already present at {}",
            store_path.display()
        ));
    } else {
        let store = seed::seed_store(today());
        json::save_as_json(&store, &store_path)?;
        messages::success(format!(
            "Record store created with sample data at {}",
            store_path.display()
        ));
    }

    if !session_path.exists() {
        SessionSettings::default().save(&session_path)?;
        messages::success(format!("Session file created at {}", session_path.display()));
    }

    messages::success("trep initialization completed");
    Ok(())
}
