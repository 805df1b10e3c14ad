use crate::cli::commands::{open_workspace, persist_workspace};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::session::SessionSettings;
use crate::store::json;
use crate::ui::messages;
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Handles `open` and `save`: switching and persisting the record store
/// file. Both update the recent-files list in the session.
pub fn handle(cmd: &Commands, cfg: &Config, is_test: bool) -> AppResult<()> {
    match cmd {
        Commands::Open { file } => {
            let path = absolute(&expand_tilde(file));

            // Validating load first: on failure the previous store file
            // stays configured and in use.
            let store = json::load_from_json(&path)?;

            let session_path = expand_tilde(&cfg.session_file);
            let mut settings = SessionSettings::load(&session_path).unwrap_or_default();
            settings.push_recent_file(path.clone());
            settings.save(&session_path)?;

            if !is_test {
                let mut new_cfg = cfg.clone();
                new_cfg.database = path.to_string_lossy().to_string();
                new_cfg.save()?;
            }

            messages::success(format!(
                "Opened record store {} ({} recorded days)",
                path.display(),
                store.len()
            ));
            Ok(())
        }
        Commands::Save { file } => {
            let mut ws = open_workspace(cfg)?;

            match file {
                Some(f) => {
                    let path = absolute(&expand_tilde(f));
                    if let Some(parent) = path.parent()
                        && !parent.as_os_str().is_empty()
                    {
                        fs::create_dir_all(parent)?;
                    }
                    json::save_as_json(ws.core.store(), &path)?;
                    ws.core.settings_mut().push_recent_file(path.clone());
                    ws.core.settings().save(&ws.session_path)?;

                    if !is_test {
                        let mut new_cfg = cfg.clone();
                        new_cfg.database = path.to_string_lossy().to_string();
                        new_cfg.save()?;
                    }

                    messages::success(format!("Record store saved as {}", path.display()));
                }
                None => {
                    persist_workspace(&ws)?;
                    messages::success(format!(
                        "Record store saved to {}",
                        ws.store_path.display()
                    ));
                }
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
