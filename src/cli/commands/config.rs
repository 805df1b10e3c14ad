use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::session::SessionSettings;
use crate::ui::messages;
use crate::utils::format_time;
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_required_time;

/// Handles the `config` command: print the current configuration and
/// session, and adjust the lunch interval.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        lunch_from,
        lunch_to,
    } = cmd
    {
        let session_path = expand_tilde(&cfg.session_file);
        let mut settings = SessionSettings::load(&session_path)?;
        let mut changed = false;

        // Setting one lunch endpoint drags the other along, like the
        // settings dialog: the interval never inverts.
        if let Some(s) = lunch_from {
            let t = parse_required_time(s)?;
            settings.set_lunch_from(t);
            changed = true;
        }
        if let Some(s) = lunch_to {
            let t = parse_required_time(s)?;
            settings.set_lunch_to(t);
            changed = true;
        }

        if changed {
            settings.save(&session_path)?;
            let (from, to) = settings.lunch_interval;
            let minutes = (to - from).num_minutes();
            messages::success(format!(
                "Lunch interval set to {} - {} ({} min)",
                format_time(from),
                format_time(to),
                minutes
            ));
        }

        if *print_config || !changed {
            println!("📄 Current configuration:");
            println!("{}", serde_yaml::to_string(cfg).unwrap_or_default());
            println!("📄 Current session:");
            println!("  view mode  : {}", settings.view_mode.as_cli_str());
            println!("  view date  : {}", settings.view_date);
            println!(
                "  window     : {}x{}",
                settings.window_size.0, settings.window_size.1
            );
            println!(
                "  lunch      : {} - {}",
                format_time(settings.lunch_interval.0),
                format_time(settings.lunch_interval.1)
            );
            if settings.recent_files.is_empty() {
                println!("  recent     : (none)");
            } else {
                for f in &settings.recent_files {
                    println!("  recent     : {}", f.display());
                }
            }
        }
    }
    Ok(())
}
