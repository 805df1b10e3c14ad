use crate::cli::parser::{Commands, ProjectAction};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::project::Project;
use crate::store::projects;
use crate::ui::messages;
use crate::utils::date::{parse_date, today};
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};
use std::fs;

/// Handles `project add` and `project list`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Project { action } = cmd else {
        return Ok(());
    };

    let path = expand_tilde(&cfg.projects_file);

    match action {
        ProjectAction::Add {
            id,
            name,
            description,
            start_date,
        } => {
            let start = match start_date {
                Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
                None => today(),
            };

            let mut list = projects::load_projects(&path)?;
            projects::add_project(
                &mut list,
                Project::new(id, name, description.clone().unwrap_or_default(), start),
            )?;

            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            projects::save_projects(&list, &path)?;
            messages::success(format!("Project '{}' registered", id));
            Ok(())
        }
        ProjectAction::List => {
            let list = projects::load_projects(&path)?;
            if list.is_empty() {
                println!("No projects registered.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("Id", 4),
                Column::new("Name", 8),
                Column::new("Start", 10),
                Column::new("Description", 11),
            ])
            .wrap_column(3, 48);

            for p in &list {
                table.add_row(vec![
                    p.id.clone(),
                    p.name.clone(),
                    p.start_date.to_string(),
                    p.description.clone(),
                ]);
            }

            print!("{}", table.render());
            Ok(())
        }
    }
}
