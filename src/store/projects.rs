//! Persistence for project records: a plain JSON array in its own file.

use crate::errors::{AppError, AppResult};
use crate::models::project::Project;
use std::fs;
use std::path::Path;

pub fn load_projects(path: &Path) -> AppResult<Vec<Project>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_projects(projects: &[Project], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(projects)?;
    fs::write(path, json)?;
    Ok(())
}

/// Append a project, rejecting duplicate ids.
pub fn add_project(projects: &mut Vec<Project>, project: Project) -> AppResult<()> {
    if projects.iter().any(|p| p.id == project.id) {
        return Err(AppError::Project(format!(
            "A project with id '{}' already exists",
            project.id
        )));
    }
    projects.push(project);
    Ok(())
}
