use crate::ui::messages;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_session_file")]
    pub session_file: String,
    #[serde(default = "default_projects_file")]
    pub projects_file: String,
}

fn default_session_file() -> String {
    Config::config_dir()
        .join("trep.session.json")
        .to_string_lossy()
        .to_string()
}

fn default_projects_file() -> String {
    Config::config_dir()
        .join("trep.projects.json")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            session_file: default_session_file(),
            projects_file: default_projects_file(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("trep")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".trep")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("trep.conf")
    }

    /// Return the full path of the default record store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("trep.db.json")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A malformed config file degrades to defaults with a warning rather
    /// than aborting the whole command.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match serde_yaml::from_str(&content) {
                    Ok(cfg) => cfg,
                    Err(e) => {
                        messages::warning(format!(
                            "Failed to parse configuration file {}: {}. Using defaults.",
                            path.display(),
                            e
                        ));
                        Config::default()
                    }
                },
                Err(e) => {
                    messages::warning(format!(
                        "Failed to read configuration file {}: {}. Using defaults.",
                        path.display(),
                        e
                    ));
                    Config::default()
                }
            }
        } else {
            Config::default()
        }
    }

    /// Write the current configuration back to disk.
    pub fn save(&self) -> io::Result<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())
    }

    /// Initialize the configuration directory and file.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Store path: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            session_file: default_session_file(),
            projects_file: default_projects_file(),
        };

        if !is_test {
            config.save()?;
            messages::success(format!("Config file: {:?}", Self::config_file()));
        }

        Ok(config)
    }
}
