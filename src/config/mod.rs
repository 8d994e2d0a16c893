use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_export_file")]
    pub export_file: String,
    #[serde(default = "default_export_format")]
    pub export_format: String,
    #[serde(default = "default_admin_user")]
    pub admin_user: String,
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
}

fn default_export_file() -> String {
    Config::config_dir()
        .join("inspections.xlsx")
        .to_string_lossy()
        .to_string()
}

fn default_export_format() -> String {
    "xlsx".to_string()
}

// The original deployment shipped a fixed admin/conver pair; keeping it as
// the default while allowing the config file to override it.
fn default_admin_user() -> String {
    "admin".to_string()
}

fn default_admin_password() -> String {
    "conver".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            export_file: default_export_file(),
            export_format: default_export_format(),
            admin_user: default_admin_user(),
            admin_password: default_admin_password(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".inspectlog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("inspectlog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("inspectlog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("failed to parse {}: {e}", path.display())))
        } else {
            Ok(Self::default())
        }
    }

    /// Initialize the configuration directory and file.
    ///
    /// In test mode the config file is left alone so test runs never touch
    /// the user's real configuration.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        if !is_test {
            fs::create_dir_all(&dir)?;
        }

        // DB path: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = PathBuf::from(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Self::default()
        };

        if !is_test {
            config.save()?;
        }

        Ok(config)
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_the_original_credential_pair() {
        let cfg = Config::default();
        assert_eq!(cfg.admin_user, "admin");
        assert_eq!(cfg.admin_password, "conver");
        assert_eq!(cfg.export_format, "xlsx");
    }

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/insp.sqlite\n").unwrap();
        assert_eq!(cfg.database, "/tmp/insp.sqlite");
        assert_eq!(cfg.admin_user, "admin");
        assert!(cfg.export_file.ends_with("inspections.xlsx"));
    }
}
