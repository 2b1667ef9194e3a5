use std::path::{Path, PathBuf};

use ll_core::app_dirs::AppDirs;
use ll_core::config::AppConfig;

/// Concrete file locations used by the adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub db_path: PathBuf,
    pub preferences_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            db_path: dirs.app_data_root.join("little-lemon.db"),
            preferences_path: dirs.app_data_root.join("preferences.json"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }

    /// Paths from `config`, falling back to the platform default for every
    /// entry the config leaves empty.
    pub fn resolve(config: &AppConfig, dirs: &AppDirs) -> Self {
        let defaults = Self::from_app_dirs(dirs);
        Self {
            db_path: or_default(&config.database_path, defaults.db_path),
            preferences_path: or_default(&config.preferences_path, defaults.preferences_path),
            logs_dir: or_default(&config.logs_dir, defaults.logs_dir),
        }
    }
}

fn or_default(configured: &Path, default: PathBuf) -> PathBuf {
    if configured.as_os_str().is_empty() {
        default
    } else {
        configured.to_path_buf()
    }
}
