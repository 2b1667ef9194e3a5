//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic or policies / 禁止任何业务逻辑或策略**
//! ❌ **No validation logic / 禁止验证逻辑**
//!
//! > **This module contains data only, no policy, no validation.**

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite database holding the cached menu
    pub database_path: PathBuf,

    /// JSON file backing the preference store
    pub preferences_path: PathBuf,

    /// Directory for rolling log files (empty disables file logging)
    pub logs_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Missing keys map to empty paths. Empty paths are facts, not errors.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let path_at = |section: &str, key: &str| {
            PathBuf::from(
                toml_value
                    .get(section)
                    .and_then(|s| s.get(key))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            )
        };

        Ok(Self {
            database_path: path_at("storage", "database_path"),
            preferences_path: path_at("storage", "preferences_path"),
            logs_dir: path_at("logging", "logs_dir"),
        })
    }

    /// Create empty AppConfig (all empty values)
    pub fn empty() -> Self {
        Self {
            database_path: PathBuf::new(),
            preferences_path: PathBuf::new(),
            logs_dir: PathBuf::new(),
        }
    }
}
