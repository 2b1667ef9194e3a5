//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Resolve concrete file locations / 解析具体文件路径
//! - ✅ Create infra implementations (preferences file, SQLite menu cache) / 创建 infra 层具体实现
//! - ✅ Group them into `AppDeps` / 将依赖打包为 `AppDeps`
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//! - Seeding the menu and hydrating the profile belong to the view-models

use std::path::Path;
use std::sync::Arc;

use ll_app::{AppDeps, AppPaths};
use ll_core::config::AppConfig;
use ll_core::menu::Dish;
use ll_core::ports::AppDirsPort;
use ll_infra::{bundled_menu, init_db_pool, DbPool, DieselMenuRepository, FilePreferenceStore};

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Application directory resolution failed: {0}")]
    AppDirs(String),

    #[error("Database initialization failed: {0}")]
    DatabaseInit(String),

    #[error("Bundled menu could not be loaded: {0}")]
    MenuSeed(String),
}

/// Fill the configured paths with platform defaults.
/// 使用平台默认值补全配置路径
pub fn resolve_paths(config: &AppConfig, app_dirs: &dyn AppDirsPort) -> WiringResult<AppPaths> {
    let dirs = app_dirs
        .get_app_dirs()
        .map_err(|e| WiringError::AppDirs(e.to_string()))?;
    Ok(AppPaths::resolve(config, &dirs))
}

/// Create SQLite database connection pool
/// 创建 SQLite 数据库连接池
///
/// Creates the parent directory, then opens the pool and runs migrations.
fn create_db_pool(db_path: &Path) -> WiringResult<DbPool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            WiringError::DatabaseInit(format!("Failed to create DB directory: {}", e))
        })?;
    }

    let db_url = db_path
        .to_str()
        .ok_or_else(|| WiringError::DatabaseInit("Invalid database path".to_string()))?;

    init_db_pool(db_url)
        .map_err(|e| WiringError::DatabaseInit(format!("Failed to initialize DB: {:#}", e)))
}

/// Wire all dependencies together
/// 将所有依赖连接在一起
pub fn wire_dependencies(paths: &AppPaths) -> WiringResult<AppDeps> {
    // Step 1: Menu cache / 步骤 1：菜单缓存
    let db_pool = create_db_pool(&paths.db_path)?;
    let menu_seed: Arc<[Dish]> = bundled_menu()
        .map_err(|e| WiringError::MenuSeed(format!("{:#}", e)))?
        .into();

    // Step 2: Preference file / 步骤 2：偏好文件
    let preferences = FilePreferenceStore::new(paths.preferences_path.clone());

    tracing::debug!(
        db = %paths.db_path.display(),
        preferences = %paths.preferences_path.display(),
        "dependencies wired"
    );

    Ok(AppDeps {
        preferences: Arc::new(preferences),
        menu_repo: Arc::new(DieselMenuRepository::new(db_pool)),
        menu_seed,
    })
}
