//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for view-model construction.
//!
//! **Note / 注意**: This is NOT a Builder pattern.
//! - No build steps / 无构建步骤
//! - No default values / 无默认值
//! - Just parameter grouping / 仅用于参数打包

use std::sync::Arc;

use ll_core::menu::Dish;
use ll_core::ports::{MenuRepositoryPort, PreferenceStorePort};

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
pub struct AppDeps {
    // Profile dependencies / 用户资料依赖
    pub preferences: Arc<dyn PreferenceStorePort>,

    // Menu dependencies / 菜单依赖
    pub menu_repo: Arc<dyn MenuRepositoryPort>,
    /// Static list used to seed an empty menu cache.
    pub menu_seed: Arc<[Dish]>,
}
