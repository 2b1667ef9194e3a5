use std::path::PathBuf;

/// Platform data root for the application. Pure fact container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}
