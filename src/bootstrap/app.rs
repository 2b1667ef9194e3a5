use anyhow::{Context, Result};
use ll_app::{AppPaths, MenuViewModel, ProfileViewModel};
use ll_core::config::AppConfig;
use ll_core::ports::AppDirsPort;
use ll_core::profile::SessionStatus;
use ll_infra::DirsAppDirsAdapter;
use tracing::info;

use super::wiring::{resolve_paths, wire_dependencies};

/// The assembled application: one view-model per screen group.
pub struct LittleLemonApp {
    pub paths: AppPaths,
    pub profile: ProfileViewModel,
    pub menu: MenuViewModel,
}

impl LittleLemonApp {
    /// Resolve paths against the platform data directory and build the app.
    pub fn start(config: &AppConfig) -> Result<Self> {
        Self::start_with_dirs(config, &DirsAppDirsAdapter::new())
    }

    /// Like [`start`](Self::start), with empty config paths resolved under
    /// `app_dirs`.
    pub fn start_with_dirs(config: &AppConfig, app_dirs: &dyn AppDirsPort) -> Result<Self> {
        let paths = resolve_paths(config, app_dirs)?;
        Self::with_paths(paths)
    }

    pub fn with_paths(paths: AppPaths) -> Result<Self> {
        let deps = wire_dependencies(&paths)?;
        let profile = ProfileViewModel::from_deps(&deps).context("Failed to load profile")?;
        let menu = MenuViewModel::from_deps(&deps);

        info!(
            data = %paths.db_path.display(),
            session = ?profile.profile().session_status(),
            "little lemon started"
        );

        Ok(Self {
            paths,
            profile,
            menu,
        })
    }

    /// Onboarding is shown while logged out, home otherwise.
    pub fn session_status(&self) -> Result<SessionStatus> {
        self.profile.session_status()
    }
}
