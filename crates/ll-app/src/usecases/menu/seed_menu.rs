use std::sync::Arc;

use anyhow::{Context, Result};
use ll_core::menu::Dish;
use ll_core::ports::MenuRepositoryPort;
use tracing::{debug, info, info_span};

/// Result of a seed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty and this many dishes were inserted.
    Seeded(usize),
    /// The store already held this many dishes; nothing was written.
    AlreadyPopulated(usize),
}

/// Populates the menu cache from the bundled list when it holds no dishes.
pub struct SeedMenu {
    repo: Arc<dyn MenuRepositoryPort>,
    seed: Arc<[Dish]>,
}

impl SeedMenu {
    pub fn new(repo: Arc<dyn MenuRepositoryPort>, seed: Arc<[Dish]>) -> Self {
        Self { repo, seed }
    }

    pub fn execute(&self) -> Result<SeedOutcome> {
        let _span = info_span!("usecase.seed_menu.execute").entered();

        let existing = self.repo.count().context("count cached dishes")?;
        if existing > 0 {
            debug!(existing, "menu cache already populated");
            return Ok(SeedOutcome::AlreadyPopulated(existing));
        }

        let inserted = self
            .repo
            .insert_all(&self.seed)
            .context("insert bundled menu")?;

        info!(inserted, "menu cache seeded");
        Ok(SeedOutcome::Seeded(inserted))
    }
}
