//! # Menu View-Model / 菜单视图模型
//!
//! Search text, category toggles, the loaded flag and the selected dish for
//! the menu screen. Every piece of screen state is observable.
//!
//! The first appearance seeds the menu cache; later appearances in the same
//! process skip the seed check.

use std::sync::Arc;

use anyhow::Result;
use ll_core::menu::{Category, Dish, MenuFilter};
use ll_core::ports::MenuRepositoryPort;
use tokio::sync::watch;

use crate::deps::AppDeps;
use crate::observable::Observable;
use crate::usecases::{QueryMenu, SeedMenu, SeedOutcome};

pub struct MenuViewModel {
    seed_menu: SeedMenu,
    query_menu: QueryMenu,
    filter: Observable<MenuFilter>,
    loaded: Observable<bool>,
    selected: Observable<Option<Dish>>,
}

impl MenuViewModel {
    pub fn new(repo: Arc<dyn MenuRepositoryPort>, seed: Arc<[Dish]>) -> Self {
        Self {
            seed_menu: SeedMenu::new(repo.clone(), seed),
            query_menu: QueryMenu::new(repo),
            filter: Observable::default(),
            loaded: Observable::new(false),
            selected: Observable::new(None),
        }
    }

    pub fn from_deps(deps: &AppDeps) -> Self {
        Self::new(deps.menu_repo.clone(), deps.menu_seed.clone())
    }

    /// Seed the cache on first appearance. Returns `None` when this
    /// view-model already did so.
    pub fn on_appear(&self) -> Result<Option<SeedOutcome>> {
        if self.loaded.get() {
            return Ok(None);
        }
        let outcome = self.seed_menu.execute()?;
        self.loaded.set(true);
        Ok(Some(outcome))
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.get()
    }

    pub fn subscribe_loaded(&self) -> watch::Receiver<bool> {
        self.loaded.subscribe()
    }

    pub fn set_search_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.filter.update(|filter| filter.search_text = text);
    }

    pub fn set_category_enabled(&self, category: Category, enabled: bool) {
        self.filter
            .update(|filter| filter.set_enabled(category, enabled));
    }

    pub fn filter(&self) -> MenuFilter {
        self.filter.get()
    }

    pub fn subscribe_filter(&self) -> watch::Receiver<MenuFilter> {
        self.filter.subscribe()
    }

    /// Dishes for the current filter, sorted by title.
    pub fn dishes(&self) -> Result<Vec<Dish>> {
        self.query_menu.execute(&self.filter.get())
    }

    /// Open the detail sheet for `dish`.
    pub fn select_dish(&self, dish: Dish) {
        self.selected.set(Some(dish));
    }

    pub fn selected_dish(&self) -> Option<Dish> {
        self.selected.get()
    }

    pub fn clear_selection(&self) {
        self.selected.set(None);
    }

    pub fn subscribe_selection(&self) -> watch::Receiver<Option<Dish>> {
        self.selected.subscribe()
    }
}
