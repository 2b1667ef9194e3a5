//! Menu screen against the SQLite cache.

use std::sync::Arc;

use ll_app::usecases::SeedOutcome;
use ll_app::{AppDeps, MenuViewModel};
use ll_core::menu::{Category, Dish};
use ll_infra::{bundled_menu, init_db_pool, DieselMenuRepository, InMemoryPreferenceStore};
use tempfile::TempDir;

fn deps(dir: &TempDir) -> AppDeps {
    let db_path = dir.path().join("little-lemon.db");
    let pool = init_db_pool(db_path.to_str().unwrap()).unwrap();
    let seed: Arc<[Dish]> = bundled_menu().unwrap().into();
    AppDeps {
        preferences: Arc::new(InMemoryPreferenceStore::new()),
        menu_repo: Arc::new(DieselMenuRepository::new(pool)),
        menu_seed: seed,
    }
}

#[test]
fn seeds_once_per_database() {
    let dir = TempDir::new().unwrap();
    let seed_len = bundled_menu().unwrap().len();

    let first = MenuViewModel::from_deps(&deps(&dir));
    assert_eq!(
        first.on_appear().unwrap(),
        Some(SeedOutcome::Seeded(seed_len))
    );

    // A new process sees the populated cache
    let second = MenuViewModel::from_deps(&deps(&dir));
    assert_eq!(
        second.on_appear().unwrap(),
        Some(SeedOutcome::AlreadyPopulated(seed_len))
    );
    assert_eq!(second.dishes().unwrap().len(), seed_len);
}

#[test]
fn drinks_toggle_and_search() {
    let dir = TempDir::new().unwrap();
    let vm = MenuViewModel::from_deps(&deps(&dir));
    vm.on_appear().unwrap();

    vm.set_category_enabled(Category::Drinks, false);
    let dishes = vm.dishes().unwrap();
    assert!(dishes.iter().all(|d| d.category != Category::Drinks));

    vm.set_category_enabled(Category::Drinks, true);
    vm.set_search_text("lemon");
    let titles: Vec<_> = vm
        .dishes()
        .unwrap()
        .into_iter()
        .map(|d| d.title)
        .collect();
    assert_eq!(titles, ["Fresh Lemonade", "Lemon Dessert"]);
}
