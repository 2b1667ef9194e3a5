//! Integration tests for the SQLite menu cache.

use ll_core::menu::{Category, Dish, MenuFilter, MenuPredicate, SortSpec};
use ll_core::ports::MenuRepositoryPort;
use ll_infra::{bundled_menu, init_db_pool, DieselMenuRepository};
use tempfile::TempDir;

fn setup_repo() -> (TempDir, DieselMenuRepository) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("menu.db");
    let pool = init_db_pool(db_path.to_str().unwrap()).expect("init db pool");
    (temp_dir, DieselMenuRepository::new(pool))
}

fn dish(title: &str, category: Category) -> Dish {
    Dish {
        title: title.to_string(),
        description: format!("{title} description"),
        price: "9.99".to_string(),
        category,
        image_url: format!("https://example.com/{}.jpg", title.to_lowercase()),
    }
}

#[test]
fn test_fresh_database_is_empty() {
    let (_dir, repo) = setup_repo();

    assert_eq!(repo.count().unwrap(), 0);
    assert!(repo
        .query(&MenuPredicate::all(), &SortSpec::by_title())
        .unwrap()
        .is_empty());
}

#[test]
fn test_insert_all_then_count() {
    let (_dir, repo) = setup_repo();
    let menu = bundled_menu().unwrap();

    let inserted = repo.insert_all(&menu).unwrap();

    assert_eq!(inserted, menu.len());
    assert_eq!(repo.count().unwrap(), menu.len());
}

#[test]
fn test_insert_empty_slice_is_noop() {
    let (_dir, repo) = setup_repo();

    assert_eq!(repo.insert_all(&[]).unwrap(), 0);
    assert_eq!(repo.count().unwrap(), 0);
}

#[test]
fn test_query_round_trips_dish_fields() {
    let (_dir, repo) = setup_repo();
    let original = dish("Moussaka", Category::Mains);
    repo.insert_all(std::slice::from_ref(&original)).unwrap();

    let dishes = repo
        .query(&MenuPredicate::all(), &SortSpec::by_title())
        .unwrap();

    assert_eq!(dishes, vec![original]);
}

#[test]
fn test_disabled_category_is_excluded() {
    let (_dir, repo) = setup_repo();
    repo.insert_all(&bundled_menu().unwrap()).unwrap();

    let mut filter = MenuFilter::default();
    filter.set_enabled(Category::Drinks, false);
    let dishes = repo
        .query(&filter.predicate(), &SortSpec::by_title())
        .unwrap();

    assert!(!dishes.is_empty());
    assert!(dishes.iter().all(|d| d.category != Category::Drinks));
}

#[test]
fn test_every_category_disabled_returns_nothing() {
    let (_dir, repo) = setup_repo();
    repo.insert_all(&bundled_menu().unwrap()).unwrap();

    let mut filter = MenuFilter::default();
    for category in Category::ALL {
        filter.set_enabled(category, false);
    }

    let dishes = repo
        .query(&filter.predicate(), &SortSpec::by_title())
        .unwrap();

    assert!(dishes.is_empty());
}

#[test]
fn test_search_is_case_insensitive_and_sorted() {
    let (_dir, repo) = setup_repo();
    repo.insert_all(&[
        dish("lemon sorbet", Category::Desserts),
        dish("Fresh Lemonade", Category::Drinks),
        dish("Bruschetta", Category::Starters),
        dish("Lemon Chicken", Category::Mains),
    ])
    .unwrap();

    let filter = MenuFilter {
        search_text: "LEMON".to_string(),
        ..Default::default()
    };
    let dishes = repo
        .query(&filter.predicate(), &SortSpec::by_title())
        .unwrap();

    let titles: Vec<_> = dishes.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, ["Fresh Lemonade", "Lemon Chicken", "lemon sorbet"]);
}

#[test]
fn test_search_treats_sql_wildcards_literally() {
    let (_dir, repo) = setup_repo();
    repo.insert_all(&[
        dish("100% Juice", Category::Drinks),
        dish("Juice", Category::Drinks),
    ])
    .unwrap();

    let filter = MenuFilter {
        search_text: "%".to_string(),
        ..Default::default()
    };
    let dishes = repo
        .query(&filter.predicate(), &SortSpec::by_title())
        .unwrap();

    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0].title, "100% Juice");
}

#[test]
fn test_rows_persist_across_pools() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("menu.db");
    let url = db_path.to_str().unwrap();

    {
        let repo = DieselMenuRepository::new(init_db_pool(url).unwrap());
        repo.insert_all(&bundled_menu().unwrap()).unwrap();
    }

    let reopened = DieselMenuRepository::new(init_db_pool(url).unwrap());
    assert_eq!(reopened.count().unwrap(), bundled_menu().unwrap().len());
}

#[test]
fn test_search_ignores_accents_and_sorts_numbers_by_value() {
    let (_dir, repo) = setup_repo();
    repo.insert_all(&[
        dish("Crème Brûlée", Category::Desserts),
        dish("Meze Platter 10", Category::Starters),
        dish("Meze Platter 2", Category::Starters),
        dish("Creme Caramel", Category::Desserts),
    ])
    .unwrap();

    let creme = MenuFilter {
        search_text: "creme".to_string(),
        ..Default::default()
    };
    let titles: Vec<_> = repo
        .query(&creme.predicate(), &SortSpec::by_title())
        .unwrap()
        .into_iter()
        .map(|d| d.title)
        .collect();
    assert_eq!(titles, ["Crème Brûlée", "Creme Caramel"]);

    let meze = MenuFilter {
        search_text: "meze".to_string(),
        ..Default::default()
    };
    let titles: Vec<_> = repo
        .query(&meze.predicate(), &SortSpec::by_title())
        .unwrap()
        .into_iter()
        .map(|d| d.title)
        .collect();
    assert_eq!(titles, ["Meze Platter 2", "Meze Platter 10"]);
}
