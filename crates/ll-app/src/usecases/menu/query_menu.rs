use std::sync::Arc;

use anyhow::{Context, Result};
use ll_core::menu::{Dish, MenuFilter, SortSpec};
use ll_core::ports::MenuRepositoryPort;
use tracing::{debug, debug_span};

/// Lists cached dishes matching the current search text and category
/// toggles, sorted by title.
pub struct QueryMenu {
    repo: Arc<dyn MenuRepositoryPort>,
}

impl QueryMenu {
    pub fn new(repo: Arc<dyn MenuRepositoryPort>) -> Self {
        Self { repo }
    }

    pub fn execute(&self, filter: &MenuFilter) -> Result<Vec<Dish>> {
        let _span = debug_span!("usecase.query_menu.execute").entered();

        let predicate = filter.predicate();
        let dishes = self
            .repo
            .query(&predicate, &SortSpec::by_title())
            .context("query menu cache")?;

        debug!(
            search = %filter.search_text,
            excluded = predicate.excluded_categories.len(),
            results = dishes.len(),
            "menu queried"
        );
        Ok(dishes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ll_core::menu::Category;
    use ll_infra::{bundled_menu, InMemoryMenuRepository};

    fn seeded_repo() -> Arc<InMemoryMenuRepository> {
        let repo = Arc::new(InMemoryMenuRepository::new());
        repo.insert_all(&bundled_menu().unwrap()).unwrap();
        repo
    }

    #[test]
    fn test_default_filter_returns_everything_sorted() {
        let repo = seeded_repo();

        let dishes = QueryMenu::new(repo.clone())
            .execute(&MenuFilter::default())
            .unwrap();

        assert_eq!(dishes.len(), repo.count().unwrap());
        let titles: Vec<_> = dishes.iter().map(|d| d.title.to_lowercase()).collect();
        let mut sorted = titles.clone();
        sorted.sort();
        assert_eq!(titles, sorted);
    }

    #[test]
    fn test_drinks_off_hides_drinks() {
        let mut filter = MenuFilter::default();
        filter.set_enabled(Category::Drinks, false);

        let dishes = QueryMenu::new(seeded_repo()).execute(&filter).unwrap();

        assert!(!dishes.is_empty());
        assert!(dishes.iter().all(|d| d.category != Category::Drinks));
    }

    #[test]
    fn test_search_and_toggle_combine() {
        let mut filter = MenuFilter {
            search_text: "lemon".into(),
            ..Default::default()
        };
        filter.set_enabled(Category::Drinks, false);

        let dishes = QueryMenu::new(seeded_repo()).execute(&filter).unwrap();

        let titles: Vec<_> = dishes.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, ["Lemon Dessert"]);
    }
}
