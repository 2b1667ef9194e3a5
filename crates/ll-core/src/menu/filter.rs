use super::text::fold;
use super::{Category, Dish};

/// Search text and category toggles as shown on the menu screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuFilter {
    pub search_text: String,
    pub starters: bool,
    pub mains: bool,
    pub desserts: bool,
    pub drinks: bool,
}

impl Default for MenuFilter {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            starters: true,
            mains: true,
            desserts: true,
            drinks: true,
        }
    }
}

impl MenuFilter {
    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Starters => self.starters,
            Category::Mains => self.mains,
            Category::Desserts => self.desserts,
            Category::Drinks => self.drinks,
        }
    }

    pub fn set_enabled(&mut self, category: Category, enabled: bool) {
        let slot = match category {
            Category::Starters => &mut self.starters,
            Category::Mains => &mut self.mains,
            Category::Desserts => &mut self.desserts,
            Category::Drinks => &mut self.drinks,
        };
        *slot = enabled;
    }

    /// AND of the title search and one `category != X` per disabled toggle.
    pub fn predicate(&self) -> MenuPredicate {
        MenuPredicate {
            title_contains: (!self.search_text.is_empty()).then(|| self.search_text.clone()),
            excluded_categories: Category::ALL
                .into_iter()
                .filter(|c| !self.is_enabled(*c))
                .collect(),
        }
    }
}

/// Filter handed to a menu repository.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuPredicate {
    /// Substring of the title, ignoring case and accents. `None` matches
    /// every title.
    pub title_contains: Option<String>,
    pub excluded_categories: Vec<Category>,
}

impl MenuPredicate {
    /// Matches everything.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn title_matches(&self, title: &str) -> bool {
        match &self.title_contains {
            None => true,
            Some(needle) => fold(title).contains(&fold(needle)),
        }
    }

    pub fn category_matches(&self, category: Category) -> bool {
        !self.excluded_categories.contains(&category)
    }

    pub fn matches(&self, dish: &Dish) -> bool {
        self.title_matches(&dish.title) && self.category_matches(dish.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(title: &str, category: Category) -> Dish {
        Dish {
            title: title.to_string(),
            description: String::new(),
            price: "1.00".to_string(),
            category,
            image_url: String::new(),
        }
    }

    #[test]
    fn default_filter_matches_everything() {
        let predicate = MenuFilter::default().predicate();

        assert_eq!(predicate, MenuPredicate::all());
        for category in Category::ALL {
            assert!(predicate.matches(&dish("Anything", category)));
        }
    }

    #[test]
    fn disabled_toggle_excludes_only_that_category() {
        let mut filter = MenuFilter::default();
        filter.set_enabled(Category::Drinks, false);
        let predicate = filter.predicate();

        assert_eq!(predicate.excluded_categories, vec![Category::Drinks]);
        assert!(!predicate.matches(&dish("Lemonade", Category::Drinks)));
        assert!(predicate.matches(&dish("Greek Salad", Category::Starters)));
        assert!(predicate.matches(&dish("Lemon Dessert", Category::Desserts)));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let filter = MenuFilter {
            search_text: "LEMON".to_string(),
            ..Default::default()
        };
        let predicate = filter.predicate();

        assert!(predicate.matches(&dish("Lemon Dessert", Category::Desserts)));
        assert!(predicate.matches(&dish("Fresh lemonade", Category::Drinks)));
        assert!(!predicate.matches(&dish("Bruschetta", Category::Starters)));
    }

    #[test]
    fn search_ignores_accents_on_both_sides() {
        let creme = dish("Crème Brûlée", Category::Desserts);

        for needle in ["creme", "CRÈME", "brulee", "Brûl"] {
            let filter = MenuFilter {
                search_text: needle.to_string(),
                ..Default::default()
            };
            assert!(filter.predicate().matches(&creme), "{needle}");
        }

        let filter = MenuFilter {
            search_text: "crème".to_string(),
            ..Default::default()
        };
        assert!(filter.predicate().matches(&dish("Creme Caramel", Category::Desserts)));
        assert!(!filter.predicate().matches(&dish("Cream Puff", Category::Desserts)));
    }

    #[test]
    fn search_and_toggles_combine_with_and() {
        let mut filter = MenuFilter {
            search_text: "lemon".to_string(),
            ..Default::default()
        };
        filter.set_enabled(Category::Desserts, false);
        let predicate = filter.predicate();

        assert!(!predicate.matches(&dish("Lemon Dessert", Category::Desserts)));
        assert!(predicate.matches(&dish("Fresh lemonade", Category::Drinks)));
    }
}
