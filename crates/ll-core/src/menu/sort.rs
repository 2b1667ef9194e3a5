use std::cmp::Ordering;

use super::text::{fold, natural_cmp};
use super::Dish;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
}

/// Ordering requested from a menu repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub ascending: bool,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::by_title()
    }
}

impl SortSpec {
    /// Title, ascending. The order the menu list uses.
    pub fn by_title() -> Self {
        Self {
            field: SortField::Title,
            ascending: true,
        }
    }

    /// Ignores case and accents, orders digit runs by value, and breaks
    /// ties on the raw text.
    pub fn compare(&self, a: &Dish, b: &Dish) -> Ordering {
        let ordering = match self.field {
            SortField::Title => natural_cmp(&fold(&a.title), &fold(&b.title))
                .then_with(|| a.title.cmp(&b.title)),
        };
        if self.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    }

    pub fn sort(&self, dishes: &mut [Dish]) {
        dishes.sort_by(|a, b| self.compare(a, b));
    }
}
