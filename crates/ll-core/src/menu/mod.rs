//! Menu domain models
//!
//! Dishes are owned by the menu repository. This module only describes them
//! and the filter/sort a menu screen asks the repository for.

mod dish;
mod filter;
mod sort;
mod text;

pub use dish::{Category, Dish, UnknownCategory};
pub use filter::{MenuFilter, MenuPredicate};
pub use sort::{SortField, SortSpec};
pub use text::{fold, natural_cmp};
