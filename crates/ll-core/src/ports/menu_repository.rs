use crate::menu::{Dish, MenuPredicate, SortSpec};
use crate::ports::errors::MenuRepositoryError;

/// Local queryable collection of dishes.
pub trait MenuRepositoryPort: Send + Sync {
    /// Number of stored dishes.
    fn count(&self) -> Result<usize, MenuRepositoryError>;

    /// Insert dishes, returning how many rows were written.
    fn insert_all(&self, dishes: &[Dish]) -> Result<usize, MenuRepositoryError>;

    /// Dishes matching `predicate`, ordered by `sort`.
    fn query(
        &self,
        predicate: &MenuPredicate,
        sort: &SortSpec,
    ) -> Result<Vec<Dish>, MenuRepositoryError>;
}
