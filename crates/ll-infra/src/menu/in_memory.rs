use std::sync::Mutex;

use ll_core::menu::{Dish, MenuPredicate, SortSpec};
use ll_core::ports::{MenuRepositoryError, MenuRepositoryPort};

/// Menu repository held in process memory.
#[derive(Default)]
pub struct InMemoryMenuRepository {
    dishes: Mutex<Vec<Dish>>,
}

impl InMemoryMenuRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Dish>>, MenuRepositoryError> {
        self.dishes
            .lock()
            .map_err(|_| MenuRepositoryError::Storage("menu lock poisoned".into()))
    }
}

impl MenuRepositoryPort for InMemoryMenuRepository {
    fn count(&self) -> Result<usize, MenuRepositoryError> {
        Ok(self.lock()?.len())
    }

    fn insert_all(&self, dishes: &[Dish]) -> Result<usize, MenuRepositoryError> {
        self.lock()?.extend_from_slice(dishes);
        Ok(dishes.len())
    }

    fn query(
        &self,
        predicate: &MenuPredicate,
        sort: &SortSpec,
    ) -> Result<Vec<Dish>, MenuRepositoryError> {
        let mut matched: Vec<Dish> = self
            .lock()?
            .iter()
            .filter(|dish| predicate.matches(dish))
            .cloned()
            .collect();
        sort.sort(&mut matched);
        Ok(matched)
    }
}
