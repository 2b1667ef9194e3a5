use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use tracing::debug;

use ll_core::menu::{Dish, MenuPredicate, SortSpec};
use ll_core::ports::{MenuRepositoryError, MenuRepositoryPort};

use crate::db::mappers::DishRowMapper;
use crate::db::models::DishRow;
use crate::db::ports::{InsertMapper, RowMapper};
use crate::db::{pool::DbPool, schema::t_dish};

/// SQLite-backed menu cache.
///
/// Category exclusion runs in SQL. Title search and ordering run on the
/// loaded rows so that case folding follows Unicode rather than SQLite's
/// ASCII-only `LIKE`.
pub struct DieselMenuRepository {
    pool: DbPool,
}

impl DieselMenuRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(
        &self,
    ) -> Result<
        diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<SqliteConnection>>,
        MenuRepositoryError,
    > {
        self.pool
            .get()
            .map_err(|e| MenuRepositoryError::Storage(e.to_string()))
    }
}

impl MenuRepositoryPort for DieselMenuRepository {
    fn count(&self) -> Result<usize, MenuRepositoryError> {
        let mut conn = self.conn()?;

        let total = t_dish::table
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(|e| MenuRepositoryError::Storage(e.to_string()))?;

        Ok(total as usize)
    }

    fn insert_all(&self, dishes: &[Dish]) -> Result<usize, MenuRepositoryError> {
        if dishes.is_empty() {
            return Ok(0);
        }
        let mut conn = self.conn()?;

        let rows = dishes
            .iter()
            .map(|dish| DishRowMapper.to_row(dish))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| MenuRepositoryError::InvalidRow(e.to_string()))?;

        let inserted = conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                diesel::insert_into(t_dish::table)
                    .values(&rows)
                    .execute(conn)
            })
            .map_err(|e| MenuRepositoryError::Storage(e.to_string()))?;

        debug!(inserted, "dishes inserted");
        Ok(inserted)
    }

    fn query(
        &self,
        predicate: &MenuPredicate,
        sort: &SortSpec,
    ) -> Result<Vec<Dish>, MenuRepositoryError> {
        let mut conn = self.conn()?;

        let mut query: t_dish::BoxedQuery<'_, Sqlite> = t_dish::table.into_boxed();
        if !predicate.excluded_categories.is_empty() {
            let excluded: Vec<&str> = predicate
                .excluded_categories
                .iter()
                .map(|c| c.as_str())
                .collect();
            query = query.filter(t_dish::category.ne_all(excluded));
        }

        let rows = query
            .load::<DishRow>(&mut conn)
            .map_err(|e| MenuRepositoryError::Storage(e.to_string()))?;

        let mut dishes = rows
            .iter()
            .filter(|row| predicate.title_matches(&row.title))
            .map(|row| DishRowMapper.to_domain(row))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| MenuRepositoryError::InvalidRow(format!("{e:#}")))?;

        sort.sort(&mut dishes);
        Ok(dishes)
    }
}
