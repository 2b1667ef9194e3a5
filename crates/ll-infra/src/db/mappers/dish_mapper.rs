use anyhow::{Context, Result};
use ll_core::menu::{Category, Dish};

use crate::db::models::{DishRow, NewDishRow};
use crate::db::ports::{InsertMapper, RowMapper};

pub struct DishRowMapper;

impl<'a> InsertMapper<'a, Dish, NewDishRow<'a>> for DishRowMapper {
    fn to_row(&self, domain: &'a Dish) -> Result<NewDishRow<'a>> {
        Ok(NewDishRow {
            title: &domain.title,
            description: &domain.description,
            price: &domain.price,
            category: domain.category.as_str(),
            image_url: &domain.image_url,
        })
    }
}

impl RowMapper<DishRow, Dish> for DishRowMapper {
    fn to_domain(&self, row: &DishRow) -> Result<Dish> {
        let category: Category = row
            .category
            .parse()
            .with_context(|| format!("dish row {} ({})", row.id, row.title))?;

        Ok(Dish {
            title: row.title.clone(),
            description: row.description.clone(),
            price: row.price.clone(),
            category,
            image_url: row.image_url.clone(),
        })
    }
}
