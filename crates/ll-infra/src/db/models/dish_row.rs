use crate::db::schema::t_dish;
use diesel::prelude::*;

#[derive(Debug, Queryable)]
#[diesel(table_name = t_dish)]
pub struct DishRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub image_url: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = t_dish)]
pub struct NewDishRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub price: &'a str,
    pub category: &'a str,
    pub image_url: &'a str,
}
