mod dish_row;

pub use dish_row::{DishRow, NewDishRow};
