mod dish_mapper;

pub use dish_mapper::DishRowMapper;
