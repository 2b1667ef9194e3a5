mod dish_repo;

pub use dish_repo::*;
