//! Menu sources: the bundled seed list and an in-memory repository.

mod in_memory;
mod static_menu;

pub use in_memory::InMemoryMenuRepository;
pub use static_menu::bundled_menu;
