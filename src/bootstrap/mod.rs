pub mod app;
pub mod config;
pub mod tracing;
pub mod wiring;

pub use app::LittleLemonApp;
pub use config::load_config;
pub use self::tracing::init_tracing_subscriber;
pub use wiring::{resolve_paths, wire_dependencies, WiringError};
