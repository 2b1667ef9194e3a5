//! Little Lemon Library
//!
//! Bootstrap for the Little Lemon ordering core: configuration loading,
//! tracing setup and assembly of the view-models a UI binds to.

pub mod bootstrap;

pub use bootstrap::{
    init_tracing_subscriber, load_config, resolve_paths, wire_dependencies, LittleLemonApp,
    WiringError,
};
