//! Tracing configuration for Little Lemon
//!
//! ## Architecture / 架构
//!
//! - Use cases open `info_span!`s; adapters emit `tracing` events
//! - The database bootstrap still logs through `log`, bridged by `tracing-log`
//! - Output goes to stdout and, when a logs directory is given, to
//!   `little-lemon.log` through a non-blocking writer

use std::{fs, io, path::Path, sync::OnceLock};

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

const LOG_FILE_NAME: &str = "little-lemon.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives, used when `RUST_LOG` is unset.
///
/// ## Behavior / 行为
/// - **Development**: debug for the app crates
/// - **Production**: info everywhere
/// - Diesel migration chatter stays at warn
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let app_level = if is_dev { "debug" } else { "info" };
    vec![
        app_level.to_string(),
        format!("ll_app={app_level}"),
        format!("ll_infra={app_level}"),
        "diesel_migrations=warn".to_string(),
    ]
}

/// Initialize the global tracing subscriber
///
/// ## Behavior / 行为
///
/// 1. Installs the `log` → `tracing` bridge
/// 2. Builds an env-filter (respects `RUST_LOG`)
/// 3. Adds a stdout layer and, if `logs_dir` is given, a file layer
/// 4. Registers the global subscriber
///
/// A file logging failure falls back to stdout only.
///
/// ## Errors / 错误
///
/// Returns `Err` if a logger or subscriber is already registered.
pub fn init_tracing_subscriber(logs_dir: Option<&Path>) -> anyhow::Result<()> {
    tracing_log::LogTracer::init().context("Failed to install log bridge")?;

    let filter_directives = build_filter_directives(is_development());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    let stdout_writer = BoxMakeWriter::new(io::stdout);
    let file_writer = logs_dir.and_then(|dir| match build_file_writer(dir) {
        Ok(writer) => Some(writer),
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to stdout: {err:#}");
            None
        }
    });

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stdout_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    let subscriber = registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer);

    ::tracing::subscriber::set_global_default(subscriber)
        .context("Failed to register tracing subscriber")?;

    Ok(())
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create logs dir: {}", logs_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev_directives = build_filter_directives(true);
        assert_eq!(dev_directives[0], "debug");
        assert!(dev_directives.contains(&"ll_app=debug".to_string()));
        assert!(dev_directives.contains(&"ll_infra=debug".to_string()));

        let prod_directives = build_filter_directives(false);
        assert_eq!(prod_directives[0], "info");
        assert!(prod_directives.contains(&"ll_infra=info".to_string()));
        assert!(prod_directives.contains(&"diesel_migrations=warn".to_string()));
    }

    #[test]
    fn test_directives_parse_as_env_filter() {
        for is_dev in [true, false] {
            let joined = build_filter_directives(is_dev).join(",");
            assert!(EnvFilter::try_new(&joined).is_ok(), "{joined}");
        }
    }
}
