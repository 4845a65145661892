//! Diagnostic-channel initialization.
//!
//! The bridge emits diagnostics through the `log` facade only; this module
//! wires up the `env_logger` backend so failure records reach stderr.
//! Intended to be called by the host shell early in startup.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
///
/// `RUST_LOG` takes precedence over `default_filter`. The filter follows
/// `env_logger` syntax (e.g. `"warn"`, `"citadel_assets=debug"`).
pub fn init_logging(default_filter: &str) {
    INIT.call_once(|| {
        let filter = choose_filter(std::env::var("RUST_LOG").ok(), default_filter);
        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.init();
        log::debug!("logging initialized");
    });
}

/// Picks the filter directives: `RUST_LOG` wins, then `default_filter`,
/// then a warn-level floor. The floor keeps failure diagnostics visible
/// when the caller passes no directives at all; env_logger's own default
/// would silence everything below error.
fn choose_filter(env: Option<String>, default_filter: &str) -> String {
    match env {
        Some(filter) if !filter.is_empty() => filter,
        _ if !default_filter.is_empty() => default_filter.to_string(),
        _ => "warn".to_string(),
    }
}
