//! Logging to the javascript console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Default directives, overridable at build time with `LOG_FILTER`.
const DEFAULT_FILTER: &str = "error,ui=debug,catalog=debug";

/// Initialize logging. Call once, before the app renders.
pub fn init_logging() {
    let directives = option_env!("LOG_FILTER").unwrap_or(DEFAULT_FILTER);
    let env_filter = EnvFilter::new(directives);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!(directives, "Initialized logs");
}
