//! Initialisation du système de logging

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise le logging sur stderr
///
/// Le niveau par défaut dépend de `verbosity` (0: warn, 1: info, 2+: debug);
/// la variable RUST_LOG reste prioritaire. Les diagnostics vont sur stderr
/// pour laisser stdout aux invites et aux statistiques.
pub fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
