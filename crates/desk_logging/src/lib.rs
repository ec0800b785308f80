#![deny(missing_docs)]
//! Logging glue for the payables workspace.
//!
//! The `desk_*` macros forward to the `log` facade, so a crate invoking them
//! must depend on `log` as well. The terminal app installs the real logger;
//! tests call [`initialize_for_tests`].

/// Logs at debug level.
#[macro_export]
macro_rules! desk_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs at info level.
#[macro_export]
macro_rules! desk_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs at warn level.
#[macro_export]
macro_rules! desk_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Environment variable that overrides the level used by
/// [`initialize_for_tests`].
pub const TEST_LOG_ENV: &str = "PAYABLES_TEST_LOG";

/// Parses a configured level name such as `"info"` or `" DEBUG "`.
///
/// Unknown or empty names fall back to `Info` so a typo in the config file
/// never silences the log.
pub fn parse_level(name: &str) -> log::LevelFilter {
    name.trim().parse().unwrap_or(log::LevelFilter::Info)
}

/// Installs a stderr logger for test binaries. Repeated calls, or a logger
/// installed elsewhere first, leave the existing logger in place.
///
/// The level comes from `PAYABLES_TEST_LOG` when set and defaults to `Warn`.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

    let level = std::env::var(TEST_LOG_ENV)
        .map(|raw| parse_level(&raw))
        .unwrap_or(log::LevelFilter::Warn);
    let config = ConfigBuilder::new().set_time_level(log::LevelFilter::Off).build();

    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Never);
}
