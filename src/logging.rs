//! Logger setup for the `word-lookup` binary and tests.
//!
//! Everything goes to stderr; stdout is reserved for the report.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Install a terminal logger at `level`.
///
/// A second call is ignored, the first logger stays in place.
pub fn initialize(level: LevelFilter) {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

/// Install a debug-level logger for unit tests. No-op if one already exists.
pub fn initialize_for_tests() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    initialize(level);
}
