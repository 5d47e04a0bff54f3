//! Logger setup for binaries and tests.
//!
//! The library itself only emits through the [`log`] facade.

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs an `env_logger` backend once per process.
///
/// `verbose` lowers the crate's default level from `Info` to `Trace`.
/// `RUST_LOG` still overrides both.
pub fn initialize_logger(verbose: bool) {
    INIT.call_once_force(|_| {
        let crate_level = if verbose {
            LevelFilter::Trace
        } else {
            LevelFilter::Info
        };

        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("kvtable", crate_level)
            .format_timestamp_millis()
            .parse_default_env();

        // Something else may have installed a logger already.
        let _ = builder.try_init();
    });
}
