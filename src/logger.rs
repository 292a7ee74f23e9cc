use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs the process-wide logger, with this crate logging at `level` and everything else at
/// `Warn`. Only the first call has an effect. `RUST_LOG` overrides both filters.
///
/// `Info` reports one line per table; `Debug` adds the per-phase timings; `Trace` also lets
/// `log_layout` dump every slot.
pub fn initialize_logger(level: LevelFilter) {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("collision_bench", level)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed, e.g. by a test harness.
        let _ = builder.try_init();
    });
}

/// Maps a `-v` count onto the crate's log level.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
