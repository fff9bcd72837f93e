use std::sync::Once;

use env_logger::{Builder, Target};
use log::LevelFilter;

static INIT: Once = Once::new();

/// Map `-v` repetitions onto a level; warnings are always shown.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger once. `RUST_LOG` takes precedence over
/// `verbosity`.
pub fn initialize_logger(verbosity: u8) {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("wordcache", level_for(verbosity))
            .target(Target::Stderr)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed (tests).
        let _ = builder.try_init();
    });
}

#[cfg(test)]
mod tests {
    use log::{debug, info};

    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }

    #[test]
    fn test_initialize_twice() {
        initialize_logger(2);
        initialize_logger(0);
        debug!("Debug message in test");
        info!("Info message in test");
    }
}
