//! Logger initialisation for the command-line tools.
//!
//! Diagnostics go to stderr through `env_logger` so that stdout carries only
//! the validation report. `RUST_LOG` takes precedence over the verbosity
//! flag.

use log::LevelFilter;

/// Map a repeat count of `-v` onto a log level.
///
/// # Examples
///
/// ```
/// use datacheck_common::logging::level_for_verbosity;
/// use log::LevelFilter;
///
/// assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
/// assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
/// ```
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install a stderr logger at the level implied by `verbosity`.
///
/// Calling this more than once is harmless; later calls leave the first
/// logger in place.
pub fn init(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbosity))
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None);
    if let Err(err) = builder.try_init() {
        log::debug!("logger already installed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::quiet(0, LevelFilter::Warn)]
    #[case::verbose(1, LevelFilter::Info)]
    #[case::very_verbose(2, LevelFilter::Debug)]
    #[case::trace(3, LevelFilter::Trace)]
    #[case::saturates(u8::MAX, LevelFilter::Trace)]
    fn verbosity_maps_to_level(#[case] verbosity: u8, #[case] expected: LevelFilter) {
        assert_eq!(level_for_verbosity(verbosity), expected);
    }

    #[test]
    fn repeated_init_does_not_panic() {
        init(0);
        init(3);
    }
}
