use tracing_subscriber::filter::LevelFilter;

/// Install the stderr diagnostics subscriber. `verbose` forces debug;
/// otherwise `level` comes from config and falls back to `warn`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool, level: &str) {
    let filter = if verbose {
        LevelFilter::DEBUG
    } else {
        level.parse().unwrap_or(LevelFilter::WARN)
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
