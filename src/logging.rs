use tracing::Level;

/// Install the stderr log subscriber. Stdout is reserved for feed output.
///
/// Verbosity 0 logs warnings only, 1 adds info, 2 or more adds debug.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
