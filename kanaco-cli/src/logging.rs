//! Logger initialisation

/// Default log filter for a `-v` count
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over the verbosity count. Nothing is
/// installed when `quiet` is set.
pub fn init_logging(quiet: bool, verbose: u8) {
    if quiet {
        return;
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level_for(verbose)))
        .format_timestamp(None)
        .init();
}
