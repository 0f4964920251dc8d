use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "EVALSCORE_LOG";

fn level_for(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "evalscore=error",
        (false, 0) => "evalscore=warn",
        (false, 1) => "evalscore=info",
        (false, _) => "evalscore=debug",
    }
}

/// Installs a stderr subscriber. `RUST_LOG` or `EVALSCORE_LOG` override the
/// level derived from `-v`/`--quiet`.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose, quiet)));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .try_init();
}
