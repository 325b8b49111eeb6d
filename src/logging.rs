//! Tracing setup for the CLI.
//!
//! Diagnostics go to stderr so interactive prompts on stdout stay clean.
//! `RUST_LOG` overrides the verbosity flags.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
pub fn init(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore a second init (e.g. in tests); the first subscriber wins.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
