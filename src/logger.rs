use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber for the CLI.
///
/// Events go to stderr so stdout stays a clean CSV stream. `RUST_LOG`
/// takes precedence over the `verbose` flag.
pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "ticket_service=debug,info"
    } else {
        "ticket_service=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .compact(),
        )
        .init();
}
