use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "book_catalog=debug,info"
    } else {
        "book_catalog=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn try_init_cli_logger(verbose: bool) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
}

pub fn try_init_json_logger(verbose: bool) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .try_init()
}

/// A second global subscriber is refused; the first one stays in place.
pub fn init_cli_logger(verbose: bool) {
    if let Err(e) = try_init_cli_logger(verbose) {
        eprintln!("Logger already initialized: {}", e);
    }
}

pub fn init_json_logger(verbose: bool) {
    if let Err(e) = try_init_json_logger(verbose) {
        eprintln!("Logger already initialized: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only test in the crate that touches the global subscriber.
    #[test]
    fn test_logger_installs_once() {
        assert!(try_init_cli_logger(true).is_ok());
        tracing::info!("logger smoke test");

        assert!(try_init_json_logger(false).is_err());
        assert!(try_init_cli_logger(false).is_err());
    }
}
