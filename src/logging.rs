use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a compact stderr subscriber.
///
/// `RUST_LOG` takes precedence over `verbose`. Calling this twice is harmless;
/// the second call leaves the first subscriber in place.
pub fn init_logger(verbose: bool) {
    let fallback = if verbose { "library_lending=debug,info" } else { "library_lending=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();

    if let Err(error) = installed {
        tracing::debug!("logger already installed: {error}");
    }
}
