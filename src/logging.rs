use tracing_subscriber::{fmt, EnvFilter};

/// Install the fmt subscriber for the command line tools.
///
/// `RUST_LOG` overrides the default of `warn`. Output goes to stderr so
/// stdout only ever carries the tool's result.
pub fn init() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
