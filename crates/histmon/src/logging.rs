use tracing_subscriber::EnvFilter;

/// Initialize stderr logging. `RUST_LOG` wins over the `-v` count.
pub fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "histmon=info",
        1 => "histmon=debug",
        _ => "histmon=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
