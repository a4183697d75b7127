use tracing_subscriber::EnvFilter;

/// Installs a stderr `fmt` subscriber at `level`. `RUST_LOG` wins when set.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init("debug");
        init("warn");
        tracing::info!("still logging after second init");
    }
}
