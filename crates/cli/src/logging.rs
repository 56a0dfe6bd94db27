use tracing_subscriber::EnvFilter;

/// Picks the log filter: `RUST_LOG`, then `-v`, then the configured level.
fn filter(verbose: bool, configured: &str) -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("debug")
		} else {
			EnvFilter::try_new(configured).unwrap_or_else(|_| EnvFilter::new("info"))
		}
	})
}

/// Installs the global subscriber. Logs go to stderr so command output on
/// stdout stays clean.
pub fn init(verbose: bool, configured: &str) {
	tracing_subscriber::fmt()
		.with_env_filter(filter(verbose, configured))
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
