/// Initialize a tracing subscriber when `RUST_LOG` is set.
///
/// The binary, benches and tests call `scanbench::dev_tracing::init_tracing()`
/// to get structured diagnostics on stderr. Without `RUST_LOG`, or when a
/// global subscriber is already installed, this does nothing and stdout
/// carries only the result rows.
pub fn init_tracing() {
    use std::env;

    if env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }
}
