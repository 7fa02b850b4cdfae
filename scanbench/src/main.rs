//! Run the scan-query latency sweep with the default configuration.
//!
//! Result rows go to stdout; set `RUST_LOG=debug` for per-sample detail.

use scanbench::dev_tracing::init_tracing;
use scanbench::{BenchConfig, BenchmarkRunner};
use tracing::error;

#[compio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let runner = BenchmarkRunner::new(BenchConfig::default())?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = runner.run(&mut out).await {
        error!("Benchmark aborted: {}", e);
        return Err(e.into());
    }
    Ok(())
}
