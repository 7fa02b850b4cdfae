//! # Scanbench
//!
//! Latency micro-benchmark for servers speaking the thin-client binary
//! protocol. For each page size it opens a fresh connection per sample,
//! handshakes, issues one scan query and times the wait for the result
//! length prefix, then reports the mean and a 95% confidence half-width.
//!
//! ## Architecture
//!
//! - **`scanbench-core`**: little-endian codec, errors, endpoints, TCP options
//! - **`scanbench-wire`**: handshake and scan-query messages, per-sample `Connection`
//! - **`scanbench`**: statistics, configuration and the driver loop (this crate)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scanbench::config::BenchConfig;
//! use scanbench::runner::BenchmarkRunner;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let runner = BenchmarkRunner::new(BenchConfig::default().with_samples(5))?;
//! let rows = runner.run(&mut std::io::stdout()).await?;
//! println!("{} rows", rows.len());
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod dev_tracing;
pub mod runner;
pub mod stats;

pub use config::BenchConfig;
pub use runner::{BenchmarkRunner, ResultRow};
pub use scanbench_core::error::{Result, ScanBenchError};
pub use stats::Summary;
