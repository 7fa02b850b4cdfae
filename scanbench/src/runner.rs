//! Benchmark driver loop.
//!
//! Strictly sequential: one connection per sample, one sample at a time,
//! page sizes in configured order. The first error ends the run; rows that
//! were already written stay written.

use crate::config::BenchConfig;
use crate::stats::{compute_summary, Summary};
use scanbench_core::error::{Result, ScanBenchError};
use scanbench_wire::Connection;
use std::fmt;
use std::io::Write;
use tracing::{debug, info};

/// Result for one page size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultRow {
    pub page_size: i32,
    pub summary: Summary,
}

impl fmt::Display for ResultRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Page size {} Mb, waiting time {:.2} ± {:.2} ms",
            self.page_size, self.summary.mean, self.summary.interval95
        )
    }
}

pub struct BenchmarkRunner {
    config: BenchConfig,
}

impl BenchmarkRunner {
    /// Create a runner; fails if the configuration cannot be run.
    pub fn new(config: BenchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// One latency sample in milliseconds.
    ///
    /// Connect, handshake, send the query, time the wait for the result
    /// length, close. The connection is released on every path.
    pub async fn measure_sample(&self, page_size: i32) -> Result<f64> {
        let cfg = &self.config;
        let mut conn = Connection::open(&cfg.endpoint, &cfg.options, cfg.version).await?;
        let elapsed = conn.measure_scan_query(&cfg.query, page_size).await?;
        conn.close().await;
        Ok(elapsed.as_secs_f64() * 1000.0)
    }

    /// Collect the configured number of samples for `page_size`.
    pub async fn collect_samples(&self, page_size: i32) -> Result<Vec<f64>> {
        let mut samples = Vec::with_capacity(self.config.samples);
        for i in 0..self.config.samples {
            let ms = self.measure_sample(page_size).await?;
            debug!("page size {} sample {}: {:.3} ms", page_size, i, ms);
            samples.push(ms);
        }
        Ok(samples)
    }

    pub async fn run_page_size(&self, page_size: i32) -> Result<ResultRow> {
        let samples = self.collect_samples(page_size).await?;
        let summary = compute_summary(&samples)
            .ok_or_else(|| ScanBenchError::invalid_config("no samples collected"))?;
        Ok(ResultRow { page_size, summary })
    }

    /// Sweep every configured page size, writing one line per row to `out`.
    ///
    /// Each line is flushed as soon as its row is complete.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<Vec<ResultRow>> {
        info!(
            "Benchmarking {} ({} page sizes x {} samples)",
            self.config.endpoint,
            self.config.page_sizes.len(),
            self.config.samples
        );

        let mut rows = Vec::with_capacity(self.config.page_sizes.len());
        for &page_size in &self.config.page_sizes {
            let row = self.run_page_size(page_size).await?;
            info!(
                page_size,
                mean_ms = row.summary.mean,
                std_dev_ms = row.summary.std_dev,
                "page size complete"
            );
            writeln!(out, "{row}")?;
            out.flush()?;
            rows.push(row);
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_format() {
        let row = ResultRow {
            page_size: 50,
            summary: Summary {
                mean: 1.234,
                std_dev: 0.5,
                interval95: 0.4899,
                sample_count: 4,
            },
        };
        assert_eq!(
            row.to_string(),
            "Page size 50 Mb, waiting time 1.23 ± 0.49 ms"
        );
    }

    #[test]
    fn test_invalid_config_rejected_up_front() {
        let result = BenchmarkRunner::new(BenchConfig::default().with_samples(0));
        assert!(matches!(result, Err(ScanBenchError::InvalidConfig(_))));
    }
}
