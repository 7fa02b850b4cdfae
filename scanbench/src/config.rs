//! Benchmark configuration.
//!
//! The defaults describe the standard sweep: 20 samples for each of eleven
//! page sizes against `localhost:10800`.

use scanbench_core::endpoint::Endpoint;
use scanbench_core::error::{Result, ScanBenchError};
use scanbench_core::options::ConnectionOptions;
use scanbench_wire::{ProtocolVersion, ScanQuery};

/// Samples collected per page size.
pub const DEFAULT_SAMPLES: usize = 20;

/// Page sizes swept, in output order.
pub const DEFAULT_PAGE_SIZES: &[i32] = &[5, 10, 20, 50, 100, 150, 200, 300, 400, 500, 600];

/// Everything the driver loop needs.
///
/// # Examples
///
/// ```
/// use scanbench::config::BenchConfig;
/// use scanbench_core::endpoint::Endpoint;
///
/// let config = BenchConfig::default()
///     .with_endpoint(Endpoint::new("127.0.0.1", 10800))
///     .with_page_sizes([5, 10])
///     .with_samples(2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub endpoint: Endpoint,
    pub page_sizes: Vec<i32>,
    pub samples: usize,
    pub query: ScanQuery,
    pub version: ProtocolVersion,
    pub options: ConnectionOptions,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::default(),
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
            samples: DEFAULT_SAMPLES,
            query: ScanQuery::default(),
            version: ProtocolVersion::default(),
            options: ConnectionOptions::default(),
        }
    }
}

impl BenchConfig {
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    #[must_use]
    pub fn with_page_sizes(mut self, page_sizes: impl Into<Vec<i32>>) -> Self {
        self.page_sizes = page_sizes.into();
        self
    }

    #[must_use]
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: ScanQuery) -> Self {
        self.query = query;
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: ProtocolVersion) -> Self {
        self.version = version;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ConnectionOptions) -> Self {
        self.options = options;
        self
    }

    /// Reject configurations the driver cannot run.
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(ScanBenchError::invalid_config("sample count must be at least 1"));
        }
        if self.page_sizes.is_empty() {
            return Err(ScanBenchError::invalid_config("page size list is empty"));
        }
        if let Some(bad) = self.page_sizes.iter().find(|&&size| size <= 0) {
            return Err(ScanBenchError::invalid_config(format!(
                "page size must be positive, got {bad}"
            )));
        }
        Ok(())
    }
}
