//! Connection options
//!
//! Controls how each per-sample connection is opened and how long socket
//! operations may block.

use std::time::Duration;

/// Per-connection options.
///
/// All timeouts default to `None`, i.e. whatever the transport does.
///
/// # Examples
///
/// ```
/// use scanbench_core::options::ConnectionOptions;
/// use std::time::Duration;
///
/// let opts = ConnectionOptions::default()
///     .with_connect_timeout(Duration::from_secs(2))
///     .with_recv_timeout(Duration::from_secs(5));
/// assert!(opts.nodelay);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionOptions {
    /// Maximum time to wait for the TCP connection to complete.
    pub connect_timeout: Option<Duration>,

    /// Maximum time to wait for a write to complete.
    pub send_timeout: Option<Duration>,

    /// Maximum time to wait for a fixed-width field to arrive.
    ///
    /// Applies to the handshake reply and to the query result length, so
    /// a slow server shows up as `Timeout` rather than a hang.
    pub recv_timeout: Option<Duration>,

    /// Disable Nagle's algorithm on every connection (TCP_NODELAY).
    pub nodelay: bool,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            send_timeout: None,
            recv_timeout: None,
            nodelay: true,
        }
    }
}

impl ConnectionOptions {
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_send_timeout(mut self, timeout: Duration) -> Self {
        self.send_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_recv_timeout(mut self, timeout: Duration) -> Self {
        self.recv_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_nodelay(mut self, nodelay: bool) -> Self {
        self.nodelay = nodelay;
        self
    }
}
