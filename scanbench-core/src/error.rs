/// Scanbench Error Types
///
/// Every failure aborts the run; nothing here is retried.

use crate::codec::CodecError;
use crate::endpoint::EndpointError;
use std::io;
use std::time::Duration;
use thiserror::Error;

/// Main error type for scanbench operations
#[derive(Error, Debug)]
pub enum ScanBenchError {
    /// IO error during socket operations (refused, reset, ...)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Stream ended before a fixed-width field was fully read
    #[error("End of stream while reading {field}")]
    EndOfStream { field: &'static str },

    /// Server answered the handshake with a result other than success
    #[error("Handshake failed [res={code}]")]
    HandshakeRejected { code: u8 },

    /// Buffer-level decode failure
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// Endpoint could not be parsed
    #[error("Endpoint error: {0}")]
    Endpoint(#[from] EndpointError),

    /// A configured timeout elapsed
    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    /// Benchmark configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for scanbench operations
pub type Result<T> = std::result::Result<T, ScanBenchError>;

impl ScanBenchError {
    /// Create an invalid configuration error with a message
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Map an I/O error raised while reading `field`.
    ///
    /// A short read becomes [`ScanBenchError::EndOfStream`], a timeout keeps
    /// its kind, everything else stays an I/O error.
    pub fn from_read(err: io::Error, field: &'static str) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => Self::EndOfStream { field },
            _ => Self::Io(err),
        }
    }

    /// Check if this is a transport-level failure
    #[must_use]
    pub fn is_connection_error(&self) -> bool {
        match self {
            Self::Io(e) => matches!(
                e.kind(),
                io::ErrorKind::ConnectionRefused
                    | io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::BrokenPipe
                    | io::ErrorKind::NotConnected
            ),
            Self::EndOfStream { .. } | Self::Timeout { .. } => true,
            _ => false,
        }
    }
}
