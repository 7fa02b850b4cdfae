//! Connection handshake.
//!
//! The client sends its protocol version once per connection and waits for
//! a one-byte verdict. Nothing else may be sent until the server accepts.
//!
//! Both sides of the exchange have a sans-IO form (`HandshakeRequest::encode`,
//! `HandshakeResponse::decode`); [`perform_handshake`] runs them over a live
//! stream using stack buffers for the fixed-size reply fields.

use bytes::Buf;
use compio::io::{AsyncRead, AsyncWrite};
use scanbench_core::codec;
use scanbench_core::error::{Result, ScanBenchError};
use scanbench_core::io::{read_i32, read_u8};
use scanbench_core::options::ConnectionOptions;
use scanbench_core::timeout::write_all_with_timeout;
use std::fmt;
use tracing::{debug, warn};

/// Body length of the handshake request.
pub const HANDSHAKE_BODY_LEN: i32 = 8;

/// Body length of the handshake response.
pub const HANDSHAKE_RESPONSE_LEN: i32 = 1;

/// Size of the encoded request, prefix included.
pub const HANDSHAKE_FRAME_LEN: usize = 4 + HANDSHAKE_BODY_LEN as usize;

/// Leading marker of the request body.
const HANDSHAKE_MARKER: u8 = 1;

/// Trailing marker of the request body (thin client).
const CLIENT_MARKER: u8 = 2;

/// Result byte meaning "accepted".
pub const HANDSHAKE_OK: u8 = 1;

/// Protocol version announced by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProtocolVersion {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
}

impl ProtocolVersion {
    pub const V1_1_0: Self = Self::new(1, 1, 0);

    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for ProtocolVersion {
    fn default() -> Self {
        Self::V1_1_0
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Handshake request message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandshakeRequest {
    pub version: ProtocolVersion,
}

impl HandshakeRequest {
    pub const fn new(version: ProtocolVersion) -> Self {
        Self { version }
    }

    /// Encode the length-prefixed request.
    ///
    /// Layout:
    /// ```text
    /// [0..4]   8 (i32 LE)
    /// [4]      1
    /// [5..7]   major (u16 LE)
    /// [7..9]   minor (u16 LE)
    /// [9..11]  patch (u16 LE)
    /// [11]     2
    /// ```
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HANDSHAKE_FRAME_LEN);
        codec::put_i32(&mut buf, HANDSHAKE_BODY_LEN);
        codec::put_u8(&mut buf, HANDSHAKE_MARKER);
        codec::put_u16(&mut buf, self.version.major);
        codec::put_u16(&mut buf, self.version.minor);
        codec::put_u16(&mut buf, self.version.patch);
        codec::put_u8(&mut buf, CLIENT_MARKER);
        buf
    }
}

/// Accepted handshake reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandshakeResponse {
    /// Length prefix as sent by the server (expected 1, not enforced).
    pub length: i32,
}

impl HandshakeResponse {
    /// Decode a reply from `src`.
    ///
    /// Consumes exactly the length prefix and the result byte. A result other
    /// than [`HANDSHAKE_OK`] fails with `HandshakeRejected`; anything the
    /// server sent after that byte is left in `src`.
    pub fn decode(src: &mut impl Buf) -> Result<Self> {
        let length = codec::get_i32(src)?;
        let code = codec::get_u8(src)?;
        Self::check(length, code)
    }

    fn check(length: i32, code: u8) -> Result<Self> {
        if length != HANDSHAKE_RESPONSE_LEN {
            warn!(
                "Unexpected handshake reply length {} (expected {})",
                length, HANDSHAKE_RESPONSE_LEN
            );
        }
        if code != HANDSHAKE_OK {
            return Err(ScanBenchError::HandshakeRejected { code });
        }
        Ok(Self { length })
    }
}

/// Run the handshake on `stream`.
///
/// Sends the request, flushes, then reads the 4-byte length and the result
/// byte. A rejected or truncated reply is fatal for the connection; the
/// caller owns the stream and releases it on drop.
pub async fn perform_handshake<S>(
    stream: &mut S,
    version: ProtocolVersion,
    options: &ConnectionOptions,
) -> Result<HandshakeResponse>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    debug!("[HANDSHAKE] Starting handshake (version {})", version);

    let request = HandshakeRequest::new(version).encode();
    write_all_with_timeout(stream, request, options.send_timeout, "handshake request").await?;
    debug!("[HANDSHAKE] Sent request ({} bytes)", HANDSHAKE_FRAME_LEN);

    let length = read_i32(stream, options.recv_timeout, "handshake result length").await?;
    let code = read_u8(stream, options.recv_timeout, "handshake result").await?;
    debug!("[HANDSHAKE] Received result {} (length {})", code, length);

    HandshakeResponse::check(length, code)
}
