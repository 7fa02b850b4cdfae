//! TCP socket tuning.
//!
//! # Safety
//!
//! This module borrows the raw file descriptor/socket of a compio
//! `TcpStream` to set socket options through `socket2`. The borrowed handle
//! is forgotten afterwards so the stream stays the sole owner.

#![allow(unsafe_code)]

use crate::options::ConnectionOptions;
use std::io;
use tracing::debug;

/// Set TCP_NODELAY on a compio `TcpStream`.
///
/// With Nagle disabled the query leaves in one segment as soon as it is
/// written, so the measured interval starts when the bytes hit the wire.
///
/// # Errors
///
/// Returns an error if the socket option cannot be set.
#[inline]
pub fn set_tcp_nodelay(stream: &compio::net::TcpStream, nodelay: bool) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::io::{AsRawFd, FromRawFd};
        let fd = stream.as_raw_fd();
        let sock = unsafe { socket2::Socket::from_raw_fd(fd) };
        let res = sock.set_nodelay(nodelay);
        std::mem::forget(sock); // Don't close the fd
        res
    }

    #[cfg(windows)]
    {
        use std::os::windows::io::{AsRawSocket, FromRawSocket};
        let raw = stream.as_raw_socket();
        let sock = unsafe { socket2::Socket::from_raw_socket(raw) };
        let res = sock.set_nodelay(nodelay);
        std::mem::forget(sock); // Don't close the socket
        res
    }

    #[cfg(not(any(unix, windows)))]
    {
        let _ = (stream, nodelay);
        Ok(())
    }
}

/// Enable TCP_NODELAY.
#[inline]
pub fn enable_tcp_nodelay(stream: &compio::net::TcpStream) -> io::Result<()> {
    set_tcp_nodelay(stream, true)
}

/// Apply the socket-level parts of `options` to a freshly connected stream.
pub fn configure_stream(
    stream: &compio::net::TcpStream,
    options: &ConnectionOptions,
) -> io::Result<()> {
    if options.nodelay {
        enable_tcp_nodelay(stream)?;
        debug!("TCP_NODELAY enabled");
    }
    Ok(())
}
