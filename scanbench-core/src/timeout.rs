//! Timeout utilities for I/O operations
//!
//! Wrap compio operations with an optional deadline. `None` blocks for as
//! long as the transport does.

use crate::error::{Result, ScanBenchError};
use compio::buf::{BufResult, IoBuf, IoBufMut};
use compio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use compio::net::TcpStream;
use compio::time::timeout;
use std::future::Future;
use std::time::Duration;

/// Await `fut`, failing with `Timeout` if `duration` elapses first.
async fn with_deadline<F: Future>(
    fut: F,
    duration: Option<Duration>,
    operation: &'static str,
) -> Result<F::Output> {
    match duration {
        None => Ok(fut.await),
        Some(after) => timeout(after, fut)
            .await
            .map_err(|_elapsed| ScanBenchError::Timeout { operation, after }),
    }
}

/// Open a TCP connection to `addr` (`host:port`).
pub async fn connect_with_timeout(addr: &str, duration: Option<Duration>) -> Result<TcpStream> {
    let stream = with_deadline(TcpStream::connect(addr), duration, "connect").await??;
    Ok(stream)
}

/// Read exactly `buf.buf_capacity()` bytes.
///
/// A stream that ends early yields `EndOfStream { field }`.
pub async fn read_exact_with_timeout<S, B>(
    stream: &mut S,
    buf: B,
    duration: Option<Duration>,
    field: &'static str,
) -> Result<B>
where
    S: AsyncRead + Unpin,
    B: IoBufMut,
{
    let BufResult(res, buf) = with_deadline(stream.read_exact(buf), duration, field).await?;
    res.map_err(|e| ScanBenchError::from_read(e, field))?;
    Ok(buf)
}

/// Write the whole buffer, then flush.
pub async fn write_all_with_timeout<S, B>(
    stream: &mut S,
    buf: B,
    duration: Option<Duration>,
    operation: &'static str,
) -> Result<B>
where
    S: AsyncWrite + Unpin,
    B: IoBuf,
{
    let BufResult(res, buf) = with_deadline(stream.write_all(buf), duration, operation).await?;
    res?;
    with_deadline(stream.flush(), duration, operation).await??;
    Ok(buf)
}
