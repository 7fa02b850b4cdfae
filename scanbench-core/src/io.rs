//! Fixed-width reads off a live stream.
//!
//! Each helper blocks until all bytes of the field have arrived (or the
//! optional deadline passes), then decodes them with [`crate::codec`].
//! Stack arrays are used for the buffers; nothing is read past the field.

use crate::codec::{self, BYTE_LEN, INT_LEN};
use crate::error::Result;
use crate::timeout::read_exact_with_timeout;
use compio::io::AsyncRead;
use std::time::Duration;

/// Read one byte.
pub async fn read_u8<S>(
    stream: &mut S,
    deadline: Option<Duration>,
    field: &'static str,
) -> Result<u8>
where
    S: AsyncRead + Unpin,
{
    let buf = read_exact_with_timeout(stream, [0u8; BYTE_LEN], deadline, field).await?;
    Ok(codec::get_u8(&mut &buf[..])?)
}

/// Read a little-endian `i32`.
pub async fn read_i32<S>(
    stream: &mut S,
    deadline: Option<Duration>,
    field: &'static str,
) -> Result<i32>
where
    S: AsyncRead + Unpin,
{
    let buf = read_exact_with_timeout(stream, [0u8; INT_LEN], deadline, field).await?;
    Ok(codec::get_i32(&mut &buf[..])?)
}
