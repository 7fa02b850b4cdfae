//! Fixed-width little-endian codec.
//!
//! Every multi-byte field on the wire is written least-significant byte
//! first. Integers are two's complement, so `-1i32` is `FF FF FF FF`.
//!
//! The functions here work on plain byte buffers (`bytes::Buf` /
//! `bytes::BufMut`) and never touch a socket. Reading off a stream lives in
//! [`crate::io`].

use bytes::{Buf, BufMut};
use thiserror::Error;

/// Codec errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    #[error("Unexpected end of buffer: needed {needed} bytes, {available} available")]
    UnexpectedEof { needed: usize, available: usize },
}

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Encoded widths of the fixed-size fields.
pub const BYTE_LEN: usize = 1;
pub const SHORT_LEN: usize = 2;
pub const INT_LEN: usize = 4;
pub const LONG_LEN: usize = 8;

#[inline]
pub fn put_u8(dst: &mut impl BufMut, v: u8) {
    dst.put_u8(v);
}

#[inline]
pub fn put_i16(dst: &mut impl BufMut, v: i16) {
    dst.put_i16_le(v);
}

#[inline]
pub fn put_u16(dst: &mut impl BufMut, v: u16) {
    dst.put_u16_le(v);
}

#[inline]
pub fn put_i32(dst: &mut impl BufMut, v: i32) {
    dst.put_i32_le(v);
}

#[inline]
pub fn put_i64(dst: &mut impl BufMut, v: i64) {
    dst.put_i64_le(v);
}

/// Fails without consuming anything when `src` holds fewer than `needed` bytes.
#[inline]
fn ensure(src: &impl Buf, needed: usize) -> Result<()> {
    let available = src.remaining();
    if available < needed {
        return Err(CodecError::UnexpectedEof { needed, available });
    }
    Ok(())
}

pub fn get_u8(src: &mut impl Buf) -> Result<u8> {
    ensure(src, BYTE_LEN)?;
    Ok(src.get_u8())
}

pub fn get_i16(src: &mut impl Buf) -> Result<i16> {
    ensure(src, SHORT_LEN)?;
    Ok(src.get_i16_le())
}

pub fn get_u16(src: &mut impl Buf) -> Result<u16> {
    ensure(src, SHORT_LEN)?;
    Ok(src.get_u16_le())
}

pub fn get_i32(src: &mut impl Buf) -> Result<i32> {
    ensure(src, INT_LEN)?;
    Ok(src.get_i32_le())
}

pub fn get_i64(src: &mut impl Buf) -> Result<i64> {
    ensure(src, LONG_LEN)?;
    Ok(src.get_i64_le())
}
