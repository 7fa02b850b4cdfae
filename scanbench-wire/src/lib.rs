//! Thin-client wire protocol used by scanbench.
//!
//! Every message is a little-endian `i32` length prefix followed by a
//! fixed-size body:
//!
//! ```text
//! Handshake request   [len=8 ][1][major:u16][minor:u16][patch:u16][2]
//! Handshake response  [len=1 ][result:u8]            result 1 = accepted
//! Scan query request  [len=25][op=2000:i16][req_id:i64][cache_id:i32][flags:u8]
//!                     [filter=101:u8][page_size:i32][partition=-1:i32][local:u8]
//! Scan query response [len:i32] ...                  only the prefix is read
//! ```
//!
//! Message construction and parsing are sans-IO (`handshake`, `query`);
//! `connection` drives them over a compio `TcpStream`.

pub mod connection;
pub mod handshake;
pub mod query;

pub use connection::Connection;
pub use handshake::{HandshakeRequest, HandshakeResponse, ProtocolVersion};
pub use query::ScanQuery;
