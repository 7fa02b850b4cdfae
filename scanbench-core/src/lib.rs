//! Scanbench Core
//!
//! This crate contains the protocol-agnostic building blocks:
//! - Little-endian fixed-width codec over byte buffers (`codec`)
//! - Stream helpers that read fixed-width fields off a socket (`io`)
//! - Error types (`error`)
//! - Endpoint parsing (`endpoint`)
//! - Connection options (`options`)
//! - TCP utilities (`tcp`)
//! - Timeout wrappers (`timeout`)

// The tcp module needs raw fd/socket access for socket configuration
#![cfg_attr(not(test), deny(unsafe_code))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
pub mod codec;
pub mod endpoint;
pub mod error;
pub mod io;
pub mod options;
pub mod tcp;
pub mod timeout;

pub mod prelude {
    pub use crate::codec::CodecError;
    pub use crate::endpoint::Endpoint;
    pub use crate::error::{Result, ScanBenchError};
    pub use crate::options::ConnectionOptions;
    pub use crate::tcp::enable_tcp_nodelay;
}
