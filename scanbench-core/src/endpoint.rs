//! Server endpoint addressing.
//!
//! Accepts `tcp://host:port` or a bare `host:port`. The host is kept as
//! written (names such as `localhost` are resolved at connect time).

use std::fmt;
use std::str::FromStr;

/// Default thin-client port.
pub const DEFAULT_PORT: u16 = 10800;

/// TCP endpoint of the server under test.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    host: String,
    port: u16,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Parse an endpoint from a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use scanbench_core::endpoint::Endpoint;
    ///
    /// let endpoint = Endpoint::parse("tcp://127.0.0.1:10800").unwrap();
    /// assert_eq!(endpoint.port(), 10800);
    ///
    /// let endpoint = Endpoint::parse("[::1]:10800").unwrap();
    /// assert_eq!(endpoint.host(), "::1");
    /// ```
    pub fn parse(s: &str) -> Result<Self, EndpointError> {
        s.parse()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub const fn port(&self) -> u16 {
        self.port
    }

    /// `host:port` form accepted by `TcpStream::connect`.
    pub fn authority(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new("localhost", DEFAULT_PORT)
    }
}

impl FromStr for Endpoint {
    type Err = EndpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let addr = match s.split_once("://") {
            Some(("tcp", rest)) => rest,
            Some((scheme, _)) => return Err(EndpointError::InvalidScheme(scheme.to_string())),
            None => s,
        };

        let (host, port) = addr
            .rsplit_once(':')
            .ok_or_else(|| EndpointError::MissingPort(addr.to_string()))?;

        let host = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);
        if host.is_empty() {
            return Err(EndpointError::EmptyHost(addr.to_string()));
        }

        let port = port
            .parse::<u16>()
            .map_err(|_| EndpointError::InvalidPort(port.to_string()))?;

        Ok(Self::new(host, port))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tcp://{}", self.authority())
    }
}

/// Errors that can occur when parsing endpoints.
#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    #[error("Invalid scheme in endpoint: {0} (expected tcp://)")]
    InvalidScheme(String),

    #[error("Missing port in endpoint: {0}")]
    MissingPort(String),

    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Empty host in endpoint: {0}")]
    EmptyHost(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_localhost() {
        let endpoint = Endpoint::default();
        assert_eq!(endpoint.host(), "localhost");
        assert_eq!(endpoint.port(), 10800);
        assert_eq!(endpoint.to_string(), "tcp://localhost:10800");
    }

    #[test]
    fn test_parse_with_scheme() {
        let endpoint = Endpoint::parse("tcp://127.0.0.1:5555").unwrap();
        assert_eq!(endpoint, Endpoint::new("127.0.0.1", 5555));
        assert_eq!(endpoint.authority(), "127.0.0.1:5555");
    }

    #[test]
    fn test_parse_bare_host_port() {
        let endpoint = Endpoint::parse("db-node:10800").unwrap();
        assert_eq!(endpoint.host(), "db-node");
    }

    #[test]
    fn test_parse_ipv6() {
        let endpoint = Endpoint::parse("tcp://[::1]:5555").unwrap();
        assert_eq!(endpoint.host(), "::1");
        assert_eq!(endpoint.authority(), "[::1]:5555");
    }

    #[test]
    fn test_invalid_scheme() {
        let result = Endpoint::parse("ipc:///tmp/test.sock");
        assert!(matches!(result, Err(EndpointError::InvalidScheme(_))));
    }

    #[test]
    fn test_invalid_port() {
        assert!(matches!(
            Endpoint::parse("tcp://localhost:port"),
            Err(EndpointError::InvalidPort(_))
        ));
        assert!(matches!(
            Endpoint::parse("localhost:70000"),
            Err(EndpointError::InvalidPort(_))
        ));
    }

    #[test]
    fn test_missing_port_and_host() {
        assert!(matches!(
            Endpoint::parse("localhost"),
            Err(EndpointError::MissingPort(_))
        ));
        assert!(matches!(
            Endpoint::parse(":10800"),
            Err(EndpointError::EmptyHost(_))
        ));
    }
}
