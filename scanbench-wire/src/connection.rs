//! Per-sample connection.
//!
//! A `Connection` owns its `TcpStream`; dropping it closes the socket, so a
//! failed handshake or a short read never leaks the descriptor.

use crate::handshake::{perform_handshake, ProtocolVersion};
use crate::query::ScanQuery;
use compio::io::AsyncWrite;
use compio::net::TcpStream;
use scanbench_core::endpoint::Endpoint;
use scanbench_core::error::Result;
use scanbench_core::io::read_i32;
use scanbench_core::options::ConnectionOptions;
use scanbench_core::tcp::configure_stream;
use scanbench_core::timeout::{connect_with_timeout, write_all_with_timeout};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

pub struct Connection {
    stream: TcpStream,
    endpoint: Endpoint,
    options: ConnectionOptions,
}

impl Connection {
    /// Open a TCP connection without handshaking.
    pub async fn connect(endpoint: &Endpoint, options: &ConnectionOptions) -> Result<Self> {
        let stream = connect_with_timeout(&endpoint.authority(), options.connect_timeout).await?;
        configure_stream(&stream, options)?;
        debug!("Connected to {}", endpoint);

        Ok(Self {
            stream,
            endpoint: endpoint.clone(),
            options: options.clone(),
        })
    }

    /// Connect and complete the handshake.
    pub async fn open(
        endpoint: &Endpoint,
        options: &ConnectionOptions,
        version: ProtocolVersion,
    ) -> Result<Self> {
        let mut conn = Self::connect(endpoint, options).await?;
        conn.handshake(version).await?;
        Ok(conn)
    }

    pub async fn handshake(&mut self, version: ProtocolVersion) -> Result<()> {
        perform_handshake(&mut self.stream, version, &self.options).await?;
        Ok(())
    }

    /// Write the scan query for `page_size` and flush it.
    pub async fn send_scan_query(&mut self, query: &ScanQuery, page_size: i32) -> Result<()> {
        let frame = query.encode(page_size);
        write_all_with_timeout(&mut self.stream, frame, self.options.send_timeout, "scan query")
            .await?;
        trace!("Sent scan query (page size {})", page_size);
        Ok(())
    }

    /// Block until the 4-byte result length arrives.
    ///
    /// The result payload that follows is left unread.
    pub async fn recv_result_length(&mut self) -> Result<i32> {
        read_i32(&mut self.stream, self.options.recv_timeout, "result length").await
    }

    /// Send a scan query and time the wait for the result length.
    ///
    /// The clock starts once the flush returns and stops when the length
    /// prefix has been read.
    pub async fn measure_scan_query(
        &mut self,
        query: &ScanQuery,
        page_size: i32,
    ) -> Result<Duration> {
        self.send_scan_query(query, page_size).await?;
        let start = Instant::now();
        let len = self.recv_result_length().await?;
        let elapsed = start.elapsed();
        trace!("Result length {} after {:?}", len, elapsed);
        Ok(elapsed)
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Shut down the write half and release the socket.
    pub async fn close(mut self) {
        if let Err(e) = self.stream.shutdown().await {
            debug!("Shutdown of {} failed: {}", self.endpoint, e);
        }
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        trace!("Released connection to {}", self.endpoint);
    }
}
