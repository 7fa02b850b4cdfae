//! Scan query request.

use scanbench_core::codec;

/// Scan query opcode.
pub const OP_QUERY_SCAN: i16 = 2000;

/// Body length of the scan query request.
pub const QUERY_BODY_LEN: i32 = 25;

/// Size of the encoded request, prefix included.
pub const QUERY_FRAME_LEN: usize = 4 + QUERY_BODY_LEN as usize;

/// Type marker for an absent (null) filter object.
pub const FILTER_NONE: u8 = 101;

/// Partition selector meaning "every partition".
pub const ALL_PARTITIONS: i32 = -1;

pub const DEFAULT_CACHE_NAME: &str = "TEST_CACHE";

/// Cache identifier derived from its name.
///
/// Polynomial hash with multiplier 31 over UTF-16 code units, wrapping in
/// `i32`. Servers key caches by this value, so it must match bit for bit.
pub fn cache_id(name: &str) -> i32 {
    name.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Everything in a scan query except the page size.
///
/// # Examples
///
/// ```
/// use scanbench_wire::ScanQuery;
///
/// let query = ScanQuery::default().with_cache_name("PERSONS").with_local(false);
/// let frame = query.encode(100);
/// assert_eq!(frame.len(), 29);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanQuery {
    pub request_id: i64,
    pub cache_name: String,
    pub flags: u8,
    pub partition: i32,
    pub local: bool,
}

impl Default for ScanQuery {
    fn default() -> Self {
        Self {
            request_id: 0,
            cache_name: DEFAULT_CACHE_NAME.to_string(),
            flags: 0,
            partition: ALL_PARTITIONS,
            local: true,
        }
    }
}

impl ScanQuery {
    #[must_use]
    pub fn with_request_id(mut self, request_id: i64) -> Self {
        self.request_id = request_id;
        self
    }

    #[must_use]
    pub fn with_cache_name(mut self, cache_name: impl Into<String>) -> Self {
        self.cache_name = cache_name.into();
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: u8) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_partition(mut self, partition: i32) -> Self {
        self.partition = partition;
        self
    }

    #[must_use]
    pub fn with_local(mut self, local: bool) -> Self {
        self.local = local;
        self
    }

    pub fn cache_id(&self) -> i32 {
        cache_id(&self.cache_name)
    }

    /// Encode the length-prefixed request for `page_size`.
    ///
    /// Layout:
    /// ```text
    /// [0..4]   25 (i32 LE)
    /// [4..6]   opcode 2000 (i16 LE)
    /// [6..14]  request id (i64 LE)
    /// [14..18] cache id (i32 LE)
    /// [18]     flags
    /// [19]     filter marker 101
    /// [20..24] page size (i32 LE)
    /// [24..28] partition (i32 LE)
    /// [28]     local flag
    /// ```
    pub fn encode(&self, page_size: i32) -> Vec<u8> {
        let mut buf = Vec::with_capacity(QUERY_FRAME_LEN);
        codec::put_i32(&mut buf, QUERY_BODY_LEN);
        codec::put_i16(&mut buf, OP_QUERY_SCAN);
        codec::put_i64(&mut buf, self.request_id);
        codec::put_i32(&mut buf, self.cache_id());
        codec::put_u8(&mut buf, self.flags);
        codec::put_u8(&mut buf, FILTER_NONE);
        codec::put_i32(&mut buf, page_size);
        codec::put_i32(&mut buf, self.partition);
        codec::put_u8(&mut buf, u8::from(self.local));
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_id_matches_string_hash() {
        assert_eq!(cache_id(""), 0);
        assert_eq!(cache_id("a"), 97);
        assert_eq!(cache_id("TEST_CACHE"), -838_655_627);
    }

    #[test]
    fn test_cache_id_uses_utf16_units() {
        // U+1F600 is a surrogate pair: 0xD83D, 0xDE00
        let expected = 0xD83D_i32.wrapping_mul(31).wrapping_add(0xDE00);
        assert_eq!(cache_id("\u{1F600}"), expected);
    }

    #[test]
    fn test_default_query_layout() {
        let bytes = ScanQuery::default().encode(50);
        assert_eq!(bytes.len(), QUERY_FRAME_LEN);

        let id = (-838_655_627i32).to_le_bytes();
        let mut expected = vec![
            0x19, 0x00, 0x00, 0x00, // length 25
            0xD0, 0x07, // opcode 2000
            0, 0, 0, 0, 0, 0, 0, 0, // request id
        ];
        expected.extend_from_slice(&id);
        expected.extend_from_slice(&[
            0x00, // flags
            0x65, // filter marker
            0x32, 0x00, 0x00, 0x00, // page size 50
            0xFF, 0xFF, 0xFF, 0xFF, // all partitions
            0x01, // local
        ]);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_length_prefix_matches_body() {
        let bytes = ScanQuery::default()
            .with_request_id(i64::MAX)
            .with_partition(7)
            .with_local(false)
            .encode(600);

        let mut src = &bytes[..];
        let len = codec::get_i32(&mut src).unwrap();
        assert_eq!(len as usize, src.len());
        assert_eq!(&bytes[6..14], &i64::MAX.to_le_bytes());
        assert_eq!(&bytes[24..28], &7i32.to_le_bytes());
        assert_eq!(bytes[28], 0);
    }
}
