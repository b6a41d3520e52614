//! Gzip transport encoding module
//!
//! All fixture payloads travel gzip-compressed when the client advertises
//! support; the stored JSON on disk stays uncompressed.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

/// Compress `data` into a gzip member at the default level.
pub fn compress(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Whether an `Accept-Encoding` header value admits gzip.
///
/// Tolerates comma-separated lists ("gzip, deflate"); quality values are
/// not interpreted beyond token matching.
pub fn accepts_gzip(accept_encoding: &str) -> bool {
    accept_encoding
        .split(',')
        .any(|enc| enc.trim().split(';').next() == Some("gzip"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    #[test]
    fn test_compress_produces_gzip_member() {
        let compressed = compress(b"{\"items\": []}").expect("compress");
        // RFC 1952 magic bytes
        assert_eq!(&compressed[..2], &[0x1f, 0x8b]);

        let mut decoder = GzDecoder::new(compressed.as_slice());
        let mut plain = String::new();
        decoder.read_to_string(&mut plain).expect("decompress");
        assert_eq!(plain, "{\"items\": []}");
    }

    #[test]
    fn test_accepts_gzip() {
        assert!(accepts_gzip("gzip"));
        assert!(accepts_gzip("gzip, deflate"));
        assert!(accepts_gzip("deflate, gzip;q=0.8"));
        assert!(!accepts_gzip("identity"));
        assert!(!accepts_gzip(""));
    }
}
