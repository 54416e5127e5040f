use crate::types::constants::{BINARY_SCAN_BYTES, BINARY_UNPRINTABLE_PERCENT};
use encoding_rs::Encoding;

/// Check if file content appears to be binary.
/// Only the first line after any BOM is inspected, capped at
/// `BINARY_SCAN_BYTES`.
pub fn is_binary_data(data: &[u8]) -> bool {
    let body = match Encoding::for_bom(data) {
        Some((_, bom_len)) => &data[bom_len..],
        None => data,
    };

    let (scanned, unprintable) = body
        .iter()
        .take_while(|&&b| b != b'\n')
        .take(BINARY_SCAN_BYTES)
        .fold((0usize, 0usize), |(scanned, unprintable), &b| {
            (scanned + 1, unprintable + usize::from(is_unprintable(b)))
        });

    scanned > 0 && unprintable * 100 >= scanned * BINARY_UNPRINTABLE_PERCENT
}

fn is_unprintable(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B..=0x0C | 0x0E..=0x1F | 0x7F | 0xFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_not_binary() {
        assert!(!is_binary_data(b"timestamp,level,message\n"));
        assert!(!is_binary_data(b"a\tb\tc\r\n"));
        assert!(!is_binary_data(b""));
    }

    #[test]
    fn test_binary_detected() {
        let binary = vec![0x00, 0x01, 0x02, 0x03, 0x04, 0x05];
        assert!(is_binary_data(&binary));

        let mut gzip_like = vec![0x1F, 0x8B, 0x08, 0x00];
        gzip_like.extend_from_slice(b"abcd");
        assert!(is_binary_data(&gzip_like));
    }

    #[test]
    fn test_latin1_is_not_binary() {
        assert!(!is_binary_data(b"caf\xE9,cr\xE8me\n"));
    }

    #[test]
    fn test_scan_stops_at_first_line() {
        let mut data = b"timestamp,level\n".to_vec();
        data.extend_from_slice(&[0x00; 64]);
        assert!(!is_binary_data(&data));
    }

    #[test]
    fn test_bom_only_is_not_binary() {
        assert!(!is_binary_data(&[0xEF, 0xBB, 0xBF]));
    }
}
