use crate::error::ParseError;
use chardetng::EncodingDetector;
use encoding_rs::Encoding;

/// Allow guessing UTF-8 encoding
const ALLOW_UTF8: bool = true;

/// Detect the character encoding of the given data.
/// A byte order mark wins, then strict UTF-8, then a statistical guess.
pub fn detect_charset(data: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(data) {
        return encoding;
    }

    if std::str::from_utf8(data).is_ok() {
        return encoding_rs::UTF_8;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(data, true);
    detector.guess(None, ALLOW_UTF8)
}

/// Whether the encoding stores text in two-byte code units
pub fn is_wide(encoding: &'static Encoding) -> bool {
    encoding == encoding_rs::UTF_16LE || encoding == encoding_rs::UTF_16BE
}

/// Convert data from the detected charset to UTF-8, dropping any BOM
pub fn convert_to_utf8(data: &[u8], encoding: &'static Encoding) -> Result<String, ParseError> {
    let (decoded, used, had_errors) = encoding.decode(data);
    if had_errors {
        return Err(ParseError::Encoding(format!(
            "invalid {} byte sequence",
            used.name()
        )));
    }
    Ok(decoded.into_owned())
}
