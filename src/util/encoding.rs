//! Charset-aware byte-to-string decoding for
//! [`Resource::read_string`](crate::resource::Resource::read_string).
//!
//! Decoding is total: input that cannot be represented in the resolved
//! encoding degrades to an empty string instead of failing.

/// Decodes `data` according to `charset` (a MIME charset label).
///
/// Resolution:
/// - `utf-16le`/`utf-16be`: fixed byte order; a matching BOM is stripped.
/// - `utf-16`: byte order taken from the BOM, little-endian when absent.
/// - Anything else (including [`None`] and `utf-8`): UTF-8, unless a
///   UTF-16 BOM is present, in which case the BOM wins.
pub(crate) fn decode(data: Vec<u8>, charset: Option<&str>) -> String {
    let charset = charset.map(str::trim).unwrap_or("");

    if charset.eq_ignore_ascii_case("utf-16le") {
        let data = data.strip_prefix(b"\xFF\xFE".as_slice()).unwrap_or(&data);
        from_utf16(data, u16::from_le_bytes)
    } else if charset.eq_ignore_ascii_case("utf-16be") {
        let data = data.strip_prefix(b"\xFE\xFF".as_slice()).unwrap_or(&data);
        from_utf16(data, u16::from_be_bytes)
    } else if charset.eq_ignore_ascii_case("utf-16") || is_utf16(&data) {
        from_utf16_bom(&data)
    } else {
        String::from_utf8(data).unwrap_or_default()
    }
}

/// Checks if a UTF-16 byte order mark (BOM) exists
fn is_utf16(data: &[u8]) -> bool {
    data.starts_with(b"\xFF\xFE") || data.starts_with(b"\xFE\xFF")
}

fn from_utf16_bom(data: &[u8]) -> String {
    // Little endian (le) applies when no BOM is present
    if data.starts_with(b"\xFE\xFF") {
        from_utf16(&data[2..], u16::from_be_bytes)
    } else if data.starts_with(b"\xFF\xFE") {
        from_utf16(&data[2..], u16::from_le_bytes)
    } else {
        from_utf16(data, u16::from_le_bytes)
    }
}

fn from_utf16(data: &[u8], endian: fn([u8; 2]) -> u16) -> String {
    let Ok(utf16) = data
        .chunks(2)
        .map(|chunk| chunk.try_into().map(endian))
        .collect::<Result<Vec<_>, _>>()
    else {
        // Uneven byte count
        return String::new();
    };

    String::from_utf16(&utf16).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    const UTF_8: &str = "UTF-8";
    const UTF_16_LE: &[u8] = b"\xFF\xFE\x55\x00\x54\x00\x46\x00\x2D\x00\x38\x00";
    const UTF_16_BE: &[u8] = b"\xFE\xFF\x00\x55\x00\x54\x00\x46\x00\x2D\x00\x38";
    const UTF_16_LE_NO_BOM: &[u8] = b"\x55\x00\x54\x00\x46\x00\x2D\x00\x38\x00";
    // Has a BOM although, does not have an even number of bytes
    const UTF_16_MALFORMED: &[u8] = b"\xFF\xFE\x55";

    #[test]
    fn test_is_utf16() {
        assert!(super::is_utf16(UTF_16_LE));
        assert!(super::is_utf16(UTF_16_BE));
        assert!(super::is_utf16(UTF_16_MALFORMED));
        assert!(!super::is_utf16(UTF_16_LE_NO_BOM));
        assert!(!super::is_utf16(UTF_8.as_ref()));
        assert!(!super::is_utf16(b""));
        assert!(!super::is_utf16(b"\xFF"));
        assert!(!super::is_utf16(b"\xFE"));
    }

    #[test]
    fn test_decode_default() {
        assert_eq!(UTF_8, super::decode(UTF_8.into(), None));
        assert_eq!(UTF_8, super::decode(UTF_8.into(), Some("utf-8")));
        // The BOM overrides the implied UTF-8
        assert_eq!(UTF_8, super::decode(UTF_16_LE.to_vec(), None));
        assert_eq!(UTF_8, super::decode(UTF_16_BE.to_vec(), None));
    }

    #[test]
    fn test_decode_explicit_charset() {
        assert_eq!(UTF_8, super::decode(UTF_16_LE.to_vec(), Some("UTF-16")));
        assert_eq!(UTF_8, super::decode(UTF_16_BE.to_vec(), Some("utf-16")));
        assert_eq!(
            UTF_8,
            super::decode(UTF_16_LE_NO_BOM.to_vec(), Some("utf-16le")),
        );
        assert_eq!(
            UTF_8,
            super::decode(UTF_16_LE_NO_BOM.to_vec(), Some(" UTF-16 ")),
        );
    }

    #[test]
    fn test_decode_degrades_to_empty() {
        // Invalid UTF-8
        assert_eq!("", super::decode(vec![0xC0, 0x80], None));
        // Uneven UTF-16 byte count
        assert_eq!("", super::decode(UTF_16_MALFORMED.to_vec(), None));
        // Unpaired surrogate
        assert_eq!(
            "",
            super::decode(b"\x00\xD8".to_vec(), Some("utf-16le")),
        );
    }
}
