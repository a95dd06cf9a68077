//! Input utility functions

use crate::memory::REGISTER_SIZE;

/// Parse a string of hex digit pairs into bytes.
///
/// Yields `None` if the string has an odd number of digits or contains
/// anything other than hex digits.
pub fn parse_hex_bytes(text: &str) -> Option<Vec<u8>> {
    if text.len() % 2 != 0 || !text.is_ascii() {
        return None;
    }

    (0..text.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&text[i..i + 2], 16).ok())
        .collect()
}

/// Parse the 14 hex digits of a single register.
pub fn parse_register(text: &str) -> Option<[u8; REGISTER_SIZE]> {
    if text.len() != REGISTER_SIZE * 2 {
        return None;
    }

    let mut reg = [0; REGISTER_SIZE];
    reg.copy_from_slice(&parse_hex_bytes(text)?);

    Some(reg)
}

/// Render bytes as uppercase hex digit pairs.
pub fn format_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_bytes() {
        assert_eq!(parse_hex_bytes("C40129"), Some(vec![0xC4, 0x01, 0x29]));
        assert_eq!(parse_hex_bytes("c4"), Some(vec![0xC4]));
        assert_eq!(parse_hex_bytes(""), Some(vec![]));
        assert_eq!(parse_hex_bytes("C4012"), None);
        assert_eq!(parse_hex_bytes("ZZ"), None);
        assert_eq!(parse_hex_bytes("+1"), None);
    }

    #[test]
    fn registers() {
        assert_eq!(
            parse_register("0123456789ABCD"),
            Some([0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD])
        );
        assert_eq!(parse_register("0123456789ABC"), None);
        assert_eq!(format_hex(&[0x01, 0xAB]), "01AB");
    }
}
