//! Display glyphs for the calculator's character set.
//!
//! The calculator's character set is mostly ASCII, but a handful of byte
//! values stand for symbols that have no ASCII counterpart.

/// The "append" character, which prefixes text that is added to the alpha
/// register rather than replacing it.
pub const APPEND: u8 = 0x7F;

/// Translate a single calculator character into a displayable one.
pub fn glyph(byte: u8) -> char {
    match byte {
        0x00 => '◆',
        0x0C => 'μ',
        0x0D => '∠',
        0x1D => '≠',
        0x60 => '⊤',
        0x7E => 'Σ',
        APPEND => '⊢',
        _ => char::from(byte),
    }
}

/// Translate a run of calculator characters.
pub fn translate(bytes: &[u8]) -> String {
    bytes.iter().map(|b| glyph(*b)).collect()
}
