//! Byte tokens shared between encoder and decoder

/// Returned by bounds-checked reads past the end of the input (ASCII End of Text)
pub(crate) const EOS: u8 = 0x03;

pub(crate) const LEFT_BRACKET: u8 = b'[';
pub(crate) const RIGHT_BRACKET: u8 = b']';
pub(crate) const LEFT_BRACE: u8 = b'{';
pub(crate) const RIGHT_BRACE: u8 = b'}';
pub(crate) const QUOTE: u8 = b'"';
pub(crate) const COMMA: u8 = b',';
pub(crate) const COLON: u8 = b':';
pub(crate) const DOT: u8 = b'.';
pub(crate) const HYPHEN: u8 = b'-';

pub(crate) const TRUE: &[u8] = b"true";
pub(crate) const FALSE: &[u8] = b"false";
pub(crate) const NULL: &[u8] = b"null";

/// Whitespace as JSON sees it: tab, LF, VT, FF, CR and space. Nothing from Unicode.
#[inline]
pub(crate) fn is_space(byte: u8) -> bool {
    matches!(byte, b'\t' | b'\n' | 0x0b | 0x0c | b'\r' | b' ')
}
