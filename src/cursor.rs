//! Byte scanner over a borrowed input buffer

use crate::common::{is_space, EOS};

/// Position-tracking view over the input.
///
/// `next` is the index of the byte the following [`Cursor::bump`] will
/// return, i.e. one past the last byte consumed. A fresh cursor sits
/// before byte 0.
pub(crate) struct Cursor<'a> {
    source: &'a [u8],
    next: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a [u8]) -> Self {
        Self { source, next: 0 }
    }

    /// Byte at `index`, or [`EOS`] once past the end
    #[inline]
    pub(crate) fn at(&self, index: usize) -> u8 {
        self.source.get(index).copied().unwrap_or(EOS)
    }

    /// Index of the most recently consumed byte
    pub(crate) fn offset(&self) -> usize {
        self.next.saturating_sub(1)
    }

    /// Consume one raw byte, whitespace included
    #[inline]
    pub(crate) fn bump(&mut self) -> u8 {
        let byte = self.at(self.next);
        self.next += 1;
        byte
    }

    /// Un-consume the last byte so the caller sees it again
    #[inline]
    pub(crate) fn step_back(&mut self) {
        self.next = self.next.saturating_sub(1);
    }

    /// Consume up to and including the next non-whitespace byte and return it.
    /// Returns [`EOS`] when the buffer runs out; the position then stays at the end.
    pub(crate) fn next_significant(&mut self) -> u8 {
        while self.next < self.source.len() {
            let byte = self.source[self.next];
            self.next += 1;
            if !is_space(byte) {
                return byte;
            }
        }
        EOS
    }

    /// Same as [`Cursor::next_significant`] without moving
    pub(crate) fn peek_significant(&self) -> u8 {
        self.source[self.next.min(self.source.len())..]
            .iter()
            .copied()
            .find(|&byte| !is_space(byte))
            .unwrap_or(EOS)
    }

    /// If the upcoming bytes spell `rest`, consume them
    pub(crate) fn eat_literal(&mut self, rest: &[u8]) -> bool {
        let matched = rest
            .iter()
            .enumerate()
            .all(|(i, &expected)| self.at(self.next + i) == expected);
        if matched {
            self.next += rest.len();
        }
        matched
    }

    /// Number of bytes before the next `byte`, or `None` if it never occurs
    pub(crate) fn scan_until(&self, byte: u8) -> Option<usize> {
        self.source
            .get(self.next..)?
            .iter()
            .position(|&candidate| candidate == byte)
    }

    /// Consume `len` bytes and hand back the slice they came from
    pub(crate) fn take(&mut self, len: usize) -> &'a [u8] {
        let start = self.next.min(self.source.len());
        let end = (start + len).min(self.source.len());
        self.next = end;
        &self.source[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_past_end_is_sentinel() {
        let cursor = Cursor::new(b"ab");
        assert_eq!(cursor.at(0), b'a');
        assert_eq!(cursor.at(1), b'b');
        assert_eq!(cursor.at(2), EOS);
        assert_eq!(cursor.at(usize::MAX), EOS);
    }

    #[test]
    fn test_next_significant_skips_whitespace() {
        let mut cursor = Cursor::new(b" \t\n\x0b\x0c\r[ 1");
        assert_eq!(cursor.next_significant(), b'[');
        assert_eq!(cursor.offset(), 6);
        assert_eq!(cursor.next_significant(), b'1');
        assert_eq!(cursor.offset(), 8);
        assert_eq!(cursor.next_significant(), EOS);
        assert_eq!(cursor.next_significant(), EOS);
    }

    #[test]
    fn test_empty_input() {
        let mut cursor = Cursor::new(b"");
        assert_eq!(cursor.peek_significant(), EOS);
        assert_eq!(cursor.next_significant(), EOS);
        assert_eq!(cursor.bump(), EOS);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let mut cursor = Cursor::new(b"  ]");
        assert_eq!(cursor.peek_significant(), b']');
        assert_eq!(cursor.peek_significant(), b']');
        assert_eq!(cursor.next_significant(), b']');
        assert_eq!(cursor.peek_significant(), EOS);
    }

    #[test]
    fn test_bump_and_step_back() {
        let mut cursor = Cursor::new(b"12");
        assert_eq!(cursor.bump(), b'1');
        assert_eq!(cursor.bump(), b'2');
        assert_eq!(cursor.bump(), EOS);
        cursor.step_back();
        assert_eq!(cursor.next_significant(), EOS);
    }

    #[test]
    fn test_eat_literal() {
        let mut cursor = Cursor::new(b"true,");
        assert_eq!(cursor.next_significant(), b't');
        assert!(!cursor.eat_literal(b"ruth"));
        assert!(cursor.eat_literal(b"rue"));
        assert_eq!(cursor.next_significant(), b',');

        let mut truncated = Cursor::new(b"tru");
        truncated.bump();
        assert!(!truncated.eat_literal(b"rue"));
    }

    #[test]
    fn test_scan_and_take() {
        let mut cursor = Cursor::new(b"\"abc\"x");
        cursor.bump();
        assert_eq!(cursor.scan_until(b'"'), Some(3));
        assert_eq!(cursor.take(3), b"abc");
        assert_eq!(cursor.bump(), b'"');
        assert_eq!(cursor.scan_until(b'"'), None);
    }
}
