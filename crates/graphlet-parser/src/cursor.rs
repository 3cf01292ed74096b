use crate::ParseError;
use crate::ParseErrorKind;

/// A single-pass byte-position cursor over immutable source text.
///
/// The cursor provides one byte of lookahead ([`Cursor::peek`]),
/// consumption ([`Cursor::advance`]), and literal matching
/// ([`Cursor::expect_literal`]). There is no backtracking and no token
/// buffer; the parser reads character classes directly off the cursor.
#[derive(Clone, Debug)]
pub struct Cursor<'src> {
    offset: usize,
    source: &'src str,
}

impl<'src> Cursor<'src> {
    /// The sentinel byte returned by [`Cursor::peek`] at end of input.
    pub const EOF_SENTINEL: u8 = 0;

    /// Consumes and returns the current byte.
    ///
    /// Unlike [`Cursor::peek`], calling this at end of input is an error
    /// ([`ParseErrorKind::UnexpectedEndOfInput`]).
    pub fn advance(&mut self) -> Result<u8, ParseError> {
        match self.source.as_bytes().get(self.offset) {
            Some(byte) => {
                self.offset += 1;
                Ok(*byte)
            },
            None => Err(self.error(ParseErrorKind::UnexpectedEndOfInput)),
        }
    }

    /// Builds a [`ParseError`] anchored at the current byte offset.
    pub fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            offset: self.offset,
        }
    }

    /// Consumes one byte, requiring it to equal `expected`.
    ///
    /// Fails with [`ParseErrorKind::UnexpectedCharacter`] on mismatch.
    pub fn expect(&mut self, expected: u8) -> Result<(), ParseError> {
        let found = self.advance()?;
        if found == expected {
            Ok(())
        } else {
            self.offset -= 1;
            Err(self.error(ParseErrorKind::UnexpectedCharacter {
                expected: expected as char,
                found: found as char,
            }))
        }
    }

    /// Consumes exactly `word.len()` bytes, requiring them to equal `word`.
    ///
    /// Fails with [`ParseErrorKind::UnexpectedWord`] on the first
    /// mismatching byte.
    pub fn expect_literal(&mut self, word: &str) -> Result<(), ParseError> {
        let start = self.offset;
        for expected in word.bytes() {
            let found = self.advance()?;
            if found != expected {
                self.offset = start;
                return Err(self.error(ParseErrorKind::UnexpectedWord {
                    expected: word.to_string(),
                }));
            }
        }
        Ok(())
    }

    pub fn new(source: &'src str) -> Self {
        Self {
            offset: 0,
            source,
        }
    }

    /// The current byte offset into the source text.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the current byte without consuming it, or
    /// [`Cursor::EOF_SENTINEL`] at end of input.
    pub fn peek(&self) -> u8 {
        self.source
            .as_bytes()
            .get(self.offset)
            .copied()
            .unwrap_or(Self::EOF_SENTINEL)
    }

    /// The source text between two byte offsets.
    ///
    /// Callers only slice at offsets adjacent to ASCII delimiter bytes,
    /// so the range always falls on UTF-8 boundaries.
    pub fn source_slice(&self, start: usize, end: usize) -> &'src str {
        &self.source[start..end]
    }

    /// Advances past space, tab, newline, and carriage-return bytes.
    ///
    /// No comment skipping in this subset.
    pub fn skip_insignificant_whitespace(&mut self) {
        while matches!(self.peek(), b' ' | b'\t' | b'\n' | b'\r') {
            self.offset += 1;
        }
    }
}
