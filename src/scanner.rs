//! A small token scanner over an in-memory byte buffer.
//!
//! Tokens are maximal runs of non-whitespace bytes; any mix of spaces, tabs and newlines
//! separates them.

use crate::cust_error::ImportError;
use std::io::Read;

#[inline]
fn is_whitespace(c: u8) -> bool {
    c <= b' '
}

/// Hands out whitespace-separated tokens of `buf` one at a time.
pub struct Scanner {
    buf: Vec<u8>,
    pos: usize,
}

impl Scanner {

    pub fn new(buf: Vec<u8>) -> Self {
        Scanner { buf, pos: 0 }
    }

    /// Reads `reader` to its end and wraps the bytes.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, ImportError> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(Scanner::new(buf))
    }

    /// Returns the next token, or `None` at the end of the buffer.
    pub fn token(&mut self) -> Option<&[u8]> {
        let rest = &self.buf[self.pos..];
        let start = self.pos + rest.iter().position(|&c| !is_whitespace(c))?;
        let len = self.buf[start..]
            .iter()
            .position(|&c| is_whitespace(c))
            .unwrap_or(self.buf.len() - start);
        self.pos = start + len;
        Some(&self.buf[start..start + len])
    }

    /// Parses the next token as a signed decimal integer. `what` names the token for the error
    /// reported at the end of the input.
    pub fn next_int(&mut self, what: &'static str) -> Result<i64, ImportError> {
        self.try_next_int()?.ok_or(ImportError::UnexpectedEof(what))
    }

    /// Like `next_int`, but the end of the input is not an error.
    pub fn try_next_int(&mut self) -> Result<Option<i64>, ImportError> {
        match self.token() {
            Some(token) => {
                let token = std::str::from_utf8(token).map_err(|_| ImportError::NonUtf8Token)?;
                Ok(Some(token.parse::<i64>()?))
            }
            None => Ok(None),
        }
    }

    /// Number of bytes not yet consumed.
    pub fn remaining_bytes(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Counts and consumes all remaining tokens.
    pub fn skip_remaining(&mut self) -> usize {
        let mut count = 0;
        while self.token().is_some() {
            count += 1;
        }
        count
    }
}
