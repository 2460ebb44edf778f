//! Whitespace- and comment-aware token reader for PNM ASCII headers.
//!
//! A `#` starts a comment that runs to the end of the line. The comment is
//! discarded even when it begins in the middle of a token, so `12#c\n` yields
//! `12`. Pixel data is never tokenized.

use crate::error::BitmapError;

pub(crate) struct Tokenizer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Byte offset of the next unread byte.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Next non-empty token. Fails with `UnexpectedEof` if the input ends
    /// first.
    pub(crate) fn next_token(&mut self) -> Result<&'a [u8], BitmapError> {
        loop {
            while self.pos < self.data.len() && self.data[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos >= self.data.len() {
                return Err(BitmapError::UnexpectedEof);
            }

            let start = self.pos;
            while self.pos < self.data.len() {
                let b = self.data[self.pos];
                if b.is_ascii_whitespace() || b == b'#' {
                    break;
                }
                self.pos += 1;
            }
            let token = &self.data[start..self.pos];
            if self.data.get(self.pos) == Some(&b'#') {
                self.skip_line();
            }
            if !token.is_empty() {
                return Ok(token);
            }
        }
    }

    /// Next token parsed as an unsigned decimal integer.
    pub(crate) fn next_u32(&mut self, what: &str) -> Result<u32, BitmapError> {
        let token = self.next_token()?;
        parse_u32(token).ok_or_else(|| {
            BitmapError::InvalidHeader(alloc::format!(
                "{what} '{}' is not a valid number",
                alloc::string::String::from_utf8_lossy(token)
            ))
        })
    }

    /// Consume exactly one byte, if any remain.
    pub(crate) fn skip_byte(&mut self) {
        if self.pos < self.data.len() {
            self.pos += 1;
        }
    }

    fn skip_line(&mut self) {
        while self.pos < self.data.len() {
            let b = self.data[self.pos];
            self.pos += 1;
            if b == b'\n' {
                break;
            }
        }
    }
}

pub(crate) fn parse_u32(token: &[u8]) -> Option<u32> {
    if token.is_empty() || !token.iter().all(u8::is_ascii_digit) {
        return None;
    }
    token.iter().try_fold(0u32, |acc, &d| {
        acc.checked_mul(10)?.checked_add(u32::from(d - b'0'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(data: &[u8]) -> alloc::vec::Vec<&[u8]> {
        let mut t = Tokenizer::new(data);
        let mut out = alloc::vec::Vec::new();
        while let Ok(tok) = t.next_token() {
            out.push(tok);
        }
        out
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(tokens(b"P5\n 3\t2\r\n255\n"), [b"P5" as &[u8], b"3", b"2", b"255"]);
    }

    #[test]
    fn skips_full_line_comments() {
        assert_eq!(
            tokens(b"P5\n# created by hand\n4 # width\n2\n255\n"),
            [b"P5" as &[u8], b"4", b"2", b"255"]
        );
    }

    #[test]
    fn comment_inside_token_truncates_it() {
        assert_eq!(tokens(b"12#c 99\n34"), [b"12" as &[u8], b"34"]);
    }

    #[test]
    fn eof_before_token_fails() {
        let mut t = Tokenizer::new(b"   # only a comment\n  ");
        assert!(matches!(t.next_token(), Err(BitmapError::UnexpectedEof)));
    }

    #[test]
    fn parse_numbers() {
        assert_eq!(parse_u32(b"10000"), Some(10000));
        assert_eq!(parse_u32(b"-1"), None);
        assert_eq!(parse_u32(b"12a"), None);
        assert_eq!(parse_u32(b"99999999999"), None);
    }
}
