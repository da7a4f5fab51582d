use std::io::BufRead;

use crate::domain::ports::TokenSource;
use crate::utils::error::Result;

/// Whitespace-delimited token reader over a buffered stream.
///
/// Buffers one line at a time so `discard_line` can drop the unread
/// remainder of the current line without blocking for more input.
pub struct LineTokenizer<R: BufRead> {
    reader: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> LineTokenizer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
        }
    }

    fn refill(&mut self) -> Result<bool> {
        self.line.clear();
        self.pos = 0;
        let bytes_read = self.reader.read_line(&mut self.line)?;
        Ok(bytes_read > 0)
    }
}

impl<R: BufRead> TokenSource for LineTokenizer<R> {
    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            let rest = &self.line[self.pos..];
            let trimmed = rest.trim_start();
            if trimmed.is_empty() {
                if !self.refill()? {
                    return Ok(None);
                }
                continue;
            }

            self.pos += rest.len() - trimmed.len();
            let end = trimmed
                .find(char::is_whitespace)
                .unwrap_or(trimmed.len());
            let token = trimmed[..end].to_string();
            self.pos += end;
            return Ok(Some(token));
        }
    }

    fn discard_line(&mut self) {
        self.pos = self.line.len();
    }
}
