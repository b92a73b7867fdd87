//! Token-oriented input reading.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Whitespace-separated token reader over buffered input.
///
/// Values may arrive one per line or many per line; tokens are handed
/// out in entry order either way.
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the underlying handle fails.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}
