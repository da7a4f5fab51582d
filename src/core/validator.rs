use std::io::Write;

use crate::domain::model::{PendingValue, Verdict};
use crate::domain::ports::TokenSource;
use crate::utils::error::{PromptError, Result};

pub const PROMPT: &str = "Please enter a number above 10: ";

/// The read-validate-reprompt loop.
///
/// Generic over the token source and the output sink so tests can drive it
/// with in-memory buffers instead of a terminal.
pub struct InputValidator<S: TokenSource, W: Write> {
    source: S,
    output: W,
}

impl<S: TokenSource, W: Write> InputValidator<S, W> {
    pub fn new(source: S, output: W) -> Self {
        Self { source, output }
    }

    /// Prompts until a value strictly above the threshold is read, then
    /// returns it.
    ///
    /// A token that does not parse as a number clears the rest of its line
    /// before reprompting. Returns `EndOfInput` if the stream runs dry
    /// before an acceptable value shows up.
    pub fn run(&mut self) -> Result<f64> {
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let token = match self.source.next_token()? {
                Some(token) => token,
                None => return Err(PromptError::EndOfInput),
            };

            let Some(candidate) = PendingValue::parse(&token) else {
                tracing::debug!(token = %token, "not a number, clearing rest of line");
                self.source.discard_line();
                writeln!(self.output, "Invalid input. Please enter a valid number.")?;
                continue;
            };

            match candidate.judge() {
                Verdict::Accepted(value) => {
                    tracing::debug!(value, "value accepted");
                    writeln!(self.output, "Thanks, that works! {value:.2} is a great choice!")?;
                    self.output.flush()?;
                    return Ok(value);
                }
                Verdict::Rejected(value) => {
                    tracing::debug!(value, "value at or below threshold");
                    writeln!(self.output, "That doesn't fit! Try again!")?;
                }
            }
        }
    }
}
