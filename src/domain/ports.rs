use crate::utils::error::Result;

/// Source of whitespace-delimited input tokens.
///
/// Implementations keep track of the current line so a caller that hits a
/// bad token can throw away the rest of that line before reprompting.
pub trait TokenSource {
    /// Returns the next token, or `None` once the stream is exhausted.
    fn next_token(&mut self) -> Result<Option<String>>;

    /// Drops the unread remainder of the current line.
    fn discard_line(&mut self);
}
