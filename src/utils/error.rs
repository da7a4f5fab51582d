use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("input ended before an acceptable value was entered")]
    EndOfInput,
}

pub type Result<T> = std::result::Result<T, PromptError>;
