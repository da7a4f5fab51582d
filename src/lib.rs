pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::LineTokenizer;
pub use config::CliConfig;
pub use core::validator::InputValidator;
pub use domain::model::{PendingValue, Verdict};
pub use utils::error::{PromptError, Result};
