pub mod validator;

pub use crate::domain::model::{PendingValue, Verdict};
pub use crate::domain::ports::TokenSource;
pub use crate::utils::error::Result;
