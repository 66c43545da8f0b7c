pub mod config;
pub mod error;
pub mod evaluator;
pub mod time_slot;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
