pub mod core;
pub mod error;

pub use crate::core::queue::Queue;
pub use crate::error::{Error, Result};
