//! Error handling shared across the edsig crates

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

impl std::error::Error for Error {}
