//! Public API traits and types for the edsig library
//!
//! This crate provides the public API surface shared by the edsig crates:
//! the cross-crate error type and the traits a signature scheme implements.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{Signature, SignatureDerive, SignatureSerialize};

// Re-export trait modules for direct access
pub use traits::signature;
