//! Traits implemented by the edsig schemes

pub mod signature;

pub use signature::{Signature, SignatureDerive, SignatureSerialize};
