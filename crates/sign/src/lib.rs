//! Digital Signature Schemes
//!
//! This crate implements EdDSA over Ed25519 as specified in RFC 8032.

pub mod eddsa;
pub mod error;

pub use eddsa::{Ed25519, Ed25519Signature, PrivateKey, PublicKey, SignInput, SignatureScheme};
pub use error::{Error, Rejection, Result};
