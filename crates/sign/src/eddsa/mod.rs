//! EdDSA (Edwards-curve Digital Signature Algorithm) over Ed25519
//!
//! This module implements RFC 8032 Ed25519 in its three flavours: plain
//! Ed25519, Ed25519ctx (bound to a context string) and Ed25519ph (over a
//! SHA-512 prehash of the message).
//!
//! - [`key`]: the key codec, between 32-byte encodings and key types
//! - [`SignatureScheme`]: the signing and verification engine
//! - [`Ed25519`]: the stateless plain-mode scheme behind the
//!   [`edsig_api::Signature`] trait
//!
//! Signing is deterministic: the nonce is derived from the private key and
//! the message, so no randomness is needed (or used) at signing time.
//!
//! # Example
//!
//! ```
//! use edsig_sign::eddsa::{decode_private_key, prehash, SignInput, SignatureScheme};
//!
//! # fn main() -> edsig_sign::Result<()> {
//! let key = decode_private_key(&[42u8; 32])?;
//! let scheme = SignatureScheme::new(&key, "rfc8032", b"example.org v1")?;
//!
//! let digest = prehash(b"a long document");
//! let signature = scheme.sign(SignInput::Prehashed(&digest))?;
//!
//! assert!(scheme.verify(SignInput::Prehashed(&digest), signature.as_ref()).is_ok());
//! assert!(scheme.verify(SignInput::Message(b"a long document"), signature.as_ref()).is_err());
//! # Ok(())
//! # }
//! ```

mod ed25519;
pub mod key;
mod operations;
mod scheme;

pub use ed25519::{Ed25519, Ed25519Signature};
pub use key::{
    decode_private_key, decode_public_key, encode_private_key, encode_public_key, EdwardsKey,
    PrivateKey, PublicKey,
};
pub use scheme::{prehash, prehash_from, Mode, SignInput, SignatureScheme};
