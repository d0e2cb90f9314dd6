//! # edsig
//!
//! EdDSA signatures over Ed25519 as specified in RFC 8032, in the pure,
//! context-bound (Ed25519ctx) and prehashed (Ed25519ph) flavours.
//!
//! ## Features
//!
//! - `sign` (default): the Ed25519 key codec and signature scheme
//! - `full`: all of the above plus a re-export of `rand`
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`edsig-api`]: error types and the traits every scheme implements
//! - [`edsig-internal`]: constant-time helpers
//! - [`edsig-params`]: curve parameter table
//! - [`edsig-sign`]: the EdDSA key codec and signature engine
//!
//! ## Example
//!
//! ```
//! use edsig::prelude::*;
//!
//! # fn main() -> edsig::sign::Result<()> {
//! let key = decode_private_key(&[7u8; 32])?;
//! let scheme = SignatureScheme::new(&key, "rfc8032", b"my protocol")?;
//!
//! let signature = scheme.sign(SignInput::Message(b"hello"))?;
//! scheme.verify(SignInput::Message(b"hello"), signature.as_ref())?;
//! # Ok(())
//! # }
//! ```

// Core re-exports (always available)
pub use edsig_api as api;
pub use edsig_internal as internal;
pub use edsig_params as params;

// Feature-gated re-exports
#[cfg(feature = "sign")]
pub use edsig_sign as sign;

#[cfg(feature = "full")]
pub use rand;

/// Common imports for edsig users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Signature, SignatureSerialize};

    #[cfg(feature = "sign")]
    pub use crate::sign::eddsa::{
        decode_private_key, decode_public_key, encode_private_key, encode_public_key, prehash,
        Ed25519, Ed25519Signature, EdwardsKey, Mode, PrivateKey, PublicKey, SignInput,
        SignatureScheme,
    };
}
