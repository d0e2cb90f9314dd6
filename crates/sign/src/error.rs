//! Error types for the signature crate

use core::fmt;

/// Errors that can occur during key decoding, scheme construction,
/// signing and verification
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input of the wrong size (key, seed or signature)
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    Length {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Bytes that do not encode a point of the curve
    #[error("{context}: not a valid Ed25519 point encoding")]
    Decode { context: &'static str },

    /// Signing mode other than RFC 8032
    #[error("Unsupported mode {0:?}: mode must be 'rfc8032'")]
    UnsupportedMode(String),

    /// Key that does not belong to Ed25519
    #[error("EdDSA can only be used with Ed25519 keys, got a {0} key")]
    KeyMismatch(String),

    /// Context longer than `dom2` can carry
    #[error("Context for EdDSA must not be longer than {max} bytes, got {actual}")]
    ContextTooLong { max: usize, actual: usize },

    /// Signing attempted with a public-only key
    #[error("Private key is needed to sign")]
    PrivateKeyRequired,

    /// Prehashed input that is not a SHA-512 digest
    #[error("Prehashed input must be a {expected}-byte SHA-512 digest, got {actual} bytes")]
    InvalidPrehash { expected: usize, actual: usize },

    /// Signature rejected by verification
    #[error("The signature is not authentic ({0})")]
    InvalidSignature(Rejection),
}

/// Which verification check rejected a signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// `R` does not decode to a curve point
    R,
    /// `s` is not below the group order
    S,
    /// The cofactored group equation does not hold
    Equation,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::R => write!(f, "R"),
            Rejection::S => write!(f, "S"),
            Rejection::Equation => write!(f, "equation"),
        }
    }
}

// Convert to api::Error
impl From<Error> for edsig_api::Error {
    fn from(err: Error) -> Self {
        let message = err.to_string();
        match err {
            Error::Length {
                context,
                expected,
                actual,
            } => edsig_api::Error::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Decode { context } => edsig_api::Error::InvalidKey { context, message },
            Error::UnsupportedMode(_) => edsig_api::Error::InvalidParameter {
                context: "mode",
                message,
            },
            Error::KeyMismatch(_) => edsig_api::Error::InvalidKey {
                context: "curve",
                message,
            },
            Error::ContextTooLong { .. } => edsig_api::Error::InvalidParameter {
                context: "context",
                message,
            },
            Error::PrivateKeyRequired => edsig_api::Error::InvalidKey {
                context: "sign",
                message,
            },
            Error::InvalidPrehash { .. } => edsig_api::Error::InvalidParameter {
                context: "prehash",
                message,
            },
            Error::InvalidSignature(_) => edsig_api::Error::InvalidSignature {
                context: "Ed25519 verify",
                message,
            },
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
