//! Ed25519 key codec
//!
//! Conversions between the raw 32-byte RFC 8032 encodings and the key types
//! the scheme works with. A public key is a curve point together with its
//! encoding; a private key is a seed together with everything derived from
//! it (clamped scalar, nonce prefix, public key).

use super::operations;
use crate::error::{Error, Result};
use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::scalar::Scalar;
use edsig_params::traditional::ed25519::{
    ED25519_CURVE_NAME, ED25519_PUBLIC_KEY_SIZE, ED25519_SECRET_KEY_SIZE,
};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

/// Anything a [`SignatureScheme`](super::SignatureScheme) can be bound to
///
/// A scheme accepts the key only when [`curve_name`](Self::curve_name) names
/// Ed25519 in the parameter table and the key exposes an Ed25519 public half.
pub trait EdwardsKey {
    /// Name of the curve the key belongs to
    fn curve_name(&self) -> &str;

    /// The Ed25519 public half, if this is an Ed25519 key
    fn public_half(&self) -> Option<&PublicKey>;

    /// The Ed25519 private half, if the key carries one
    fn private_half(&self) -> Option<&PrivateKey> {
        None
    }
}

/// Ed25519 public key: the point `A` and its compressed encoding
///
/// The encoding is kept alongside the point since both signing and
/// verification hash the raw bytes.
#[derive(Clone)]
pub struct PublicKey {
    point: EdwardsPoint,
    encoded: [u8; ED25519_PUBLIC_KEY_SIZE],
}

impl PublicKey {
    /// Decode a public key from its 32-byte compressed encoding
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let encoded: [u8; ED25519_PUBLIC_KEY_SIZE] =
            bytes.try_into().map_err(|_| Error::Length {
                context: "Ed25519 public key",
                expected: ED25519_PUBLIC_KEY_SIZE,
                actual: bytes.len(),
            })?;

        let point = operations::decode_point(&encoded).ok_or(Error::Decode {
            context: "Ed25519 public key",
        })?;

        Ok(PublicKey { point, encoded })
    }

    pub(crate) fn from_point(point: EdwardsPoint) -> Self {
        let encoded = operations::encode_point(&point);
        PublicKey { point, encoded }
    }

    /// The 32-byte compressed encoding
    pub fn to_bytes(&self) -> [u8; ED25519_PUBLIC_KEY_SIZE] {
        self.encoded
    }

    /// Borrow the 32-byte compressed encoding
    pub fn as_bytes(&self) -> &[u8; ED25519_PUBLIC_KEY_SIZE] {
        &self.encoded
    }

    pub(crate) fn point(&self) -> &EdwardsPoint {
        &self.point
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.encoded == other.encoded
    }
}

impl Eq for PublicKey {}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.encoded
    }
}

// Implement Debug for PublicKey without exposing key material
impl core::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PublicKey")
            .field("algorithm", &"Ed25519")
            .finish()
    }
}

impl EdwardsKey for PublicKey {
    fn curve_name(&self) -> &str {
        ED25519_CURVE_NAME
    }

    fn public_half(&self) -> Option<&PublicKey> {
        Some(self)
    }
}

/// Ed25519 private key
///
/// Owns the 32-byte seed and derives, once, at construction:
/// - the clamped secret scalar `d` (low half of SHA-512(seed))
/// - the nonce prefix (high half of SHA-512(seed))
/// - the public key `A = d·G`
///
/// Secret material is wiped on drop and never shown by `Debug`.
#[derive(Clone)]
pub struct PrivateKey {
    seed: [u8; ED25519_SECRET_KEY_SIZE],
    scalar: Scalar,
    prefix: [u8; 32],
    public: PublicKey,
}

impl PrivateKey {
    /// Build a private key from a 32-byte seed
    ///
    /// Every 32-byte string is a valid seed, so this cannot fail.
    pub fn from_seed(seed: &[u8; ED25519_SECRET_KEY_SIZE]) -> Self {
        let expanded = Zeroizing::new(operations::sha512(&[&seed[..]]));
        let (scalar_bytes, prefix) = operations::expand_seed(&expanded);

        let scalar = operations::scalar_from_bytes(&scalar_bytes);
        let public = PublicKey::from_point(operations::scalar_mult_base(&scalar));

        PrivateKey {
            seed: *seed,
            scalar,
            prefix: *prefix,
            public,
        }
    }

    /// Generate a fresh private key from a cryptographically secure RNG
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let mut seed = Zeroizing::new([0u8; ED25519_SECRET_KEY_SIZE]);
        rng.fill_bytes(&mut seed[..]);
        Self::from_seed(&seed)
    }

    /// The 32-byte seed, which is the RFC 8032 private key encoding
    pub fn seed(&self) -> &[u8; ED25519_SECRET_KEY_SIZE] {
        &self.seed
    }

    /// The public key derived from this private key
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    pub(crate) fn scalar(&self) -> &Scalar {
        &self.scalar
    }

    pub(crate) fn prefix(&self) -> &[u8; 32] {
        &self.prefix
    }
}

impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        self.seed.zeroize();
        self.scalar.zeroize();
        self.prefix.zeroize();
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

// Implement Debug without exposing key material
impl core::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("algorithm", &"Ed25519")
            .finish()
    }
}

impl EdwardsKey for PrivateKey {
    fn curve_name(&self) -> &str {
        ED25519_CURVE_NAME
    }

    fn public_half(&self) -> Option<&PublicKey> {
        Some(&self.public)
    }

    fn private_half(&self) -> Option<&PrivateKey> {
        Some(self)
    }
}

/// Decode a public key from its RFC 8032 encoding
///
/// Fails with [`Error::Length`] on input that is not 32 bytes and with
/// [`Error::Decode`] when the bytes are not a canonical point encoding.
pub fn decode_public_key(bytes: &[u8]) -> Result<PublicKey> {
    PublicKey::from_bytes(bytes)
}

/// Decode a private key from its RFC 8032 encoding (the raw seed)
///
/// The length is the only thing that can be checked: the seed is truly a
/// sequence of random bytes.
pub fn decode_private_key(bytes: &[u8]) -> Result<PrivateKey> {
    let seed: &[u8; ED25519_SECRET_KEY_SIZE] = bytes.try_into().map_err(|_| Error::Length {
        context: "Ed25519 private key",
        expected: ED25519_SECRET_KEY_SIZE,
        actual: bytes.len(),
    })?;

    Ok(PrivateKey::from_seed(seed))
}

/// Encode a public key: the exact inverse of [`decode_public_key`]
pub fn encode_public_key(key: &PublicKey) -> [u8; ED25519_PUBLIC_KEY_SIZE] {
    key.to_bytes()
}

/// Encode a private key as its seed
pub fn encode_private_key(key: &PrivateKey) -> Zeroizing<[u8; ED25519_SECRET_KEY_SIZE]> {
    Zeroizing::new(key.seed)
}
