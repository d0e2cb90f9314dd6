//! Ed25519 signature type and the stateless `Ed25519` scheme
//!
//! [`Ed25519`] plugs plain Ed25519 (no context, no prehash) into the
//! workspace-wide [`Signature`](edsig_api::Signature) trait. Context-bound and
//! prehashed signing go through [`SignatureScheme`] directly.

use super::key::{PrivateKey, PublicKey};
use super::scheme::{Mode, SignInput, SignatureScheme};
use edsig_api::{error::Error as ApiError, Result as ApiResult, Signature as SignatureTrait};
use edsig_api::{SignatureDerive, SignatureSerialize};
use edsig_params::traditional::ed25519::{
    ED25519_PUBLIC_KEY_SIZE, ED25519_SECRET_KEY_SIZE, ED25519_SIGNATURE_SIZE,
};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Ed25519 signature scheme (RFC 8032 PureEdDSA)
pub struct Ed25519;

/// Ed25519 signature (64 bytes: R || s)
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ed25519Signature(pub [u8; ED25519_SIGNATURE_SIZE]);

impl core::fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ed25519Signature")
            .field("length", &self.0.len())
            .finish()
    }
}

impl Ed25519Signature {
    /// Create a signature from bytes
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let sig: [u8; ED25519_SIGNATURE_SIZE] =
            bytes.try_into().map_err(|_| ApiError::InvalidLength {
                context: "Ed25519Signature::from_bytes",
                expected: ED25519_SIGNATURE_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Ed25519Signature(sig))
    }

    /// Convert signature to bytes
    pub fn to_bytes(&self) -> [u8; ED25519_SIGNATURE_SIZE] {
        self.0
    }

    /// The encoded commitment point `R`
    pub fn r_bytes(&self) -> &[u8] {
        &self.0[..32]
    }

    /// The encoded response scalar `s`
    pub fn s_bytes(&self) -> &[u8] {
        &self.0[32..]
    }
}

impl AsRef<[u8]> for Ed25519Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Ed25519Signature> for [u8; ED25519_SIGNATURE_SIZE] {
    fn from(sig: Ed25519Signature) -> Self {
        sig.0
    }
}

impl SignatureTrait for Ed25519 {
    type PublicKey = PublicKey;
    type SecretKey = PrivateKey;
    type SignatureData = Ed25519Signature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "Ed25519"
    }

    /// Generate an Ed25519 key pair from a fresh 32-byte seed
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let secret = PrivateKey::generate(rng);
        Ok((secret.public_key().clone(), secret))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
        let scheme = SignatureScheme::with_mode(secret_key, Mode::Rfc8032, &[])?;
        Ok(scheme.sign(SignInput::Message(message))?)
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        let scheme = SignatureScheme::with_mode(public_key, Mode::Rfc8032, &[])?;
        Ok(scheme.verify(SignInput::Message(message), &signature.0)?)
    }
}

impl SignatureSerialize for Ed25519 {
    const PUBLIC_KEY_SIZE: usize = ED25519_PUBLIC_KEY_SIZE;
    const SECRET_KEY_SIZE: usize = ED25519_SECRET_KEY_SIZE;
    const SIGNATURE_SIZE: usize = ED25519_SIGNATURE_SIZE;

    fn serialize_public_key(key: &Self::PublicKey) -> Vec<u8> {
        key.to_bytes().to_vec()
    }

    fn deserialize_public_key(bytes: &[u8]) -> ApiResult<Self::PublicKey> {
        PublicKey::from_bytes(bytes)
            .map_err(|e| ApiError::from(e).with_context("Ed25519::deserialize_public_key"))
    }

    fn serialize_secret_key(key: &Self::SecretKey) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(key.seed().to_vec())
    }

    fn deserialize_secret_key(bytes: &[u8]) -> ApiResult<Self::SecretKey> {
        super::key::decode_private_key(bytes)
            .map_err(|e| ApiError::from(e).with_context("Ed25519::deserialize_secret_key"))
    }

    fn serialize_signature(sig: &Self::SignatureData) -> Vec<u8> {
        sig.0.to_vec()
    }

    fn deserialize_signature(bytes: &[u8]) -> ApiResult<Self::SignatureData> {
        Ed25519Signature::from_bytes(bytes)
    }
}

impl SignatureDerive for Ed25519 {
    const MIN_SEED_SIZE: usize = ED25519_SECRET_KEY_SIZE;

    /// Derive a key pair from the first 32 bytes of `seed`
    fn derive_keypair(seed: &[u8]) -> ApiResult<Self::KeyPair> {
        if seed.len() < Self::MIN_SEED_SIZE {
            return Err(ApiError::InvalidParameter {
                context: "Ed25519::derive_keypair",
                message: format!(
                    "Seed too short: minimum {} bytes required",
                    Self::MIN_SEED_SIZE
                ),
            });
        }

        let mut seed_array = Zeroizing::new([0u8; ED25519_SECRET_KEY_SIZE]);
        seed_array.copy_from_slice(&seed[..ED25519_SECRET_KEY_SIZE]);

        let secret = PrivateKey::from_seed(&seed_array);
        Ok((secret.public_key().clone(), secret))
    }

    fn derive_public_key(secret_key: &Self::SecretKey) -> ApiResult<Self::PublicKey> {
        Ok(secret_key.public_key().clone())
    }
}
