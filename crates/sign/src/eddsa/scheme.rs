//! EdDSA signature scheme engine (RFC 8032, section 5.1)
//!
//! A [`SignatureScheme`] binds one Ed25519 key and one context string. The
//! same object signs and verifies in all three RFC 8032 flavours:
//!
//! | input                    | context   | flavour     | `dom2`              |
//! |--------------------------|-----------|-------------|---------------------|
//! | [`SignInput::Message`]   | empty     | Ed25519     | empty               |
//! | [`SignInput::Message`]   | non-empty | Ed25519ctx  | prefix, 0, len, ctx |
//! | [`SignInput::Prehashed`] | any       | Ed25519ph   | prefix, 1, len, ctx |

use super::ed25519::Ed25519Signature;
use super::key::{EdwardsKey, PrivateKey, PublicKey};
use super::operations;
use crate::error::{Error, Rejection, Result};
use core::str::FromStr;
use curve25519_dalek::scalar::Scalar;
use edsig_params::traditional::ed25519::{
    ED25519_CURVE_NAME, ED25519_SCALAR_SIZE, ED25519_SIGNATURE_SIZE, RFC8032_MODE,
};
use edsig_params::traditional::{curve_by_name, CurveParams};
use edsig_params::utils::hash::SHA512_OUTPUT_SIZE;
use sha2::{Digest, Sha512};
use zeroize::Zeroizing;

/// Signing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Deterministic EdDSA as specified in RFC 8032
    #[default]
    Rfc8032,
}

impl Mode {
    /// The identifier the mode is parsed from
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Rfc8032 => RFC8032_MODE,
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == RFC8032_MODE {
            Ok(Mode::Rfc8032)
        } else {
            Err(Error::UnsupportedMode(s.to_string()))
        }
    }
}

/// What gets signed: the message itself, or its SHA-512 digest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInput<'a> {
    /// PureEdDSA over the raw message bytes
    Message(&'a [u8]),
    /// HashEdDSA over a SHA-512 digest the caller already computed
    Prehashed(&'a [u8]),
}

impl<'a> SignInput<'a> {
    /// The `ph` flag of `dom2`
    pub fn is_prehashed(&self) -> bool {
        matches!(self, SignInput::Prehashed(_))
    }

    /// The bytes that enter both hashes (`PH(M)`)
    fn phm(&self) -> Result<&'a [u8]> {
        match *self {
            SignInput::Message(message) => Ok(message),
            SignInput::Prehashed(digest) if digest.len() == SHA512_OUTPUT_SIZE => Ok(digest),
            SignInput::Prehashed(digest) => Err(Error::InvalidPrehash {
                expected: SHA512_OUTPUT_SIZE,
                actual: digest.len(),
            }),
        }
    }
}

/// SHA-512 digest of `message`, for use with [`SignInput::Prehashed`]
pub fn prehash(message: &[u8]) -> [u8; SHA512_OUTPUT_SIZE] {
    operations::sha512(&[message])
}

/// Finish a running SHA-512 computation into a prehash
///
/// Lets callers hash large messages incrementally before signing them.
pub fn prehash_from(hasher: Sha512) -> [u8; SHA512_OUTPUT_SIZE] {
    hasher.finalize().into()
}

/// EdDSA signer/verifier bound to one key and one context
///
/// Immutable after construction, so a single instance can be shared
/// across threads and reused for any number of messages.
#[derive(Clone)]
pub struct SignatureScheme {
    curve: &'static CurveParams,
    public: PublicKey,
    private: Option<PrivateKey>,
    context: Vec<u8>,
    mode: Mode,
}

impl SignatureScheme {
    /// Create a scheme for `key`
    ///
    /// - `mode` must be `"rfc8032"`
    /// - `key` must be an Ed25519 key, public or private
    /// - `context` may be empty (plain Ed25519) and at most 255 bytes long
    pub fn new<K>(key: &K, mode: &str, context: &[u8]) -> Result<Self>
    where
        K: EdwardsKey + ?Sized,
    {
        let mode = mode.parse()?;
        Self::with_mode(key, mode, context)
    }

    /// Create a scheme for `key` with an already parsed mode
    pub fn with_mode<K>(key: &K, mode: Mode, context: &[u8]) -> Result<Self>
    where
        K: EdwardsKey + ?Sized,
    {
        let name = key.curve_name();
        let params = curve_by_name(name).filter(|c| c.name == ED25519_CURVE_NAME);
        let (curve, public) = match (params, key.public_half()) {
            (Some(curve), Some(public)) => (curve, public.clone()),
            _ => return Err(Error::KeyMismatch(name.to_string())),
        };

        if context.len() > curve.max_context_size {
            return Err(Error::ContextTooLong {
                max: curve.max_context_size,
                actual: context.len(),
            });
        }

        Ok(SignatureScheme {
            curve,
            public,
            private: key.private_half().cloned(),
            context: context.to_vec(),
            mode,
        })
    }

    /// Whether the bound key carries private material
    pub fn can_sign(&self) -> bool {
        self.private.is_some()
    }

    /// The context string every signature of this scheme is bound to
    pub fn context(&self) -> &[u8] {
        &self.context
    }

    /// The signing mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The public key signatures are made and checked against
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Compute the deterministic signature of `input`
    pub fn sign(&self, input: SignInput<'_>) -> Result<Ed25519Signature> {
        let ph = input.is_prehashed();
        let phm = input.phm()?;
        let private = self.private.as_ref().ok_or(Error::PrivateKeyRequired)?;

        let dom2 = self.dom2(ph);

        // r = SHA-512(dom2 || prefix || PH(M)) mod L
        let r_hash = Zeroizing::new(operations::sha512(&[
            &dom2[..],
            &private.prefix()[..],
            phm,
        ]));
        let r = Zeroizing::new(operations::reduce_512_to_scalar(&r_hash));

        // R = r·G
        let r_encoded = operations::encode_point(&operations::scalar_mult_base(&r));

        // k = SHA-512(dom2 || R || A || PH(M)) mod L
        let k = self.challenge(&dom2, &r_encoded, phm);

        // s = (r + k·d) mod L
        let s = *r + k * private.scalar();

        let mut signature = [0u8; ED25519_SIGNATURE_SIZE];
        signature[..32].copy_from_slice(&r_encoded);
        signature[32..].copy_from_slice(s.as_bytes());

        Ok(Ed25519Signature(signature))
    }

    /// Check that `signature` is an authentic signature of `input`
    ///
    /// The context and the kind of input must match what the signer used.
    pub fn verify(&self, input: SignInput<'_>, signature: &[u8]) -> Result<()> {
        if signature.len() != self.curve.signature_size {
            return Err(Error::Length {
                context: "Ed25519 signature",
                expected: self.curve.signature_size,
                actual: signature.len(),
            });
        }

        let ph = input.is_prehashed();
        let phm = input.phm()?;
        let dom2 = self.dom2(ph);

        let mut r_bytes = [0u8; 32];
        let mut s_bytes = [0u8; ED25519_SCALAR_SIZE];
        r_bytes.copy_from_slice(&signature[..32]);
        s_bytes.copy_from_slice(&signature[32..]);

        let r_point = operations::decode_point(&r_bytes)
            .ok_or(Error::InvalidSignature(Rejection::R))?;

        let s = operations::scalar_from_canonical_bytes(&s_bytes)
            .ok_or(Error::InvalidSignature(Rejection::S))?;

        let k = self.challenge(&dom2, &r_bytes, phm);

        // 8·s·G == 8·R + 8·k·A
        let lhs = operations::mul_by_cofactor(&operations::scalar_mult_base(&s));
        let ka = operations::scalar_mult(&k, self.public.point());
        let rhs = operations::mul_by_cofactor(&operations::point_add(&r_point, &ka));

        if !operations::points_equal(&lhs, &rhs) {
            return Err(Error::InvalidSignature(Rejection::Equation));
        }

        Ok(())
    }

    /// `dom2(ph, context)`; empty for plain Ed25519
    pub(crate) fn dom2(&self, ph: bool) -> Vec<u8> {
        if !ph && self.context.is_empty() {
            return Vec::new();
        }

        let prefix = self.curve.dom_prefix;
        let mut dom2 = Vec::with_capacity(prefix.len() + 2 + self.context.len());
        dom2.extend_from_slice(prefix);
        dom2.push(u8::from(ph));
        // Bounded by max_context_size (255) at construction
        dom2.push(self.context.len() as u8);
        dom2.extend_from_slice(&self.context);
        dom2
    }

    /// k = SHA-512(dom2 || R || A || PH(M)) mod L
    fn challenge(&self, dom2: &[u8], r_encoded: &[u8; 32], phm: &[u8]) -> Scalar {
        let k_hash = operations::sha512(&[
            dom2,
            &r_encoded[..],
            &self.public.as_bytes()[..],
            phm,
        ]);
        operations::reduce_512_to_scalar(&k_hash)
    }
}

impl core::fmt::Debug for SignatureScheme {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SignatureScheme")
            .field("mode", &self.mode)
            .field("context_len", &self.context.len())
            .field("can_sign", &self.can_sign())
            .finish()
    }
}
