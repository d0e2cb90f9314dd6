//! Hash and curve operations used by the Ed25519 scheme
//!
//! The scheme logic only talks to SHA-512 and the Edwards group through this
//! module, so the arithmetic backend stays a detail of this file.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;
use edsig_internal::constant_time::ct_eq;
use edsig_params::traditional::ed25519::{
    ED25519_EXPANDED_KEY_SIZE, ED25519_PUBLIC_KEY_SIZE, ED25519_SCALAR_SIZE,
};
use edsig_params::utils::hash::SHA512_OUTPUT_SIZE;
use sha2::{Digest, Sha512};
use zeroize::Zeroizing;

/// SHA-512 over the concatenation of `chunks`
pub fn sha512(chunks: &[&[u8]]) -> [u8; SHA512_OUTPUT_SIZE] {
    let mut hasher = Sha512::new();
    for chunk in chunks {
        hasher.update(chunk);
    }
    hasher.finalize().into()
}

/// Apply RFC 8032 clamping to the low half of an expanded seed
pub fn clamp(scalar: &mut [u8; ED25519_SCALAR_SIZE]) {
    scalar[0] &= 248; // Clear bits 0, 1, 2
    scalar[31] &= 127; // Clear bit 255
    scalar[31] |= 64; // Set bit 254
}

/// Split a seed expansion into its clamped scalar bytes and nonce prefix
pub fn expand_seed(
    expanded: &[u8; ED25519_EXPANDED_KEY_SIZE],
) -> (Zeroizing<[u8; ED25519_SCALAR_SIZE]>, Zeroizing<[u8; 32]>) {
    let mut scalar = Zeroizing::new([0u8; ED25519_SCALAR_SIZE]);
    let mut prefix = Zeroizing::new([0u8; 32]);
    scalar.copy_from_slice(&expanded[..32]);
    prefix.copy_from_slice(&expanded[32..]);
    clamp(&mut scalar);
    (scalar, prefix)
}

/// Interpret a 64-byte hash output as a little-endian integer mod L
pub fn reduce_512_to_scalar(hash: &[u8; SHA512_OUTPUT_SIZE]) -> Scalar {
    Scalar::from_bytes_mod_order_wide(hash)
}

/// Interpret 32 bytes as a little-endian integer mod L
pub fn scalar_from_bytes(bytes: &[u8; ED25519_SCALAR_SIZE]) -> Scalar {
    Scalar::from_bytes_mod_order(*bytes)
}

/// Decode a scalar that must already be reduced: `None` unless the
/// little-endian integer is strictly below L
pub fn scalar_from_canonical_bytes(bytes: &[u8; ED25519_SCALAR_SIZE]) -> Option<Scalar> {
    Scalar::from_canonical_bytes(*bytes).into()
}

/// `scalar`·G
pub fn scalar_mult_base(scalar: &Scalar) -> EdwardsPoint {
    EdwardsPoint::mul_base(scalar)
}

/// `scalar`·`point`
pub fn scalar_mult(scalar: &Scalar, point: &EdwardsPoint) -> EdwardsPoint {
    scalar * point
}

/// `a` + `b`
pub fn point_add(a: &EdwardsPoint, b: &EdwardsPoint) -> EdwardsPoint {
    a + b
}

/// 8·`point`
pub fn mul_by_cofactor(point: &EdwardsPoint) -> EdwardsPoint {
    point.mul_by_cofactor()
}

/// Compressed encoding: little-endian y with the sign of x in bit 255
pub fn encode_point(point: &EdwardsPoint) -> [u8; ED25519_PUBLIC_KEY_SIZE] {
    point.compress().to_bytes()
}

/// Decode a compressed point, accepting canonical encodings only
///
/// Returns `None` when x cannot be recovered, when y is not reduced mod p, or
/// when x = 0 is paired with a set sign bit.
pub fn decode_point(bytes: &[u8; ED25519_PUBLIC_KEY_SIZE]) -> Option<EdwardsPoint> {
    let point = CompressedEdwardsY(*bytes).decompress()?;

    if !ct_eq(encode_point(&point), bytes) {
        return None;
    }

    Some(point)
}

/// Constant-time point equality via the canonical encodings
pub fn points_equal(a: &EdwardsPoint, b: &EdwardsPoint) -> bool {
    ct_eq(encode_point(a), encode_point(b))
}
