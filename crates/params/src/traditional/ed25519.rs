//! Constants for Ed25519 (RFC 8032)

/// Canonical curve name used in the parameter table
pub const ED25519_CURVE_NAME: &str = "ed25519";

/// Size of an encoded public key (compressed Edwards point) in bytes
pub const ED25519_PUBLIC_KEY_SIZE: usize = 32;

/// Size of a private key (raw seed) in bytes
pub const ED25519_SECRET_KEY_SIZE: usize = 32;

/// Size of a signature (R || s) in bytes
pub const ED25519_SIGNATURE_SIZE: usize = 64;

/// Size of an encoded scalar in bytes
pub const ED25519_SCALAR_SIZE: usize = 32;

/// Size of the SHA-512 expansion of a seed (clamped scalar || prefix)
pub const ED25519_EXPANDED_KEY_SIZE: usize = 64;

/// Order `L` of the prime-order subgroup, 2^252 + 27742317777372353535851937790883648493,
/// little-endian
pub const ED25519_ORDER: [u8; ED25519_SCALAR_SIZE] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde,
    0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x10,
];

/// Domain separation prefix for Ed25519ctx and Ed25519ph (`dom2`)
pub const ED25519_DOM2_PREFIX: &[u8] = b"SigEd25519 no Ed25519 collisions";

/// Longest context string `dom2` can carry (its length is a single byte)
pub const ED25519_MAX_CONTEXT_SIZE: usize = 255;

/// The only supported signing mode identifier
pub const RFC8032_MODE: &str = "rfc8032";
