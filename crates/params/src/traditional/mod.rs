//! Constants for traditional signature algorithms

pub mod ed25519;

use ed25519::*;

/// Per-curve parameters the signature engine is driven by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    /// Canonical lower-case curve name
    pub name: &'static str,

    /// Signature size in bytes
    pub signature_size: usize,

    /// Longest context string a signature can be bound to
    pub max_context_size: usize,

    /// Domain separation prefix hashed in front of context-bound and
    /// prehashed signatures
    pub dom_prefix: &'static [u8],
}

/// Parameters of Ed25519
pub const ED25519: CurveParams = CurveParams {
    name: ED25519_CURVE_NAME,
    signature_size: ED25519_SIGNATURE_SIZE,
    max_context_size: ED25519_MAX_CONTEXT_SIZE,
    dom_prefix: ED25519_DOM2_PREFIX,
};

/// Every curve known to the workspace
pub static CURVES: &[CurveParams] = &[ED25519];

/// Look up a curve by name, ignoring ASCII case
pub fn curve_by_name(name: &str) -> Option<&'static CurveParams> {
    CURVES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}
