//! Constants for hash functions

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;
