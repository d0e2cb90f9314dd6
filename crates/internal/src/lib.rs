//! Internal utilities for the edsig library
//!
//! Not part of the public API surface; the signing crates depend on it for
//! comparisons that must not branch on secret or attacker-controlled data.

pub mod constant_time;
