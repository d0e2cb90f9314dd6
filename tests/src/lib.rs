//! Testing utilities for the edsig library
//!
//! Holds the known-answer vectors shared by the integration tests.
