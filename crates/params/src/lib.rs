//! Constant values for the edsig library
//!
//! Everything here is a compile-time constant. The curve table in
//! [`traditional`] is the single source for per-curve parameters; nothing in
//! the workspace keeps mutable curve state.

#![no_std]

pub mod traditional;
pub mod utils;

pub use traditional::{curve_by_name, CurveParams, CURVES};
