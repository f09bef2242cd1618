//! Pricing engine implementations.

pub mod analytic;
pub mod tree;
