//! Tree-based pricing engines.

pub mod binomial;

pub use binomial::{BinomialTreeEngine, crr_price, crr_price_with_exercise};
