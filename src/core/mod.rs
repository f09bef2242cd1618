//! Core traits, common domain types, and library-wide result/error structures.

use crate::market::MarketState;

pub mod serialization;
pub mod types;

pub use serialization::{from_json, to_json_pretty};
pub use types::*;

/// Standardized Greeks container returned by the analytic and tree engines.
///
/// Units are fixed across the crate:
/// - `theta` is per calendar day (annual theta / 365),
/// - `vega` is per 1.00 change in volatility (divide by 100 for "per vol point"),
/// - `rho` is per 1.00 change in the rate.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Greeks {
    /// First derivative to spot.
    pub delta: f64,
    /// Second derivative to spot.
    pub gamma: f64,
    /// Decay per calendar day.
    pub theta: f64,
    /// First derivative to volatility.
    pub vega: f64,
    /// First derivative to rate.
    pub rho: f64,
}

impl Greeks {
    /// All-zero Greeks, used for expired or zero-volatility states.
    pub const ZERO: Self = Self {
        delta: 0.0,
        gamma: 0.0,
        theta: 0.0,
        vega: 0.0,
        rho: 0.0,
    };
}

/// Common trait implemented by every priceable instrument.
pub trait Instrument: std::fmt::Debug {
    /// Returns a short type identifier for diagnostics.
    fn instrument_type(&self) -> &str;
}

/// Pricing engine abstraction over an instrument type.
pub trait PricingEngine<I: Instrument> {
    /// Prices an instrument under the provided market state.
    fn price(&self, instrument: &I, market: &MarketState) -> Result<PricingResult, PricingError>;
}

/// Unified engine result payload.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PricingResult {
    /// Present value.
    pub price: f64,
    /// Sensitivities of `price`.
    pub greeks: Greeks,
}

/// Errors surfaced by the pricers and engines.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Input validation error (unknown option type/position, bad contract or market fields).
    InvalidArgument(String),
    /// CRR risk-neutral up-probability fell outside `(0, 1)`.
    NumericallyInvalidTree {
        /// The offending probability (may be non-finite).
        probability: f64,
    },
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::NumericallyInvalidTree { probability } => write!(
                f,
                "numerically invalid tree: risk-neutral probability {probability} is outside (0, 1)"
            ),
        }
    }
}

impl std::error::Error for PricingError {}
