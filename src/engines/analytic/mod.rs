//! Closed-form analytic pricing engines.

pub mod black_scholes;

pub use black_scholes::{BlackScholesEngine, VOL_FLOOR, bsm_greeks, bsm_price};
