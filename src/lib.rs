//! OptionRisk prices and risk-manages vanilla equity options: Black-Scholes-Merton closed
//! forms, Cox-Ross-Rubinstein binomial trees for American exercise, finite-difference
//! tree Greeks, implied-volatility inversion and single-leg expiry payoffs.
//!
//! Everything is a pure function over explicit scalar inputs in decimal units
//! (`0.05` is 5%). Maturities are year fractions; theta is reported per calendar day and
//! vega/rho per 1.00 move in volatility/rate.
//!
//! References used across modules include:
//! - Hull, *Options, Futures, and Other Derivatives* (11th ed.), Ch. 13, 15, 19.
//! - Cox, Ross and Rubinstein (1979) for the binomial lattice.
//! - Brent (1973) for bracketed root finding.
//!
//! Numerical considerations:
//! - Expired contracts and volatilities below [`engines::analytic::VOL_FLOOR`] take
//!   closed-form fallbacks instead of dividing by zero.
//! - Trees whose risk-neutral probability leaves `(0, 1)` are rejected with
//!   [`core::PricingError::NumericallyInvalidTree`].
//! - Tree Greeks rebuild the full lattice for every bump, so they cost several
//!   `O(N^2)` rollbacks.
//!
//! # Feature Flags
//! - `parallel`: prices scenario-grid rows on the Rayon pool.
//!
//! # Quick Start
//! Price a Black-Scholes-Merton call:
//! ```rust
//! use optionrisk::core::OptionType;
//! use optionrisk::engines::analytic::bsm_price;
//!
//! let px = bsm_price(OptionType::Call, 100.0, 100.0, 0.05, 0.0, 0.20, 1.0);
//! assert!(px > 10.0 && px < 11.0);
//! ```
//!
//! Compute Greeks:
//! ```rust
//! use optionrisk::core::OptionType;
//! use optionrisk::engines::analytic::bsm_greeks;
//!
//! let g = bsm_greeks(OptionType::Call, 100.0, 100.0, 0.05, 0.0, 0.20, 1.0);
//! assert!(g.delta > 0.0 && g.gamma > 0.0 && g.vega > 0.0);
//! ```
//!
//! Price an American put on a tree and bump it for Greeks:
//! ```rust
//! use optionrisk::core::OptionType;
//! use optionrisk::engines::tree::crr_price;
//! use optionrisk::greeks::{DEFAULT_BUMP, crr_greeks};
//!
//! let px = crr_price(OptionType::Put, 100.0, 100.0, 0.05, 0.0, 0.20, 1.0, 200).unwrap();
//! let g = crr_greeks(OptionType::Put, 100.0, 100.0, 0.05, 0.0, 0.20, 1.0, 200, DEFAULT_BUMP)
//!     .unwrap();
//! assert!(px > 6.0 && g.delta < 0.0);
//! ```
//!
//! Use the engine layer:
//! ```rust
//! use optionrisk::prelude::*;
//!
//! let market = MarketState::builder().spot(100.0).rate(0.05).dividend_yield(0.01).vol(0.2).build().unwrap();
//! let option = OptionContract::american_put(100.0, 0.5);
//! let tree = EngineConfig::default().tree_engine(200).unwrap();
//! let result = tree.price(&option, &market).unwrap();
//! assert!(result.price > 0.0);
//! assert!(BlackScholesEngine::new().price(&option, &market).is_err());
//! ```
//!
//! Invert implied volatility:
//! ```rust
//! use optionrisk::core::OptionType;
//! use optionrisk::engines::analytic::bsm_price;
//! use optionrisk::vol::implied::implied_vol;
//!
//! let sigma_true = 0.25;
//! let market = bsm_price(OptionType::Call, 100.0, 105.0, 0.02, 0.0, sigma_true, 1.0);
//! let sigma = implied_vol(OptionType::Call, market, 100.0, 105.0, 0.02, 0.0, 1.0).unwrap();
//! assert!((sigma - sigma_true).abs() < 1.0e-5);
//! ```
//!
//! Expiry profit and loss of a short put:
//! ```rust
//! use optionrisk::core::{OptionType, Position};
//! use optionrisk::pricing::payoff::{net_payoff, payoff_axis};
//!
//! let spots = payoff_axis(100.0, 200);
//! let pnl = net_payoff(&spots, 100.0, 4.0, OptionType::Put, Position::Short);
//! assert_eq!(pnl.len(), 200);
//! assert!(pnl.iter().all(|&x| x <= 4.0));
//! ```

pub mod config;
pub mod core;
pub mod engines;
pub mod greeks;
pub mod instruments;
pub mod market;
pub mod math;
pub mod pricing;
pub mod vol;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::core::*;
    pub use crate::engines::analytic::*;
    pub use crate::engines::tree::*;
    pub use crate::greeks::{BumpConfig, BumpPricer, DEFAULT_BUMP, bump_greeks, crr_greeks};
    pub use crate::instruments::*;
    pub use crate::market::*;
    pub use crate::pricing::*;
    pub use crate::vol::*;
}
