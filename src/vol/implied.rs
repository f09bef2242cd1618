//! Black-Scholes-Merton implied-volatility inversion.
//!
//! Brent's method (via the `roots` crate) on `f(vol) = bsm_price(vol) - market_price`
//! over a fixed bracket. Failures are expected for noisy quotes and come back as a
//! [`NotFound`] value; nothing here panics.

use std::fmt;

use roots::{Convergency, SearchError, find_root_brent};
use serde::{Deserialize, Serialize};

use crate::core::{OptionType, PricingError};
use crate::engines::analytic::bsm_price;

/// Objective values this close to zero stop the search immediately.
const PRICE_TOLERANCE: f64 = 1e-12;

/// Why no implied volatility was produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotFound {
    /// Non-finite or non-positive inputs, an expired contract, or an invalid
    /// [`ImpliedVolConfig`].
    InvalidQuote(&'static str),
    /// Quote sits below intrinsic value; no volatility reproduces it.
    BelowIntrinsic { price: f64, intrinsic: f64 },
    /// The objective has the same sign at both ends of the bracket.
    NotBracketed,
    /// Iteration cap reached before the tolerance was met.
    NoConvergence,
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFound::InvalidQuote(reason) => write!(f, "invalid quote: {reason}"),
            NotFound::BelowIntrinsic { price, intrinsic } => {
                write!(f, "price {price} is below intrinsic value {intrinsic}")
            }
            NotFound::NotBracketed => write!(f, "no implied volatility inside the search bracket"),
            NotFound::NoConvergence => write!(f, "implied volatility search did not converge"),
        }
    }
}

impl std::error::Error for NotFound {}

/// Search bracket and stopping rules for the solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpliedVolConfig {
    /// Lower end of the volatility bracket.
    pub lower: f64,
    /// Upper end of the volatility bracket.
    pub upper: f64,
    /// Absolute tolerance on volatility.
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for ImpliedVolConfig {
    fn default() -> Self {
        Self {
            lower: 0.01,
            upper: 3.0,
            tolerance: 1e-6,
            max_iterations: 100,
        }
    }
}

impl ImpliedVolConfig {
    pub fn validate(&self) -> Result<(), PricingError> {
        if !(self.lower.is_finite() && self.upper.is_finite()) {
            return Err(PricingError::InvalidArgument(
                "implied vol bracket must be finite".to_string(),
            ));
        }
        if self.lower <= 0.0 || self.lower >= self.upper {
            return Err(PricingError::InvalidArgument(
                "implied vol bracket must satisfy 0 < lower < upper".to_string(),
            ));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(PricingError::InvalidArgument(
                "implied vol tolerance must be finite and > 0".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(PricingError::InvalidArgument(
                "implied vol max_iterations must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether `vol` lies strictly inside the bracket.
    pub fn contains(&self, vol: f64) -> bool {
        vol > self.lower && vol < self.upper
    }
}

struct BrentStop {
    tolerance: f64,
    max_iterations: usize,
}

impl Convergency<f64> for BrentStop {
    fn is_root_found(&mut self, y: f64) -> bool {
        y.abs() < PRICE_TOLERANCE
    }

    fn is_converged(&mut self, x1: f64, x2: f64) -> bool {
        (x1 - x2).abs() < self.tolerance
    }

    fn is_iteration_limit_reached(&mut self, iter: usize) -> bool {
        iter >= self.max_iterations
    }
}

/// Implied volatility with the default bracket `[0.01, 3.0]`, tolerance `1e-6` and at
/// most 100 iterations.
///
/// # Errors
/// - [`NotFound::InvalidQuote`] unless every input is finite and `market_price`,
///   `spot`, `strike` and `expiry` are positive.
/// - [`NotFound::BelowIntrinsic`] when `market_price < max(0, S - K)` (call) or
///   `max(0, K - S)` (put).
/// - [`NotFound::NotBracketed`] / [`NotFound::NoConvergence`] from the search.
///
/// # Examples
/// ```
/// use optionrisk::core::OptionType;
/// use optionrisk::engines::analytic::bsm_price;
/// use optionrisk::vol::implied::{NotFound, implied_vol};
///
/// let price = bsm_price(OptionType::Call, 100.0, 100.0, 0.03, 0.01, 0.25, 1.0);
/// let iv = implied_vol(OptionType::Call, price, 100.0, 100.0, 0.03, 0.01, 1.0).unwrap();
/// assert!((iv - 0.25).abs() < 1e-5);
///
/// let below = implied_vol(OptionType::Call, 40.0, 100.0, 50.0, 0.05, 0.0, 1.0);
/// assert!(matches!(below, Err(NotFound::BelowIntrinsic { .. })));
/// ```
#[allow(clippy::too_many_arguments)]
pub fn implied_vol(
    option_type: OptionType,
    market_price: f64,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    expiry: f64,
) -> Result<f64, NotFound> {
    implied_vol_with(
        &ImpliedVolConfig::default(),
        option_type,
        market_price,
        spot,
        strike,
        rate,
        dividend_yield,
        expiry,
    )
}

/// [`implied_vol`] with a caller-supplied bracket and stopping rules.
///
/// A config that fails [`ImpliedVolConfig::validate`] is reported as
/// [`NotFound::InvalidQuote`].
#[allow(clippy::too_many_arguments)]
pub fn implied_vol_with(
    config: &ImpliedVolConfig,
    option_type: OptionType,
    market_price: f64,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    expiry: f64,
) -> Result<f64, NotFound> {
    if config.validate().is_err() {
        return Err(NotFound::InvalidQuote("invalid solver configuration"));
    }
    if ![market_price, spot, strike, rate, dividend_yield, expiry]
        .iter()
        .all(|x| x.is_finite())
    {
        return Err(NotFound::InvalidQuote("inputs must be finite"));
    }
    if market_price <= 0.0 {
        return Err(NotFound::InvalidQuote("market price must be > 0"));
    }
    if spot <= 0.0 || strike <= 0.0 {
        return Err(NotFound::InvalidQuote("spot and strike must be > 0"));
    }
    if expiry <= 0.0 {
        return Err(NotFound::InvalidQuote("expiry must be > 0"));
    }

    let intrinsic = option_type.intrinsic(spot, strike);
    if market_price < intrinsic {
        return Err(NotFound::BelowIntrinsic {
            price: market_price,
            intrinsic,
        });
    }

    let objective =
        |vol: f64| bsm_price(option_type, spot, strike, rate, dividend_yield, vol, expiry) - market_price;

    let f_lower = objective(config.lower);
    let f_upper = objective(config.upper);
    if !(f_lower.is_finite() && f_upper.is_finite()) || f_lower * f_upper > 0.0 {
        tracing::debug!(
            %option_type,
            market_price,
            strike,
            f_lower,
            f_upper,
            "implied vol not bracketed"
        );
        return Err(NotFound::NotBracketed);
    }

    let mut stop = BrentStop {
        tolerance: config.tolerance,
        max_iterations: config.max_iterations,
    };
    match find_root_brent(config.lower, config.upper, &objective, &mut stop) {
        Ok(vol) if vol.is_finite() => Ok(vol),
        Err(SearchError::NoConvergency) => {
            tracing::debug!(%option_type, market_price, strike, "implied vol search hit iteration cap");
            Err(NotFound::NoConvergence)
        }
        Ok(_) | Err(_) => Err(NotFound::NotBracketed),
    }
}
