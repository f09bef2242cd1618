//! Module `engines::analytic::black_scholes`.
//!
//! Closed-form Black-Scholes-Merton price and Greeks for European options with a
//! continuous dividend yield.
//!
//! References: Hull (11th ed.) Ch. 15 and 19; Merton (1973) for the dividend-yield
//! extension.
//!
//! Degenerate states are part of the contract, not errors:
//! - `expiry <= 0`: price is intrinsic value, all Greeks are zero.
//! - `vol <= VOL_FLOOR`: price is the discounted-forward intrinsic value, all Greeks are zero.
use crate::core::{ExerciseStyle, Greeks, OptionType, PricingEngine, PricingError, PricingResult};
use crate::instruments::OptionContract;
use crate::market::{DAYS_PER_YEAR, MarketState};
use crate::math::{normal_cdf, normal_pdf};

/// Volatilities at or below this level are treated as deterministic.
pub const VOL_FLOOR: f64 = 1e-6;

/// Analytic Black-Scholes-Merton engine for European vanilla options.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholesEngine;

impl BlackScholesEngine {
    /// Creates a Black-Scholes engine instance.
    pub fn new() -> Self {
        Self
    }
}

#[inline]
fn d1_d2(
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
    expiry: f64,
) -> (f64, f64) {
    let sig_sqrt_t = vol * expiry.sqrt();
    let d1 =
        ((spot / strike).ln() + (rate - dividend_yield + 0.5 * vol * vol) * expiry) / sig_sqrt_t;
    (d1, d1 - sig_sqrt_t)
}

/// Black-Scholes-Merton price of a European option.
///
/// Parameters:
/// - `spot`, `strike`: underlying and strike levels,
/// - `rate`, `dividend_yield`: continuously compounded, decimal,
/// - `vol`: annualized decimal volatility,
/// - `expiry`: time to expiry in years.
///
/// # Examples
/// ```rust
/// use optionrisk::core::OptionType;
/// use optionrisk::engines::analytic::bsm_price;
///
/// let call = bsm_price(OptionType::Call, 100.0, 100.0, 0.05, 0.0, 0.20, 1.0);
/// assert!((call - 10.4506).abs() < 1e-4);
/// ```
#[inline]
pub fn bsm_price(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
    expiry: f64,
) -> f64 {
    if expiry <= 0.0 {
        return option_type.intrinsic(spot, strike);
    }
    let df_r = (-rate * expiry).exp();
    let df_q = (-dividend_yield * expiry).exp();
    if vol <= VOL_FLOOR {
        return option_type.intrinsic(spot * df_q, strike * df_r);
    }

    let (d1, d2) = d1_d2(spot, strike, rate, dividend_yield, vol, expiry);
    match option_type {
        OptionType::Call => spot * df_q * normal_cdf(d1) - strike * df_r * normal_cdf(d2),
        OptionType::Put => strike * df_r * normal_cdf(-d2) - spot * df_q * normal_cdf(-d1),
    }
}

/// Analytic Black-Scholes-Merton Greeks.
///
/// Theta is returned per calendar day, vega per 1.00 of volatility and rho per 1.00
/// of rate. All five are exactly zero when `expiry <= 0` or `vol <= VOL_FLOOR`.
///
/// # Examples
/// ```rust
/// use optionrisk::core::OptionType;
/// use optionrisk::engines::analytic::bsm_greeks;
///
/// let g = bsm_greeks(OptionType::Put, 100.0, 100.0, 0.05, 0.0, 0.20, 1.0);
/// assert!(g.delta < 0.0 && g.gamma > 0.0 && g.vega > 0.0 && g.rho < 0.0);
/// ```
pub fn bsm_greeks(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
    expiry: f64,
) -> Greeks {
    if expiry <= 0.0 || vol <= VOL_FLOOR {
        return Greeks::ZERO;
    }

    let (d1, d2) = d1_d2(spot, strike, rate, dividend_yield, vol, expiry);
    let sqrt_t = expiry.sqrt();
    let df_q = (-dividend_yield * expiry).exp();
    let df_r = (-rate * expiry).exp();
    let pdf_d1 = normal_pdf(d1);
    let decay = -spot * df_q * pdf_d1 * vol / (2.0 * sqrt_t);

    let (delta, theta, rho) = match option_type {
        OptionType::Call => {
            let nd1 = normal_cdf(d1);
            let nd2 = normal_cdf(d2);
            (
                df_q * nd1,
                decay - rate * strike * df_r * nd2 + dividend_yield * spot * df_q * nd1,
                strike * expiry * df_r * nd2,
            )
        }
        OptionType::Put => {
            let n_neg_d1 = normal_cdf(-d1);
            let n_neg_d2 = normal_cdf(-d2);
            (
                -df_q * n_neg_d1,
                decay + rate * strike * df_r * n_neg_d2 - dividend_yield * spot * df_q * n_neg_d1,
                -strike * expiry * df_r * n_neg_d2,
            )
        }
    };

    Greeks {
        delta,
        gamma: df_q * pdf_d1 / (spot * vol * sqrt_t),
        theta: theta / DAYS_PER_YEAR,
        vega: spot * df_q * pdf_d1 * sqrt_t,
        rho,
    }
}

impl PricingEngine<OptionContract> for BlackScholesEngine {
    fn price(
        &self,
        instrument: &OptionContract,
        market: &MarketState,
    ) -> Result<PricingResult, PricingError> {
        instrument.validate()?;
        market.validate()?;

        if !matches!(instrument.exercise, ExerciseStyle::European) {
            return Err(PricingError::InvalidArgument(
                "BlackScholesEngine supports European exercise only".to_string(),
            ));
        }

        let (option_type, strike, expiry) =
            (instrument.option_type, instrument.strike, instrument.expiry);
        let (spot, rate, q, vol) = (market.spot, market.rate, market.dividend_yield, market.vol);
        let price = bsm_price(option_type, spot, strike, rate, q, vol, expiry);
        let greeks = bsm_greeks(option_type, spot, strike, rate, q, vol, expiry);

        tracing::trace!(
            %option_type,
            strike,
            expiry,
            price,
            "black-scholes price"
        );

        Ok(PricingResult { price, greeks })
    }
}
