//! Volatility smile from a single-expiry option chain.
//!
//! Each usable out-of-the-money quote is inverted at its bid/ask mid with the
//! implied-vol solver. Puts are kept below spot and calls at or above it, so every
//! strike is represented by its more liquid side.

use serde::{Deserialize, Serialize};

use crate::core::OptionType;
use crate::vol::implied::{ImpliedVolConfig, implied_vol_with};

/// One bid/ask quote from an option chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionQuote {
    pub option_type: OptionType,
    pub strike: f64,
    pub bid: f64,
    pub ask: f64,
}

impl OptionQuote {
    pub fn new(option_type: OptionType, strike: f64, bid: f64, ask: f64) -> Self {
        Self {
            option_type,
            strike,
            bid,
            ask,
        }
    }

    pub fn mid(&self) -> f64 {
        0.5 * (self.bid + self.ask)
    }

    /// Both sides quoted and a positive mid.
    pub fn is_two_sided(&self) -> bool {
        self.bid > 0.0 && self.ask > 0.0 && self.mid() > 0.0
    }

    /// Puts struck below spot, calls struck at or above it.
    pub fn is_out_of_the_money(&self, spot: f64) -> bool {
        match self.option_type {
            OptionType::Put => self.strike < spot,
            OptionType::Call => self.strike >= spot,
        }
    }
}

/// Implied volatility recovered for one strike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmilePoint {
    pub strike: f64,
    pub option_type: OptionType,
    pub mid: f64,
    pub implied_vol: f64,
}

/// Smile with the default solver settings.
///
/// # Examples
/// ```
/// use optionrisk::core::OptionType;
/// use optionrisk::engines::analytic::bsm_price;
/// use optionrisk::vol::smile::{OptionQuote, build_smile};
///
/// let quote = |option_type, strike: f64| {
///     let px = bsm_price(option_type, 100.0, strike, 0.02, 0.0, 0.3, 0.5);
///     OptionQuote::new(option_type, strike, px - 0.01, px + 0.01)
/// };
/// let chain = [quote(OptionType::Call, 110.0), quote(OptionType::Put, 90.0)];
/// let smile = build_smile(&chain, 100.0, 0.5, 0.02, 0.0);
/// assert_eq!(smile.len(), 2);
/// assert_eq!(smile[0].strike, 90.0);
/// assert!((smile[1].implied_vol - 0.3).abs() < 1e-5);
/// ```
pub fn build_smile(
    quotes: &[OptionQuote],
    spot: f64,
    expiry: f64,
    rate: f64,
    dividend_yield: f64,
) -> Vec<SmilePoint> {
    build_smile_with(
        &ImpliedVolConfig::default(),
        quotes,
        spot,
        expiry,
        rate,
        dividend_yield,
    )
}

/// Smile with caller-supplied solver settings.
///
/// Quotes that are one-sided, in the money, or whose implied vol fails or falls
/// outside the open bracket are dropped. The result is sorted by strike. An invalid
/// `config` yields an empty smile.
pub fn build_smile_with(
    config: &ImpliedVolConfig,
    quotes: &[OptionQuote],
    spot: f64,
    expiry: f64,
    rate: f64,
    dividend_yield: f64,
) -> Vec<SmilePoint> {
    if let Err(err) = config.validate() {
        tracing::debug!(%err, "invalid implied vol config, no smile built");
        return Vec::new();
    }
    let mut points: Vec<SmilePoint> = quotes
        .iter()
        .filter(|q| q.is_two_sided() && q.is_out_of_the_money(spot))
        .filter_map(|q| {
            let mid = q.mid();
            match implied_vol_with(
                config,
                q.option_type,
                mid,
                spot,
                q.strike,
                rate,
                dividend_yield,
                expiry,
            ) {
                Ok(iv) if config.contains(iv) => Some(SmilePoint {
                    strike: q.strike,
                    option_type: q.option_type,
                    mid,
                    implied_vol: iv,
                }),
                Ok(iv) => {
                    tracing::debug!(strike = q.strike, iv, "dropping quote at bracket edge");
                    None
                }
                Err(reason) => {
                    tracing::debug!(strike = q.strike, %reason, "dropping quote");
                    None
                }
            }
        })
        .collect();

    points.sort_by(|a, b| a.strike.total_cmp(&b.strike));
    points
}
