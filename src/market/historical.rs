//! Historical inputs derived from raw market observations.
//!
//! - [`historical_volatility`]: close-to-close volatility annualized with 252 trading days.
//! - [`time_to_expiry`]: ACT/365 fixed year fraction between two calendar dates.

use chrono::NaiveDate;
use statrs::statistics::Statistics;

/// Trading days per year used to annualize daily return volatility.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Calendar days per year used for maturities and per-day theta.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Annualized close-to-close volatility of a price series.
///
/// Uses simple returns `P_t / P_{t-1} - 1`, their sample standard deviation (n - 1
/// denominator) and scales by `sqrt(252)`.
///
/// Returns `None` when fewer than two returns are available or any price is
/// non-finite or non-positive.
///
/// # Examples
/// ```
/// use optionrisk::market::historical_volatility;
///
/// let closes = [100.0, 101.0, 99.5, 100.5, 102.0];
/// let vol = historical_volatility(&closes).unwrap();
/// assert!(vol > 0.0 && vol < 1.0);
/// assert!(historical_volatility(&[100.0, 101.0]).is_none());
/// ```
pub fn historical_volatility(closes: &[f64]) -> Option<f64> {
    if closes.len() < 3 || closes.iter().any(|p| !p.is_finite() || *p <= 0.0) {
        return None;
    }

    let returns: Vec<f64> = closes.windows(2).map(|w| w[1] / w[0] - 1.0).collect();
    let daily = returns.iter().std_dev();
    daily
        .is_finite()
        .then(|| daily * TRADING_DAYS_PER_YEAR.sqrt())
}

/// ACT/365 fixed year fraction from `valuation` to `expiry`.
///
/// Negative when `expiry` precedes `valuation`; pricers treat any non-positive
/// maturity as an expired contract.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use optionrisk::market::time_to_expiry;
///
/// let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let expiry = NaiveDate::from_ymd_opt(2025, 7, 2).unwrap();
/// assert!((time_to_expiry(today, expiry) - 182.0 / 365.0).abs() < 1e-12);
/// ```
pub fn time_to_expiry(valuation: NaiveDate, expiry: NaiveDate) -> f64 {
    (expiry - valuation).num_days() as f64 / DAYS_PER_YEAR
}
