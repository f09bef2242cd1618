//! Spot/volatility scenario grids of Black-Scholes-Merton prices.
//!
//! Rows are volatilities, columns are spots: `prices[i][j]` is the price at
//! `vols[i]` and `spots[j]`. With the `parallel` feature rows are priced on the
//! rayon pool.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{OptionType, PricingError};
use crate::engines::analytic::bsm_price;

/// Vol-point width either side of the historical volatility.
pub const VOL_SHIFT_POINTS: f64 = 15.0;
/// Relative spot shift either side of the current spot.
pub const SPOT_SHIFT: f64 = 0.10;
/// Most points a single axis may hold.
pub const MAX_RANGE_POINTS: usize = 100_000;

/// Evenly stepped values from `min` to `max`, both inclusive when `max` lands on the step.
///
/// # Errors
/// `InvalidArgument` for non-finite bounds, `min > max`, a non-positive step, or a
/// step so small the range would exceed [`MAX_RANGE_POINTS`].
///
/// # Examples
/// ```
/// use optionrisk::pricing::scenario::inclusive_range;
///
/// assert_eq!(inclusive_range(1.0, 4.0, 1.0).unwrap(), vec![1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(inclusive_range(1.0, 10.0, 4.0).unwrap(), vec![1.0, 5.0, 9.0]);
/// assert!(inclusive_range(5.0, 1.0, 1.0).is_err());
/// ```
pub fn inclusive_range(min: f64, max: f64, step: f64) -> Result<Vec<f64>, PricingError> {
    if !(min.is_finite() && max.is_finite() && step.is_finite()) {
        return Err(PricingError::InvalidArgument(
            "range bounds and step must be finite".to_string(),
        ));
    }
    if min > max {
        return Err(PricingError::InvalidArgument(format!(
            "range min {min} exceeds max {max}"
        )));
    }
    if step <= 0.0 {
        return Err(PricingError::InvalidArgument(
            "range step must be > 0".to_string(),
        ));
    }

    let intervals = ((max - min) / step + 1e-9).floor();
    if !(intervals < MAX_RANGE_POINTS as f64) {
        return Err(PricingError::InvalidArgument(format!(
            "range {min}..={max} with step {step} exceeds {MAX_RANGE_POINTS} points"
        )));
    }
    let count = intervals as usize + 1;
    Ok((0..count).map(|i| min + step * i as f64).collect())
}

/// Bounds and steps of a scenario grid. Volatilities are in percentage points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAxes {
    pub vol_min_pct: f64,
    pub vol_max_pct: f64,
    pub vol_step_pct: f64,
    pub spot_min: f64,
    pub spot_max: f64,
    pub spot_step: f64,
}

impl ScenarioAxes {
    /// Default axes around a spot and a decimal historical volatility.
    ///
    /// Vol runs from `round(100 sigma - 15)` to `round(100 sigma + 15)` clamped to
    /// `[1, 100]`; spot from `round(0.9 S)` (at least 1) to `round(1.1 S)`. Both step
    /// by 1. Rounding is half-to-even.
    pub fn around(spot: f64, hist_vol: f64) -> Self {
        let vol_pct = hist_vol * 100.0;
        Self {
            vol_min_pct: (vol_pct - VOL_SHIFT_POINTS).round_ties_even().max(1.0),
            vol_max_pct: (vol_pct + VOL_SHIFT_POINTS).round_ties_even().min(100.0),
            vol_step_pct: 1.0,
            spot_min: (spot * (1.0 - SPOT_SHIFT)).round_ties_even().max(1.0),
            spot_max: (spot * (1.0 + SPOT_SHIFT)).round_ties_even(),
            spot_step: 1.0,
        }
    }

    /// Decimal volatilities along the vol axis.
    pub fn vols(&self) -> Result<Vec<f64>, PricingError> {
        Ok(inclusive_range(self.vol_min_pct, self.vol_max_pct, self.vol_step_pct)?
            .into_iter()
            .map(|v| v / 100.0)
            .collect())
    }

    pub fn spots(&self) -> Result<Vec<f64>, PricingError> {
        inclusive_range(self.spot_min, self.spot_max, self.spot_step)
    }

    /// Prices the grid described by these axes.
    pub fn price_grid(
        &self,
        option_type: OptionType,
        strike: f64,
        rate: f64,
        dividend_yield: f64,
        expiry: f64,
    ) -> Result<ScenarioGrid, PricingError> {
        let spots = self.spots()?;
        let vols = self.vols()?;
        Ok(bsm_scenario_grid(
            option_type,
            strike,
            rate,
            dividend_yield,
            expiry,
            &spots,
            &vols,
        ))
    }
}

/// Price matrix indexed by `[vol][spot]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioGrid {
    pub vols: Vec<f64>,
    pub spots: Vec<f64>,
    pub prices: Vec<Vec<f64>>,
}

impl ScenarioGrid {
    pub fn price(&self, vol_index: usize, spot_index: usize) -> Option<f64> {
        self.prices.get(vol_index)?.get(spot_index).copied()
    }

    pub fn min_price(&self) -> Option<f64> {
        self.prices.iter().flatten().copied().reduce(f64::min)
    }

    pub fn max_price(&self) -> Option<f64> {
        self.prices.iter().flatten().copied().reduce(f64::max)
    }
}

/// Black-Scholes-Merton prices over every `(vol, spot)` pair.
#[allow(clippy::too_many_arguments)]
pub fn bsm_scenario_grid(
    option_type: OptionType,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    expiry: f64,
    spots: &[f64],
    vols: &[f64],
) -> ScenarioGrid {
    let row = |vol: f64| -> Vec<f64> {
        spots
            .iter()
            .map(|&s| bsm_price(option_type, s, strike, rate, dividend_yield, vol, expiry))
            .collect()
    };

    #[cfg(feature = "parallel")]
    let prices: Vec<Vec<f64>> = vols.par_iter().map(|&v| row(v)).collect();
    #[cfg(not(feature = "parallel"))]
    let prices: Vec<Vec<f64>> = vols.iter().map(|&v| row(v)).collect();

    tracing::debug!(
        rows = vols.len(),
        columns = spots.len(),
        "priced scenario grid"
    );

    ScenarioGrid {
        vols: vols.to_vec(),
        spots: spots.to_vec(),
        prices,
    }
}
