//! Module `pricing::payoff`.
//!
//! Expiry profit and loss of a single option leg across a terminal-spot axis.
//!
//! Primary API surface: [`net_payoff`], with [`payoff_axis`] for the default spot
//! range and [`breakeven`] for the zero-PnL spot.

use crate::core::{OptionType, Position};

/// Number of points on the default terminal-spot axis.
pub const DEFAULT_AXIS_POINTS: usize = 200;

/// Net expiry PnL per unit for each terminal spot.
///
/// `gross = max(S - K, 0)` (call) or `max(K - S, 0)` (put); a long leg earns
/// `gross - premium`, a short leg `premium - gross`.
///
/// # Examples
/// ```
/// use optionrisk::core::{OptionType, Position};
/// use optionrisk::pricing::payoff::net_payoff;
///
/// let pnl = net_payoff(&[90.0, 110.0], 100.0, 5.0, OptionType::Call, Position::Long);
/// assert_eq!(pnl, vec![-5.0, 5.0]);
/// ```
pub fn net_payoff(
    spots: &[f64],
    strike: f64,
    premium: f64,
    option_type: OptionType,
    position: Position,
) -> Vec<f64> {
    let sign = position.sign();
    spots
        .iter()
        .map(|&s| sign * (option_type.intrinsic(s, strike) - premium))
        .collect()
}

/// Evenly spaced terminal spots from `max(0, 0.7 K)` to `1.3 K`, both inclusive.
///
/// Returns an empty axis for `points == 0` and `[0.7 K]` for a single point.
pub fn payoff_axis(strike: f64, points: usize) -> Vec<f64> {
    let lo = (0.7 * strike).max(0.0);
    let hi = 1.3 * strike;
    match points {
        0 => Vec::new(),
        1 => vec![lo],
        n => {
            let step = (hi - lo) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { hi } else { lo + step * i as f64 })
                .collect()
        }
    }
}

/// Terminal spot at which the leg's net payoff is zero.
pub fn breakeven(strike: f64, premium: f64, option_type: OptionType) -> f64 {
    match option_type {
        OptionType::Call => strike + premium,
        OptionType::Put => strike - premium,
    }
}
