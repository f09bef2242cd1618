//! Finite-difference Greeks.
//!
//! [`bump_greeks`] differences any pricer exposed through [`BumpPricer`]; [`crr_greeks`]
//! applies it to the Cox-Ross-Rubinstein tree, which has no closed-form sensitivities.
//! Every bumped evaluation is a full reprice, so tree Greeks cost seven `O(N^2)` rollbacks.

use serde::{Deserialize, Serialize};

use crate::core::{ExerciseStyle, Greeks, OptionType, PricingError};
use crate::engines::tree::crr_price_with_exercise;
use crate::market::DAYS_PER_YEAR;

/// Default perturbation applied to spot, vol, rate and expiry.
pub const DEFAULT_BUMP: f64 = 1e-4;

/// Smallest expiry used by the backward theta bump.
pub const THETA_EXPIRY_FLOOR: f64 = 1e-6;

/// Pricer as a function of the bumped inputs `(spot, rate, vol, expiry)`.
pub trait BumpPricer {
    fn price(&self, spot: f64, rate: f64, vol: f64, expiry: f64) -> Result<f64, PricingError>;
}

impl<F> BumpPricer for F
where
    F: Fn(f64, f64, f64, f64) -> Result<f64, PricingError>,
{
    fn price(&self, spot: f64, rate: f64, vol: f64, expiry: f64) -> Result<f64, PricingError> {
        self(spot, rate, vol, expiry)
    }
}

/// Finite-difference settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BumpConfig {
    /// Absolute perturbation shared by every input.
    pub epsilon: f64,
}

impl Default for BumpConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_BUMP,
        }
    }
}

impl BumpConfig {
    pub fn validate(&self) -> Result<(), PricingError> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(PricingError::InvalidArgument(
                "bump epsilon must be finite and > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Bump-and-reprice Greeks.
///
/// Central differences for delta, gamma, vega and rho. Theta is a backward one-sided
/// difference in expiry, `(P(T - eps) - P(T)) / eps`, reported per calendar day; when
/// `T - eps <= 0` the shortened expiry is floored at [`THETA_EXPIRY_FLOOR`].
///
/// # Examples
/// ```rust
/// use optionrisk::core::{OptionType, PricingError};
/// use optionrisk::engines::analytic::{bsm_greeks, bsm_price};
/// use optionrisk::greeks::bump_greeks;
///
/// let pricer = |s: f64, r: f64, v: f64, t: f64| {
///     Ok::<_, PricingError>(bsm_price(OptionType::Call, s, 100.0, r, 0.0, v, t))
/// };
/// let fd = bump_greeks(&pricer, 100.0, 0.05, 0.2, 1.0, 1e-4).unwrap();
/// let cf = bsm_greeks(OptionType::Call, 100.0, 100.0, 0.05, 0.0, 0.2, 1.0);
/// assert!((fd.delta - cf.delta).abs() < 1e-6);
/// ```
pub fn bump_greeks<P: BumpPricer>(
    pricer: &P,
    spot: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
    epsilon: f64,
) -> Result<Greeks, PricingError> {
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(PricingError::InvalidArgument(
            "bump epsilon must be finite and > 0".to_string(),
        ));
    }

    let base = pricer.price(spot, rate, vol, expiry)?;

    let spot_up = pricer.price(spot + epsilon, rate, vol, expiry)?;
    let spot_dn = pricer.price(spot - epsilon, rate, vol, expiry)?;

    let shortened = if expiry - epsilon <= 0.0 {
        THETA_EXPIRY_FLOOR
    } else {
        expiry - epsilon
    };
    let expiry_dn = pricer.price(spot, rate, vol, shortened)?;

    let vol_up = pricer.price(spot, rate, vol + epsilon, expiry)?;
    let vol_dn = pricer.price(spot, rate, vol - epsilon, expiry)?;

    let rate_up = pricer.price(spot, rate + epsilon, vol, expiry)?;
    let rate_dn = pricer.price(spot, rate - epsilon, vol, expiry)?;

    Ok(Greeks {
        delta: (spot_up - spot_dn) / (2.0 * epsilon),
        gamma: (spot_up - 2.0 * base + spot_dn) / (epsilon * epsilon),
        theta: (expiry_dn - base) / epsilon / DAYS_PER_YEAR,
        vega: (vol_up - vol_dn) / (2.0 * epsilon),
        rho: (rate_up - rate_dn) / (2.0 * epsilon),
    })
}

/// Finite-difference Greeks of the American CRR price.
///
/// # Errors
/// Propagates [`PricingError::NumericallyInvalidTree`] from any bumped tree and
/// rejects a non-positive `epsilon`.
#[allow(clippy::too_many_arguments)]
pub fn crr_greeks(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
    expiry: f64,
    steps: usize,
    epsilon: f64,
) -> Result<Greeks, PricingError> {
    crr_greeks_with_exercise(
        ExerciseStyle::American,
        option_type,
        spot,
        strike,
        rate,
        dividend_yield,
        vol,
        expiry,
        steps,
        epsilon,
    )
}

/// [`crr_greeks`] with explicit exercise rights.
#[allow(clippy::too_many_arguments)]
pub fn crr_greeks_with_exercise(
    exercise: ExerciseStyle,
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
    expiry: f64,
    steps: usize,
    epsilon: f64,
) -> Result<Greeks, PricingError> {
    let pricer = |s: f64, r: f64, v: f64, t: f64| {
        crr_price_with_exercise(exercise, option_type, s, strike, r, dividend_yield, v, t, steps)
    };
    bump_greeks(&pricer, spot, rate, vol, expiry, epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::analytic::{bsm_greeks, bsm_price};
    use approx::assert_relative_eq;

    #[test]
    fn finite_difference_matches_closed_form_greeks() {
        let (s, k, r, q, sigma, t) = (100.0, 95.0, 0.03, 0.01, 0.22, 0.8);
        for option_type in [OptionType::Call, OptionType::Put] {
            let pricer = |ss: f64, rr: f64, vv: f64, tt: f64| {
                Ok::<_, PricingError>(bsm_price(option_type, ss, k, rr, q, vv, tt))
            };

            let fd = bump_greeks(&pricer, s, r, sigma, t, DEFAULT_BUMP).unwrap();
            let cf = bsm_greeks(option_type, s, k, r, q, sigma, t);

            assert!((fd.delta - cf.delta).abs() < 1e-6);
            assert!((fd.gamma - cf.gamma).abs() < 1e-4);
            assert!((fd.vega - cf.vega).abs() < 1e-4);
            assert!((fd.theta - cf.theta).abs() < 1e-5);
            assert!((fd.rho - cf.rho).abs() < 1e-4);
        }
    }

    #[test]
    fn european_tree_greeks_track_black_scholes() {
        let g = crr_greeks_with_exercise(
            ExerciseStyle::European,
            OptionType::Call,
            100.0,
            100.0,
            0.05,
            0.0,
            0.2,
            1.0,
            200,
            DEFAULT_BUMP,
        )
        .unwrap();
        let cf = bsm_greeks(OptionType::Call, 100.0, 100.0, 0.05, 0.0, 0.2, 1.0);

        assert!((g.delta - cf.delta).abs() < 2e-3);
        assert!((g.vega - cf.vega).abs() < 0.2);
        assert!((g.rho - cf.rho).abs() < 0.1);
        assert!((g.theta - cf.theta).abs() < 1e-3);
    }

    #[test]
    fn american_put_tree_greeks_have_expected_signs() {
        let g = crr_greeks(OptionType::Put, 100.0, 100.0, 0.05, 0.0, 0.2, 1.0, 200, DEFAULT_BUMP)
            .unwrap();

        assert!(g.delta < 0.0 && g.delta > -1.0);
        // The tree price is piecewise linear in spot; only convexity is guaranteed.
        assert!(g.gamma.is_finite() && g.gamma > -1e-5);
        assert!(g.theta < 0.0);
        assert!(g.vega > 0.0);
        assert!(g.rho < 0.0);
        assert_relative_eq!(g.delta, -0.419_619_819_802_541_4, epsilon = 1e-6);
    }

    #[test]
    fn theta_bump_is_floored_near_expiry() {
        let seen = std::cell::RefCell::new(Vec::new());
        let pricer = |s: f64, _r: f64, _v: f64, t: f64| {
            seen.borrow_mut().push(t);
            Ok::<_, PricingError>(s)
        };

        let g = bump_greeks(&pricer, 100.0, 0.05, 0.2, 5e-5, DEFAULT_BUMP).unwrap();
        assert!(seen.borrow().contains(&THETA_EXPIRY_FLOOR));
        assert_relative_eq!(g.delta, 1.0, epsilon = 1e-9);
        assert_eq!(g.theta, 0.0);
    }

    #[test]
    fn tree_errors_propagate() {
        assert!(matches!(
            crr_greeks(OptionType::Call, 100.0, 100.0, 0.05, 0.0, 0.0, 1.0, 50, DEFAULT_BUMP),
            Err(PricingError::NumericallyInvalidTree { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_bump() {
        let pricer = |s: f64, _r: f64, _v: f64, _t: f64| Ok::<_, PricingError>(s);
        assert!(bump_greeks(&pricer, 100.0, 0.05, 0.2, 1.0, 0.0).is_err());
        assert!(BumpConfig { epsilon: -1.0 }.validate().is_err());
        assert!(BumpConfig::default().validate().is_ok());
    }
}
