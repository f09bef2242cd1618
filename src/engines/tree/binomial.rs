//! Module `engines::tree::binomial`.
//!
//! Cox-Ross-Rubinstein recombining binomial tree for vanilla options with a
//! continuous dividend yield.
//!
//! References: Hull (11th ed.) Ch. 13, Cox-Ross-Rubinstein (1979), and backward-induction
//! recursions around Eq. (13.10).
//!
//! Parameterization: `u = exp(vol * sqrt(dt))`, `d = 1 / u`,
//! `p = (exp((r - q) dt) - d) / (u - d)`. A probability outside `(0, 1)` is rejected
//! with [`PricingError::NumericallyInvalidTree`] instead of being propagated.
//!
//! Node spots are built from their log offset `(2j - i) * vol * sqrt(dt)`, never from
//! `d^N`, so deep trees do not underflow. Offsets are clamped to `exp(±600)`, far past
//! any node carrying measurable probability.
//!
//! Cost: two `O(N)` buffers, `O(N^2)` node updates. Convergence to the continuous-time
//! value is first order in `1 / N` with the usual odd/even oscillation.
use crate::core::{ExerciseStyle, OptionType, PricingEngine, PricingError, PricingResult};
use crate::greeks::{DEFAULT_BUMP, crr_greeks_with_exercise};
use crate::instruments::OptionContract;
use crate::market::MarketState;

/// Largest log move from spot a node may take.
const MAX_LOG_MOVE: f64 = 600.0;

/// Cox-Ross-Rubinstein binomial tree engine.
///
/// Prices with the contract's exercise style and returns finite-difference Greeks
/// obtained by re-running the tree with bumped inputs (`bump` is the perturbation size).
#[derive(Debug, Clone, Copy)]
pub struct BinomialTreeEngine {
    /// Number of tree steps.
    pub steps: usize,
    /// Finite-difference perturbation for the Greeks.
    pub bump: f64,
}

impl BinomialTreeEngine {
    /// Creates a tree engine with the given number of steps and the default bump.
    pub fn new(steps: usize) -> Self {
        Self {
            steps,
            bump: DEFAULT_BUMP,
        }
    }

    /// Overrides the finite-difference perturbation.
    pub fn with_bump(mut self, bump: f64) -> Self {
        self.bump = bump;
        self
    }
}

impl Default for BinomialTreeEngine {
    fn default() -> Self {
        Self::new(200)
    }
}

/// American-exercise CRR price.
///
/// Returns intrinsic value when `expiry <= 0` or `steps == 0`.
///
/// # Errors
/// [`PricingError::NumericallyInvalidTree`] when the risk-neutral probability is not
/// strictly inside `(0, 1)`, which includes `vol == 0`.
///
/// # Examples
/// ```rust
/// use optionrisk::core::OptionType;
/// use optionrisk::engines::analytic::bsm_price;
/// use optionrisk::engines::tree::crr_price;
///
/// let american = crr_price(OptionType::Put, 100.0, 100.0, 0.05, 0.0, 0.2, 1.0, 500).unwrap();
/// let european = bsm_price(OptionType::Put, 100.0, 100.0, 0.05, 0.0, 0.2, 1.0);
/// assert!(american > european);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn crr_price(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
    expiry: f64,
    steps: usize,
) -> Result<f64, PricingError> {
    crr_price_with_exercise(
        ExerciseStyle::American,
        option_type,
        spot,
        strike,
        rate,
        dividend_yield,
        vol,
        expiry,
        steps,
    )
}

/// CRR price with explicit exercise rights.
///
/// European exercise drops the early-exercise comparison and converges to the
/// Black-Scholes-Merton price.
#[allow(clippy::too_many_arguments)]
pub fn crr_price_with_exercise(
    exercise: ExerciseStyle,
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
    expiry: f64,
    steps: usize,
) -> Result<f64, PricingError> {
    if expiry <= 0.0 || steps == 0 {
        return Ok(option_type.intrinsic(spot, strike));
    }

    let dt = expiry / steps as f64;
    let log_step = vol * dt.sqrt();
    let u = log_step.exp();
    let d = 1.0 / u;
    let growth = ((rate - dividend_yield) * dt).exp();
    let p = (growth - d) / (u - d);
    if !(p > 0.0 && p < 1.0) {
        tracing::debug!(
            probability = p,
            vol,
            rate,
            dividend_yield,
            dt,
            "rejecting binomial tree with invalid risk-neutral probability"
        );
        return Err(PricingError::NumericallyInvalidTree { probability: p });
    }
    let disc = (-rate * dt).exp();
    let is_american = matches!(exercise, ExerciseStyle::American);

    let disc_p = disc * p;
    let disc_1mp = disc * (1.0 - p);

    // Node (i, j) sits at spot * exp((2j - i) * log_step); index by 2j - i + N.
    let node_spots: Vec<f64> = (0..=2 * steps)
        .map(|m| {
            let moves = m as f64 - steps as f64;
            spot * (moves * log_step).clamp(-MAX_LOG_MOVE, MAX_LOG_MOVE).exp()
        })
        .collect();

    let mut values: Vec<f64> = (0..=steps)
        .map(|j| option_type.intrinsic(node_spots[2 * j], strike))
        .collect();

    for i in (0..steps).rev() {
        if is_american {
            let offset = steps - i;
            for j in 0..=i {
                let continuation = disc_p.mul_add(values[j + 1], disc_1mp * values[j]);
                let early = option_type.intrinsic(node_spots[2 * j + offset], strike);
                values[j] = continuation.max(early);
            }
        } else {
            for j in 0..=i {
                values[j] = disc_p.mul_add(values[j + 1], disc_1mp * values[j]);
            }
        }
    }

    Ok(values[0])
}

impl PricingEngine<OptionContract> for BinomialTreeEngine {
    fn price(
        &self,
        instrument: &OptionContract,
        market: &MarketState,
    ) -> Result<PricingResult, PricingError> {
        instrument.validate()?;
        market.validate()?;

        if self.steps == 0 {
            return Err(PricingError::InvalidArgument(
                "binomial steps must be > 0".to_string(),
            ));
        }
        if !(self.bump.is_finite() && self.bump > 0.0) {
            return Err(PricingError::InvalidArgument(
                "finite-difference bump must be finite and > 0".to_string(),
            ));
        }

        let price = crr_price_with_exercise(
            instrument.exercise,
            instrument.option_type,
            market.spot,
            instrument.strike,
            market.rate,
            market.dividend_yield,
            market.vol,
            instrument.expiry,
            self.steps,
        )?;
        let greeks = crr_greeks_with_exercise(
            instrument.exercise,
            instrument.option_type,
            market.spot,
            instrument.strike,
            market.rate,
            market.dividend_yield,
            market.vol,
            instrument.expiry,
            self.steps,
            self.bump,
        )?;

        tracing::trace!(
            steps = self.steps,
            exercise = ?instrument.exercise,
            price,
            "binomial tree price"
        );

        Ok(PricingResult { price, greeks })
    }
}
