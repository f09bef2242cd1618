//! Canonical plain-vanilla option contract.
//!
//! [`OptionContract`] stores side, strike, expiry, and exercise rights
//! ([`crate::core::ExerciseStyle`]: European/American).
//! Validation accepts `expiry == 0` (intrinsic-value edge case); negative expiries are
//! rejected here even though the free-function pricers treat them as expired.

use crate::core::{ExerciseStyle, Instrument, OptionType, PricingError};

/// Vanilla option contract.
///
/// # Examples
/// ```
/// use optionrisk::core::{ExerciseStyle, OptionType};
/// use optionrisk::instruments::OptionContract;
///
/// let option = OptionContract {
///     option_type: OptionType::Call,
///     strike: 100.0,
///     expiry: 1.0,
///     exercise: ExerciseStyle::European,
/// };
/// assert!(option.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OptionContract {
    /// Call or put.
    pub option_type: OptionType,
    /// Strike level.
    pub strike: f64,
    /// Expiry in years.
    pub expiry: f64,
    /// Exercise style.
    pub exercise: ExerciseStyle,
}

impl OptionContract {
    /// Builds a European call option.
    pub fn european_call(strike: f64, expiry: f64) -> Self {
        Self::new(OptionType::Call, strike, expiry, ExerciseStyle::European)
    }

    /// Builds a European put option.
    pub fn european_put(strike: f64, expiry: f64) -> Self {
        Self::new(OptionType::Put, strike, expiry, ExerciseStyle::European)
    }

    /// Builds an American call option.
    pub fn american_call(strike: f64, expiry: f64) -> Self {
        Self::new(OptionType::Call, strike, expiry, ExerciseStyle::American)
    }

    /// Builds an American put option.
    ///
    /// # Examples
    /// ```
    /// use optionrisk::core::ExerciseStyle;
    /// use optionrisk::instruments::OptionContract;
    ///
    /// let put = OptionContract::american_put(100.0, 2.0);
    /// assert!(matches!(put.exercise, ExerciseStyle::American));
    /// ```
    pub fn american_put(strike: f64, expiry: f64) -> Self {
        Self::new(OptionType::Put, strike, expiry, ExerciseStyle::American)
    }

    fn new(option_type: OptionType, strike: f64, expiry: f64, exercise: ExerciseStyle) -> Self {
        Self {
            option_type,
            strike,
            expiry,
            exercise,
        }
    }

    /// Validates instrument fields.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidArgument`] when `strike` is not a positive finite
    /// number or `expiry` is negative or non-finite.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.strike.is_finite() || self.strike <= 0.0 {
            return Err(PricingError::InvalidArgument(
                "option strike must be finite and > 0".to_string(),
            ));
        }
        if !self.expiry.is_finite() || self.expiry < 0.0 {
            return Err(PricingError::InvalidArgument(
                "option expiry must be finite and >= 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Instrument for OptionContract {
    fn instrument_type(&self) -> &str {
        match self.exercise {
            ExerciseStyle::European => "EuropeanOption",
            ExerciseStyle::American => "AmericanOption",
        }
    }
}
