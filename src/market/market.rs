//! Module `market::market`.
//!
//! Market snapshot consumed by the pricing engines: spot, flat rate, continuous
//! dividend yield and a flat volatility, all in decimal units (0.05 means 5%).
//!
//! Converting percentage quotes from a data feed into decimals is the caller's job;
//! nothing in this crate divides by 100.

use crate::core::PricingError;

/// Market state used by all pricing engines.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MarketState {
    /// Spot price.
    pub spot: f64,
    /// Continuously compounded risk-free rate.
    pub rate: f64,
    /// Continuously compounded dividend yield.
    pub dividend_yield: f64,
    /// Annualized volatility.
    pub vol: f64,
}

impl MarketState {
    /// Starts a market builder.
    #[inline]
    pub fn builder() -> MarketStateBuilder {
        MarketStateBuilder::default()
    }

    /// Checks the invariants the builder enforces, for values built by hand or
    /// deserialized.
    ///
    /// # Errors
    /// [`PricingError::InvalidArgument`] when any field is non-finite, `spot <= 0`,
    /// `dividend_yield < 0` or `vol < 0`.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !(self.spot.is_finite()
            && self.rate.is_finite()
            && self.dividend_yield.is_finite()
            && self.vol.is_finite())
        {
            return Err(PricingError::InvalidArgument(
                "market fields must be finite".to_string(),
            ));
        }
        if self.spot <= 0.0 {
            return Err(PricingError::InvalidArgument(
                "market spot must be > 0".to_string(),
            ));
        }
        if self.dividend_yield < 0.0 {
            return Err(PricingError::InvalidArgument(
                "market dividend_yield must be >= 0".to_string(),
            ));
        }
        if self.vol < 0.0 {
            return Err(PricingError::InvalidArgument(
                "market vol must be >= 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Copy of this state with a different volatility.
    #[inline]
    pub fn with_vol(self, vol: f64) -> Self {
        Self { vol, ..self }
    }
}

/// Builder for [`MarketState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketStateBuilder {
    spot: Option<f64>,
    rate: Option<f64>,
    dividend_yield: Option<f64>,
    vol: Option<f64>,
}

impl MarketStateBuilder {
    /// Sets the spot price.
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the flat risk-free rate.
    #[inline]
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the continuous dividend yield.
    #[inline]
    pub fn dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.dividend_yield = Some(dividend_yield);
        self
    }

    /// Sets the flat volatility.
    #[inline]
    pub fn vol(mut self, vol: f64) -> Self {
        self.vol = Some(vol);
        self
    }

    /// Validates and builds a [`MarketState`].
    ///
    /// `rate` and `dividend_yield` default to zero; `spot` and `vol` are required.
    ///
    /// # Examples
    /// ```
    /// use optionrisk::market::MarketState;
    ///
    /// let market = MarketState::builder().spot(100.0).rate(0.05).vol(0.2).build().unwrap();
    /// assert_eq!(market.dividend_yield, 0.0);
    /// assert!(MarketState::builder().spot(100.0).build().is_err());
    /// ```
    pub fn build(self) -> Result<MarketState, PricingError> {
        let spot = self
            .spot
            .ok_or_else(|| PricingError::InvalidArgument("market spot is required".to_string()))?;
        let vol = self
            .vol
            .ok_or_else(|| PricingError::InvalidArgument("market vol is required".to_string()))?;

        let market = MarketState {
            spot,
            rate: self.rate.unwrap_or(0.0),
            dividend_yield: self.dividend_yield.unwrap_or(0.0),
            vol,
        };
        market.validate()?;
        Ok(market)
    }
}
