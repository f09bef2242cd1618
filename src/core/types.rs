use std::fmt;
use std::str::FromStr;

use super::PricingError;

/// Plain-vanilla option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Call option payoff profile.
    Call,
    /// Put option payoff profile.
    Put,
}

impl OptionType {
    /// Returns +1.0 for calls and -1.0 for puts.
    pub fn sign(self) -> f64 {
        match self {
            Self::Call => 1.0,
            Self::Put => -1.0,
        }
    }

    /// Intrinsic value `max(0, S - K)` for calls and `max(0, K - S)` for puts.
    #[inline]
    pub fn intrinsic(self, spot: f64, strike: f64) -> f64 {
        match self {
            Self::Call => (spot - strike).max(0.0),
            Self::Put => (strike - spot).max(0.0),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call => f.write_str("call"),
            Self::Put => f.write_str("put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Parses `"call"` / `"put"` (case-insensitive, surrounding whitespace ignored).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(Self::Call),
            "put" => Ok(Self::Put),
            other => Err(PricingError::InvalidArgument(format!(
                "option type must be 'call' or 'put', got '{other}'"
            ))),
        }
    }
}

/// Direction of a single option leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Bought option: premium paid, payoff received.
    Long,
    /// Written option: premium received, payoff owed.
    Short,
}

impl Position {
    /// Returns +1.0 for long and -1.0 for short.
    pub fn sign(self) -> f64 {
        match self {
            Self::Long => 1.0,
            Self::Short => -1.0,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long => f.write_str("long"),
            Self::Short => f.write_str("short"),
        }
    }
}

impl FromStr for Position {
    type Err = PricingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "long" => Ok(Self::Long),
            "short" => Ok(Self::Short),
            other => Err(PricingError::InvalidArgument(format!(
                "position must be 'long' or 'short', got '{other}'"
            ))),
        }
    }
}

/// Exercise rights for an option contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseStyle {
    /// Exercise only at expiry.
    European,
    /// Exercise at any time up to expiry.
    American,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_type_parses_case_insensitively() {
        assert_eq!("call".parse::<OptionType>(), Ok(OptionType::Call));
        assert_eq!(" PUT ".parse::<OptionType>(), Ok(OptionType::Put));
        assert_eq!(OptionType::Put.to_string(), "put");
    }

    #[test]
    fn unknown_option_type_is_invalid_argument() {
        let err = "straddle".parse::<OptionType>().unwrap_err();
        assert!(matches!(err, PricingError::InvalidArgument(_)));
    }

    #[test]
    fn unknown_position_is_invalid_argument() {
        assert_eq!("Short".parse::<Position>(), Ok(Position::Short));
        assert!(matches!(
            "flat".parse::<Position>(),
            Err(PricingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn intrinsic_matches_payoff_profile() {
        assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.intrinsic(90.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);
    }

    #[test]
    fn enums_serialize_lowercase() {
        let json = serde_json::to_string(&(OptionType::Call, Position::Short)).unwrap();
        assert_eq!(json, r#"["call","short"]"#);
        let back: ExerciseStyle = serde_json::from_str(r#""american""#).unwrap();
        assert_eq!(back, ExerciseStyle::American);
    }
}
