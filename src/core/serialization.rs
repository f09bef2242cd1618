//! JSON helpers for the serde-enabled value types.
//!
//! # Examples
//! ```rust
//! use optionrisk::core::{PricingEngine, PricingResult, from_json, to_json_pretty};
//! use optionrisk::engines::analytic::BlackScholesEngine;
//! use optionrisk::instruments::OptionContract;
//! use optionrisk::market::MarketState;
//!
//! let contract = OptionContract::european_call(100.0, 1.0);
//! let market = MarketState::builder().spot(100.0).rate(0.05).vol(0.2).build().unwrap();
//! let result = BlackScholesEngine::new().price(&contract, &market).unwrap();
//!
//! let json = to_json_pretty(&result).expect("json serialization");
//! let decoded: PricingResult = from_json(&json).expect("json deserialization");
//! assert_eq!(decoded, result);
//! ```

use serde::de::DeserializeOwned;

/// Serialize a value to pretty JSON.
pub fn to_json_pretty<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Deserialize a value from JSON.
pub fn from_json<T: DeserializeOwned>(payload: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Greeks, OptionType, PricingEngine, PricingResult};
    use crate::engines::tree::BinomialTreeEngine;
    use crate::instruments::OptionContract;
    use crate::market::MarketState;

    #[test]
    fn contract_market_and_result_round_trip() {
        let contract = OptionContract::american_put(95.0, 0.5);
        let market = MarketState::builder()
            .spot(100.0)
            .rate(0.04)
            .dividend_yield(0.01)
            .vol(0.3)
            .build()
            .unwrap();
        let result = BinomialTreeEngine::new(100).price(&contract, &market).unwrap();

        let json = to_json_pretty(&contract).unwrap();
        assert!(json.contains("\"option_type\": \"put\""));
        assert!(json.contains("\"exercise\": \"american\""));
        assert_eq!(from_json::<OptionContract>(&json).unwrap(), contract);

        let json = to_json_pretty(&market).unwrap();
        assert_eq!(from_json::<MarketState>(&json).unwrap(), market);

        let json = to_json_pretty(&result).unwrap();
        assert_eq!(from_json::<PricingResult>(&json).unwrap(), result);
    }

    #[test]
    fn result_decodes_from_hand_written_payload() {
        let payload = r#"{
            "price": 10.45,
            "greeks": {"delta": 0.64, "gamma": 0.019, "theta": -0.018, "vega": 37.5, "rho": 53.2}
        }"#;
        let result: PricingResult = from_json(payload).unwrap();
        assert_eq!(result.greeks.delta, 0.64);
        assert_ne!(result.greeks, Greeks::ZERO);
        assert_eq!(from_json::<OptionType>("\"call\"").unwrap(), OptionType::Call);
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(from_json::<PricingResult>("{\"price\": \"x\"}").is_err());
    }
}
