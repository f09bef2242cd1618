use approx::assert_relative_eq;
use optionrisk::core::{OptionType, PricingEngine, PricingError};
use optionrisk::engines::analytic::{BlackScholesEngine, bsm_greeks, bsm_price};
use optionrisk::instruments::OptionContract;
use optionrisk::market::MarketState;

#[derive(Debug, Clone, Copy)]
struct ReferenceCase {
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
    expiry: f64,
    expected: f64,
}

// Haug (2007) Ch. 1 and Hull (11th ed.) Example 15.6.
const CASES: [ReferenceCase; 6] = [
    ReferenceCase {
        option_type: OptionType::Call,
        spot: 60.0,
        strike: 65.0,
        rate: 0.08,
        dividend_yield: 0.0,
        vol: 0.30,
        expiry: 0.25,
        expected: 2.133_368_444_916_204,
    },
    ReferenceCase {
        option_type: OptionType::Put,
        spot: 100.0,
        strike: 95.0,
        rate: 0.10,
        dividend_yield: 0.05,
        vol: 0.20,
        expiry: 0.5,
        expected: 2.464_787_646_755_823,
    },
    ReferenceCase {
        option_type: OptionType::Call,
        spot: 42.0,
        strike: 40.0,
        rate: 0.10,
        dividend_yield: 0.0,
        vol: 0.20,
        expiry: 0.5,
        expected: 4.759_422_392_871_535,
    },
    ReferenceCase {
        option_type: OptionType::Put,
        spot: 42.0,
        strike: 40.0,
        rate: 0.10,
        dividend_yield: 0.0,
        vol: 0.20,
        expiry: 0.5,
        expected: 0.808_599_372_900_096,
    },
    ReferenceCase {
        option_type: OptionType::Call,
        spot: 100.0,
        strike: 100.0,
        rate: 0.05,
        dividend_yield: 0.0,
        vol: 0.20,
        expiry: 1.0,
        expected: 10.450_583_572_185_565,
    },
    ReferenceCase {
        option_type: OptionType::Call,
        spot: 100.0,
        strike: 100.0,
        rate: 0.05,
        dividend_yield: 0.01,
        vol: 0.20,
        expiry: 0.5,
        expected: 6.594_025_324_130_108,
    },
];

#[test]
fn free_function_matches_reference_values() {
    for case in CASES {
        let px = bsm_price(
            case.option_type,
            case.spot,
            case.strike,
            case.rate,
            case.dividend_yield,
            case.vol,
            case.expiry,
        );
        assert_relative_eq!(px, case.expected, max_relative = 1e-8);
    }
}

#[test]
fn engine_matches_free_functions() {
    let engine = BlackScholesEngine::new();
    for case in CASES {
        let market = MarketState::builder()
            .spot(case.spot)
            .rate(case.rate)
            .dividend_yield(case.dividend_yield)
            .vol(case.vol)
            .build()
            .unwrap();
        let option = match case.option_type {
            OptionType::Call => OptionContract::european_call(case.strike, case.expiry),
            OptionType::Put => OptionContract::european_put(case.strike, case.expiry),
        };

        let result = engine.price(&option, &market).unwrap();
        assert_relative_eq!(result.price, case.expected, max_relative = 1e-8);

        let greeks = bsm_greeks(
            case.option_type,
            case.spot,
            case.strike,
            case.rate,
            case.dividend_yield,
            case.vol,
            case.expiry,
        );
        assert_eq!(result.greeks, greeks);
    }
}

#[test]
fn engine_rejects_invalid_inputs() {
    let engine = BlackScholesEngine::new();
    let market = MarketState::builder().spot(100.0).vol(0.2).build().unwrap();

    assert!(matches!(
        engine.price(&OptionContract::american_call(100.0, 1.0), &market),
        Err(PricingError::InvalidArgument(_))
    ));
    assert!(matches!(
        engine.price(&OptionContract::european_call(-1.0, 1.0), &market),
        Err(PricingError::InvalidArgument(_))
    ));
    assert!(MarketState::builder().spot(0.0).vol(0.2).build().is_err());
}

#[test]
fn price_approaches_intrinsic_as_expiry_shrinks() {
    for (option_type, spot, intrinsic) in [
        (OptionType::Call, 110.0, 10.0),
        (OptionType::Put, 90.0, 10.0),
        (OptionType::Call, 90.0, 0.0),
    ] {
        let near = bsm_price(option_type, spot, 100.0, 0.05, 0.02, 0.3, 1e-8);
        assert!((near - intrinsic).abs() < 1e-6, "{option_type}: {near}");
        assert_eq!(bsm_price(option_type, spot, 100.0, 0.05, 0.02, 0.3, 0.0), intrinsic);
    }
}

#[test]
fn gamma_matches_finite_difference_delta() {
    let eps = 1e-3;
    for option_type in [OptionType::Call, OptionType::Put] {
        let up = bsm_greeks(option_type, 100.0 + eps, 105.0, 0.03, 0.01, 0.25, 0.75).delta;
        let dn = bsm_greeks(option_type, 100.0 - eps, 105.0, 0.03, 0.01, 0.25, 0.75).delta;
        let gamma = bsm_greeks(option_type, 100.0, 105.0, 0.03, 0.01, 0.25, 0.75).gamma;
        assert_relative_eq!((up - dn) / (2.0 * eps), gamma, max_relative = 1e-6);
    }
}
