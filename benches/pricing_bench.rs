use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use optionrisk::core::{OptionType, PricingEngine};
use optionrisk::engines::analytic::{BlackScholesEngine, bsm_price};
use optionrisk::engines::tree::{BinomialTreeEngine, crr_price};
use optionrisk::greeks::{DEFAULT_BUMP, crr_greeks};
use optionrisk::instruments::OptionContract;
use optionrisk::market::MarketState;
use optionrisk::pricing::scenario::{ScenarioAxes, bsm_scenario_grid};
use optionrisk::vol::implied::implied_vol;
use std::hint::black_box;

// Performance goals (guideline, measured on target hardware):
// - Black-Scholes European call: < 100 ns
// - Implied vol (Brent): < 5 us
// - American CRR put (500 steps): < 1 ms

fn benchmark_market() -> MarketState {
    MarketState::builder()
        .spot(100.0)
        .rate(0.05)
        .dividend_yield(0.0)
        .vol(0.20)
        .build()
        .expect("benchmark market should be valid")
}

fn bench_black_scholes_european(c: &mut Criterion) {
    let market = benchmark_market();
    let option = OptionContract::european_call(100.0, 1.0);
    let engine = BlackScholesEngine::new();

    c.bench_function("black_scholes_european_call", |b| {
        b.iter(|| {
            let px = engine
                .price(black_box(&option), black_box(&market))
                .expect("pricing should succeed")
                .price;
            black_box(px)
        })
    });
}

fn bench_implied_vol(c: &mut Criterion) {
    let price = bsm_price(OptionType::Call, 100.0, 110.0, 0.05, 0.01, 0.27, 0.5);

    c.bench_function("implied_vol_brent_otm_call", |b| {
        b.iter(|| {
            let iv = implied_vol(
                OptionType::Call,
                black_box(price),
                black_box(100.0),
                110.0,
                0.05,
                0.01,
                0.5,
            )
            .expect("implied vol should solve");
            black_box(iv)
        })
    });
}

fn bench_crr_american_steps(c: &mut Criterion) {
    let market = benchmark_market();
    let option = OptionContract::american_put(100.0, 1.0);
    let mut group = c.benchmark_group("crr_american_put");

    for steps in [100_usize, 500, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter(|| {
                let px = crr_price(
                    OptionType::Put,
                    black_box(market.spot),
                    option.strike,
                    market.rate,
                    market.dividend_yield,
                    market.vol,
                    option.expiry,
                    steps,
                )
                .expect("pricing should succeed");
                black_box(px)
            })
        });
    }
    group.finish();
}

fn bench_crr_greeks(c: &mut Criterion) {
    let market = benchmark_market();
    let option = OptionContract::american_put(100.0, 1.0);
    let engine = BinomialTreeEngine::new(200);

    c.bench_function("crr_engine_put_with_greeks_200", |b| {
        b.iter(|| {
            let result = engine
                .price(black_box(&option), black_box(&market))
                .expect("pricing should succeed");
            black_box(result)
        })
    });

    c.bench_function("crr_greeks_free_fn_200", |b| {
        b.iter(|| {
            let g = crr_greeks(
                OptionType::Put,
                black_box(100.0),
                100.0,
                0.05,
                0.0,
                0.2,
                1.0,
                200,
                DEFAULT_BUMP,
            )
            .expect("greeks should succeed");
            black_box(g)
        })
    });
}

fn bench_scenario_grid(c: &mut Criterion) {
    let axes = ScenarioAxes::around(100.0, 0.25);
    let spots = axes.spots().expect("spot axis");
    let vols = axes.vols().expect("vol axis");

    c.bench_function("bsm_scenario_grid_31x21", |b| {
        b.iter(|| {
            let grid = bsm_scenario_grid(
                OptionType::Call,
                100.0,
                0.05,
                0.0,
                0.5,
                black_box(&spots),
                black_box(&vols),
            );
            black_box(grid)
        })
    });
}

criterion_group!(
    benches,
    bench_black_scholes_european,
    bench_implied_vol,
    bench_crr_american_steps,
    bench_crr_greeks,
    bench_scenario_grid
);
criterion_main!(benches);
