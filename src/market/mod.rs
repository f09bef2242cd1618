//! Market state container and helpers that turn raw observations into pricer inputs.

pub mod historical;
#[allow(clippy::module_inception)]
pub mod market;

pub use historical::{DAYS_PER_YEAR, TRADING_DAYS_PER_YEAR, historical_volatility, time_to_expiry};
pub use market::{MarketState, MarketStateBuilder};
