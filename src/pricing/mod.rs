//! Direct pricing helpers built on the engines: expiry payoffs and scenario grids.

pub mod payoff;
pub mod scenario;

pub use payoff::{breakeven, net_payoff, payoff_axis};
pub use scenario::{ScenarioAxes, ScenarioGrid, bsm_scenario_grid, inclusive_range};
