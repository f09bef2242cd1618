//! Instrument definitions priced by the engines.

pub mod vanilla;

pub use vanilla::OptionContract;
