//! Implied volatility and smile construction.

pub mod implied;
pub mod smile;

pub use implied::{ImpliedVolConfig, NotFound, implied_vol, implied_vol_with};
pub use smile::{OptionQuote, SmilePoint, build_smile, build_smile_with};
