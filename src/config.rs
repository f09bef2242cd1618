//! Engine-wide numerical settings.
//!
//! [`EngineConfig`] gathers the implied-vol solver settings, the finite-difference bump
//! and the tree-size cap a host enforces before pricing. Every field has a default, so
//! a partial JSON document is enough.
//!
//! # Examples
//! ```rust
//! use optionrisk::config::EngineConfig;
//!
//! let cfg = EngineConfig::from_json(r#"{ "max_tree_steps": 500, "bump": { "epsilon": 1e-3 } }"#)
//!     .unwrap();
//! assert_eq!(cfg.max_tree_steps, 500);
//! assert_eq!(cfg.implied_vol.max_iterations, 100);
//! assert!(cfg.tree_engine(1_000).is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{PricingError, from_json};
use crate::engines::tree::BinomialTreeEngine;
use crate::greeks::BumpConfig;
use crate::vol::implied::ImpliedVolConfig;

/// Largest tree accepted by [`EngineConfig::tree_engine`] unless overridden.
pub const DEFAULT_MAX_TREE_STEPS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub implied_vol: ImpliedVolConfig,
    pub bump: BumpConfig,
    pub max_tree_steps: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            implied_vol: ImpliedVolConfig::default(),
            bump: BumpConfig::default(),
            max_tree_steps: DEFAULT_MAX_TREE_STEPS,
        }
    }
}

impl EngineConfig {
    /// Parses and validates a JSON document.
    pub fn from_json(payload: &str) -> Result<Self, PricingError> {
        let cfg: Self = from_json(payload)
            .map_err(|e| PricingError::InvalidArgument(format!("engine config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        self.implied_vol.validate()?;
        self.bump.validate()?;
        if self.max_tree_steps == 0 {
            return Err(PricingError::InvalidArgument(
                "max_tree_steps must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Tree engine with `steps` checked against `max_tree_steps` and this config's bump.
    pub fn tree_engine(&self, steps: usize) -> Result<BinomialTreeEngine, PricingError> {
        if steps == 0 || steps > self.max_tree_steps {
            return Err(PricingError::InvalidArgument(format!(
                "tree steps must be in 1..={}, got {steps}",
                self.max_tree_steps
            )));
        }
        Ok(BinomialTreeEngine::new(steps).with_bump(self.bump.epsilon))
    }
}
