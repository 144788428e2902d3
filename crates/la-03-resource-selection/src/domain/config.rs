//! # Selector Configuration
//!
//! Built with [`SelectorConfigBuilder`], which refuses limits the ledger
//! could never accept.

use super::errors::SelectionError;
use serde::{Deserialize, Serialize};

/// Inputs a single ledger transaction may carry.
pub const DEFAULT_MAX_INPUTS: usize = 255;

/// Tuning for [`crate::ResourceSelector`].
///
/// Deserializing runs [`SelectorConfig::validate`]; a missing field takes
/// its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedSelectorConfig")]
pub struct SelectorConfig {
    /// Upper bound on coins returned by one selection, across all assets.
    pub max_inputs: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            max_inputs: DEFAULT_MAX_INPUTS,
        }
    }
}

impl SelectorConfig {
    /// Start a builder from the defaults.
    pub fn builder() -> SelectorConfigBuilder {
        SelectorConfigBuilder::default()
    }

    /// Check the limits are usable.
    pub fn validate(&self) -> Result<(), SelectionError> {
        if self.max_inputs == 0 {
            return Err(SelectionError::InvalidConfig(
                "max_inputs must be at least 1".to_string(),
            ));
        }
        if self.max_inputs > DEFAULT_MAX_INPUTS {
            return Err(SelectionError::InvalidConfig(format!(
                "max_inputs {} exceeds ledger limit {}",
                self.max_inputs, DEFAULT_MAX_INPUTS
            )));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct UncheckedSelectorConfig {
    max_inputs: usize,
}

impl Default for UncheckedSelectorConfig {
    fn default() -> Self {
        Self {
            max_inputs: DEFAULT_MAX_INPUTS,
        }
    }
}

impl TryFrom<UncheckedSelectorConfig> for SelectorConfig {
    type Error = SelectionError;

    fn try_from(unchecked: UncheckedSelectorConfig) -> Result<Self, Self::Error> {
        let config = SelectorConfig {
            max_inputs: unchecked.max_inputs,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Builder for [`SelectorConfig`].
#[derive(Debug, Default)]
pub struct SelectorConfigBuilder {
    max_inputs: Option<usize>,
}

impl SelectorConfigBuilder {
    pub fn max_inputs(mut self, max_inputs: usize) -> Self {
        self.max_inputs = Some(max_inputs);
        self
    }

    /// Finish and validate.
    pub fn build(self) -> Result<SelectorConfig, SelectionError> {
        let config = SelectorConfig {
            max_inputs: self.max_inputs.unwrap_or(DEFAULT_MAX_INPUTS),
        };
        config.validate()?;
        Ok(config)
    }
}
