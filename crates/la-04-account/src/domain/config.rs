//! # Account Configuration

use super::errors::AccountError;
use la_03_resource_selection::SelectorConfig;
use serde::{Deserialize, Serialize};
use shared_types::{AssetId, BASE_ASSET_ID};

/// Settings shared by every account kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Asset that pays fees.
    pub base_asset_id: AssetId,
    /// Coin selection limits.
    #[serde(default)]
    pub selector: SelectorConfig,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            base_asset_id: BASE_ASSET_ID,
            selector: SelectorConfig::default(),
        }
    }
}

impl AccountConfig {
    pub fn with_base_asset_id(mut self, base_asset_id: AssetId) -> Self {
        self.base_asset_id = base_asset_id;
        self
    }

    pub fn with_selector(mut self, selector: SelectorConfig) -> Self {
        self.selector = selector;
        self
    }

    pub fn validate(&self) -> Result<(), AccountError> {
        self.selector.validate()?;
        Ok(())
    }
}
