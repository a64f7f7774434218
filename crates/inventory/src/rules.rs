//! Aging rule configuration.

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult, ValueObject};

/// Quality floor for every non-legendary item.
pub const DEFAULT_MIN_QUALITY: i64 = 0;

/// Quality ceiling for every non-legendary item.
pub const DEFAULT_MAX_QUALITY: i64 = 50;

/// Tunable parameters of the update engine.
///
/// `Default` reproduces the shop's shipped behaviour: quality bounded to
/// `[0, 50]` and conjured goods aged like regular ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgingRules {
    pub min_quality: i64,
    pub max_quality: i64,
    /// Age conjured goods at twice the regular rate.
    pub conjured_enabled: bool,
}

impl Default for AgingRules {
    fn default() -> Self {
        Self {
            min_quality: DEFAULT_MIN_QUALITY,
            max_quality: DEFAULT_MAX_QUALITY,
            conjured_enabled: false,
        }
    }
}

impl ValueObject for AgingRules {}

impl AgingRules {
    /// Decode rules from JSON. Missing fields take their defaults.
    pub fn from_json_str(raw: &str) -> DomainResult<Self> {
        let rules: AgingRules = serde_json::from_str(raw)
            .map_err(|e| DomainError::validation(format!("aging rules: {e}")))?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.min_quality > self.max_quality {
            return Err(DomainError::validation(format!(
                "min_quality ({}) must not exceed max_quality ({})",
                self.min_quality, self.max_quality
            )));
        }
        Ok(())
    }

    pub fn with_conjured(mut self, enabled: bool) -> Self {
        self.conjured_enabled = enabled;
        self
    }

    /// Pull a quality value into `[min_quality, max_quality]`.
    pub fn clamp(&self, quality: i64) -> i64 {
        quality.max(self.min_quality).min(self.max_quality)
    }
}
