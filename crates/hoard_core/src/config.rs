//! # Pool Configuration
//!
//! Capacity and growth settings, loadable from TOML:
//!
//! ```toml
//! initial_capacity = 1024
//!
//! [growth]
//! amount = 5
//! multiplier = 2
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PoolError, PoolResult};

/// Geometric growth policy.
///
/// When the pool runs out of slots the new capacity is
/// `(capacity + amount) * multiplier`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthPolicy {
    /// Slots added before multiplying.
    pub amount: usize,
    /// Capacity multiplier.
    pub multiplier: usize,
}

impl GrowthPolicy {
    /// Add 5 slots, then double.
    pub const DEFAULT: Self = Self {
        amount: 5,
        multiplier: 2,
    };

    /// Returns the capacity to grow to from `capacity`.
    #[inline]
    #[must_use]
    pub const fn next_capacity(self, capacity: usize) -> usize {
        capacity
            .saturating_add(self.amount)
            .saturating_mul(self.multiplier)
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration for a [`HandlePool`](crate::HandlePool).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Slots reserved when the pool is constructed.
    pub initial_capacity: usize,
    /// Growth policy used when `create` runs out of slots.
    pub growth: GrowthPolicy,
}

impl PoolConfig {
    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if the text is not valid TOML for
    /// this structure or fails [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> PoolResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| PoolError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if the file cannot be read or
    /// its content is rejected by [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> PoolResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| PoolError::InvalidConfig(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Checks that every growth step strictly increases capacity.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if `growth.amount` or
    /// `growth.multiplier` is zero.
    pub fn validate(&self) -> PoolResult<()> {
        if self.growth.amount == 0 {
            return Err(PoolError::InvalidConfig(
                "growth.amount must be at least 1".to_owned(),
            ));
        }
        if self.growth.multiplier == 0 {
            return Err(PoolError::InvalidConfig(
                "growth.multiplier must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}
