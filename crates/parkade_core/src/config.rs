//! Lot configuration.

use crate::fee::FeePolicy;

/// Configuration for opening a lot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fee policy for the lot. `None` derives it from the lot location.
    pub fee_policy: Option<FeePolicy>,

    /// Whether repeated spot batches of one type keep counting up.
    ///
    /// When false, every batch numbers its spots from 1 again, which can
    /// produce duplicate spot IDs.
    pub continue_spot_numbering: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fee_policy: None,
            continue_spot_numbering: true,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the lot to a fee policy regardless of location.
    #[must_use]
    pub const fn fee_policy(mut self, policy: FeePolicy) -> Self {
        self.fee_policy = Some(policy);
        self
    }

    /// Sets whether spot numbering continues across batches.
    #[must_use]
    pub const fn continue_spot_numbering(mut self, value: bool) -> Self {
        self.continue_spot_numbering = value;
        self
    }

    /// Policy to apply for a lot at `location`.
    #[must_use]
    pub fn resolve_policy(&self, location: &str) -> FeePolicy {
        self.fee_policy
            .unwrap_or_else(|| FeePolicy::for_location(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.fee_policy.is_none());
        assert!(config.continue_spot_numbering);
    }

    #[test]
    fn builder_pattern() {
        let config = Config::new()
            .fee_policy(FeePolicy::Base)
            .continue_spot_numbering(false);

        assert_eq!(config.fee_policy, Some(FeePolicy::Base));
        assert!(!config.continue_spot_numbering);
    }

    #[test]
    fn policy_resolution() {
        assert_eq!(Config::new().resolve_policy("airport"), FeePolicy::Airport);
        assert_eq!(
            Config::new().fee_policy(FeePolicy::Base).resolve_policy("airport"),
            FeePolicy::Base
        );
    }
}
