//! Configuration primitives for the VL53L5CX platform layer.

use crate::params::{RetryPolicy, WriteRejection};

/// Largest chunk moved per bus transaction unless the transport is smaller.
pub const DEFAULT_MAX_CHUNK: usize = 32;
/// Hold time after each LPn edge during a reset pulse (milliseconds).
pub const DEFAULT_RESET_SETTLE_MS: u32 = 100;

/// User-facing configuration for the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Upper bound on the payload bytes moved per bus transaction.
    pub max_chunk: usize,
    /// Retry behaviour for the register-address phase of reads.
    pub address_retry: RetryPolicy,
    /// Reaction to a write chunk the transport refuses.
    pub write_rejection: WriteRejection,
    /// Hold time after each reset-line edge.
    pub reset_settle_ms: u32,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Checks whether this configuration can drive a transfer.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.max_chunk == 0 {
            return Err(ConfigError::ZeroChunk);
        }

        if let RetryPolicy::Bounded { max_attempts: 0, .. } = self.address_retry {
            return Err(ConfigError::ZeroRetryAttempts);
        }

        Ok(())
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the per-transaction chunk limit.
    pub fn max_chunk(mut self, max_chunk: usize) -> Self {
        self.config.max_chunk = max_chunk;
        self
    }

    /// Sets the register-address retry policy.
    pub fn address_retry(mut self, policy: RetryPolicy) -> Self {
        self.config.address_retry = policy;
        self
    }

    /// Sets the write-rejection reaction.
    pub fn write_rejection(mut self, rejection: WriteRejection) -> Self {
        self.config.write_rejection = rejection;
        self
    }

    /// Sets the reset-line settle time.
    pub fn reset_settle_ms(mut self, settle_ms: u32) -> Self {
        self.config.reset_settle_ms = settle_ms;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_chunk: DEFAULT_MAX_CHUNK,
            address_retry: RetryPolicy::default(),
            write_rejection: WriteRejection::default(),
            reset_settle_ms: DEFAULT_RESET_SETTLE_MS,
        }
    }
}

/// Validation errors generated while verifying a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A chunk limit of zero bytes can never make progress.
    ZeroChunk,
    /// A bounded retry policy must allow at least one attempt.
    ZeroRetryAttempts,
}
