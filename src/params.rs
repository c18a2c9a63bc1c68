//! Strongly typed policy selections for the platform layer.
//!
//! These types are carried by [`Config`](crate::config::Config) and decide how
//! [`Platform`](crate::platform::Platform) reacts when the bus misbehaves.
//!
//! # Examples
//!
//! ```rust
//! use vl53l5cx_platform::params::{RetryPolicy, WriteRejection};
//!
//! let retry = RetryPolicy::Bounded { max_attempts: 4, backoff_us: 500 };
//! let rejection = WriteRejection::Report;
//! let _ = (retry, rejection);
//! ```

/// Default number of register-address attempts before a read gives up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 16;
/// Default wait between register-address attempts (microseconds).
pub const DEFAULT_BACKOFF_US: u32 = 1_000;

/// Retry behaviour for the register-address phase of a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RetryPolicy {
    /// Retry immediately, forever, until the device acknowledges.
    ///
    /// A missing or wedged device makes the read block indefinitely.
    Unbounded,
    /// Give up after `max_attempts`, sleeping `backoff_us` between attempts.
    Bounded {
        /// Total number of attempts, including the first one.
        max_attempts: u32,
        /// Wait between consecutive attempts in microseconds.
        backoff_us: u32,
    },
}

impl RetryPolicy {
    /// Returns `true` when another attempt is allowed after `attempts` failures.
    pub const fn allows(self, attempts: u32) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Bounded { max_attempts, .. } => attempts < max_attempts,
        }
    }

    /// Wait inserted between attempts, in microseconds.
    pub const fn backoff_us(self) -> u32 {
        match self {
            Self::Unbounded => 0,
            Self::Bounded { backoff_us, .. } => backoff_us,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::Bounded {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff_us: DEFAULT_BACKOFF_US,
        }
    }
}

/// Reaction to a write chunk the transport refuses outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WriteRejection {
    /// Return [`Error::WriteRejected`](crate::Error::WriteRejected) to the caller.
    #[default]
    Report,
    /// Emit a diagnostic and halt; the call never returns.
    Halt,
}
