// Copyright 2024-2026 Farlight Networks, LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Controller configuration.

use nfd_mgmt_control::{Name, DEFAULT_INTEREST_LIFETIME, FACES_PREFIX, FIB_PREFIX};
use std::time::Duration;

/// Configuration for a [`Controller`](crate::Controller).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How long to wait for the reply to a command.
    ///
    /// Used as the lifetime of every command Interest; the face reports a
    /// timeout once it expires.
    pub command_timeout: Duration,

    /// Namespace root of FIB commands.
    pub fib_prefix: Name,

    /// Namespace root of face commands.
    pub faces_prefix: Name,

    /// Cost of the next hop created by self-registration.
    pub self_registration_cost: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command_timeout: DEFAULT_INTEREST_LIFETIME,
            fib_prefix: Name::parse(FIB_PREFIX).unwrap_or_default(),
            faces_prefix: Name::parse(FACES_PREFIX).unwrap_or_default(),
            self_registration_cost: 0,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the command timeout.
    #[must_use]
    pub const fn with_command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }

    /// Sets the namespace root of FIB commands.
    #[must_use]
    pub fn with_fib_prefix(mut self, prefix: Name) -> Self {
        self.fib_prefix = prefix;
        self
    }

    /// Sets the namespace root of face commands.
    #[must_use]
    pub fn with_faces_prefix(mut self, prefix: Name) -> Self {
        self.faces_prefix = prefix;
        self
    }

    /// Sets the cost of the next hop created by self-registration.
    #[must_use]
    pub const fn with_self_registration_cost(mut self, cost: u64) -> Self {
        self.self_registration_cost = cost;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.command_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        if self.fib_prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix("fib_prefix"));
        }

        if self.faces_prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix("faces_prefix"));
        }

        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The command timeout is zero.
    #[error("command timeout must be > 0")]
    ZeroTimeout,

    /// A command namespace root is empty.
    #[error("{0} must not be empty")]
    EmptyPrefix(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fib_prefix.to_string(), FIB_PREFIX);
        assert_eq!(config.faces_prefix.to_string(), FACES_PREFIX);
        assert_eq!(config.self_registration_cost, 0);
    }

    #[test]
    fn config_builder() {
        let prefix = Name::parse("/localhop/nfd/rib").expect("parse should succeed");
        let config = Config::new()
            .with_command_timeout(Duration::from_millis(500))
            .with_fib_prefix(prefix.clone())
            .with_self_registration_cost(10);

        assert_eq!(config.command_timeout, Duration::from_millis(500));
        assert_eq!(config.fib_prefix, prefix);
        assert_eq!(config.self_registration_cost, 10);
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let config = Config::new().with_command_timeout(Duration::ZERO);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroTimeout)));
    }

    #[test]
    fn empty_prefixes_are_invalid() {
        let config = Config::new().with_fib_prefix(Name::new());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyPrefix("fib_prefix"))
        ));

        let config = Config::new().with_faces_prefix(Name::new());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyPrefix("faces_prefix"))
        ));
    }
}
