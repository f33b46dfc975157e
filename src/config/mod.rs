// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "mixtape";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    /// Length of one simulated second of playback, in milliseconds.
    pub(crate) tick_millis: u64,
    pub(crate) load_sample_library: bool,
    /// Default log filter, `RUST_LOG` takes precedence when set.
    pub(crate) log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            tick_millis: 1000,
            load_sample_library: true,
            log_filter: "mixtape=debug,warn".to_string(),
        }
    }
}

impl AppConfig {
    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis.max(1))
    }
}

/// Loads the configuration file, creating it with defaults if missing.
pub(crate) fn load_config() -> Result<AppConfig, confy::ConfyError> {
    confy::load(CONFIG_NAME, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_tick_once_a_second() {
        let config = AppConfig::default();
        assert_eq!(config.tick_period(), Duration::from_secs(1));
        assert!(config.load_sample_library);
    }

    #[test]
    fn zero_tick_is_clamped() {
        let config = AppConfig {
            tick_millis: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.tick_period(), Duration::from_millis(1));
    }
}
