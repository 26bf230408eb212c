#![allow(dead_code)]

use std::path::PathBuf;

use sysfs_watch::config::WatchConfig;
use sysfs_watch::types::WaitTimeout;

/// Builder for `WatchConfig` to simplify test setup.
pub struct WatchConfigBuilder {
    config: WatchConfig,
}

impl WatchConfigBuilder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            config: WatchConfig::new(path),
        }
    }

    pub fn timeout_ms(mut self, millis: i32) -> Self {
        self.config.timeout = WaitTimeout::from_millis(millis);
        self
    }

    pub fn debug(mut self, val: bool) -> Self {
        self.config.debug = val;
        self
    }

    pub fn build(self) -> WatchConfig {
        self.config
    }
}
