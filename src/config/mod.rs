// src/config/mod.rs

//! Immutable run configuration.
//!
//! Built once from the parsed command line and handed to the watch loop by
//! reference. Nothing reads arguments after this point.

use std::path::PathBuf;

use crate::cli::CliArgs;
use crate::types::WaitTimeout;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    /// Attribute file to watch.
    pub path: PathBuf,
    pub timeout: WaitTimeout,
    /// Print the human-readable report (`--debug`).
    pub debug: bool,
}

impl WatchConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            timeout: WaitTimeout::default(),
            debug: false,
        }
    }
}

impl From<&CliArgs> for WatchConfig {
    fn from(args: &CliArgs) -> Self {
        Self {
            path: args.path.clone(),
            timeout: args.timeout,
            debug: args.debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::cli::parse_from;

    #[test]
    fn defaults_from_bare_path() {
        let args = parse_from(["sysfs-watch", "/sys/class/gpio/gpio4/value"]).unwrap();
        let cfg = WatchConfig::from(&args);

        assert_eq!(cfg, WatchConfig::new("/sys/class/gpio/gpio4/value"));
        assert_eq!(cfg.timeout, WaitTimeout::After(Duration::from_secs(10)));
    }

    #[test]
    fn negative_timeout_waits_forever() {
        let args = parse_from(["sysfs-watch", "--timeout=-1", "--debug", "attr"]).unwrap();
        let cfg = WatchConfig::from(&args);

        assert_eq!(cfg.timeout, WaitTimeout::Forever);
        assert!(cfg.debug);
    }
}
