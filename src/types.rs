use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use nix::libc;

/// Default wait when `--timeout` is not given.
pub const DEFAULT_TIMEOUT_MS: i32 = 10_000;

/// How long the watch loop may block waiting for a notification.
///
/// Built from the signed millisecond value accepted on the command line:
///
/// - `> 0`: wait at most that long (`After`).
/// - `0`: poll the current state and return at once (`Immediate`).
/// - `< 0`: block until notified or the wait fails (`Forever`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitTimeout {
    Immediate,
    After(Duration),
    Forever,
}

impl WaitTimeout {
    /// Classify a signed millisecond count.
    pub fn from_millis(millis: i32) -> Self {
        match millis {
            0 => WaitTimeout::Immediate,
            ms if ms < 0 => WaitTimeout::Forever,
            ms => WaitTimeout::After(Duration::from_millis(ms as u64)),
        }
    }

    /// The bounded duration, if any. `Immediate` is a zero duration.
    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            WaitTimeout::Immediate => Some(Duration::ZERO),
            WaitTimeout::After(d) => Some(*d),
            WaitTimeout::Forever => None,
        }
    }
}

impl Default for WaitTimeout {
    fn default() -> Self {
        WaitTimeout::from_millis(DEFAULT_TIMEOUT_MS)
    }
}

impl FromStr for WaitTimeout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(WaitTimeout::from_millis)
            .map_err(|e| format!("invalid timeout: {s:?} ({e}); expected milliseconds"))
    }
}

/// Renders the millisecond form accepted by `FromStr`.
impl fmt::Display for WaitTimeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitTimeout::Immediate => write!(f, "0"),
            WaitTimeout::After(d) => write!(f, "{}", d.as_millis()),
            WaitTimeout::Forever => write!(f, "-1"),
        }
    }
}

/// Process exit status of a single watch run.
///
/// The codes are stable so scripts can tell the failure classes apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Notification received before the timeout.
    Notified,
    /// Target path could not be opened.
    NotFound,
    /// No notification before the timeout.
    TimedOut,
    /// The wait primitive failed.
    WaitFailed,
    /// Malformed command line.
    Usage,
}

/// `EX_USAGE` from `sysexits.h`.
pub const EX_USAGE: i32 = 64;

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Notified => 0,
            ExitStatus::NotFound => libc::ENOENT,
            ExitStatus::TimedOut => libc::ETIME,
            ExitStatus::WaitFailed => libc::ENOTSUP,
            ExitStatus::Usage => EX_USAGE,
        }
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        // Every code above fits in a byte.
        std::process::ExitCode::from(status.code() as u8)
    }
}
