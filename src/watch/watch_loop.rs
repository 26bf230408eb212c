// src/watch/watch_loop.rs

use tracing::{debug, warn};

use crate::attr::{AttributeSource, read_attribute};
use crate::config::WatchConfig;
use crate::errors::{Result, SysfsWatchError};
use crate::readiness::{Interest, ReadinessWaiter};
use crate::watch::core::{Step, classify};
use crate::watch::{WaitOutcome, WatchReport};

/// Single-shot watch over one attribute.
///
/// Generic over the attribute source and the readiness waiter so the whole
/// sequence can run against fakes. The waiter must accept the handles the
/// source produces.
#[derive(Debug, Clone)]
pub struct WatchLoop<S, W> {
    source: S,
    waiter: W,
}

impl<S, W> WatchLoop<S, W>
where
    S: AttributeSource,
    W: ReadinessWaiter<Handle = S::Handle>,
{
    pub fn new(source: S, waiter: W) -> Self {
        Self { source, waiter }
    }

    /// Run the watch once.
    ///
    /// Returns `Err(SysfsWatchError::Open)` when the path cannot be opened; no
    /// wait happens in that case. Otherwise the handle is closed exactly once
    /// before the report is returned, whatever the outcome.
    pub fn run(&self, config: &WatchConfig) -> Result<WatchReport> {
        let path = &config.path;
        let mut handle = self
            .source
            .open(path)
            .map_err(|source| SysfsWatchError::Open {
                path: path.clone(),
                source,
            })?;
        debug!(path = %path.display(), "opened attribute");

        // Sysfs only arms POLLPRI once the current value has been read.
        match read_attribute(&mut handle) {
            Ok(baseline) => debug!(bytes = baseline.len(), "priming read done"),
            Err(err) => debug!(error = %err, "priming read failed; waiting anyway"),
        }

        debug!(timeout = %config.timeout, "waiting for notification");
        let result = self
            .waiter
            .wait_for_readiness(&handle, Interest::NOTIFY, config.timeout);

        let (step, revents) = classify(result);
        let outcome = match step {
            Step::ReadPayload => {
                let payload = read_attribute(&mut handle).unwrap_or_else(|err| {
                    warn!(error = %err, "read after notification failed");
                    Vec::new()
                });
                WaitOutcome::NotificationReceived { payload }
            }
            Step::TimedOut => WaitOutcome::TimedOut,
            Step::Failed(reason) => WaitOutcome::WaitError { reason },
        };

        drop(handle);
        debug!(?outcome, revents, "closed attribute");

        Ok(WatchReport { outcome, revents })
    }
}
