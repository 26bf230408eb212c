// src/lib.rs

pub mod attr;
pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod readiness;
pub mod report;
pub mod types;
pub mod watch;

use std::io::Write;

use tracing::debug;

use crate::attr::{AttributeSource, SysfsAttributes};
use crate::config::WatchConfig;
use crate::readiness::{PollWaiter, ReadinessWaiter};
use crate::types::ExitStatus;
use crate::watch::WatchLoop;

/// High-level entry point used by `main.rs`.
///
/// Runs one watch against the real sysfs attribute with `poll(2)`, with the
/// `--debug` report on the process stdout/stderr.
pub fn run(config: &WatchConfig) -> ExitStatus {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run_with(
        config,
        SysfsAttributes,
        PollWaiter,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}

/// Run one watch with the given backends, write the report to `out`/`err`
/// when `config.debug` is set, and return the exit status.
pub fn run_with<S, W>(
    config: &WatchConfig,
    source: S,
    waiter: W,
    out: &mut impl Write,
    err: &mut impl Write,
) -> ExitStatus
where
    S: AttributeSource,
    W: ReadinessWaiter<Handle = S::Handle>,
{
    let result = WatchLoop::new(source, waiter).run(config);

    if config.debug {
        if let Err(e) = report::write_report(out, err, &config.path, &result) {
            debug!(error = %e, "failed to write debug report");
        }
    }

    let status = match &result {
        Ok(report) => report.outcome.exit_status(),
        Err(e) => e.exit_status(),
    };
    debug!(?status, code = status.code(), "watch finished");
    status
}
