// src/report.rs

//! Human-readable `--debug` report.
//!
//! This is user-facing output, separate from `tracing`. Failures go to the
//! error stream and everything else to the output stream.

use std::io::{self, Write};
use std::path::Path;

use crate::errors::SysfsWatchError;
use crate::watch::{WaitOutcome, WatchReport};

/// Write the report for one run.
pub fn write_report(
    out: &mut impl Write,
    err: &mut impl Write,
    path: &Path,
    result: &Result<WatchReport, SysfsWatchError>,
) -> io::Result<()> {
    let report = match result {
        Ok(report) => report,
        Err(e) => return writeln!(err, "{e}"),
    };

    match &report.outcome {
        WaitOutcome::WaitError { reason } => writeln!(err, "{reason}")?,
        WaitOutcome::TimedOut => writeln!(out, "Poll timeout on {}", path.display())?,
        WaitOutcome::NotificationReceived { payload } => {
            writeln!(out, "sysfs_notify on {}", path.display())?;
            writeln!(out, "{}", render_payload(payload))?;
        }
    }

    writeln!(out, "revents[0]: {:08X}", report.revents)
}

/// Attribute bytes as text, without the trailing newline sysfs appends.
pub fn render_payload(payload: &[u8]) -> String {
    String::from_utf8_lossy(payload)
        .trim_end_matches(['\n', '\0'])
        .to_string()
}
