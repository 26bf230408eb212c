// src/watch/core.rs

//! Pure interpretation of a readiness answer.

use std::io;

use crate::errors::WaitFailure;
use crate::readiness::Readiness;

/// What the loop does next after the wait returned.
#[derive(Debug)]
pub enum Step {
    /// Read the attribute and report a notification.
    ReadPayload,
    TimedOut,
    Failed(WaitFailure),
}

/// Map a wait result to the next step plus the raw event bits to report.
pub fn classify(result: io::Result<Readiness>) -> (Step, u32) {
    match result {
        Err(err) => (Step::Failed(WaitFailure::Poll(err)), 0),
        Ok(Readiness::TimedOut) => (Step::TimedOut, 0),
        Ok(Readiness::Ready(cond)) if cond.notified() => (Step::ReadPayload, cond.raw),
        Ok(Readiness::Ready(cond)) => (
            Step::Failed(WaitFailure::UnexpectedConditions(cond.raw)),
            cond.raw,
        ),
    }
}
