// src/watch/mod.rs

//! The watch loop: open, prime, wait, read, close.
//!
//! The pure decision step (what a readiness answer means) lives in
//! [`core`]; the IO sequence around it is in [`watch_loop`].

pub mod core;
pub mod watch_loop;

use crate::errors::WaitFailure;
use crate::types::ExitStatus;

pub use watch_loop::WatchLoop;

/// How the single wait of a run ended.
#[derive(Debug)]
pub enum WaitOutcome {
    /// Priority or error condition seen; `payload` is the follow-up read.
    NotificationReceived { payload: Vec<u8> },
    TimedOut,
    WaitError { reason: WaitFailure },
}

impl WaitOutcome {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            WaitOutcome::NotificationReceived { .. } => ExitStatus::Notified,
            WaitOutcome::TimedOut => ExitStatus::TimedOut,
            WaitOutcome::WaitError { .. } => ExitStatus::WaitFailed,
        }
    }
}

/// Result of a run whose target was opened.
#[derive(Debug)]
pub struct WatchReport {
    pub outcome: WaitOutcome,
    /// Raw event bits observed by the waiter (0 on timeout or failure).
    pub revents: u32,
}
