// src/readiness/mod.rs

//! Readiness-wait abstraction.
//!
//! The watch loop never calls `poll(2)` directly. It asks a
//! [`ReadinessWaiter`] to wait for an [`Interest`] set on an open handle and
//! gets back a three-way answer: ready (with the observed [`Conditions`]),
//! timed out, or an `io::Error`.
//!
//! - [`poll`] holds the production implementation built on `nix::poll`.
//! - Tests plug in a scripted waiter instead (see `sysfs-watch-test-utils`).

pub mod poll;

use std::io;

use crate::types::WaitTimeout;

pub use poll::PollWaiter;

/// Conditions the caller wants to be woken for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interest {
    /// Exceptional / priority data (`POLLPRI`). This is how `sysfs_notify`
    /// surfaces on most attributes.
    pub priority: bool,
    /// Error condition (`POLLERR`). Some attributes report the change here.
    pub error: bool,
}

impl Interest {
    /// Both conditions; either may carry a sysfs notification.
    pub const NOTIFY: Interest = Interest {
        priority: true,
        error: true,
    };
}

/// Conditions observed on the handle when the wait returned ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Conditions {
    pub priority: bool,
    pub error: bool,
    /// Backend-specific event bits, kept only for diagnostics.
    pub raw: u32,
}

impl Conditions {
    /// True when either notification condition is present.
    pub fn notified(&self) -> bool {
        self.priority || self.error
    }
}

/// Answer of a single readiness wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready(Conditions),
    TimedOut,
}

/// Waits for readiness conditions on an attribute handle.
///
/// `Handle` is the handle type produced by the matching
/// [`AttributeSource`](crate::attr::AttributeSource).
pub trait ReadinessWaiter {
    type Handle;

    /// Block until one of `interest` is signalled on `handle`, or `timeout`
    /// elapses. Errors are returned as-is; nothing is retried.
    fn wait_for_readiness(
        &self,
        handle: &Self::Handle,
        interest: Interest,
        timeout: WaitTimeout,
    ) -> io::Result<Readiness>;
}
