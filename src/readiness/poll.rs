// src/readiness/poll.rs

use std::fs::File;
use std::io;
use std::os::fd::AsFd;

use nix::poll::{PollFd, PollFlags, PollTimeout, poll};
use tracing::trace;

use super::{Conditions, Interest, Readiness, ReadinessWaiter};
use crate::types::WaitTimeout;

/// [`ReadinessWaiter`] backed by `poll(2)` on a single descriptor.
#[derive(Debug, Clone, Copy, Default)]
pub struct PollWaiter;

impl ReadinessWaiter for PollWaiter {
    type Handle = File;

    fn wait_for_readiness(
        &self,
        handle: &File,
        interest: Interest,
        timeout: WaitTimeout,
    ) -> io::Result<Readiness> {
        let mut fds = [PollFd::new(handle.as_fd(), interest_flags(interest))];

        // EINTR is reported like any other failure.
        let count = poll(&mut fds, poll_timeout(timeout)?).map_err(io::Error::from)?;
        if count == 0 {
            return Ok(Readiness::TimedOut);
        }

        let revents = fds[0].revents().unwrap_or_else(PollFlags::empty);
        trace!(count, revents = ?revents, "poll returned");

        Ok(Readiness::Ready(conditions_from(revents)))
    }
}

fn interest_flags(interest: Interest) -> PollFlags {
    let mut flags = PollFlags::empty();
    if interest.priority {
        flags |= PollFlags::POLLPRI;
    }
    if interest.error {
        flags |= PollFlags::POLLERR;
    }
    flags
}

fn conditions_from(revents: PollFlags) -> Conditions {
    Conditions {
        priority: revents.contains(PollFlags::POLLPRI),
        error: revents.contains(PollFlags::POLLERR),
        raw: revents.bits() as u16 as u32,
    }
}

fn poll_timeout(timeout: WaitTimeout) -> io::Result<PollTimeout> {
    let Some(d) = timeout.as_duration() else {
        return Ok(PollTimeout::NONE);
    };
    let millis = i32::try_from(d.as_millis())
        .map_err(|_| io::Error::from(io::ErrorKind::InvalidInput))?;
    PollTimeout::try_from(millis).map_err(|_| io::Error::from(io::ErrorKind::InvalidInput))
}
