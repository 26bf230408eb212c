// tests/poll_behaviour.rs
//
// Runs the watch loop against real descriptors and `poll(2)`. Regular files
// never raise POLLPRI, so they exercise the timeout paths.

mod common;
use crate::common::init_tracing;

use std::fs::File;
use std::io::{self, Write};
use std::os::fd::OwnedFd;
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use tempfile::NamedTempFile;

use sysfs_watch::attr::{AttributeSource, SysfsAttributes};
use sysfs_watch::readiness::{Interest, PollWaiter, Readiness, ReadinessWaiter};
use sysfs_watch::types::WaitTimeout;
use sysfs_watch::watch::{WaitOutcome, WatchLoop};
use sysfs_watch_test_utils::builders::WatchConfigBuilder;

/// Scheduler slack allowed on top of the requested timeout.
const SLACK: Duration = Duration::from_millis(500);

fn attr_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn bounded_timeout_is_respected() {
    init_tracing();

    let file = attr_file("0\n");
    let cfg = WatchConfigBuilder::new(file.path()).timeout_ms(200).build();

    let start = Instant::now();
    let report = WatchLoop::new(SysfsAttributes, PollWaiter).run(&cfg).unwrap();
    let elapsed = start.elapsed();

    assert!(matches!(report.outcome, WaitOutcome::TimedOut));
    assert_eq!(report.revents, 0);
    assert!(elapsed >= Duration::from_millis(200), "returned early: {elapsed:?}");
    assert!(elapsed < Duration::from_millis(200) + SLACK, "too slow: {elapsed:?}");
}

#[test]
fn zero_timeout_returns_immediately() {
    init_tracing();

    let file = attr_file("0\n");
    let cfg = WatchConfigBuilder::new(file.path()).timeout_ms(0).build();

    let start = Instant::now();
    let report = WatchLoop::new(SysfsAttributes, PollWaiter).run(&cfg).unwrap();

    assert!(matches!(report.outcome, WaitOutcome::TimedOut));
    assert!(start.elapsed() < Duration::from_millis(100));
}

#[test]
fn negative_timeout_keeps_waiting() {
    init_tracing();

    let file = attr_file("0\n");
    let cfg = WatchConfigBuilder::new(file.path()).timeout_ms(-1).build();
    let (tx, rx) = mpsc::channel();

    // Never notified, so this thread stays blocked until the test exits.
    thread::spawn(move || {
        let report = WatchLoop::new(SysfsAttributes, PollWaiter).run(&cfg);
        let _ = tx.send(report.map(|r| r.outcome.exit_status()));
    });

    assert_eq!(
        rx.recv_timeout(Duration::from_millis(400)).unwrap_err(),
        mpsc::RecvTimeoutError::Timeout
    );
    drop(file);
}

/// Hands out the write end of a pipe whose read end is closed. Linux
/// reports POLLERR on it, like an attribute that signals via the error
/// condition.
struct BrokenPipe;

impl AttributeSource for BrokenPipe {
    type Handle = File;

    fn open(&self, _path: &Path) -> io::Result<File> {
        let (reader, writer) = io::pipe()?;
        drop(reader);
        Ok(File::from(OwnedFd::from(writer)))
    }
}

#[test]
fn poll_error_condition_is_a_notification() {
    init_tracing();

    let handle = BrokenPipe.open(Path::new("pipe")).unwrap();
    let res = PollWaiter
        .wait_for_readiness(
            &handle,
            Interest::NOTIFY,
            WaitTimeout::After(Duration::from_secs(2)),
        )
        .unwrap();

    match res {
        Readiness::Ready(cond) => {
            assert!(cond.error);
            assert!(cond.notified());
        }
        Readiness::TimedOut => panic!("expected POLLERR on a widowed pipe"),
    }
}

#[test]
fn watch_loop_reports_error_condition_without_blocking() {
    init_tracing();

    let cfg = WatchConfigBuilder::new("pipe").timeout_ms(-1).build();

    let start = Instant::now();
    let report = WatchLoop::new(BrokenPipe, PollWaiter).run(&cfg).unwrap();

    // Pipes cannot seek, so the payload read fails and comes back empty.
    match report.outcome {
        WaitOutcome::NotificationReceived { payload } => assert!(payload.is_empty()),
        other => panic!("expected notification, got {other:?}"),
    }
    assert_ne!(report.revents, 0);
    assert!(start.elapsed() < Duration::from_secs(2));
}
