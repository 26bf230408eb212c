//! In-memory attribute and scripted waiter.
//!
//! Every handle operation is appended to a shared [`CallLog`], so tests can
//! assert ordering and that each opened handle is dropped exactly once.

use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use sysfs_watch::attr::AttributeSource;
use sysfs_watch::readiness::{Conditions, Interest, Readiness, ReadinessWaiter};
use sysfs_watch::types::WaitTimeout;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Open(PathBuf),
    Read,
    Wait(Interest, WaitTimeout),
    Close,
}

#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CallLog {
    fn push(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| pred(c))
            .count()
    }

    pub fn closes(&self) -> usize {
        self.count(|c| matches!(c, Call::Close))
    }

    pub fn waits(&self) -> usize {
        self.count(|c| matches!(c, Call::Wait(..)))
    }
}

/// A single attribute file held in memory.
#[derive(Debug, Clone)]
pub struct FakeAttribute {
    content: Arc<Mutex<Vec<u8>>>,
    missing: bool,
    log: CallLog,
}

impl FakeAttribute {
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: Arc::new(Mutex::new(content.into())),
            missing: false,
            log: CallLog::default(),
        }
    }

    /// An attribute whose `open` fails with `NotFound`.
    pub fn missing() -> Self {
        Self {
            missing: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn log(&self) -> CallLog {
        self.log.clone()
    }
}

impl AttributeSource for FakeAttribute {
    type Handle = FakeHandle;

    fn open(&self, path: &Path) -> io::Result<FakeHandle> {
        if self.missing {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such attribute: {path:?}"),
            ));
        }
        self.log.push(Call::Open(path.to_path_buf()));
        Ok(FakeHandle {
            content: Arc::clone(&self.content),
            pos: 0,
            log: self.log.clone(),
        })
    }
}

/// Open handle on a [`FakeAttribute`]. Dropping it logs `Call::Close`.
#[derive(Debug)]
pub struct FakeHandle {
    content: Arc<Mutex<Vec<u8>>>,
    pos: usize,
    log: CallLog,
}

impl Read for FakeHandle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.log.push(Call::Read);
        let content = self.content.lock().unwrap();
        let rest = content.get(self.pos..).unwrap_or(&[]);
        let n = rest.len().min(buf.len());
        buf[..n].copy_from_slice(&rest[..n]);
        self.pos += n;
        Ok(n)
    }
}

impl Seek for FakeHandle {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match pos {
            SeekFrom::Start(off) => self.pos = off as usize,
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::Unsupported,
                    "fake handle only seeks from start",
                ));
            }
        }
        Ok(self.pos as u64)
    }
}

impl Drop for FakeHandle {
    fn drop(&mut self) {
        self.log.push(Call::Close);
    }
}

/// What the scripted wait reports.
#[derive(Debug, Clone)]
pub enum Script {
    /// Ready with `conditions`; the attribute content becomes `new_content`
    /// first when given, as if the kernel updated it before notifying.
    Ready {
        conditions: Conditions,
        new_content: Option<Vec<u8>>,
    },
    TimeOut,
    Fail(io::ErrorKind),
}

#[derive(Debug, Clone)]
pub struct FakeWaiter {
    script: Script,
}

impl FakeWaiter {
    pub fn new(script: Script) -> Self {
        Self { script }
    }

    /// Priority notification after the attribute changes to `content`.
    pub fn notify_with(content: impl Into<Vec<u8>>) -> Self {
        Self::new(Script::Ready {
            conditions: Conditions {
                priority: true,
                error: true,
                raw: 0x0A,
            },
            new_content: Some(content.into()),
        })
    }

    pub fn ready(conditions: Conditions) -> Self {
        Self::new(Script::Ready {
            conditions,
            new_content: None,
        })
    }

    pub fn timeout() -> Self {
        Self::new(Script::TimeOut)
    }

    pub fn fail(kind: io::ErrorKind) -> Self {
        Self::new(Script::Fail(kind))
    }
}

impl ReadinessWaiter for FakeWaiter {
    type Handle = FakeHandle;

    fn wait_for_readiness(
        &self,
        handle: &FakeHandle,
        interest: Interest,
        timeout: WaitTimeout,
    ) -> io::Result<Readiness> {
        handle.log.push(Call::Wait(interest, timeout));
        match &self.script {
            Script::Ready {
                conditions,
                new_content,
            } => {
                if let Some(new) = new_content {
                    *handle.content.lock().unwrap() = new.clone();
                }
                Ok(Readiness::Ready(*conditions))
            }
            Script::TimeOut => Ok(Readiness::TimedOut),
            Script::Fail(kind) => Err(io::Error::from(*kind)),
        }
    }
}
