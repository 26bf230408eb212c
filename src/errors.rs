// src/errors.rs

//! Crate-wide error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::ExitStatus;

/// Fatal errors that end a run before any wait outcome exists.
#[derive(Error, Debug)]
pub enum SysfsWatchError {
    #[error("{0}")]
    Usage(#[from] clap::Error),

    #[error("Unable to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SysfsWatchError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            SysfsWatchError::Usage(_) => ExitStatus::Usage,
            SysfsWatchError::Open { .. } => ExitStatus::NotFound,
        }
    }
}

/// Why a wait ended without a usable result.
#[derive(Error, Debug)]
pub enum WaitFailure {
    #[error("Poll error: {0}")]
    Poll(#[from] std::io::Error),

    /// Ready, but neither the priority nor the error condition was set.
    #[error("Poll returned unexpected conditions (revents {0:08X})")]
    UnexpectedConditions(u32),
}

pub type Result<T> = std::result::Result<T, SysfsWatchError>;
