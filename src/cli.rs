// src/cli.rs

//! CLI argument parsing using `clap`.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::types::WaitTimeout;

/// Command-line arguments for `sysfs-watch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sysfs-watch",
    version,
    about = "Monitor a sysfs attribute file for sysfs_notify calls.",
    long_about = None
)]
pub struct CliArgs {
    /// Sysfs attribute file to watch.
    #[arg(value_name = "FILENAME")]
    pub path: PathBuf,

    /// Wait at most MSEC milliseconds.
    ///
    /// Negative means no timeout; 0 checks the current state and returns.
    #[arg(
        short,
        long,
        value_name = "MSEC",
        default_value_t = WaitTimeout::default(),
        allow_negative_numbers = true
    )]
    pub timeout: WaitTimeout,

    /// Turn on debug tracing of the watch result.
    #[arg(short, long)]
    pub debug: bool,

    /// Internal logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, internal logging is off.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Parse the process arguments.
///
/// Unlike `CliArgs::parse()` this does not exit; the caller decides the exit
/// code so usage errors stay distinct from watch failures.
pub fn parse() -> Result<CliArgs, clap::Error> {
    CliArgs::try_parse()
}

pub fn parse_from<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CliArgs::try_parse_from(args)
}
