// src/main.rs

use std::process::ExitCode;

use clap::error::ErrorKind;
use sysfs_watch::config::WatchConfig;
use sysfs_watch::errors::SysfsWatchError;
use sysfs_watch::{cli, logging, run};

fn main() -> ExitCode {
    let args = match cli::parse() {
        Ok(args) => args,
        Err(err) => return usage_error(err),
    };

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("sysfs-watch error: {err:?}");
        return ExitCode::FAILURE;
    }

    let config = WatchConfig::from(&args);
    run(&config).into()
}

/// Print clap's message and pick the exit code. `--help` and `--version`
/// are not errors.
fn usage_error(err: clap::Error) -> ExitCode {
    err.print().ok();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => SysfsWatchError::from(err).exit_status().into(),
    }
}
