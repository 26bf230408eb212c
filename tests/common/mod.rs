#![allow(dead_code)]

use std::process::{Command, Output};
use std::time::{Duration, Instant};

#[allow(unused_imports)]
pub use sysfs_watch_test_utils::init_tracing;

/// Run the built `sysfs-watch` binary and time it.
pub fn run_bin(args: &[&str]) -> (Output, Duration) {
    let start = Instant::now();
    let output = Command::new(env!("CARGO_BIN_EXE_sysfs-watch"))
        .args(args)
        .output()
        .expect("failed to spawn sysfs-watch");
    (output, start.elapsed())
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
