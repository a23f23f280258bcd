use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::capture::Capture;

/// Outcome of a finished invocation.
///
/// Only built once the process has exited and both output streams were
/// read to the end.
#[derive(Debug, Clone)]
pub struct Response {
    command: String,
    options: BTreeMap<String, Option<String>>,
    directory: Option<PathBuf>,
    exit_code: i32,
    elapsed_ms: u64,
    out: Capture,
    err: Capture
}

impl Response {
    pub(crate) fn new(
        command: String,
        options: BTreeMap<String, Option<String>>,
        directory: Option<PathBuf>,
        exit_code: i32,
        elapsed_ms: u64,
        out: Capture,
        err: Capture
    ) -> Self {
        Self {
            command,
            options,
            directory,
            exit_code,
            elapsed_ms,
            out,
            err
        }
    }

    /// The command line that was executed, executable included.
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn options(&self) -> &BTreeMap<String, Option<String>> {
        &self.options
    }

    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Wall-clock run time in whole milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms)
    }

    pub fn out(&self) -> &str {
        &self.out.text
    }

    pub fn err(&self) -> &str {
        &self.err.text
    }

    /// False when reading stdout stopped on an error before end-of-stream.
    pub fn stdout_complete(&self) -> bool {
        self.out.complete
    }

    /// False when reading stderr stopped on an error before end-of-stream.
    pub fn stderr_complete(&self) -> bool {
        self.err.complete
    }
}
