//! Draining of child output streams.
//!
//! Each stream gets its own tokio task that reads until end-of-stream. Read
//! errors end the drain without being raised: whatever was read so far is
//! kept and the capture is marked incomplete. A panicking progress callback
//! is dropped, the stream is still read to the end, and the capture is
//! marked incomplete as well.

use std::panic::{AssertUnwindSafe, catch_unwind};

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::task::JoinHandle;

use crate::types::{ProgressCallback, ProgressSample};

/// Everything read from one stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Capture {
    /// Bytes as read, line terminators included. Invalid UTF-8 is replaced.
    pub text: String,
    /// True when the stream was read to end-of-stream without error.
    pub complete: bool
}

/// Spawns a task collecting `stream` verbatim.
pub(crate) fn spawn_capture<R>(stream: R, name: &'static str) -> JoinHandle<Capture>
where
    R: AsyncRead + Unpin + Send + 'static
{
    tokio::spawn(drain(stream, name, |_| true))
}

/// Spawns a task collecting `stream` and reporting progress lines to `callback`.
///
/// Without a callback no line is inspected.
pub(crate) fn spawn_progress_capture<R>(
    stream: R,
    name: &'static str,
    callback: Option<Box<dyn ProgressCallback>>
) -> JoinHandle<Capture>
where
    R: AsyncRead + Unpin + Send + 'static
{
    let Some(callback) = callback else {
        return spawn_capture(stream, name);
    };

    let mut callback = Some(callback);
    tokio::spawn(drain(stream, name, move |line| {
        let Some(sample) = ProgressSample::parse(line) else {
            return true;
        };
        let Some(active) = callback.as_mut() else {
            return true;
        };

        tracing::trace!(percent = sample.percent, eta = sample.eta_seconds, "progress");
        if catch_unwind(AssertUnwindSafe(|| active.on_progress(sample))).is_ok() {
            return true;
        }

        tracing::warn!(stream = name, "progress callback panicked, no further progress is reported");
        callback = None;
        false
    }))
}

/// Awaits a capture task. A task that was cancelled or panicked yields an
/// empty, incomplete capture.
pub(crate) async fn join(handle: JoinHandle<Capture>, name: &'static str) -> Capture {
    match handle.await {
        Ok(capture) => capture,
        Err(e) => {
            tracing::warn!(stream = name, error = %e, "capture task failed");
            Capture::default()
        }
    }
}

/// Reads `stream` to the end, handing every line to `on_line`.
///
/// Lines end at `\n` or `\r`; the tool redraws progress with bare carriage
/// returns. Empty lines are not reported. `on_line` returning false marks the
/// capture incomplete without stopping the read.
async fn drain<R, F>(stream: R, name: &'static str, mut on_line: F) -> Capture
where
    R: AsyncRead + Unpin,
    F: FnMut(&str) -> bool
{
    let mut reader = BufReader::new(stream);
    let mut raw = Vec::new();
    let mut line = Vec::new();
    let mut complete = true;

    loop {
        let chunk = match reader.fill_buf().await {
            Ok([]) => break,
            Ok(chunk) => chunk,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => {
                tracing::warn!(stream = name, error = %e, "stopped reading child output");
                complete = false;
                break;
            }
        };

        raw.extend_from_slice(chunk);
        for &byte in chunk {
            if byte == b'\n' || byte == b'\r' {
                complete &= emit(&mut line, &mut on_line);
            } else {
                line.push(byte);
            }
        }

        let len = chunk.len();
        reader.consume(len);
    }
    complete &= emit(&mut line, &mut on_line);

    let text = match String::from_utf8(raw) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned()
    };

    tracing::trace!(stream = name, bytes = text.len(), complete, "capture finished");

    Capture { text, complete }
}

fn emit<F: FnMut(&str) -> bool>(line: &mut Vec<u8>, on_line: &mut F) -> bool {
    if line.is_empty() {
        return true;
    }
    let ok = on_line(&String::from_utf8_lossy(line));
    line.clear();
    ok
}
