use std::sync::LazyLock;

use regex::Regex;

static PROGRESS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[download\]\s+(?P<percent>\d+\.\d)% .* ETA (?P<minutes>\d+):(?P<seconds>\d+)$")
        .expect("progress pattern is a valid regex")
});

/// Percent complete and estimated seconds remaining, as read from one output line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSample {
    pub percent: f32,
    pub eta_seconds: u64
}

impl ProgressSample {
    /// Parses a `[download]  45.2% of 10MiB at 1.0MiB/s ETA 01:30` line.
    ///
    /// The whole line must match; the percent carries exactly one decimal.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = PROGRESS_LINE.captures(line)?;

        let percent = caps["percent"].parse::<f32>().ok()?;
        let minutes = caps["minutes"].parse::<u64>().ok()?;
        let seconds = caps["seconds"].parse::<u64>().ok()?;
        let eta_seconds = minutes.checked_mul(60)?.checked_add(seconds)?;

        Some(Self {
            percent,
            eta_seconds
        })
    }

    pub fn format_eta(&self) -> String {
        let secs = self.eta_seconds;
        let mins = secs / 60;
        let hours = mins / 60;
        if hours > 0 {
            format!("{}:{:02}:{:02}", hours, mins % 60, secs % 60)
        } else {
            format!("{}:{:02}", mins, secs % 60)
        }
    }
}

/// Receiver of progress samples.
///
/// Runs on the task that drains stdout, so a slow implementation holds up
/// reading the child's output.
pub trait ProgressCallback: Send + 'static {
    fn on_progress(&mut self, sample: ProgressSample);
}

impl<F> ProgressCallback for F
where
    F: FnMut(ProgressSample) + Send + 'static
{
    fn on_progress(&mut self, sample: ProgressSample) {
        self(sample);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_progress_line() {
        let sample = ProgressSample::parse("[download]  45.2% of 10MiB at 1.0MiB/s ETA 01:30").unwrap();
        assert!((sample.percent - 45.2).abs() < f32::EPSILON);
        assert_eq!(sample.eta_seconds, 90);
    }

    #[test]
    fn test_parse_hundred_percent() {
        let sample = ProgressSample::parse("[download] 100.0% of 3.50MiB at 2.00MiB/s ETA 00:00").unwrap();
        assert!((sample.percent - 100.0).abs() < f32::EPSILON);
        assert_eq!(sample.eta_seconds, 0);
    }

    #[test]
    fn test_parse_rejects_other_lines() {
        assert!(ProgressSample::parse("[download] Destination: video.mp4").is_none());
        assert!(ProgressSample::parse("[download]  45% of 10MiB at 1.0MiB/s ETA 01:30").is_none());
        assert!(ProgressSample::parse("[download]  45.25% of 10MiB at 1.0MiB/s ETA 01:30").is_none());
        assert!(ProgressSample::parse("[download]  45.2% of 10MiB at 1.0MiB/s ETA Unknown").is_none());
        assert!(ProgressSample::parse("prefix [download]  45.2% of 10MiB ETA 01:30").is_none());
        assert!(ProgressSample::parse("").is_none());
    }

    #[test]
    fn test_parse_eta_overflow_is_no_match() {
        let line = format!("[download]  1.0% of 1MiB ETA {}:00", u64::MAX);
        assert!(ProgressSample::parse(&line).is_none());
    }

    #[test]
    fn test_format_eta() {
        let short = ProgressSample { percent: 1.0, eta_seconds: 90 };
        assert_eq!(short.format_eta(), "1:30");
        let long = ProgressSample { percent: 1.0, eta_seconds: 3725 };
        assert_eq!(long.format_eta(), "1:02:05");
    }

    #[test]
    fn test_closure_is_a_callback() {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut callback = move |sample: ProgressSample| {
            let _ = tx.send(sample.eta_seconds);
        };
        callback.on_progress(ProgressSample { percent: 2.0, eta_seconds: 7 });
        assert_eq!(rx.recv().unwrap(), 7);
    }
}
