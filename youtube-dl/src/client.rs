use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Instant;

use crate::capture::{self, spawn_capture, spawn_progress_capture};
use crate::command::CommandBuilder;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::request::Request;
use crate::response::Response;
use crate::types::{Format, ProgressCallback, Thumbnail, VideoInfo};

/// Runs the external downloader, one process per call.
///
/// Holds no per-call state, so a single value can serve any number of
/// concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct YoutubeDl {
    config: Config
}

impl YoutubeDl {
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn with_binary(path: impl Into<PathBuf>) -> Self {
        Self::with_config(Config::new().executable(path))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn execute(&self, request: &Request) -> Result<Response> {
        self.run(request, None).await
    }

    /// Like [`execute`](Self::execute), calling `callback` for every progress
    /// line the tool prints on stdout.
    pub async fn execute_with_progress(
        &self,
        request: &Request,
        callback: impl ProgressCallback
    ) -> Result<Response> {
        self.run(request, Some(Box::new(callback))).await
    }

    async fn run(
        &self,
        request: &Request,
        callback: Option<Box<dyn ProgressCallback>>
    ) -> Result<Response> {
        let builder = CommandBuilder::new(self.config.executable_path()).line(request.build_options());

        let mut cmd = builder.build(self.config.env_vars());
        if let Some(directory) = request.directory() {
            cmd.current_dir(directory);
        }

        tracing::debug!(
            binary = %builder.binary().display(),
            args = ?builder.get_args(),
            directory = ?request.directory(),
            "spawning youtube-dl"
        );

        let start = Instant::now();
        let mut child = cmd
            .spawn()
            .map_err(|e| Error::launch(e, builder.binary().to_path_buf()))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| Error::Spawn(std::io::Error::other("stdout was not piped")))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| Error::Spawn(std::io::Error::other("stderr was not piped")))?;

        let out_task = spawn_progress_capture(stdout, "stdout", callback);
        let err_task = spawn_capture(stderr, "stderr");

        let (out, err) = tokio::join!(
            capture::join(out_task, "stdout"),
            capture::join(err_task, "stderr")
        );

        let status = child.wait().await.map_err(Error::Wait)?;
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        let exit_code = exit_code(status);

        tracing::debug!(exit_code, elapsed_ms, "youtube-dl exited");

        if !out.complete || !err.complete {
            tracing::warn!(
                stdout_complete = out.complete,
                stderr_complete = err.complete,
                "youtube-dl output may be truncated"
            );
        }

        if exit_code > 0 {
            return Err(Error::CommandFailed {
                code: exit_code,
                stderr: err.text
            });
        }

        Ok(Response::new(
            builder.command_line(),
            request.options().clone(),
            request.directory().map(PathBuf::from),
            exit_code,
            elapsed_ms,
            out,
            err
        ))
    }

    /// Version string reported by the executable.
    pub async fn version(&self) -> Result<String> {
        let request = Request::new().option_flag("version");
        let response = self.execute(&request).await?;
        Ok(response.out().trim().to_string())
    }

    /// Runs the version query and logs the outcome; a missing executable
    /// surfaces as [`Error::BinaryNotFound`].
    pub async fn check_binary(&self) -> Result<String> {
        match self.version().await {
            Ok(version) => {
                tracing::info!(version = %version, "youtube-dl available");
                Ok(version)
            }
            Err(e) => {
                tracing::warn!(
                    binary = %self.config.executable_path().display(),
                    error = %e,
                    "youtube-dl not usable"
                );
                Err(e)
            }
        }
    }

    /// Full metadata for a single video. Playlists are not expanded.
    pub async fn video_info(&self, url: &str) -> Result<VideoInfo> {
        let request = Request::with_url(url)
            .option_flag("dump-json")
            .option_flag("no-playlist");

        let response = self.execute(&request).await?;

        serde_json::from_str(response.out()).map_err(|e| Error::metadata(&e))
    }

    pub async fn formats(&self, url: &str) -> Result<Vec<Format>> {
        Ok(self.video_info(url).await?.formats)
    }

    pub async fn thumbnails(&self, url: &str) -> Result<Vec<Thumbnail>> {
        Ok(self.video_info(url).await?.thumbnails)
    }

    pub async fn categories(&self, url: &str) -> Result<Vec<String>> {
        Ok(self.video_info(url).await?.categories)
    }

    pub async fn tags(&self, url: &str) -> Result<Vec<String>> {
        Ok(self.video_info(url).await?.tags)
    }
}

/// Exit code of `status`. A process killed by a signal reports `128 + signal`.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
