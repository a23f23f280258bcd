//! Async Rust facade over the youtube-dl / yt-dlp command-line tool.
//!
//! Each call builds a command line from a [`Request`], runs the tool as a
//! child process, reads stdout and stderr concurrently to the end and returns
//! a [`Response`] (or an [`Error`] when the tool exits with a nonzero code).
//! Progress lines on stdout can be reported to a callback while the tool runs.
//!
//! # Example
//!
//! ```no_run
//! use youtube_dl::{Config, ProgressSample, Request, YoutubeDl};
//!
//! #[tokio::main]
//! async fn main() -> youtube_dl::Result<()> {
//!     let client = YoutubeDl::with_config(Config::from_env());
//!
//!     println!("version: {}", client.version().await?);
//!
//!     let info = client.video_info("https://www.youtube.com/watch?v=dQw4w9WgXcQ").await?;
//!     println!("title: {:?}", info.title);
//!
//!     let request = Request::with_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
//!         .directory_path("/tmp")
//!         .option_value("format", "best")
//!         .option_flag("newline");
//!     let response = client
//!         .execute_with_progress(&request, |p: ProgressSample| {
//!             println!("{:.1}% eta {}", p.percent, p.format_eta());
//!         })
//!         .await?;
//!     println!("finished in {} ms", response.elapsed_ms());
//!
//!     Ok(())
//! }
//! ```

mod capture;
mod client;
mod command;
pub mod config;
pub mod error;
mod request;
mod response;
pub mod types;

pub use client::YoutubeDl;
pub use command::render_options;
pub use config::Config;
pub use error::{Error, Result};
pub use request::Request;
pub use response::Response;
pub use types::{Format, ProgressCallback, ProgressSample, Thumbnail, VideoInfo};
